//! Session Management
//!
//! A session is the lifetime of one active chat instance. It exclusively
//! owns its message store from creation to teardown; nothing survives the
//! drop and nothing is shared across sessions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::ChatConfig;
use crate::store::MessageStore;

/// Unique session identifier
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One active chat session and its store
#[derive(Debug)]
pub struct Session {
    id: SessionId,
    store: MessageStore,
    created_at: DateTime<Utc>,
}

impl Session {
    /// Create a session with a store seeded from the config greeting
    pub fn new(config: &ChatConfig) -> Self {
        Self::with_greeting(config.greeting.as_str())
    }

    /// Create a session with an explicit greeting
    pub fn with_greeting(greeting: impl Into<String>) -> Self {
        Self {
            id: SessionId::new(),
            store: MessageStore::new(greeting),
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn store(&self) -> &MessageStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut MessageStore {
        &mut self.store
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Turn count, greeting included
    pub fn turn_count(&self) -> usize {
        self.store.len()
    }
}
