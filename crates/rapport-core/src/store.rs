//! Message Store
//!
//! An ordered, append-only sequence of chat turns held in memory for the
//! lifetime of one session. The store is seeded with a single bot greeting
//! and only ever grows; no turn is edited or removed.
//!
//! Appends are published on a broadcast channel so a view layer can react
//! to new turns without the core depending on any rendering technology.

use tokio::sync::broadcast;

use crate::turn::ChatTurn;

/// How many unconsumed turns a slow subscriber may fall behind by
/// before it starts lagging.
const EVENT_BUFFER: usize = 64;

/// Append-only turn sequence with observable appends
#[derive(Debug)]
pub struct MessageStore {
    turns: Vec<ChatTurn>,
    events: broadcast::Sender<ChatTurn>,
}

impl MessageStore {
    /// Create a store seeded with the given bot greeting
    pub fn new(greeting: impl Into<String>) -> Self {
        let (events, _) = broadcast::channel(EVENT_BUFFER);
        let mut store = Self {
            turns: Vec::new(),
            events,
        };
        store.append(ChatTurn::bot(greeting));
        store
    }

    /// Add a turn to the end of the sequence
    ///
    /// Infallible: a missing or lagging subscriber never fails an append.
    pub fn append(&mut self, turn: ChatTurn) {
        self.turns.push(turn.clone());
        let _ = self.events.send(turn);
    }

    /// Subscribe to turns appended after this call
    pub fn subscribe(&self) -> broadcast::Receiver<ChatTurn> {
        self.events.subscribe()
    }

    /// All turns, in chronological order
    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    /// The most recent turn
    pub fn last(&self) -> Option<&ChatTurn> {
        self.turns.last()
    }

    /// Number of turns
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Check if empty (never true after construction)
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
