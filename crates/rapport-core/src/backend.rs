//! Backend Abstraction
//!
//! The wire contract with the chat backend and the strategy trait that
//! transports implement. The client works exclusively through this
//! interface, so swapping the HTTP transport for anything else requires
//! no changes to the client logic.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Outbound request body: `{"user_id": ..., "message": ...}`
///
/// Constructed fresh for every send and not retained afterwards.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Caller identity, a plain opaque string
    pub user_id: String,

    /// The user's message text
    pub message: String,
}

impl ChatRequest {
    pub fn new(user_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            message: message.into(),
        }
    }
}

/// Inbound reply body: `{"response": ...}`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    /// The assistant's reply text
    pub response: String,
}

/// Strategy trait for chat backends
///
/// Implement this to connect the client to a new transport or service.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Perform one request/response exchange
    async fn exchange(&self, request: &ChatRequest) -> Result<ChatResponse>;

    /// Backend name, used in logs
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let request = ChatRequest::new("user_123", "Bonjour");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"user_id": "user_123", "message": "Bonjour"})
        );
    }

    #[test]
    fn test_response_parses_from_reply_body() {
        let reply: ChatResponse = serde_json::from_str(r#"{"response": "Salut"}"#).unwrap();
        assert_eq!(reply.response, "Salut");
    }

    #[test]
    fn test_response_requires_response_field() {
        let reply = serde_json::from_str::<ChatResponse>(r#"{"reply": "Salut"}"#);
        assert!(reply.is_err());
    }
}
