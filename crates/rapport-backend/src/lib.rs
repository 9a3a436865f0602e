//! # rapport-backend
//!
//! Transports for the rapport chat client.
//!
//! ## Transports
//!
//! - **HTTP** (default): JSON POST to a `/chat` endpoint
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rapport_backend::HttpBackend;
//!
//! let backend = Arc::new(HttpBackend::from_env());
//! let client = ChatClient::with_defaults(backend);
//! ```

pub mod http;

pub use http::{HttpBackend, HttpBackendConfig};

// Re-export core types for convenience
pub use rapport_core::{
    ChatBackend, ChatClient, ChatError, ChatRequest, ChatResponse, Result,
};
