//! # rapport-core
//!
//! Core chat client logic with a pluggable backend abstraction.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────┐      ┌──────────────┐      ┌──────────────────┐
//! │  Composer  │─────▶│  ChatClient  │─────▶│   ChatBackend    │
//! │ (keyboard) │      └──────┬───────┘      │   (Strategy)     │
//! └────────────┘             │              └──────────────────┘
//!                            ▼
//!                     ┌──────────────┐
//!                     │ MessageStore │─────▶ subscribers
//!                     │(append-only) │
//!                     └──────────────┘
//! ```
//!
//! The store is an ordered, append-only sequence of turns seeded with a
//! greeting; appends are observable through a broadcast channel so any
//! view layer can follow the conversation. The `ChatBackend` trait keeps
//! the transport swappable without touching the client.

pub mod backend;
pub mod client;
pub mod compose;
pub mod config;
pub mod error;
pub mod session;
pub mod store;
pub mod turn;

pub use backend::{ChatBackend, ChatRequest, ChatResponse};
pub use client::{ChatClient, SendOutcome};
pub use compose::{Composer, Key, KeyEvent};
pub use config::ChatConfig;
pub use error::{ChatError, Result};
pub use session::{Session, SessionId};
pub use store::MessageStore;
pub use turn::{ChatTurn, Sender};
