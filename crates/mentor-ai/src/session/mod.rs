//! Conversation session management.
//!
//! A `ChatSession` holds the conversation history and the fixed
//! configuration (system prompt, sampling settings) it was created with.

mod chat;
mod manager;

pub use manager::ChatSession;
