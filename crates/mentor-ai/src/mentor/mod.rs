//! The mentor conversation layer.
//!
//! `Mentor` owns at most one `ChatSession`, creates it lazily on the first
//! send, and turns every failure into a short message a chat UI can show
//! as-is. It also generates one-shot ASCII mind maps outside the session.

mod achievement;
mod classify;
mod dispatch;
pub mod prompts;


pub use achievement::{extract_achievements, Achievement};
pub use classify::{classify, classify_message, FailureKind};
pub use dispatch::{gemini_factory, ClientFactory, Mentor, MentorSettings};
