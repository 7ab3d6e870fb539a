//! AI features backed by a chat-completions API

pub mod client;
pub mod problem;

pub use client::{AiError, ChatClient};
