//! OpenRouter API client for structured chat completions

pub mod client;
pub mod types;

pub use client::OpenRouterClient;
pub use types::*;
