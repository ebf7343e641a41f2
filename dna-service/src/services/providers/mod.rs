//! Text-generation provider abstractions.
//!
//! This module provides a trait-based abstraction for the external LLM,
//! allowing easy swapping between backends (OpenAI, mock).

pub mod mock;
pub mod openai;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Trait for text generation providers (e.g., OpenAI).
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Generate a text completion for the prompt.
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
}
