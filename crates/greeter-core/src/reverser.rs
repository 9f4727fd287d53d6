// ABOUTME: The Reverser capability injected into the greeting service.
// ABOUTME: Defines the async trait, its error type, and the in-process char reverser.

use async_trait::async_trait;

/// Errors a Reverser can report back to its caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReverseError {
    #[error("reverser rejected input: {0}")]
    Rejected(String),

    #[error("reverser unavailable: {0}")]
    Unavailable(String),
}

/// A possibly remote capability that reverses strings. Callers await it
/// inline and apply no timeout of their own.
#[async_trait]
pub trait Reverser: Send + Sync {
    async fn reverse(&self, input: &str) -> Result<String, ReverseError>;
}

/// Reverses by Unicode scalar value.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharReverser;

#[async_trait]
impl Reverser for CharReverser {
    async fn reverse(&self, input: &str) -> Result<String, ReverseError> {
        tracing::trace!(len = input.len(), "reversing");
        Ok(input.chars().rev().collect())
    }
}
