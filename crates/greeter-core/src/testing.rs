// ABOUTME: Test utilities for greeter, including a Reverser that always fails.
// ABOUTME: Used in tests to drive the 500 path without a misbehaving real dependency.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::reverser::{ReverseError, Reverser};

/// A Reverser that returns a pre-configured error on every call and counts
/// how many times it was asked.
#[derive(Debug)]
pub struct FailingReverser {
    error: ReverseError,
    calls: AtomicUsize,
}

impl FailingReverser {
    pub fn new(error: ReverseError) -> Self {
        Self {
            error,
            calls: AtomicUsize::new(0),
        }
    }

    /// Convenience constructor for the common "backend is down" case.
    pub fn unavailable() -> Self {
        Self::new(ReverseError::Unavailable("stub failure".to_owned()))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Reverser for FailingReverser {
    async fn reverse(&self, _input: &str) -> Result<String, ReverseError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(self.error.clone())
    }
}
