// ABOUTME: Shared application state for the greeter HTTP server.
// ABOUTME: Holds the injected Reverser, if reversal is enabled; nothing in it is mutated per request.

use std::sync::Arc;

use greeter_core::Reverser;

/// Shared application state accessible by all Axum handlers.
#[derive(Clone, Default)]
pub struct AppState {
    /// Present only in the reversing variant.
    pub reverser: Option<Arc<dyn Reverser>>,
}

/// Type alias for the Arc-wrapped state used with Axum's State extractor.
pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(reverser: Option<Arc<dyn Reverser>>) -> Self {
        Self { reverser }
    }

    pub fn reverses(&self) -> bool {
        self.reverser.is_some()
    }
}
