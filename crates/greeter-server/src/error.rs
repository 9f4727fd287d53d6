// ABOUTME: Error types for the greeter server.
// ABOUTME: StartupError is fatal before serving; DelegateCallError becomes a per-request 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use greeter_core::ReverseError;
use thiserror::Error;

use crate::config::ConfigError;

/// Anything that stops the service from reaching (or staying in) the serving state.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("reversal is enabled but no Reverser was injected")]
    MissingReverser,

    #[error("failed to acquire listener {name:?} on {address}: {source}")]
    Listener {
        name: String,
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server stopped: {0}")]
    Serve(#[source] std::io::Error),
}

/// The injected Reverser failed for one request.
#[derive(Debug, Error)]
pub enum DelegateCallError {
    #[error(transparent)]
    Reverse(#[from] ReverseError),
}

impl IntoResponse for DelegateCallError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delegate_error_displays_source_text() {
        let err = DelegateCallError::from(ReverseError::Rejected("too long".to_string()));
        assert_eq!(err.to_string(), "reverser rejected input: too long");
    }

    #[test]
    fn delegate_error_maps_to_500() {
        let resp = DelegateCallError::from(ReverseError::Unavailable("down".to_string()))
            .into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn listener_error_names_listener_and_address() {
        let err = StartupError::Listener {
            name: "lis".to_string(),
            address: "localhost:1".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::AddrInUse, "in use"),
        };
        let msg = err.to_string();
        assert!(msg.contains("\"lis\""), "{}", msg);
        assert!(msg.contains("localhost:1"), "{}", msg);
    }
}
