// ABOUTME: Health payload returned by the /healthz endpoint.
// ABOUTME: The wire body is a fixed byte string; the struct mirrors it for clients.

use serde::{Deserialize, Serialize};

/// Health check payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    /// Exact body written by /healthz. Clients compare bytes, so it is not
    /// produced by the serializer (which would drop the space).
    pub const BODY: &'static str = r#"{"status": "OK"}"#;

    pub fn ok() -> Self {
        Self {
            status: "OK".to_string(),
        }
    }

    pub fn body(&self) -> &'static str {
        Self::BODY
    }
}
