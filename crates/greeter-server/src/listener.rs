// ABOUTME: Listener provisioning for the greeter server.
// ABOUTME: Turns a logical listener name plus optional local address into a bound TcpListener.

use tokio::net::TcpListener;

use crate::error::StartupError;

/// Listener name used when none is configured.
pub const DEFAULT_LISTENER_NAME: &str = "lis";

/// Bound when a listener has no local address: any free port on localhost.
pub const DEFAULT_LOCAL_ADDRESS: &str = "localhost:0";

/// A named listener and where to bind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenerConfig {
    pub name: String,
    /// `host:port`; hostnames such as `localhost:12345` are resolved at bind time.
    pub local_address: Option<String>,
}

impl ListenerConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            local_address: None,
        }
    }

    pub fn with_local_address(mut self, address: impl Into<String>) -> Self {
        self.local_address = Some(address.into());
        self
    }

    /// The address that will actually be bound.
    pub fn address(&self) -> &str {
        self.local_address.as_deref().unwrap_or(DEFAULT_LOCAL_ADDRESS)
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LISTENER_NAME)
    }
}

/// Bind the configured listener, ready to accept connections.
pub async fn acquire(config: &ListenerConfig) -> Result<TcpListener, StartupError> {
    let address = config.address();
    let listener = TcpListener::bind(address)
        .await
        .map_err(|source| StartupError::Listener {
            name: config.name.clone(),
            address: address.to_string(),
            source,
        })?;

    tracing::debug!(
        listener = %config.name,
        requested = %address,
        bound = ?listener.local_addr().ok(),
        "listener acquired"
    );
    Ok(listener)
}
