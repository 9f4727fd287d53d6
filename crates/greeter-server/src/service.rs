// ABOUTME: GreetingService lifecycle: construction with injected capabilities, binding, serving.
// ABOUTME: Starting -> Serving is expressed as GreetingService -> BoundService.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use greeter_core::Reverser;
use tokio::net::TcpListener;

use crate::app_state::AppState;
use crate::config::ServiceOptions;
use crate::error::StartupError;
use crate::listener::{self, ListenerConfig};
use crate::routes::create_router;

/// The greeting service before it has a listener.
pub struct GreetingService {
    router: Router,
    options: ServiceOptions,
}

impl GreetingService {
    /// Wire the service. A Reverser is required when `options.reverse` is set
    /// and ignored otherwise.
    pub fn new(
        options: ServiceOptions,
        reverser: Option<Arc<dyn Reverser>>,
    ) -> Result<Self, StartupError> {
        let reverser = match (options.reverse, reverser) {
            (true, None) => return Err(StartupError::MissingReverser),
            (true, Some(r)) => Some(r),
            (false, Some(_)) => {
                tracing::debug!("reversal disabled; ignoring injected Reverser");
                None
            }
            (false, None) => None,
        };

        let state = Arc::new(AppState::new(reverser));
        tracing::debug!(
            reverse = state.reverses(),
            healthz = options.healthz,
            "greeting service wired"
        );
        Ok(Self {
            router: create_router(state, options),
            options,
        })
    }

    pub fn options(&self) -> ServiceOptions {
        self.options
    }

    /// The router, for in-process use (tests, embedding).
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Acquire the configured listener. Nothing is reachable until this succeeds.
    pub async fn bind(self, config: &ListenerConfig) -> Result<BoundService, StartupError> {
        let listener = listener::acquire(config).await?;
        Ok(self.with_listener(config.name.clone(), listener))
    }

    /// Use a listener acquired elsewhere.
    pub fn with_listener(self, name: impl Into<String>, listener: TcpListener) -> BoundService {
        BoundService {
            name: name.into(),
            router: self.router,
            listener,
        }
    }
}

/// The greeting service with a bound listener, ready to serve.
pub struct BoundService {
    name: String,
    router: Router,
    listener: TcpListener,
}

impl BoundService {
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Serve until the listener fails.
    pub async fn serve(self) -> Result<(), StartupError> {
        self.serve_with_shutdown(std::future::pending()).await
    }

    /// Serve until the listener fails or `signal` resolves, then drain in-flight requests.
    pub async fn serve_with_shutdown<F>(self, signal: F) -> Result<(), StartupError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let address = self.local_addr().map_err(StartupError::Serve)?;
        tracing::info!(listener = %self.name, %address, "Listening on...");

        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(signal)
            .await
            .map_err(StartupError::Serve)?;

        tracing::info!(listener = %self.name, "server stopped");
        Ok(())
    }
}
