// ABOUTME: HTTP server for greeter, serving /hello and /healthz over a provisioned listener.
// ABOUTME: Uses Axum with an explicitly owned router and constructor-injected Reverser.

pub mod api;
pub mod app_state;
pub mod config;
pub mod error;
pub mod listener;
pub mod routes;
pub mod service;

pub use app_state::{AppState, SharedState};
pub use config::{ConfigError, GreeterConfig, ServiceOptions};
pub use error::{DelegateCallError, StartupError};
pub use listener::ListenerConfig;
pub use routes::create_router;
pub use service::{BoundService, GreetingService};
