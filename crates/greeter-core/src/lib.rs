// ABOUTME: Core library for greeter, containing the greeting domain types.
// ABOUTME: Defines request/response shapes, the health payload, and the Reverser capability.

pub mod greeting;
pub mod health;
pub mod reverser;
pub mod testing;

pub use greeting::{DEFAULT_NAME, GreetingRequest, GreetingResponse};
pub use health::HealthStatus;
pub use reverser::{CharReverser, ReverseError, Reverser};
