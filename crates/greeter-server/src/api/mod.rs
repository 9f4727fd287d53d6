// ABOUTME: API module aggregating the greeter route handlers.
// ABOUTME: Each sub-module contains handlers for one route.

pub mod health;
pub mod hello;
