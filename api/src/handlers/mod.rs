//! HTTP handlers
//!
//! Axum request handlers for the gateway endpoints.

pub mod feed;
pub mod health;

pub use feed::user_feed;
pub use health::healthcheck;
