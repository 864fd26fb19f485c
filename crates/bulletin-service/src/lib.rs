//! # Bulletin Service
//!
//! Composition root for the bulletin backend: configuration, telemetry,
//! application state wiring, and the boundary operations the (external)
//! HTTP layer calls.

pub mod auth;
pub mod comments;
pub mod config;
pub mod error;
pub mod posts;
pub mod state;
pub mod telemetry;

#[cfg(test)]
mod tests;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use state::AppState;
