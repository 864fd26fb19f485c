//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod repository;
mod store;

pub use auth::{
    AccessGate, AuthError, Identity, IssuedToken, PasswordService, TokenClaims, TokenService,
};
pub use repository::{CommentRepository, PostRepository};
pub use store::SnapshotBackend;
