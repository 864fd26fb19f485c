//! # Bulletin Infrastructure
//!
//! Concrete implementations of the ports defined in `bulletin-core`:
//! the attachment codec, the snapshot-persisted document store, the
//! repositories over it, and the access-control gate.

pub mod auth;
pub mod codec;
pub mod repository;
pub mod store;

pub use auth::{AdminCredentials, AdminGate, Argon2PasswordService, JwtConfig, JwtTokenService};
pub use repository::{StoreCommentRepository, StorePostRepository};
pub use store::{Collections, DocumentStore, FsSnapshotBackend, InMemorySnapshotBackend};
