//! Access-control adapters: token issuance and the admin credential gate.

mod admin;
mod jwt;

pub use admin::{AdminCredentials, AdminGate, Argon2PasswordService};
pub use jwt::{JwtConfig, JwtTokenService};
