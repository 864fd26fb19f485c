//! # Bulletin Shared
//!
//! Request/response contracts shared between the backend boundary and its
//! caller (the HTTP layer, or a front-end compiled for WASM).

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse};
