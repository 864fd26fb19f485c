//! Authentication boundary operations.

use bulletin_core::domain::validate;
use bulletin_shared::dto::{AdminUser, AuthResponse, LoginRequest};

use crate::error::AppResult;
use crate::state::AppState;

/// Login as the configured admin.
pub async fn login(state: &AppState, req: LoginRequest) -> AppResult<AuthResponse> {
    validate::require("username", &req.username)?;
    validate::require("password", &req.password)?;

    let issued = state.gate.login(&req.username, &req.password)?;
    Ok(AuthResponse {
        token: issued.token,
        token_type: "Bearer".to_string(),
        expires_in: issued.expires_in.max(0) as u64,
        user: AdminUser {
            username: issued.identity.username,
            role: issued.identity.role,
        },
    })
}

/// Echo the identity behind a presented credential.
pub async fn verify(state: &AppState, token: &str) -> AppResult<AdminUser> {
    let identity = state.gate.authenticate(token)?;
    Ok(AdminUser {
        username: identity.username,
        role: identity.role,
    })
}
