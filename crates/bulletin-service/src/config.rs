//! Application configuration loaded from environment variables.

use std::env;

use bulletin_infra::JwtConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding the collection snapshots.
    pub data_dir: String,
    pub admin_username: String,
    /// Precomputed argon2 hash. When unset, `admin_password` is hashed at
    /// startup instead.
    pub admin_password_hash: Option<String>,
    pub admin_password: Option<String>,
    pub jwt: JwtConfig,
    pub json_logs: bool,
}

impl AppConfig {
    /// Load configuration from the environment, reading a `.env` file first
    /// if one is present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let secret = env::var("SECRET_KEY").unwrap_or_else(|_| JwtConfig::default().secret);
        if secret == JwtConfig::default().secret {
            tracing::warn!("using the default token secret, set SECRET_KEY for production use");
        }

        Self {
            data_dir: env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()),
            admin_username: env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string()),
            admin_password_hash: env::var("ADMIN_PASSWORD_HASH").ok(),
            admin_password: env::var("ADMIN_PASSWORD").ok(),
            jwt: JwtConfig {
                secret,
                expiration_hours: env::var("JWT_EXPIRATION_HOURS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(24),
                issuer: env::var("JWT_ISSUER").unwrap_or_else(|_| JwtConfig::default().issuer),
            },
            json_logs: env::var("LOG_FORMAT")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(false),
        }
    }
}
