//! Application state - shared across all boundary operations.

use std::sync::Arc;

use bulletin_core::domain::IdGenerator;
use bulletin_core::error::StoreError;
use bulletin_core::ports::{
    AccessGate, AuthError, CommentRepository, PostRepository, SnapshotBackend,
};
use bulletin_infra::{
    AdminCredentials, AdminGate, Argon2PasswordService, DocumentStore, FsSnapshotBackend,
    JwtTokenService, StoreCommentRepository, StorePostRepository,
};

use crate::config::AppConfig;

/// Unrecoverable startup conditions.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("storage initialization failed: {0}")]
    Storage(#[from] StoreError),

    #[error("admin credential setup failed: {0}")]
    Credentials(#[from] AuthError),
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub gate: Arc<dyn AccessGate>,
    store: Arc<DocumentStore>,
}

impl AppState {
    /// Build the application state over the configured data directory and
    /// load both collections. Failure here aborts startup.
    pub async fn new(config: &AppConfig) -> Result<Self, StartupError> {
        let backend = FsSnapshotBackend::open(&config.data_dir).await?;
        Self::with_backend(config, Box::new(backend)).await
    }

    /// Wire the state over an explicit snapshot backend. Tests use the
    /// in-memory one.
    pub async fn with_backend(
        config: &AppConfig,
        backend: Box<dyn SnapshotBackend>,
    ) -> Result<Self, StartupError> {
        let store = Arc::new(DocumentStore::new(backend));
        store.load().await?;

        let passwords = Argon2PasswordService::new();
        let admin = match &config.admin_password_hash {
            Some(hash) => AdminCredentials::new(config.admin_username.as_str(), hash.as_str()),
            None => {
                let password = match &config.admin_password {
                    Some(password) => password.clone(),
                    None => {
                        tracing::warn!(
                            "no admin credentials configured, using the default development password"
                        );
                        "00000000".to_string()
                    }
                };
                AdminCredentials::from_plain(config.admin_username.as_str(), &password, &passwords)?
            }
        };
        let gate = AdminGate::new(
            admin,
            Box::new(passwords),
            Box::new(JwtTokenService::new(config.jwt.clone())),
        );

        let ids = Arc::new(IdGenerator::new());
        tracing::info!(admin = %config.admin_username, "application state initialized");

        Ok(Self {
            posts: Arc::new(StorePostRepository::new(store.clone(), ids.clone())),
            comments: Arc::new(StoreCommentRepository::new(store.clone(), ids)),
            gate: Arc::new(gate),
            store,
        })
    }

    /// One final persist before the process releases its resources. The host
    /// calls this from its shutdown path.
    pub async fn flush(&self) -> Result<(), StoreError> {
        self.store.flush().await
    }
}
