//! Access-control ports.

/// The authenticated principal recorded as a post's author.
#[derive(Debug, Clone)]
pub struct Identity {
    pub username: String,
    pub role: String,
}

/// Claims carried by an issued credential.
#[derive(Debug, Clone)]
pub struct TokenClaims {
    pub username: String,
    pub role: String,
    pub exp: i64,
}

/// A freshly issued credential and the identity it represents.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_in: i64,
    pub identity: Identity,
}

/// Token service for issuing and validating bearer credentials.
pub trait TokenService: Send + Sync {
    /// Issue a signed, time-limited credential for an identity.
    fn generate_token(&self, username: &str, role: &str) -> Result<String, AuthError>;

    /// Validate signature and expiry, and decode the claims.
    fn validate_token(&self, token: &str) -> Result<TokenClaims, AuthError>;

    /// Credential validity in seconds.
    fn expiration_seconds(&self) -> i64;
}

/// Password hashing service.
pub trait PasswordService: Send + Sync {
    /// Hash a plain text password.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Verify a password against a salted hash.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

/// Access-control gate: verifies a bearer credential and yields the identity
/// used to stamp authored records. Gates every post mutation and comment
/// deletion; comment creation and all reads are intentionally ungated.
pub trait AccessGate: Send + Sync {
    /// Compare against the configured admin identity and issue a credential.
    fn login(&self, username: &str, password: &str) -> Result<IssuedToken, AuthError>;

    /// Validate a presented credential.
    fn authenticate(&self, token: &str) -> Result<Identity, AuthError>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("token expired")]
    TokenExpired,

    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("missing credential")]
    MissingCredential,

    #[error("hashing error: {0}")]
    HashingError(String),
}
