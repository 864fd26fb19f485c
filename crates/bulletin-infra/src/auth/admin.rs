//! The admin credential gate: one configured identity, argon2 verification,
//! signed time-limited credentials.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use bulletin_core::ports::{
    AccessGate, AuthError, Identity, IssuedToken, PasswordService, TokenService,
};

/// Role marker stamped into issued credentials.
const ADMIN_ROLE: &str = "admin";

/// Argon2-based password service.
pub struct Argon2PasswordService {
    argon2: Argon2<'static>,
}

impl Argon2PasswordService {
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }
}

impl Default for Argon2PasswordService {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordService for Argon2PasswordService {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| AuthError::HashingError(e.to_string()))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| AuthError::HashingError(e.to_string()))?;

        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

/// The one configured admin identity.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub username: String,
    pub password_hash: String,
}

impl AdminCredentials {
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
        }
    }

    /// Build from a plain password, hashing it at startup. Meant for
    /// development setups where no precomputed hash is configured.
    pub fn from_plain(
        username: impl Into<String>,
        password: &str,
        passwords: &dyn PasswordService,
    ) -> Result<Self, AuthError> {
        Ok(Self {
            username: username.into(),
            password_hash: passwords.hash(password)?,
        })
    }
}

/// Access-control gate for the single configured admin.
pub struct AdminGate {
    admin: AdminCredentials,
    passwords: Box<dyn PasswordService>,
    tokens: Box<dyn TokenService>,
}

impl AdminGate {
    pub fn new(
        admin: AdminCredentials,
        passwords: Box<dyn PasswordService>,
        tokens: Box<dyn TokenService>,
    ) -> Self {
        Self {
            admin,
            passwords,
            tokens,
        }
    }
}

impl AccessGate for AdminGate {
    fn login(&self, username: &str, password: &str) -> Result<IssuedToken, AuthError> {
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredential);
        }

        // Verify the hash even on a username mismatch so both rejection
        // paths take comparable time.
        let password_ok = self.passwords.verify(password, &self.admin.password_hash)?;
        if username != self.admin.username || !password_ok {
            tracing::warn!(username, "login rejected");
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.tokens.generate_token(username, ADMIN_ROLE)?;
        tracing::info!(username, "login successful");

        Ok(IssuedToken {
            token,
            expires_in: self.tokens.expiration_seconds(),
            identity: Identity {
                username: username.to_string(),
                role: ADMIN_ROLE.to_string(),
            },
        })
    }

    fn authenticate(&self, token: &str) -> Result<Identity, AuthError> {
        // Accept either the bare token or a full `Bearer <token>` header value.
        let token = token.strip_prefix("Bearer ").unwrap_or(token).trim();
        if token.is_empty() {
            return Err(AuthError::MissingCredential);
        }

        let claims = self.tokens.validate_token(token)?;
        Ok(Identity {
            username: claims.username,
            role: claims.role,
        })
    }
}
