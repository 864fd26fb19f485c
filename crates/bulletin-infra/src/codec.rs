//! Attachment codec: binary payloads to and from their transport encoding.
//!
//! Pure functions, no side effects. Payloads are carried as standard base64
//! so they embed safely in the JSON snapshots and in data URIs.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as B64;
use thiserror::Error;

use bulletin_core::error::DomainError;

/// Codec failures.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("malformed encoding: {0}")]
    MalformedEncoding(String),
}

impl From<CodecError> for DomainError {
    fn from(err: CodecError) -> Self {
        DomainError::MalformedEncoding(err.to_string())
    }
}

/// Encode raw bytes as base64 text.
pub fn encode(bytes: &[u8]) -> String {
    B64.encode(bytes)
}

/// Exact inverse of [`encode`].
pub fn decode(text: &str) -> Result<Vec<u8>, CodecError> {
    B64.decode(text)
        .map_err(|e| CodecError::MalformedEncoding(e.to_string()))
}

/// Self-describing inline-resource string for single-attachment retrieval.
pub fn data_uri(mimetype: &str, encoded: &str) -> String {
    format!("data:{mimetype};base64,{encoded}")
}
