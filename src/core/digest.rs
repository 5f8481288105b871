//! Digest provider contract and the default SHA-256 implementation

use crate::error::Result;
use async_trait::async_trait;
use sha2::{Digest, Sha256};

/// One-way hash supplied by the host environment.
///
/// Implementations must be deterministic, total for well-formed input,
/// and must return lowercase hex of a fixed length independent of the
/// message length. Providers are stateless and safe to share across
/// sessions behind an `Arc`.
#[async_trait]
pub trait DigestProvider: Send + Sync {
    /// Hash a preimage and return its lowercase hex digest.
    ///
    /// A failing provider surfaces [`crate::Error::Digest`]; the engine
    /// aborts the current step without mutating any counters.
    async fn digest(&self, message: &[u8]) -> Result<String>;
}

/// SHA-256 backed digest provider, the engine default
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256DigestProvider;

#[async_trait]
impl DigestProvider for Sha256DigestProvider {
    async fn digest(&self, message: &[u8]) -> Result<String> {
        let mut hasher = Sha256::new();
        hasher.update(message);
        Ok(hex::encode(hasher.finalize()))
    }
}
