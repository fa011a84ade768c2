//! Error types for report decryption

use thiserror::Error;

/// Errors from key loading and report decryption.
///
/// Every variant is terminal for the operation that produced it. Nothing in
/// this crate retries, and no variant ever accompanies a partial plaintext.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecryptError {
    /// Input is too short to hold the fixed blob fields
    #[error("malformed input: {actual} bytes, need at least {minimum}")]
    MalformedInput {
        /// Length of the rejected input
        actual: usize,
        /// Minimum structural length
        minimum: usize,
    },

    /// The AEAD tag did not verify, or the key agreement was degenerate.
    ///
    /// Deliberately carries no detail: a wrong key and tampered data are
    /// indistinguishable to the caller.
    #[error("authentication failed")]
    AuthenticationFailure,

    /// Private key bytes could not be turned into an X25519 scalar
    #[error("invalid key material: {reason}")]
    InvalidKeyMaterial {
        /// What was wrong with the key material (never the key bytes)
        reason: String,
    },
}

impl DecryptError {
    /// Returns true if the failure points at the private key rather than the
    /// encrypted input.
    ///
    /// `AuthenticationFailure` is not a key error: it cannot tell a wrong key
    /// from tampered data.
    pub fn is_key_error(&self) -> bool {
        match self {
            Self::InvalidKeyMaterial { .. } => true,
            Self::MalformedInput { .. } | Self::AuthenticationFailure => false,
        }
    }
}
