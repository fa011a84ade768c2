//! Encrypted report wire format
//!
//! Fixed binary layout with no version tag and no length prefixes:
//!
//! ```text
//! offset 0   32 bytes   ephemeral X25519 public key
//! offset 32  12 bytes   AES-GCM nonce
//! offset 44  N bytes    AES-GCM ciphertext
//! end-16     16 bytes   AES-GCM authentication tag
//! ```

use crate::error::DecryptError;

/// Size of the ephemeral X25519 public key (32 bytes)
pub const EPHEMERAL_PUBLIC_KEY_SIZE: usize = 32;

/// Size of the AES-GCM nonce (12 bytes)
pub const NONCE_SIZE: usize = 12;

/// AES-GCM tag size (16 bytes)
pub const TAG_SIZE: usize = 16;

/// Smallest valid blob: an encrypted empty plaintext (60 bytes)
pub const MIN_BLOB_SIZE: usize = EPHEMERAL_PUBLIC_KEY_SIZE + NONCE_SIZE + TAG_SIZE;

/// Borrowed, length-checked view over an encrypted report.
///
/// Parsing only validates structure. Nothing here is authenticated until the
/// AEAD tag verifies in [`crate::decrypt`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncryptedBlob<'a> {
    ephemeral_public_key: &'a [u8; EPHEMERAL_PUBLIC_KEY_SIZE],
    nonce: &'a [u8; NONCE_SIZE],
    ciphertext: &'a [u8],
}

impl<'a> EncryptedBlob<'a> {
    /// Split raw bytes into the blob's fixed fields.
    ///
    /// # Errors
    ///
    /// - `MalformedInput` if `input` is shorter than [`MIN_BLOB_SIZE`]
    pub fn parse(input: &'a [u8]) -> Result<Self, DecryptError> {
        let malformed = || DecryptError::MalformedInput {
            actual: input.len(),
            minimum: MIN_BLOB_SIZE,
        };

        if input.len() < MIN_BLOB_SIZE {
            return Err(malformed());
        }

        let (ephemeral_public_key, rest) =
            input.split_first_chunk::<EPHEMERAL_PUBLIC_KEY_SIZE>().ok_or_else(malformed)?;
        let (nonce, ciphertext) = rest.split_first_chunk::<NONCE_SIZE>().ok_or_else(malformed)?;

        Ok(Self { ephemeral_public_key, nonce, ciphertext })
    }

    /// Raw bytes of the sender's one-time X25519 public key.
    pub fn ephemeral_public_key(&self) -> &'a [u8; EPHEMERAL_PUBLIC_KEY_SIZE] {
        self.ephemeral_public_key
    }

    /// The 12-byte AES-GCM nonce.
    pub fn nonce(&self) -> &'a [u8; NONCE_SIZE] {
        self.nonce
    }

    /// Ciphertext with the 16-byte tag still appended.
    pub fn ciphertext(&self) -> &'a [u8] {
        self.ciphertext
    }

    /// Plaintext length (ciphertext length minus authentication tag).
    pub fn plaintext_len(&self) -> usize {
        self.ciphertext.len().saturating_sub(TAG_SIZE)
    }
}
