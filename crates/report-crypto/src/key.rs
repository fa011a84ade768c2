//! Recipient private key and key file loading
//!
//! Key files are PEM-like text. Only the second line is read: it must hold
//! base64 whose last 32 decoded bytes are the raw X25519 scalar. The prefix
//! (for PKCS#8 files, a 16-byte DER header) is skipped without parsing, so any
//! wrapper that ends with the raw key loads.

use std::fmt;

use base64::{
    Engine as _, alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
};
use x25519_dalek::{PublicKey, SharedSecret, StaticSecret};
use zeroize::Zeroizing;

use crate::error::DecryptError;

/// Size of a raw X25519 scalar (32 bytes)
pub const PRIVATE_KEY_SIZE: usize = 32;

/// Line of the key file holding the base64 payload
const KEY_LINE_INDEX: usize = 1;

/// Base64 decoder for key lines: tolerates missing or extra padding and
/// non-zero trailing bits, as existing key files may have either.
const LENIENT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Long-term X25519 private key of the report recipient.
///
/// The scalar is zeroized when the key is dropped. `Debug` output is redacted.
#[derive(Clone)]
pub struct PrivateKey {
    secret: StaticSecret,
}

impl PrivateKey {
    /// Wrap a raw 32-byte scalar. Every 32-byte value is a usable scalar
    /// because X25519 clamps it.
    pub fn from_bytes(bytes: [u8; PRIVATE_KEY_SIZE]) -> Self {
        let bytes = Zeroizing::new(bytes);
        Self { secret: StaticSecret::from(*bytes) }
    }

    /// Wrap a raw scalar given as a slice.
    ///
    /// # Errors
    ///
    /// - `InvalidKeyMaterial` if `bytes` is not exactly 32 bytes long
    pub fn from_slice(bytes: &[u8]) -> Result<Self, DecryptError> {
        let raw: &[u8; PRIVATE_KEY_SIZE] =
            bytes.try_into().map_err(|_| DecryptError::InvalidKeyMaterial {
                reason: format!("expected {PRIVATE_KEY_SIZE} bytes, got {}", bytes.len()),
            })?;
        Ok(Self::from_bytes(*raw))
    }

    /// Load a key from the contents of a key file.
    ///
    /// # Errors
    ///
    /// Bytes outside the base64 alphabet (whitespace, stray punctuation) are
    /// skipped before decoding.
    ///
    /// # Errors
    ///
    /// - `InvalidKeyMaterial` if the file has fewer than two lines, the second
    ///   line is not base64, or it decodes to fewer than 32 bytes
    pub fn from_key_file(contents: &[u8]) -> Result<Self, DecryptError> {
        let line = contents.split(|&b| b == b'\n').nth(KEY_LINE_INDEX).ok_or_else(|| {
            DecryptError::InvalidKeyMaterial {
                reason: "key file has fewer than 2 lines".to_string(),
            }
        })?;

        let encoded: Zeroizing<Vec<u8>> =
            Zeroizing::new(line.iter().copied().filter(|&b| is_base64_symbol(b)).collect());
        let decoded = Zeroizing::new(LENIENT_BASE64.decode(encoded.as_slice()).map_err(|err| {
            DecryptError::InvalidKeyMaterial { reason: format!("key line is not base64: {err}") }
        })?);

        let Some(offset) = decoded.len().checked_sub(PRIVATE_KEY_SIZE) else {
            return Err(DecryptError::InvalidKeyMaterial {
                reason: format!(
                    "decoded key is {} bytes, need at least {PRIVATE_KEY_SIZE}",
                    decoded.len()
                ),
            });
        };

        Self::from_slice(&decoded[offset..])
    }

    /// Public key matching this private key.
    pub fn public_key(&self) -> [u8; 32] {
        PublicKey::from(&self.secret).to_bytes()
    }

    /// X25519 with a peer public key. The result zeroizes itself on drop.
    pub(crate) fn diffie_hellman(&self, their_public: &PublicKey) -> SharedSecret {
        self.secret.diffie_hellman(their_public)
    }
}

fn is_base64_symbol(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'+' | b'/' | b'=')
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey").finish_non_exhaustive()
    }
}

/// Load the recipient private key from key file contents.
///
/// Shorthand for [`PrivateKey::from_key_file`].
pub fn load_private_key(contents: &[u8]) -> Result<PrivateKey, DecryptError> {
    PrivateKey::from_key_file(contents)
}
