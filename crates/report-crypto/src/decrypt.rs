//! Report decryption using X25519, HKDF-SHA256 and AES-256-GCM
//!
//! All functions are pure. Transient secrets live in zeroizing owners and are
//! wiped on every return path, including authentication failures.

use aes_gcm::{
    Aes256Gcm, Nonce,
    aead::{Aead, KeyInit},
};
use hkdf::Hkdf;
use sha2::Sha256;
use x25519_dalek::PublicKey;
use zeroize::Zeroizing;

use crate::{blob::EncryptedBlob, error::DecryptError, key::PrivateKey};

/// Size of the derived AES-256 key (32 bytes)
const SYMMETRIC_KEY_SIZE: usize = 32;

/// Decrypt an encrypted report.
///
/// Performs a fresh key agreement with the blob's ephemeral public key on every
/// call, derives the AES-256 key with HKDF-SHA256 (empty salt and info) and
/// opens the AES-GCM payload without associated data.
///
/// # Errors
///
/// - `MalformedInput`: input shorter than 60 bytes
/// - `AuthenticationFailure`: tag mismatch (wrong key or tampered data), or the
///   ephemeral key is a low-order point yielding an all-zero shared secret
pub fn decrypt(private_key: &PrivateKey, input: &[u8]) -> Result<Vec<u8>, DecryptError> {
    let blob = EncryptedBlob::parse(input)?;

    let symmetric_key = {
        let ephemeral_public_key = PublicKey::from(*blob.ephemeral_public_key());
        let shared_secret = private_key.diffie_hellman(&ephemeral_public_key);

        // All-zero output: the sender contributed nothing to the key
        if !shared_secret.was_contributory() {
            return Err(DecryptError::AuthenticationFailure);
        }

        derive_symmetric_key(shared_secret.as_bytes())
    };

    let key: &[u8; SYMMETRIC_KEY_SIZE] = &symmetric_key;
    let cipher = Aes256Gcm::new(key.into());

    cipher
        .decrypt(Nonce::from_slice(blob.nonce()), blob.ciphertext())
        .map_err(|_| DecryptError::AuthenticationFailure)
}

/// HKDF-SHA256 with empty salt and empty info.
fn derive_symmetric_key(shared_secret: &[u8; 32]) -> Zeroizing<[u8; SYMMETRIC_KEY_SIZE]> {
    let hkdf = Hkdf::<Sha256>::new(None, shared_secret);

    let mut key = Zeroizing::new([0u8; SYMMETRIC_KEY_SIZE]);
    let Ok(()) = hkdf.expand(&[], key.as_mut_slice()) else {
        unreachable!("32 bytes is a valid HKDF-SHA256 output length");
    };

    key
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blob::{MIN_BLOB_SIZE, TAG_SIZE};

    // Reference vector: recipient scalar 0x01..=0x20, ephemeral scalar 0x42 * 32,
    // nonce 0xa0..=0xab.
    const SHARED_SECRET_HEX: &str =
        "cee33c43821b272c6d690aea5cbdddca86bdc0812203cc004656bda4c37f3a26";
    const SYMMETRIC_KEY_HEX: &str =
        "c0cfa5fdd4f4627bab66e8c8aa952c74d3ac89382849924f73701d518a504dab";
    const EPHEMERAL_PUBLIC_KEY_HEX: &str =
        "132c442be010fbd57e72603328aa76e71fccc1503aae219327d14d9c9993f472";
    const NONCE_HEX: &str = "a0a1a2a3a4a5a6a7a8a9aaab";
    const CIPHERTEXT_HEX: &str = "baeb35cdb6fbcdbb4c1365bde32af0ff80e7e58c7e31e5a8e6b068ed05d88188\
                                  c3ee8e07e2def687cd9140bd0c8c312d9cd76473850528";
    const EMPTY_CIPHERTEXT_HEX: &str = "4cfefd217a9293af46d9f43ad9902cca";
    const PLAINTEXT: &[u8] = br#"{"study":"usability","answers":[1,2,3]}"#;

    fn recipient_key() -> PrivateKey {
        let mut scalar = [0u8; 32];
        for (i, byte) in scalar.iter_mut().enumerate() {
            *byte = (i + 1) as u8;
        }
        PrivateKey::from_bytes(scalar)
    }

    fn vector_blob(ciphertext_hex: &str) -> Vec<u8> {
        let mut blob = hex::decode(EPHEMERAL_PUBLIC_KEY_HEX).unwrap();
        blob.extend(hex::decode(NONCE_HEX).unwrap());
        blob.extend(hex::decode(ciphertext_hex).unwrap());
        blob
    }

    #[test]
    fn hkdf_matches_reference() {
        let shared: [u8; 32] = hex::decode(SHARED_SECRET_HEX).unwrap().try_into().unwrap();
        let key = derive_symmetric_key(&shared);

        assert_eq!(hex::encode(key.as_slice()), SYMMETRIC_KEY_HEX);
    }

    #[test]
    fn key_agreement_matches_reference() {
        let ephemeral: [u8; 32] =
            hex::decode(EPHEMERAL_PUBLIC_KEY_HEX).unwrap().try_into().unwrap();
        let shared = recipient_key().diffie_hellman(&PublicKey::from(ephemeral));

        assert_eq!(hex::encode(shared.as_bytes()), SHARED_SECRET_HEX);
    }

    #[test]
    fn decrypts_reference_vector() {
        let plaintext = decrypt(&recipient_key(), &vector_blob(CIPHERTEXT_HEX)).unwrap();
        assert_eq!(plaintext, PLAINTEXT);
    }

    #[test]
    fn minimum_blob_decrypts_to_empty() {
        let blob = vector_blob(EMPTY_CIPHERTEXT_HEX);
        assert_eq!(blob.len(), MIN_BLOB_SIZE);

        let plaintext = decrypt(&recipient_key(), &blob).unwrap();
        assert!(plaintext.is_empty());
    }

    #[test]
    fn short_input_is_malformed() {
        let blob = vector_blob(EMPTY_CIPHERTEXT_HEX);
        let result = decrypt(&recipient_key(), &blob[..MIN_BLOB_SIZE - 1]);

        assert_eq!(result, Err(DecryptError::MalformedInput { actual: 59, minimum: 60 }));
    }

    #[test]
    fn tampered_tag_fails_authentication() {
        let mut blob = vector_blob(CIPHERTEXT_HEX);
        let last = blob.len() - 1;
        blob[last] ^= 0x01;

        assert_eq!(decrypt(&recipient_key(), &blob), Err(DecryptError::AuthenticationFailure));
    }

    #[test]
    fn truncated_tag_fails_authentication() {
        let blob = vector_blob(CIPHERTEXT_HEX);
        let truncated = &blob[..blob.len() - TAG_SIZE / 2];

        assert_eq!(decrypt(&recipient_key(), truncated), Err(DecryptError::AuthenticationFailure));
    }

    #[test]
    fn low_order_ephemeral_key_is_rejected() {
        let mut blob = vec![0u8; 32];
        blob.extend(hex::decode(NONCE_HEX).unwrap());
        blob.extend(hex::decode(EMPTY_CIPHERTEXT_HEX).unwrap());

        assert_eq!(decrypt(&recipient_key(), &blob), Err(DecryptError::AuthenticationFailure));
    }

    #[test]
    fn ephemeral_key_high_bit_is_ignored() {
        // X25519 masks the top bit of the u-coordinate
        let mut blob = vector_blob(CIPHERTEXT_HEX);
        blob[31] ^= 0x80;

        assert_eq!(decrypt(&recipient_key(), &blob).unwrap(), PLAINTEXT);
    }
}
