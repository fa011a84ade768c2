//! Fuzz target for report decryption
//!
//! Feeds arbitrary blobs to `decrypt` under an arbitrary recipient key.
//!
//! # Strategy
//!
//! - Blobs around the 60-byte structural minimum
//! - Low-order and arbitrary ephemeral public keys
//! - Arbitrary recipient scalars
//!
//! # Invariants
//!
//! - `decrypt` never panics
//! - Inputs under 60 bytes always fail with `MalformedInput`
//! - Any successful decryption is exactly 60 bytes shorter than its input
//! - Decryption is deterministic

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use report_crypto::{decrypt, DecryptError, PrivateKey, MIN_BLOB_SIZE};

#[derive(Debug, Clone, Arbitrary)]
struct DecryptScenario {
    /// Recipient scalar
    recipient: [u8; 32],
    /// Ephemeral key choice
    ephemeral: EphemeralKey,
    /// Remaining blob bytes (nonce, ciphertext, tag)
    body: Vec<u8>,
}

#[derive(Debug, Clone, Arbitrary)]
enum EphemeralKey {
    /// No key at all, the body is the whole input
    Missing,
    /// All-zero u-coordinate (low order)
    Zero,
    /// u = 1 (low order)
    One,
    /// Any 32 bytes
    Arbitrary([u8; 32]),
}

impl EphemeralKey {
    fn bytes(&self) -> Option<[u8; 32]> {
        match self {
            EphemeralKey::Missing => None,
            EphemeralKey::Zero => Some([0u8; 32]),
            EphemeralKey::One => {
                let mut point = [0u8; 32];
                point[0] = 1;
                Some(point)
            },
            EphemeralKey::Arbitrary(bytes) => Some(*bytes),
        }
    }
}

fuzz_target!(|scenario: DecryptScenario| {
    let key = PrivateKey::from_bytes(scenario.recipient);

    let mut input = Vec::with_capacity(32 + scenario.body.len());
    if let Some(ephemeral) = scenario.ephemeral.bytes() {
        input.extend_from_slice(&ephemeral);
    }
    input.extend_from_slice(&scenario.body);

    let result = decrypt(&key, &input);

    if input.len() < MIN_BLOB_SIZE {
        assert!(
            matches!(
                result,
                Err(DecryptError::MalformedInput { actual, .. }) if actual == input.len()
            ),
            "short input must be malformed: {result:?}"
        );
        return;
    }

    if matches!(scenario.ephemeral, EphemeralKey::Zero | EphemeralKey::One) {
        assert_eq!(result, Err(DecryptError::AuthenticationFailure));
    }

    if let Ok(plaintext) = &result {
        assert_eq!(plaintext.len(), input.len() - MIN_BLOB_SIZE);
    }

    assert_eq!(decrypt(&key, &input), result, "decryption must be deterministic");
});
