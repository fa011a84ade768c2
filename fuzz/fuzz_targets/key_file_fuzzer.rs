//! Fuzz target for key file loading
//!
//! # Invariants
//!
//! - `load_private_key` never panics on arbitrary bytes
//! - Every failure is `InvalidKeyMaterial`
//! - A loaded key round-trips through `PrivateKey::from_key_file`

#![no_main]

use libfuzzer_sys::fuzz_target;
use report_crypto::{load_private_key, DecryptError, PrivateKey};

fuzz_target!(|contents: &[u8]| {
    match load_private_key(contents) {
        Ok(key) => {
            let again = PrivateKey::from_key_file(contents).unwrap();
            assert_eq!(key.public_key(), again.public_key());
        },
        Err(err) => {
            assert!(
                matches!(err, DecryptError::InvalidKeyMaterial { .. }),
                "unexpected error: {err:?}"
            );
        },
    }
});
