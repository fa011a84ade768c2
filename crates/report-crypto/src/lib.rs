//! Study Report Decryption Primitives
//!
//! Decrypts reports sealed with anonymous hybrid public-key encryption. Pure
//! functions with deterministic outputs: no I/O, no logging, no shared state.
//!
//! # Scheme
//!
//! The sender generates a one-time X25519 key pair per report, agrees a shared
//! secret with the recipient's long-term public key, and seals the report with
//! AES-256-GCM under a key derived from that secret. The recipient repeats the
//! agreement with its private key.
//!
//! ```text
//! Recipient Private Key + Ephemeral Public Key
//!        │
//!        ▼
//! X25519 → Shared Secret
//!        │
//!        ▼
//! HKDF-SHA256 (empty salt, empty info) → AES-256 Key
//!        │
//!        ▼
//! AES-256-GCM Open (no AAD) → Plaintext
//! ```
//!
//! # Security
//!
//! Secret Lifetime:
//! - Shared secret and derived key are zeroized on every return path
//! - Private key scalar is zeroized on drop and redacted from `Debug`
//!
//! Authenticity:
//! - Failed tag check -> single opaque `AuthenticationFailure`
//! - Low-order ephemeral keys (all-zero shared secret) -> `AuthenticationFailure`
//!
//! Isolation:
//! - Every call performs a fresh key agreement, nothing is cached between calls

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod blob;
pub mod decrypt;
pub mod error;
pub mod key;

pub use blob::{EPHEMERAL_PUBLIC_KEY_SIZE, EncryptedBlob, MIN_BLOB_SIZE, NONCE_SIZE, TAG_SIZE};
pub use decrypt::decrypt;
pub use error::DecryptError;
pub use key::{PRIVATE_KEY_SIZE, PrivateKey, load_private_key};
