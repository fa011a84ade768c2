//! Study report decryption tool.
//!
//! Production glue around [`report_crypto`]: loads the recipient key file,
//! reads the encrypted report from a file or standard input, decrypts it, and
//! writes the plaintext to standard output, a file, or back over the input.
//!
//! # Components
//!
//! - [`DecryptConfig`]: Resolved command-line configuration
//! - [`InputSource`] / [`OutputTarget`]: I/O endpoints
//! - [`run_with`]: One decryption against injectable standard streams
//! - [`CliError`]: Everything that can go wrong, wrapping
//!   [`report_crypto::DecryptError`]

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod error;
mod io;

use std::{
    fs,
    io::{Read, Write},
};

pub use config::DecryptConfig;
pub use error::CliError;
pub use io::{InputSource, OutputTarget, STDIO_ARG};
use report_crypto::{EncryptedBlob, decrypt, load_private_key};

/// Decrypt one report using the process's standard streams.
pub fn run(config: &DecryptConfig) -> Result<(), CliError> {
    run_with(config, std::io::stdin().lock(), std::io::stdout().lock())
}

/// Decrypt one report, reading `stdin` and writing `stdout` only when the
/// configuration asks for standard streams.
pub fn run_with<R: Read, W: Write>(
    config: &DecryptConfig,
    stdin: R,
    stdout: W,
) -> Result<(), CliError> {
    let key_contents = fs::read(&config.key_path)
        .map_err(|source| CliError::ReadKey { path: config.key_path.clone(), source })?;
    let private_key = load_private_key(&key_contents)?;
    tracing::debug!(
        key = %config.key_path.display(),
        public_key = %hex::encode(&private_key.public_key()[..8]),
        "loaded private key"
    );

    let input = config.input.read_all(stdin)?;
    let blob = EncryptedBlob::parse(&input)?;
    tracing::debug!(
        source = %config.input.name(),
        bytes = input.len(),
        plaintext_bytes = blob.plaintext_len(),
        "read encrypted report"
    );

    let plaintext = decrypt(&private_key, &input)?;
    tracing::info!(
        source = %config.input.name(),
        plaintext_bytes = plaintext.len(),
        "report decrypted"
    );

    config.output.write(&plaintext, stdout)?;
    tracing::debug!(destination = %config.output.name(), "wrote plaintext");

    Ok(())
}
