//! CLI error types.

use std::{io, path::PathBuf};

use report_crypto::DecryptError;
use thiserror::Error;

/// Errors that can occur while decrypting a report from the command line.
#[derive(Debug, Error)]
pub enum CliError {
    /// Key file could not be read.
    ///
    /// Usually a wrong path or missing permissions. Fix the `--key` argument
    /// and rerun.
    #[error("failed to read key file {}: {source}", .path.display())]
    ReadKey {
        /// Path given for the key file
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Encrypted input could not be read from a file or standard input.
    #[error("failed to read input from {source_name}: {source}")]
    ReadInput {
        /// File path, or `<stdin>`
        source_name: String,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Decrypted output could not be written.
    ///
    /// For in-place output the encrypted input file is left untouched.
    #[error("failed to write output to {target_name}: {source}")]
    WriteOutput {
        /// File path, or `<stdout>`
        target_name: String,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Key loading or decryption failed.
    ///
    /// See `DecryptError` for the cause. An authentication failure means the
    /// key does not match the report or the report was modified.
    #[error(transparent)]
    Decrypt(#[from] DecryptError),
}

impl CliError {
    /// Returns true if retrying with a different key file might succeed.
    pub fn suggests_other_key(&self) -> bool {
        match self {
            Self::ReadKey { .. } => true,
            Self::Decrypt(err) => err.is_key_error() || *err == DecryptError::AuthenticationFailure,
            Self::ReadInput { .. } | Self::WriteOutput { .. } => false,
        }
    }
}
