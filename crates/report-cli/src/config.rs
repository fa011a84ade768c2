//! Runtime configuration resolved from command-line arguments.

use std::path::PathBuf;

use crate::io::{InputSource, OutputTarget, STDIO_ARG};

/// Everything needed for one decryption run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecryptConfig {
    /// Path to the recipient private key file
    pub key_path: PathBuf,
    /// Encrypted report source
    pub input: InputSource,
    /// Destination for the plaintext
    pub output: OutputTarget,
}

impl DecryptConfig {
    /// Resolve raw argument values into a configuration.
    ///
    /// Precedence: `in_place` rewrites the input file unless the input is
    /// standard input, in which case it is ignored with a warning. Otherwise
    /// `output` names a file, with `-` (or no value) meaning display on
    /// standard output.
    pub fn resolve(
        key_path: PathBuf,
        input: PathBuf,
        output: Option<PathBuf>,
        in_place: bool,
    ) -> Self {
        let input = InputSource::from_arg(input);

        let output = match (&input, in_place, output) {
            (InputSource::File(path), true, _) => OutputTarget::InPlace(path.clone()),
            (InputSource::Stdin, true, _) => {
                tracing::warn!("--in-place ignored when reading from standard input");
                OutputTarget::Display
            },
            (_, false, Some(path)) if path.as_os_str() != STDIO_ARG => OutputTarget::File(path),
            (_, false, _) => OutputTarget::Display,
        };

        Self { key_path, input, output }
    }
}
