//! Input and output endpoints for the decrypt tool.
//!
//! Standard streams are passed in by the caller so the whole flow can run
//! against in-memory buffers in tests.

use std::{
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

use crate::error::CliError;

/// Command-line spelling of a standard stream.
pub const STDIO_ARG: &str = "-";

/// Where the encrypted report comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Read everything from standard input
    Stdin,
    /// Read a file
    File(PathBuf),
}

impl InputSource {
    /// Interpret a positional argument, where `-` means standard input.
    pub fn from_arg(path: PathBuf) -> Self {
        if path.as_os_str() == STDIO_ARG { Self::Stdin } else { Self::File(path) }
    }

    /// Human-readable name for logs and errors.
    pub fn name(&self) -> String {
        match self {
            Self::Stdin => "<stdin>".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }

    /// Read the whole input.
    pub fn read_all<R: Read>(&self, mut stdin: R) -> Result<Vec<u8>, CliError> {
        let result = match self {
            Self::Stdin => {
                let mut buffer = Vec::new();
                stdin.read_to_end(&mut buffer).map(|_| buffer)
            },
            Self::File(path) => fs::read(path),
        };

        result.map_err(|source| CliError::ReadInput { source_name: self.name(), source })
    }
}

/// Where the decrypted report goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Print to standard output as UTF-8 text followed by a newline
    Display,
    /// Write raw bytes to a file
    File(PathBuf),
    /// Replace the input file with raw bytes. The replacement is atomic: on
    /// failure the encrypted file is left as it was.
    InPlace(PathBuf),
}

impl OutputTarget {
    /// Human-readable name for logs and errors.
    pub fn name(&self) -> String {
        match self {
            Self::Display => "<stdout>".to_string(),
            Self::File(path) | Self::InPlace(path) => path.display().to_string(),
        }
    }

    /// Emit the plaintext.
    ///
    /// Invalid UTF-8 is replaced with U+FFFD in `Display` mode only. File
    /// targets always receive the exact bytes.
    pub fn write<W: Write>(&self, plaintext: &[u8], mut stdout: W) -> Result<(), CliError> {
        let result = match self {
            Self::Display => {
                let text = String::from_utf8_lossy(plaintext);
                writeln!(stdout, "{text}").and_then(|()| stdout.flush())
            },
            Self::File(path) => fs::write(path, plaintext),
            Self::InPlace(path) => replace_file_with(path, |file| file.write_all(plaintext)),
        };

        result.map_err(|source| CliError::WriteOutput { target_name: self.name(), source })
    }
}

/// Write a sibling temp file, then rename it over `path`.
///
/// The temp file is removed on any error, so `path` keeps its old contents.
fn replace_file_with<F>(path: &Path, write: F) -> io::Result<()>
where
    F: FnOnce(&mut NamedTempFile) -> io::Result<()>,
{
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(parent)?;
    write(&mut file)?;
    file.as_file().sync_all()?;

    if let Ok(metadata) = fs::metadata(path) {
        fs::set_permissions(file.path(), metadata.permissions())?;
    }

    file.persist(path).map_err(|err| err.error)?;
    Ok(())
}
