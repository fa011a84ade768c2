//! Study report decryption binary.
//!
//! # Usage
//!
//! ```bash
//! # Print a decrypted report
//! decrypt-study-report -k private_key.pem report.enc
//!
//! # Decrypt from standard input into a file
//! cat report.enc | decrypt-study-report -k private_key.pem -o report.json -
//!
//! # Replace the encrypted file with its plaintext
//! decrypt-study-report -k private_key.pem --in-place report.enc
//! ```

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use report_cli::DecryptConfig;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Decrypts study reports encrypted for a recipient X25519 key
#[derive(Parser, Debug)]
#[command(name = "decrypt-study-report")]
#[command(about = "Decrypts encrypted study report files")]
#[command(version)]
struct Args {
    /// Private key file used for decrypting
    #[arg(short, long)]
    key: PathBuf,

    /// Write the plaintext over the input file (ignored for standard input)
    #[arg(short, long, conflicts_with = "output")]
    in_place: bool,

    /// Write the plaintext to this file ('-' prints to standard output)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Encrypted report file ('-' reads standard input)
    file: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    // stdout carries the plaintext
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = DecryptConfig::resolve(args.key, args.file, args.output, args.in_place);

    if let Err(err) = report_cli::run(&config) {
        tracing::error!(%err, "decryption failed");
        if err.suggests_other_key() {
            tracing::warn!("check that --key names the private key this report was encrypted for");
        }
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
