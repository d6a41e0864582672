//! Command-line surface for the activation code generator.
//!
//! Lives in the library so the argument contract and output layout stay
//! testable; the binary only parses, initializes logging, and prints.

use crate::code::{generate_code, CodeFormat, DEFAULT_HEX_BYTES, DEFAULT_SECRET};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "brilink-activation")]
#[command(about = "Generate the activation code (HMAC-SHA256) for a device ID")]
pub struct Args {
    /// Device ID (exact string shown by the device)
    #[arg(short, long)]
    pub device: String,

    /// Shared secret used to derive the code (defaults to the app constant)
    #[arg(short, long, default_value = DEFAULT_SECRET)]
    pub secret: String,

    /// Only print the activation code
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short, long, default_value_t = CodeFormat::Base64)]
    pub format: CodeFormat,

    /// Number of digest bytes used for hex output
    #[arg(short, long, default_value_t = DEFAULT_HEX_BYTES as i64, allow_negative_numbers = true)]
    pub len: i64,

    /// Enable verbose debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Computes the code selected by the parsed arguments.
///
/// `--len` values at or below zero render an empty hex code; values above
/// the digest size render the full digest.
#[must_use]
pub fn activation_code(args: &Args) -> String {
    let hex_len = usize::try_from(args.len).unwrap_or(0);
    generate_code(&args.device, &args.secret, args.format, hex_len)
}

/// Formats the descriptive output printed in non-quiet mode.
///
/// The secret line shows the literal marker `(default)` whenever the secret
/// value equals [`DEFAULT_SECRET`], so the shared constant never appears in
/// terminal transcripts.
#[must_use]
pub fn report(args: &Args, code: &str) -> String {
    let secret = if args.secret == DEFAULT_SECRET {
        "(default)"
    } else {
        args.secret.as_str()
    };
    format!(
        "Device ID : {}\nSecret    : {}\nActivation code:\n{}\n\nUse this code in the app Activation screen.",
        args.device, secret, code
    )
}
