//! BRILink activation code generator.
//!
//! Derives the activation code a device presents on the app's Activation
//! screen: HMAC-SHA256 over the device ID, keyed by the shared secret.
//!
//! Usage:
//!   brilink-activation --device <DEVICE_ID> [--secret <SECRET>]
//!
//! If --secret is omitted, the app's built-in default secret is used.

use brilink_activation::cli::{self, Args};
use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

fn main() {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    debug!("Deriving code for device {} ({} output)", args.device, args.format);
    let code = cli::activation_code(&args);

    if args.quiet {
        println!("{}", code);
    } else {
        println!("{}", cli::report(&args, &code));
    }
}
