//! Activation code derivation for BRILink device provisioning.
//!
//! This crate handles:
//! - HMAC-SHA256 code derivation over a device identifier
//! - Base64 and truncated uppercase-hex renderings
//! - The command-line surface of the `brilink-activation` binary
//!
//! # Code Format
//!
//! The code is `HMAC-SHA256(key = secret, message = device_id)`, a 32-byte
//! digest. It is shown to the user either as the standard base64 encoding of
//! the full digest, or as the first few digest bytes in uppercase hex (two
//! digits per byte, no separators). The same inputs always produce the same
//! code, so the app can re-derive and compare it offline.

pub mod cli;
mod code;

pub use code::{
    generate_code, ActivationCode, CodeFormat, ParseFormatError, DEFAULT_HEX_BYTES,
    DEFAULT_SECRET, DIGEST_SIZE,
};
