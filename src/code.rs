//! Activation code derivation and rendering.
//!
//! A code is the HMAC-SHA256 digest of a device identifier keyed by a shared
//! secret. Rendering never fails: hex truncation clamps to the digest size,
//! and a requested length of zero yields an empty string.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

/// Shared secret baked into the app. Used whenever no secret is supplied.
pub const DEFAULT_SECRET: &str = "brilink_app_idnacode";

/// Size of the HMAC-SHA256 digest in bytes.
pub const DIGEST_SIZE: usize = 32;

/// Default number of digest bytes used for hex output (4 bytes = 8 digits).
pub const DEFAULT_HEX_BYTES: usize = 4;

/// Output rendering for an activation code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeFormat {
    /// Standard base64 of the full digest (44 characters with padding).
    Base64,
    /// Leading digest bytes as uppercase hexadecimal.
    Hex,
}

impl fmt::Display for CodeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Base64 => "base64",
            Self::Hex => "hex",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for CodeFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "base64" => Ok(Self::Base64),
            "hex" => Ok(Self::Hex),
            other => Err(ParseFormatError(other.to_string())),
        }
    }
}

/// Error returned when a code format name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown code format `{0}` (expected `base64` or `hex`)")]
pub struct ParseFormatError(String);

/// The HMAC-SHA256 digest binding a device identifier to a shared secret.
///
/// Derivation is deterministic: the same device identifier and secret always
/// produce the same digest, which is what lets the app verify a code offline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivationCode {
    digest: [u8; DIGEST_SIZE],
}

impl ActivationCode {
    /// Derives the code for a device identifier using the default secret.
    #[must_use]
    pub fn derive(device_id: &str) -> Self {
        Self::derive_with_secret(device_id, DEFAULT_SECRET)
    }

    /// Derives the code for a device identifier using a custom secret.
    #[must_use]
    pub fn derive_with_secret(device_id: &str, secret: &str) -> Self {
        let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(device_id.as_bytes());
        let result = mac.finalize().into_bytes();

        let mut digest = [0u8; DIGEST_SIZE];
        digest.copy_from_slice(&result);
        Self { digest }
    }

    /// Encodes the full digest as standard base64 (with padding).
    #[must_use]
    pub fn to_base64(&self) -> String {
        BASE64.encode(self.digest)
    }

    /// Encodes the first `len` digest bytes as uppercase hex.
    ///
    /// Lengths beyond the digest size are clamped to the full digest; a
    /// length of zero yields an empty string.
    #[must_use]
    pub fn to_hex(&self, len: usize) -> String {
        hex::encode_upper(&self.digest[..len.min(DIGEST_SIZE)])
    }

    /// Renders the code in the requested format.
    ///
    /// `hex_len` selects how many digest bytes the hex rendering uses; it is
    /// ignored for base64, which always covers the full digest.
    #[must_use]
    pub fn render(&self, format: CodeFormat, hex_len: usize) -> String {
        match format {
            CodeFormat::Base64 => self.to_base64(),
            CodeFormat::Hex => self.to_hex(hex_len),
        }
    }

    /// Returns the raw digest bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; DIGEST_SIZE] {
        &self.digest
    }
}

/// Derives and renders an activation code in one call.
#[must_use]
pub fn generate_code(device_id: &str, secret: &str, format: CodeFormat, hex_len: usize) -> String {
    ActivationCode::derive_with_secret(device_id, secret).render(format, hex_len)
}
