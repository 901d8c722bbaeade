//! Route identifier encoding.
//!
//! Store links carry the service id as Base64 text that has then been
//! percent-encoded for the URL path, e.g. `abc123` travels as `YWJjMTIz` and
//! `42` as `NDI%3D`. Decoding is best-effort: a malformed segment is logged and
//! handed back untouched so the page can still render.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Standard alphabet, padding optional, stray trailing bits ignored (browser `atob` rules).
const FORGIVING_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Characters escaped by `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// The percent-decoded segment is not valid UTF-8.
    PercentEncoding(String),
    /// The segment is not Base64 text.
    Base64(String),
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::PercentEncoding(msg) => write!(f, "invalid percent-encoding: {}", msg),
            DecodeError::Base64(msg) => write!(f, "invalid base64: {}", msg),
        }
    }
}

impl std::error::Error for DecodeError {}

/// Strictly decodes a route segment into the plain service id.
pub fn try_decode(raw: &str) -> Result<String, DecodeError> {
    let unescaped = percent_decode_str(raw)
        .decode_utf8()
        .map_err(|e| DecodeError::PercentEncoding(e.to_string()))?;

    let compact: String = unescaped
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    let bytes = FORGIVING_BASE64
        .decode(compact.as_bytes())
        .map_err(|e| DecodeError::Base64(e.to_string()))?;

    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        // Binary payloads map byte-for-char, as `atob` does
        Err(e) => e.into_bytes().into_iter().map(char::from).collect(),
    })
}

/// Decodes a route segment, falling back to `raw` when it is not a valid encoding.
pub fn decode(raw: &str) -> String {
    match try_decode(raw) {
        Ok(service_id) => service_id,
        Err(e) => {
            tracing::warn!("Failed to decode route identifier '{}': {}", raw, e);
            raw.to_string()
        }
    }
}

/// Encodes a plain service id into the route segment form understood by [`decode`].
pub fn encode(service_id: &str) -> String {
    let b64 = FORGIVING_BASE64.encode(service_id.as_bytes());
    utf8_percent_encode(&b64, URI_COMPONENT).to_string()
}
