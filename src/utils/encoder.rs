//! Deterministic short code derivation.
//!
//! A code is the first [`CODE_LENGTH`] characters of the standard (padded)
//! base64 encoding of the URL's raw bytes. No salt, no uniqueness check:
//! equal inputs always give equal codes, and different inputs sharing a
//! long enough prefix give equal codes too (every `https://` URL encodes to
//! `aHR0cHM6Ly`). Collisions are accepted and logged by the caller.

use crate::domain::entities::ShortCode;
use base64::Engine as _;

/// Number of base64 characters kept from the encoding.
pub const CODE_LENGTH: usize = 10;

/// Derives the short code for `raw`.
///
/// Inputs shorter than 7 bytes encode to fewer than [`CODE_LENGTH`]
/// characters; the whole encoding is used in that case.
///
/// # Examples
///
/// ```
/// use shortmap::utils::encoder::encode;
///
/// assert_eq!(encode(b"https://example.com").as_str(), "aHR0cHM6Ly");
/// ```
pub fn encode(raw: &[u8]) -> ShortCode {
    let mut encoded = base64::engine::general_purpose::STANDARD.encode(raw);
    encoded.truncate(CODE_LENGTH);
    ShortCode::from_encoded(encoded)
}
