//! Finding the next sequence start after landing mid-sequence.

use crate::{Utf8Error, classify::UTF8_MAX_LEN, classify::is_continuation};

/// Number of bytes to skip from the start of `bytes` to reach the start of a
/// sequence.
///
/// Returns `Ok(0)` when `bytes` already starts with a leading byte
/// (`0xxxxxxx` or `11xxxxxx`, zero included) or is empty. From a
/// continuation byte, at most the next three bytes are examined; the end of
/// `bytes` counts as a sequence boundary.
///
/// # Errors
///
/// - [`Utf8Error::NotCharacter`] if an examined byte is `0xFE` or `0xFF`,
///   which never occur in UTF-8.
/// - [`Utf8Error::BadContinuationByte`] if no sequence start follows within
///   three bytes.
pub fn resync(bytes: &[u8]) -> Result<usize, Utf8Error> {
    for (i, &b) in bytes.iter().take(UTF8_MAX_LEN).enumerate() {
        if matches!(b, 0xFE | 0xFF) {
            log::debug!("byte {b:#04X} at +{i} is never UTF-8");
            return Err(Utf8Error::NotCharacter);
        }
        if !is_continuation(b) {
            return Ok(i);
        }
    }
    if bytes.len() < UTF8_MAX_LEN {
        return Ok(bytes.len());
    }
    Err(Utf8Error::BadContinuationByte)
}
