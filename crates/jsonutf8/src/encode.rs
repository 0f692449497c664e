//! Code point to UTF-8.
//!
//! Every encoder rejects a value before writing anything, so on error the
//! destination is left untouched. Packing follows the usual layout:
//!
//! ```text
//! U+0000   ..= U+007F    0xxxxxxx
//! U+0080   ..= U+07FF    110xxxxx 10xxxxxx
//! U+0800   ..= U+FFFF    1110xxxx 10xxxxxx 10xxxxxx
//! U+10000  ..= U+10FFFF  11110xxx 10xxxxxx 10xxxxxx 10xxxxxx
//! ```

use core::ops::Deref;

use crate::{Utf8Error, classify::UTF8_MAX_LEN};

/// Largest Unicode code point.
pub const UNICODE_MAX: u32 = 0x10_FFFF;

/// Capacity [`encode_nul_terminated`] requires of its destination.
pub const NUL_TERMINATED_CAPACITY: usize = UTF8_MAX_LEN + 1;

/// Whether `value` is a noncharacter: `U+nFFFE`, `U+nFFFF`, or one of
/// `U+FDD0..=U+FDEF`.
#[inline]
#[must_use]
pub const fn is_noncharacter(value: u32) -> bool {
    value & 0xFFFE == 0xFFFE || matches!(value, 0xFDD0..=0xFDEF)
}

/// Whether `value` lies in the UTF-16 surrogate range.
#[inline]
#[must_use]
pub const fn is_surrogate(value: u32) -> bool {
    matches!(value, 0xD800..=0xDFFF)
}

/// Number of bytes the shortest encoding of `value` takes, without judging
/// whether `value` is a character. `None` above [`UNICODE_MAX`].
#[inline]
pub(crate) const fn encoded_len(value: u32) -> Option<usize> {
    match value {
        0..0x80 => Some(1),
        0x80..0x800 => Some(2),
        0x800..0x1_0000 => Some(3),
        0x1_0000..=UNICODE_MAX => Some(4),
        _ => None,
    }
}

/// One encoded sequence, stored inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Utf8Seq {
    bytes: [u8; UTF8_MAX_LEN],
    len: u8,
}

impl Utf8Seq {
    /// The encoded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..usize::from(self.len)]
    }

    /// Number of encoded bytes, 1 to 4.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Always `false`: a sequence holds at least one byte.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Deref for Utf8Seq {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsRef<[u8]> for Utf8Seq {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// Packs a value already known to be encodable.
#[allow(clippy::cast_possible_truncation)]
const fn pack(value: u32, len: usize) -> Utf8Seq {
    let mut bytes = [0u8; UTF8_MAX_LEN];
    match len {
        1 => bytes[0] = value as u8,
        2 => {
            bytes[0] = 0xC0 | (value >> 6) as u8;
            bytes[1] = 0x80 | (value & 0x3F) as u8;
        }
        3 => {
            bytes[0] = 0xE0 | (value >> 12) as u8;
            bytes[1] = 0x80 | ((value >> 6) & 0x3F) as u8;
            bytes[2] = 0x80 | (value & 0x3F) as u8;
        }
        _ => {
            bytes[0] = 0xF0 | (value >> 18) as u8;
            bytes[1] = 0x80 | ((value >> 12) & 0x3F) as u8;
            bytes[2] = 0x80 | ((value >> 6) & 0x3F) as u8;
            bytes[3] = 0x80 | (value & 0x3F) as u8;
        }
    }
    Utf8Seq {
        bytes,
        len: len as u8,
    }
}

fn check(value: u32, escaped: bool) -> Result<usize, Utf8Error> {
    let err = if is_noncharacter(value) {
        Utf8Error::NotCharacter
    } else if escaped && (value == 0xFF || value == 0xFE) {
        Utf8Error::IllegalValue
    } else if is_surrogate(value) {
        Utf8Error::SurrogatePair
    } else if let Some(len) = encoded_len(value) {
        return Ok(len);
    } else {
        Utf8Error::TooBig
    };
    log::debug!("cannot encode {value:#X}: {err}");
    Err(err)
}

/// Encodes `value` into an inline sequence.
///
/// # Errors
///
/// - [`Utf8Error::NotCharacter`] for noncharacters.
/// - [`Utf8Error::SurrogatePair`] for `U+D800..=U+DFFF`; such values need
///   the surrogate-pair path instead.
/// - [`Utf8Error::TooBig`] above [`UNICODE_MAX`].
pub fn encode_seq(value: u32) -> Result<Utf8Seq, Utf8Error> {
    check(value, false).map(|len| pack(value, len))
}

fn write(seq: &Utf8Seq, dst: &mut [u8], capacity: usize) -> usize {
    assert!(
        dst.len() >= capacity,
        "destination holds {} bytes but {capacity} are required",
        dst.len()
    );
    dst[..seq.len()].copy_from_slice(seq.as_bytes());
    seq.len()
}

/// Encodes `value` into the front of `dst` and returns the number of bytes
/// written.
///
/// # Errors
///
/// Same as [`encode_seq`]; nothing is written on error.
///
/// # Panics
///
/// If `dst` is shorter than the encoded sequence.
pub fn encode(value: u32, dst: &mut [u8]) -> Result<usize, Utf8Error> {
    let seq = encode_seq(value)?;
    Ok(write(&seq, dst, seq.len()))
}

/// Encodes a value that came from `\uXXXX` escape text.
///
/// Besides the checks of [`encode`], the raw values `0xFE` and `0xFF` are
/// refused with [`Utf8Error::IllegalValue`]. Checks run in the order
/// noncharacter, `0xFE`/`0xFF`, surrogate, range.
///
/// # Errors
///
/// As described above; nothing is written on error.
///
/// # Panics
///
/// If `dst` is shorter than the encoded sequence.
pub fn encode_escaped(value: u32, dst: &mut [u8]) -> Result<usize, Utf8Error> {
    let len = check(value, true)?;
    Ok(write(&pack(value, len), dst, len))
}

/// Like [`encode`], then appends a zero byte after the sequence. The
/// returned length does not include the terminator.
///
/// # Errors
///
/// Same as [`encode_seq`]; nothing is written on error.
///
/// # Panics
///
/// If `dst` is shorter than [`NUL_TERMINATED_CAPACITY`], whatever the
/// length of the sequence.
pub fn encode_nul_terminated(value: u32, dst: &mut [u8]) -> Result<usize, Utf8Error> {
    let seq = encode_seq(value)?;
    let n = write(&seq, dst, NUL_TERMINATED_CAPACITY);
    dst[n] = 0;
    Ok(n)
}
