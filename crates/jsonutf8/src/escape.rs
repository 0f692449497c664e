//! `\uXXXX` escapes as they appear inside quoted string literals.
//!
//! An escape is the two ASCII bytes `\u` followed by exactly four
//! case-insensitive hexadecimal digits and names one UTF-16 code unit. Code
//! points above `U+FFFF` take two escapes forming a surrogate pair.
//!
//! The length calculators only measure; they do not reject surrogates or
//! noncharacters. [`escape_to_utf8`] applies the full encoder rules.

use crate::{
    Utf8Error,
    encode::{encode_escaped, encoded_len},
    escape_buffer::EscapeBuffer,
    surrogate::{is_high_surrogate, is_low_surrogate, surrogates_to_utf8},
};

/// Length of one escape, `\u` plus four digits.
pub const ESCAPE_LEN: usize = 6;

/// Parses the escape at the start of `text` into its code unit. Bytes after
/// the sixth are ignored.
///
/// # Errors
///
/// [`Utf8Error::MalformedEscape`] if `text` does not start with `\u` and
/// four hexadecimal digits.
pub fn parse_escape(text: &[u8]) -> Result<u16, Utf8Error> {
    let Some(digits) = text.strip_prefix(b"\\u").and_then(|rest| rest.get(..4)) else {
        log::debug!("no \\u followed by four characters in {:?}", bstr::BStr::new(text));
        return Err(Utf8Error::MalformedEscape);
    };
    let mut buf = EscapeBuffer::new();
    let mut unit = None;
    for &b in digits {
        unit = buf.feed(b)?;
    }
    unit.ok_or(Utf8Error::MalformedEscape)
}

/// Number of UTF-8 bytes the value of the escape at the start of `text`
/// needs: 1, 2 or 3.
///
/// # Errors
///
/// [`Utf8Error::MalformedEscape`] as for [`parse_escape`].
pub fn escape_utf8_len(text: &[u8]) -> Result<usize, Utf8Error> {
    parse_escape(text).and_then(|unit| value_utf8_len(u32::from(unit)))
}

/// Number of UTF-8 bytes `value` needs: 1 below `0x80`, 2 below `0x800`,
/// 3 below `0x10000`, 4 below `0x110000`.
///
/// # Errors
///
/// [`Utf8Error::IllegalValue`] for `0x110000` and above.
pub fn value_utf8_len(value: u32) -> Result<usize, Utf8Error> {
    encoded_len(value).ok_or_else(|| {
        log::debug!("{value:#X}: illegal value");
        Utf8Error::IllegalValue
    })
}

/// What [`escape_to_utf8`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EscapeDecoded {
    /// Bytes of escape text read: 6, or 12 for a surrogate pair.
    pub consumed: usize,
    /// UTF-8 bytes written to the destination.
    pub written: usize,
}

/// Decodes the escape at the start of `text` into UTF-8. A high surrogate
/// must be followed directly by a second escape holding the low surrogate.
///
/// # Errors
///
/// - [`Utf8Error::MalformedEscape`] for malformed escape text.
/// - [`Utf8Error::SurrogatePair`] for a lone high or low surrogate.
/// - [`Utf8Error::NotSurrogatePair`] if a high surrogate is followed by an
///   escape that is not a low surrogate.
/// - The errors of [`encode_escaped`](crate::encode_escaped).
///
/// # Panics
///
/// If `dst` is too short for the encoded sequence; four bytes always suffice.
pub fn escape_to_utf8(text: &[u8], dst: &mut [u8]) -> Result<EscapeDecoded, Utf8Error> {
    let unit = parse_escape(text)?;

    if is_low_surrogate(unit) {
        log::debug!("lone low surrogate {unit:#X}");
        return Err(Utf8Error::SurrogatePair);
    }
    if !is_high_surrogate(unit) {
        let written = encode_escaped(u32::from(unit), dst)?;
        return Ok(EscapeDecoded {
            consumed: ESCAPE_LEN,
            written,
        });
    }

    let rest = &text[ESCAPE_LEN..];
    if !rest.starts_with(b"\\u") {
        log::debug!("high surrogate {unit:#X} without a following escape");
        return Err(Utf8Error::SurrogatePair);
    }
    let low = parse_escape(rest)?;
    let written = surrogates_to_utf8(unit, low, dst)?;
    Ok(EscapeDecoded {
        consumed: 2 * ESCAPE_LEN,
        written,
    })
}
