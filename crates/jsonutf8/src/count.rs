//! Counting code points.
//!
//! These functions take NUL-terminated text held in a byte slice: the text
//! ends at the first zero byte, or at the end of the slice if it has none.

use crate::{Utf8Error, classify::SEQUENCE_LEN, decode::decode};

/// The text part of `buf`: everything before the first zero byte.
#[inline]
fn text(buf: &[u8]) -> &[u8] {
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    &buf[..end]
}

/// Counts the code points of the text in `buf`, checking every sequence.
///
/// # Errors
///
/// The first error [`decode`](crate::decode) reports.
pub fn count_chars(buf: &[u8]) -> Result<usize, Utf8Error> {
    let mut rest = text(buf);
    let mut chars = 0;
    while !rest.is_empty() {
        let (_, len) = decode(rest)?;
        rest = &rest[len..];
        chars += 1;
    }
    Ok(chars)
}

/// Counts the code points of the text in `buf` by their leading bytes
/// alone, skipping continuation bytes unseen.
///
/// The count is only meaningful for validated text. A sequence cut short by
/// the end of the text still counts as one.
///
/// # Errors
///
/// [`Utf8Error::BadLeadingByte`] if a sequence starts with a byte that cannot
/// lead one.
pub fn count_chars_fast(buf: &[u8]) -> Result<usize, Utf8Error> {
    let text = text(buf);
    let mut pos = 0;
    let mut chars = 0;
    while let Some(&b) = text.get(pos) {
        match SEQUENCE_LEN[usize::from(b)] {
            0 => return Err(Utf8Error::BadLeadingByte),
            len => pos += usize::from(len),
        }
        chars += 1;
    }
    Ok(chars)
}

/// Byte offset at which the first `n_chars` code points of `buf` end.
///
/// # Errors
///
/// - [`Utf8Error::EmptyInput`] if the text is empty but `n_chars` is not
///   zero, or the text runs out before `n_chars` code points.
/// - Any other error [`decode`](crate::decode) reports on the way.
pub fn chars_to_byte_offset(buf: &[u8], n_chars: usize) -> Result<usize, Utf8Error> {
    let text = text(buf);
    if text.is_empty() && n_chars != 0 {
        return Err(Utf8Error::EmptyInput);
    }
    let mut offset = 0;
    for _ in 0..n_chars {
        let (_, len) = decode(&text[offset..])?;
        offset += len;
    }
    Ok(offset)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{chars_to_byte_offset, count_chars, count_chars_fast};
    use crate::Utf8Error;

    #[rstest]
    #[case(b"", 0)]
    #[case(b"\0abc", 0)]
    #[case(b"abc", 3)]
    #[case(b"abc\0def", 3)]
    #[case("aé€😀".as_bytes(), 4)]
    fn counts(#[case] buf: &[u8], #[case] expected: usize) {
        assert_eq!(count_chars(buf), Ok(expected));
        assert_eq!(count_chars_fast(buf), Ok(expected));
    }

    #[test]
    fn checked_count_reports_first_error() {
        assert_eq!(count_chars(&[b'a', 0xC0, 0x80]), Err(Utf8Error::BadLeadingByte));
        assert_eq!(count_chars(&[b'a', 0xE2, 0x82]), Err(Utf8Error::BadContinuationByte));
        assert_eq!(count_chars(&[0xED, 0xA0, 0x80]), Err(Utf8Error::SurrogatePair));
        // The terminator cuts the sequence short.
        assert_eq!(count_chars(&[0xE2, 0x82, 0x00, 0xAC]), Err(Utf8Error::BadContinuationByte));
    }

    #[test]
    fn fast_count_skips_continuations() {
        // Continuation bytes are not looked at, only jumped over.
        assert_eq!(count_chars_fast(&[0xE2, 0x41, 0x41, b'x']), Ok(2));
        assert_eq!(count_chars_fast(&[0xE2, 0x82]), Ok(1));
        assert_eq!(count_chars_fast(&[b'a', 0x80]), Err(Utf8Error::BadLeadingByte));
    }

    #[test]
    fn byte_offsets() {
        let s = "aé€😀".as_bytes();
        assert_eq!(chars_to_byte_offset(s, 0), Ok(0));
        assert_eq!(chars_to_byte_offset(s, 1), Ok(1));
        assert_eq!(chars_to_byte_offset(s, 2), Ok(3));
        assert_eq!(chars_to_byte_offset(s, 3), Ok(6));
        assert_eq!(chars_to_byte_offset(s, 4), Ok(10));
        assert_eq!(chars_to_byte_offset(s, 5), Err(Utf8Error::EmptyInput));
    }

    #[test]
    fn byte_offset_of_empty_text() {
        assert_eq!(chars_to_byte_offset(b"", 0), Ok(0));
        assert_eq!(chars_to_byte_offset(b"", 1), Err(Utf8Error::EmptyInput));
        assert_eq!(chars_to_byte_offset(b"\0a", 1), Err(Utf8Error::EmptyInput));
        assert_eq!(
            chars_to_byte_offset(&[b'a', 0xFF], 2),
            Err(Utf8Error::BadLeadingByte)
        );
    }
}
