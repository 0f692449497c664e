//! UTF-16 surrogate-pair arithmetic.
//!
//! A code point `c` in `U+10000..=U+10FFFF` is split as
//! `high = 0xD800 | ((c - 0x10000) >> 10)` and
//! `low = 0xDC00 | ((c - 0x10000) & 0x3FF)`.

use crate::{Utf8Error, encode};

/// First code point that needs a surrogate pair.
pub const HALF_BASE: u32 = 0x1_0000;

const TEN_BITS: u32 = 10;
const LOW_TEN_BITS: u32 = 0x3FF;

/// Whether `unit` is a high surrogate.
#[inline]
#[must_use]
pub const fn is_high_surrogate(unit: u16) -> bool {
    matches!(unit, 0xD800..=0xDBFF)
}

/// Whether `unit` is a low surrogate.
#[inline]
#[must_use]
pub const fn is_low_surrogate(unit: u16) -> bool {
    matches!(unit, 0xDC00..=0xDFFF)
}

/// Splits `code` into a `(high, low)` surrogate pair.
///
/// # Errors
///
/// - [`Utf8Error::NotSurrogatePair`] below `U+10000`: the code point fits a
///   single code unit.
/// - [`Utf8Error::TooBig`] above `U+10FFFF`.
#[allow(clippy::cast_possible_truncation)]
pub fn to_surrogates(code: u32) -> Result<(u16, u16), Utf8Error> {
    if code < HALF_BASE {
        return Err(Utf8Error::NotSurrogatePair);
    }
    if code > encode::UNICODE_MAX {
        return Err(Utf8Error::TooBig);
    }
    let offset = code - HALF_BASE;
    let high = 0xD800 | (offset >> TEN_BITS) as u16;
    let low = 0xDC00 | (offset & LOW_TEN_BITS) as u16;
    Ok((high, low))
}

/// Joins a surrogate pair into its code point.
///
/// # Errors
///
/// [`Utf8Error::NotSurrogatePair`] unless `high` is a high surrogate and
/// `low` a low surrogate.
pub fn from_surrogates(high: u16, low: u16) -> Result<u32, Utf8Error> {
    if !is_high_surrogate(high) || !is_low_surrogate(low) {
        return Err(Utf8Error::NotSurrogatePair);
    }
    Ok(((u32::from(high) - 0xD800) << TEN_BITS) + (u32::from(low) - 0xDC00) + HALF_BASE)
}

/// Joins a surrogate pair and encodes the code point into `dst`, returning
/// the number of bytes written.
///
/// # Errors
///
/// Those of [`from_surrogates`], then those of [`encode::encode`]
/// (a pair can name a noncharacter such as `U+1FFFE`).
///
/// # Panics
///
/// If `dst` is shorter than four bytes.
pub fn surrogates_to_utf8(high: u16, low: u16, dst: &mut [u8]) -> Result<usize, Utf8Error> {
    let code = from_surrogates(high, low)?;
    encode::encode(code, dst)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{from_surrogates, surrogates_to_utf8, to_surrogates};
    use crate::Utf8Error;

    #[test]
    fn grinning_face() {
        assert_eq!(to_surrogates(0x1_F600), Ok((0xD83D, 0xDE00)));
        assert_eq!(from_surrogates(0xD83D, 0xDE00), Ok(0x1_F600));
    }

    #[rstest]
    #[case(0x1_0000, 0xD800, 0xDC00)]
    #[case(0x10_FFFF, 0xDBFF, 0xDFFF)]
    #[case(0x2_070E, 0xD841, 0xDF0E)]
    fn pair_bounds(#[case] code: u32, #[case] high: u16, #[case] low: u16) {
        assert_eq!(to_surrogates(code), Ok((high, low)));
        assert_eq!(from_surrogates(high, low), Ok(code));
    }

    #[rstest]
    #[case(0x0)]
    #[case(0x41)]
    #[case(0xFFFF)]
    fn bmp_is_not_a_pair(#[case] code: u32) {
        assert_eq!(to_surrogates(code), Err(Utf8Error::NotSurrogatePair));
    }

    #[test]
    fn beyond_unicode_is_too_big() {
        assert_eq!(to_surrogates(0x11_0000), Err(Utf8Error::TooBig));
    }

    #[rstest]
    #[case(0xD7FF, 0xDC00)]
    #[case(0xDC00, 0xDC00)]
    #[case(0xD800, 0xDBFF)]
    #[case(0xD800, 0xE000)]
    #[case(0xDE00, 0xD83D)]
    #[case(0x0041, 0x0042)]
    fn rejects_unpaired(#[case] high: u16, #[case] low: u16) {
        assert_eq!(from_surrogates(high, low), Err(Utf8Error::NotSurrogatePair));
    }

    #[test]
    fn pair_to_utf8() {
        let mut dst = [0u8; 4];
        assert_eq!(surrogates_to_utf8(0xD83D, 0xDE00, &mut dst), Ok(4));
        assert_eq!(&dst, "😀".as_bytes());
        assert_eq!(
            surrogates_to_utf8(0xD83F, 0xDFFE, &mut dst),
            Err(Utf8Error::NotCharacter)
        );
        assert_eq!(
            surrogates_to_utf8(0x41, 0xDE00, &mut dst),
            Err(Utf8Error::NotSurrogatePair)
        );
    }
}
