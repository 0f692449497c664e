//! Status codes shared by every operation in the crate.
//!
//! Failures are reported through [`Utf8Error`], a closed set of outcomes
//! that each carry a distinct negative integer code. The success code is
//! [`OK`] (zero); positive values are reserved for counts and lengths and
//! never describe a status.
//!
//! [`describe`] translates any integer code, including unknown ones, into a
//! fixed human-readable message.

use thiserror::Error;

/// The status code of a successful operation.
pub const OK: i32 = 0;

/// Every way a codec operation can fail.
///
/// The `Display` text of each variant is the message returned by
/// [`describe`] for its [`code`](Utf8Error::code).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Utf8Error {
    /// The first byte of a sequence cannot start UTF-8.
    #[error("The leading byte of a UTF-8 sequence was invalid")]
    BadLeadingByte,
    /// A byte after the leading byte is not `10xxxxxx`, or is missing.
    #[error("A continuation byte of a UTF-8 sequence was invalid")]
    BadContinuationByte,
    /// The code point lies in the UTF-16 surrogate range.
    #[error("A surrogate pair code point could not be converted to UTF-8")]
    SurrogatePair,
    /// The inputs cannot be paired, or the code point needs no pairing.
    #[error("Input code points did not form a surrogate pair")]
    NotSurrogatePair,
    /// The code point is above `U+10FFFF`.
    #[error("A code point was beyond limits")]
    TooBig,
    /// The code point is a Unicode noncharacter.
    #[error("A number ending in hex FFFF or FFFE is not valid Unicode")]
    NotCharacter,
    /// The sequence encodes its code point with more bytes than needed.
    #[error("A UTF-8 input was not in the shortest form")]
    NonShortestForm,
    /// A zero byte, or no input at all, where a character was expected.
    #[error("A byte with value zero was found in UTF-8 input")]
    EmptyInput,
    /// The text is not `\u` followed by four hexadecimal digits.
    #[error("A \\u escape was not followed by four hexadecimal digits")]
    MalformedEscape,
    /// The value cannot be represented as a character.
    #[error("A value could not be represented as a character")]
    IllegalValue,
}

impl Utf8Error {
    /// All variants, in code order.
    pub const ALL: [Utf8Error; 10] = [
        Utf8Error::BadLeadingByte,
        Utf8Error::SurrogatePair,
        Utf8Error::NotSurrogatePair,
        Utf8Error::BadContinuationByte,
        Utf8Error::EmptyInput,
        Utf8Error::NonShortestForm,
        Utf8Error::TooBig,
        Utf8Error::NotCharacter,
        Utf8Error::MalformedEscape,
        Utf8Error::IllegalValue,
    ];

    /// The negative integer code of this status.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Utf8Error::BadLeadingByte => -1,
            Utf8Error::SurrogatePair => -2,
            Utf8Error::NotSurrogatePair => -3,
            Utf8Error::BadContinuationByte => -4,
            Utf8Error::EmptyInput => -5,
            Utf8Error::NonShortestForm => -6,
            Utf8Error::TooBig => -7,
            Utf8Error::NotCharacter => -8,
            Utf8Error::MalformedEscape => -9,
            Utf8Error::IllegalValue => -10,
        }
    }

    /// Maps an integer code back to its status. Returns `None` for the
    /// success code and for codes outside the closed set.
    #[must_use]
    pub const fn from_code(code: i32) -> Option<Utf8Error> {
        match code {
            -1 => Some(Utf8Error::BadLeadingByte),
            -2 => Some(Utf8Error::SurrogatePair),
            -3 => Some(Utf8Error::NotSurrogatePair),
            -4 => Some(Utf8Error::BadContinuationByte),
            -5 => Some(Utf8Error::EmptyInput),
            -6 => Some(Utf8Error::NonShortestForm),
            -7 => Some(Utf8Error::TooBig),
            -8 => Some(Utf8Error::NotCharacter),
            -9 => Some(Utf8Error::MalformedEscape),
            -10 => Some(Utf8Error::IllegalValue),
            _ => None,
        }
    }

    /// The fixed message for this status.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Utf8Error::BadLeadingByte => "The leading byte of a UTF-8 sequence was invalid",
            Utf8Error::BadContinuationByte => {
                "A continuation byte of a UTF-8 sequence was invalid"
            }
            Utf8Error::SurrogatePair => {
                "A surrogate pair code point could not be converted to UTF-8"
            }
            Utf8Error::NotSurrogatePair => "Input code points did not form a surrogate pair",
            Utf8Error::TooBig => "A code point was beyond limits",
            Utf8Error::NotCharacter => "A number ending in hex FFFF or FFFE is not valid Unicode",
            Utf8Error::NonShortestForm => "A UTF-8 input was not in the shortest form",
            Utf8Error::EmptyInput => "A byte with value zero was found in UTF-8 input",
            Utf8Error::MalformedEscape => {
                "A \\u escape was not followed by four hexadecimal digits"
            }
            Utf8Error::IllegalValue => "A value could not be represented as a character",
        }
    }
}

/// Translates a status code into a human-readable description.
///
/// Unknown codes, including every positive value, map to a generic message.
#[must_use]
pub const fn describe(code: i32) -> &'static str {
    if code == OK {
        return "Successful completion";
    }
    match Utf8Error::from_code(code) {
        Some(err) => err.message(),
        None => "Unknown/invalid error code",
    }
}

/// A validation failure together with the byte offset at which the
/// validator stopped.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{source} at byte {offset}")]
pub struct ValidationError {
    /// Why validation stopped.
    pub source: Utf8Error,
    /// Offset of the offending byte from the start of the buffer.
    pub offset: usize,
    /// Number of complete code points before `offset`.
    pub code_points: usize,
}
