//! Whole-buffer validation.
//!
//! The validator is a finite-state automaton over bytes. Each [`State`]
//! records which byte of which kind of sequence comes next and what range
//! that byte must fall in; [`State::step`] is the transition function.
//!
//! It accepts exactly the sequences [`decode`](crate::decode) accepts:
//! shortest forms only, no surrogates, nothing above `U+10FFFF`, no
//! noncharacters, and no zero bytes. Bytes past the end of the input are
//! never read; a sequence cut off by the end fails with
//! [`Utf8Error::BadContinuationByte`].
//!
//! ```text
//! lead        second             third              fourth
//! 00..7F
//! C2..DF      80..BF
//! E0          A0..BF             80..BF
//! E1..EC EE   80..BF             80..BF
//! ED          80..9F             80..BF
//! EF          80..BF             80..BF   (EF B7 90..AF and EF BF BE..BF rejected)
//! F0          90..BF             80..BF             80..BF
//! F1..F3      80..BF             80..BF             80..BF
//! F4          80..8F             80..BF             80..BF
//! ```

use bstr::ByteSlice;

use crate::{Utf8Error, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Expecting the first byte of a sequence.
    Lead,
    /// Expecting the final byte, `80..=BF`.
    Last,
    /// Final byte after `EF BF`, or of a four-byte sequence ending a plane:
    /// `BE`/`BF` would complete `U+nFFFE`/`U+nFFFF`.
    LastNotFffe,
    /// Final byte after `EF B7`: `90..=AF` would complete `U+FDD0..=U+FDEF`.
    LastNotFdd0,
    /// Two bytes left, `80..=BF` each.
    Penultimate,
    /// Third byte of a four-byte sequence in the last block of its plane.
    PenultimatePlaneEnd,
    /// Second byte after `E0`, `A0..=BF`.
    AfterE0,
    /// Second byte after `ED`, `80..=9F`.
    AfterEd,
    /// Second byte after `EF`.
    AfterEf,
    /// Second byte after `F0`, `90..=BF`.
    AfterF0,
    /// Second byte after `F1..=F3`.
    AfterF1F3,
    /// Second byte after `F4`, `80..=8F`.
    AfterF4,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Next(State),
    /// A code point was completed; expect a leading byte again.
    Done,
}

impl State {
    /// Third-byte state for a four-byte sequence whose second byte is `b`.
    fn four_byte_third(b: u8) -> State {
        if b & 0x0F == 0x0F {
            State::PenultimatePlaneEnd
        } else {
            State::Penultimate
        }
    }

    fn step(self, b: u8) -> Result<Step, Utf8Error> {
        use State::{
            AfterE0, AfterEd, AfterEf, AfterF0, AfterF1F3, AfterF4, Last, LastNotFdd0,
            LastNotFffe, Lead, Penultimate, PenultimatePlaneEnd,
        };
        use Step::{Done, Next};

        let next = match (self, b) {
            (Lead, 0x00) => return Err(Utf8Error::EmptyInput),
            (Lead, 0x01..=0x7F) => Done,
            (Lead, 0xC2..=0xDF) => Next(Last),
            (Lead, 0xE0) => Next(AfterE0),
            (Lead, 0xE1..=0xEC | 0xEE) => Next(Penultimate),
            (Lead, 0xED) => Next(AfterEd),
            (Lead, 0xEF) => Next(AfterEf),
            (Lead, 0xF0) => Next(AfterF0),
            (Lead, 0xF1..=0xF3) => Next(AfterF1F3),
            (Lead, 0xF4) => Next(AfterF4),
            (Lead, _) => return Err(Utf8Error::BadLeadingByte),

            (Last, 0x80..=0xBF) => Done,

            (LastNotFffe, 0xBE | 0xBF) => return Err(Utf8Error::NotCharacter),
            (LastNotFffe, 0x80..=0xBD) => Done,

            (LastNotFdd0, 0x90..=0xAF) => return Err(Utf8Error::NotCharacter),
            (LastNotFdd0, 0x80..=0x8F | 0xB0..=0xBF) => Done,

            (Penultimate, 0x80..=0xBF) => Next(Last),

            (PenultimatePlaneEnd, 0xBF) => Next(LastNotFffe),
            (PenultimatePlaneEnd, 0x80..=0xBE) => Next(Last),

            (AfterE0, 0x80..=0x9F) => return Err(Utf8Error::NonShortestForm),
            (AfterE0, 0xA0..=0xBF) => Next(Last),

            (AfterEd, 0x80..=0x9F) => Next(Last),
            (AfterEd, 0xA0..=0xBF) => return Err(Utf8Error::SurrogatePair),

            (AfterEf, 0xB7) => Next(LastNotFdd0),
            (AfterEf, 0xBF) => Next(LastNotFffe),
            (AfterEf, 0x80..=0xBF) => Next(Last),

            (AfterF0, 0x80..=0x8F) => return Err(Utf8Error::NonShortestForm),
            (AfterF0, 0x90..=0xBF) | (AfterF1F3, 0x80..=0xBF) | (AfterF4, 0x80..=0x8F) => {
                Next(State::four_byte_third(b))
            }

            (AfterF4, 0x90..=0xBF) => return Err(Utf8Error::TooBig),

            _ => return Err(Utf8Error::BadContinuationByte),
        };
        Ok(next)
    }
}

/// Outcome of validating one buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Validation {
    /// On success the buffer length; on failure the offset of the byte that
    /// failed, which counts the accepted bytes of a partial sequence.
    pub bytes_consumed: usize,
    /// Number of complete code points read.
    pub code_points_seen: usize,
    /// `Ok(())` if the whole buffer is valid, else the first failure.
    pub status: Result<(), Utf8Error>,
}

impl Validation {
    /// Whether the whole buffer was valid.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status.is_ok()
    }

    /// The integer status code: zero on success, negative on failure.
    #[must_use]
    pub const fn code(&self) -> i32 {
        match self.status {
            Ok(()) => crate::OK,
            Err(e) => e.code(),
        }
    }

    /// Converts into the number of code points, or the failure with the
    /// offset it occurred at.
    ///
    /// # Errors
    ///
    /// The first failure of the buffer, as a [`ValidationError`].
    pub fn into_result(self) -> Result<usize, ValidationError> {
        match self.status {
            Ok(()) => Ok(self.code_points_seen),
            Err(source) => Err(ValidationError {
                source,
                offset: self.bytes_consumed,
                code_points: self.code_points_seen,
            }),
        }
    }
}

fn failed(input: &[u8], offset: usize, code_points: usize, err: Utf8Error) -> Validation {
    let window = &input[offset.saturating_sub(3)..input.len().min(offset + 1)];
    log::debug!(
        "invalid UTF-8 at byte {offset}: {err} (near {:?})",
        window.as_bstr()
    );
    Validation {
        bytes_consumed: offset,
        code_points_seen: code_points,
        status: Err(err),
    }
}

/// Validates `input[..]` byte by byte.
#[must_use]
pub fn validate(input: &[u8]) -> Validation {
    let mut state = State::Lead;
    let mut code_points = 0;

    for (i, &b) in input.iter().enumerate() {
        match state.step(b) {
            Ok(Step::Next(next)) => state = next,
            Ok(Step::Done) => {
                code_points += 1;
                state = State::Lead;
            }
            Err(err) => return failed(input, i, code_points, err),
        }
    }

    if state != State::Lead {
        return failed(input, input.len(), code_points, Utf8Error::BadContinuationByte);
    }

    Validation {
        bytes_consumed: input.len(),
        code_points_seen: code_points,
        status: Ok(()),
    }
}

/// Whether `input` is entirely valid.
#[inline]
#[must_use]
pub fn is_valid_utf8(input: &[u8]) -> bool {
    validate(input).is_ok()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{Validation, is_valid_utf8, validate};
    use crate::{Utf8Error, ValidationError};

    fn ok(bytes: usize, code_points: usize) -> Validation {
        Validation {
            bytes_consumed: bytes,
            code_points_seen: code_points,
            status: Ok(()),
        }
    }

    fn err(bytes: usize, code_points: usize, e: Utf8Error) -> Validation {
        Validation {
            bytes_consumed: bytes,
            code_points_seen: code_points,
            status: Err(e),
        }
    }

    #[test]
    fn empty_buffer_is_valid() {
        assert_eq!(validate(b""), ok(0, 0));
    }

    #[test]
    fn mixed_widths() {
        let s = "aé€😀";
        assert_eq!(validate(s.as_bytes()), ok(10, 4));
    }

    #[rstest]
    #[case(&[0xE0, 0xA0, 0x80])]
    #[case(&[0xED, 0x9F, 0xBF])]
    #[case(&[0xEE, 0x80, 0x80])]
    #[case(&[0xEF, 0xB7, 0x8F])]
    #[case(&[0xEF, 0xB7, 0xB0])]
    #[case(&[0xEF, 0xBF, 0xBD])]
    #[case(&[0xEF, 0xBE, 0xBF])]
    #[case(&[0xF0, 0x90, 0x80, 0x80])]
    #[case(&[0xF0, 0x9F, 0xB7, 0x90])]
    #[case(&[0xF0, 0x9F, 0xBF, 0xBD])]
    #[case(&[0xF3, 0xBF, 0xBF, 0xBD])]
    #[case(&[0xF4, 0x8F, 0xBF, 0xBD])]
    fn accepts_edge_sequences(#[case] input: &[u8]) {
        assert_eq!(validate(input), ok(input.len(), 1));
    }

    #[rstest]
    #[case(&[0x41, 0x00, 0x41], err(1, 1, Utf8Error::EmptyInput))]
    #[case(&[0x80], err(0, 0, Utf8Error::BadLeadingByte))]
    #[case(&[0x41, 0xC0, 0x80], err(1, 1, Utf8Error::BadLeadingByte))]
    #[case(&[0xC1, 0xBF], err(0, 0, Utf8Error::BadLeadingByte))]
    #[case(&[0xF5, 0x80, 0x80, 0x80], err(0, 0, Utf8Error::BadLeadingByte))]
    #[case(&[0xFE], err(0, 0, Utf8Error::BadLeadingByte))]
    #[case(&[0xC2, 0x41], err(1, 0, Utf8Error::BadContinuationByte))]
    #[case(&[0xE0, 0x9F, 0x80], err(1, 0, Utf8Error::NonShortestForm))]
    #[case(&[0xE0, 0xC0, 0x80], err(1, 0, Utf8Error::BadContinuationByte))]
    #[case(&[0xED, 0xA0, 0x80], err(1, 0, Utf8Error::SurrogatePair))]
    #[case(&[0xED, 0xBF, 0xBF], err(1, 0, Utf8Error::SurrogatePair))]
    #[case(&[0xEF, 0xBF, 0xBE], err(2, 0, Utf8Error::NotCharacter))]
    #[case(&[0xEF, 0xBF, 0xBF], err(2, 0, Utf8Error::NotCharacter))]
    #[case(&[0xEF, 0xB7, 0x90], err(2, 0, Utf8Error::NotCharacter))]
    #[case(&[0xEF, 0xB7, 0xAF], err(2, 0, Utf8Error::NotCharacter))]
    #[case(&[0xEF, 0xB7, 0xC0], err(2, 0, Utf8Error::BadContinuationByte))]
    #[case(&[0xF0, 0x8F, 0x80, 0x80], err(1, 0, Utf8Error::NonShortestForm))]
    #[case(&[0xF4, 0x90, 0x80, 0x80], err(1, 0, Utf8Error::TooBig))]
    #[case(&[0xF4, 0x8F, 0xBF, 0xBF], err(3, 0, Utf8Error::NotCharacter))]
    #[case(&[0xF1, 0x8F, 0xBF, 0xBE], err(3, 0, Utf8Error::NotCharacter))]
    #[case(&[0xF1, 0x8F, 0xBF, 0x7F], err(3, 0, Utf8Error::BadContinuationByte))]
    fn rejects(#[case] input: &[u8], #[case] expected: Validation) {
        assert_eq!(validate(input), expected);
    }

    #[rstest]
    #[case(&[0xC2])]
    #[case(&[0x41, 0xE2, 0x82])]
    #[case(&[0x41, 0x42, 0xF0, 0x9F, 0x98])]
    fn truncated_tail_fails_without_overread(#[case] input: &[u8]) {
        let v = validate(input);
        assert_eq!(v.status, Err(Utf8Error::BadContinuationByte));
        assert_eq!(v.bytes_consumed, input.len());
    }

    #[test]
    fn into_result_reports_offset() {
        assert_eq!(validate("abc".as_bytes()).into_result(), Ok(3));
        assert_eq!(
            validate(&[b'a', b'b', 0xFF]).into_result(),
            Err(ValidationError {
                source: Utf8Error::BadLeadingByte,
                offset: 2,
                code_points: 2,
            })
        );
    }

    #[test]
    fn codes() {
        assert_eq!(validate(b"ok").code(), 0);
        assert_eq!(validate(&[0x80]).code(), Utf8Error::BadLeadingByte.code());
        assert!(is_valid_utf8("Größe".as_bytes()));
        assert!(!is_valid_utf8(&[0xC0, 0x80]));
    }
}
