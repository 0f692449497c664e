//! UTF-8 to code point, one sequence at a time.
//!
//! [`decode`] checks everything it reads. [`decode_unchecked`] trusts the
//! leading byte and is meant for input that already passed
//! [`validate`](crate::validate); on other input it returns a wrong value but
//! still never reads past the sequence length the leading byte declares.

use crate::{
    Utf8Error,
    classify::{is_continuation, sequence_len},
    encode::{is_noncharacter, is_surrogate},
};

/// Reassembles the payload bits of a sequence whose length is `seq.len()`.
#[inline]
fn assemble(seq: &[u8]) -> u32 {
    let lead = u32::from(seq[0]);
    let init = match seq.len() {
        1 => return lead,
        2 => lead & 0x1F,
        3 => lead & 0x0F,
        _ => lead & 0x07,
    };
    seq[1..]
        .iter()
        .fold(init, |acc, &b| (acc << 6) | u32::from(b & 0x3F))
}

/// Decodes the sequence at the start of `input`, checking every byte.
///
/// Returns the code point and the number of bytes it occupied.
///
/// # Errors
///
/// - [`Utf8Error::EmptyInput`] if `input` is empty or starts with a zero byte.
/// - [`Utf8Error::BadLeadingByte`] if the first byte cannot start a sequence.
/// - [`Utf8Error::BadContinuationByte`] if a following byte is not
///   `10xxxxxx`, or the slice ends before the sequence does.
/// - [`Utf8Error::NonShortestForm`] for overlong three- and four-byte forms.
/// - [`Utf8Error::TooBig`] above `U+10FFFF`.
/// - [`Utf8Error::SurrogatePair`] for encoded surrogates.
/// - [`Utf8Error::NotCharacter`] for noncharacters.
pub fn decode(input: &[u8]) -> Result<(u32, usize), Utf8Error> {
    let lead = match input.first() {
        None | Some(0) => return Err(Utf8Error::EmptyInput),
        Some(&b) => b,
    };
    let len = sequence_len(lead)?;
    if len == 1 {
        return Ok((u32::from(lead), 1));
    }

    let seq = input.get(..len).ok_or(Utf8Error::BadContinuationByte)?;
    if !seq[1..].iter().all(|&b| is_continuation(b)) {
        return Err(Utf8Error::BadContinuationByte);
    }
    match (lead, seq[1]) {
        (0xE0, 0x80..=0x9F) | (0xF0, 0x80..=0x8F) => return Err(Utf8Error::NonShortestForm),
        (0xF4, 0x90..) => return Err(Utf8Error::TooBig),
        _ => {}
    }

    let value = assemble(seq);
    if is_surrogate(value) {
        return Err(Utf8Error::SurrogatePair);
    }
    if is_noncharacter(value) {
        return Err(Utf8Error::NotCharacter);
    }
    Ok((value, len))
}

/// Decodes the sequence at the start of `input` from its leading byte alone.
///
/// Continuation bytes are not inspected, so the result is only meaningful
/// for validated input. A zero byte decodes as `U+0000`.
///
/// # Errors
///
/// - [`Utf8Error::EmptyInput`] if `input` is empty.
/// - [`Utf8Error::BadLeadingByte`] if the first byte cannot start a sequence.
/// - [`Utf8Error::BadContinuationByte`] if the slice is shorter than the
///   declared sequence length.
pub fn decode_unchecked(input: &[u8]) -> Result<(u32, usize), Utf8Error> {
    let &lead = input.first().ok_or(Utf8Error::EmptyInput)?;
    let len = sequence_len(lead)?;
    let seq = input.get(..len).ok_or(Utf8Error::BadContinuationByte)?;
    Ok((assemble(seq), len))
}
