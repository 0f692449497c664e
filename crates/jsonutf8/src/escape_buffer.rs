//! Incremental decoding of the four hex digits of a `\uXXXX` escape.
//!
//! The [`EscapeBuffer`] type accumulates exactly four ASCII hexadecimal
//! digits (`0-9`, `A-F`, `a-f`) into a UTF-16 code unit as they arrive. After
//! the fourth digit the code unit is returned and the accumulator resets to
//! begin a new escape.
//!
//! The buffer does not judge the code unit: surrogate halves and
//! noncharacters come out as-is, and pairing or rejecting them is up to the
//! caller.
//!
//! # Errors
//!
//! Feeding a byte that is not an ASCII hex digit returns
//! [`Utf8Error::MalformedEscape`] and resets the buffer.

use crate::Utf8Error;

/// Accumulates four hexadecimal digits into one UTF-16 code unit.
#[derive(Debug, Default, Clone, Copy)]
pub struct EscapeBuffer {
    acc: u16,
    len: u8,
}

impl EscapeBuffer {
    /// Creates a new, empty `EscapeBuffer`.
    #[must_use]
    pub const fn new() -> Self {
        Self { acc: 0, len: 0 }
    }

    /// Clears any accumulated digits.
    pub fn reset(&mut self) {
        self.acc = 0;
        self.len = 0;
    }

    /// Number of digits accumulated so far.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Whether no digit has been fed since the last reset.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Convert a single ASCII hex digit into its 0..=15 value.
    #[inline]
    pub(crate) const fn hex_val(b: u8) -> Option<u16> {
        match b {
            b'0'..=b'9' => Some((b - b'0') as u16),
            b'a'..=b'f' => Some((b - b'a') as u16 + 10),
            b'A'..=b'F' => Some((b - b'A') as u16 + 10),
            _ => None,
        }
    }

    /// Feeds one byte of escape text.
    ///
    /// - Returns `Ok(None)` while fewer than four digits have been provided.
    /// - Returns `Ok(Some(unit))` on the fourth digit and resets the buffer.
    ///
    /// # Errors
    ///
    /// [`Utf8Error::MalformedEscape`] if `b` is not an ASCII hex digit.
    pub fn feed(&mut self, b: u8) -> Result<Option<u16>, Utf8Error> {
        let Some(d) = Self::hex_val(b) else {
            log::debug!("escape digit {:?} is not hexadecimal", char::from(b));
            self.reset();
            return Err(Utf8Error::MalformedEscape);
        };

        debug_assert!(self.len < 4);
        self.acc = (self.acc << 4) | d;
        self.len += 1;

        if self.len < 4 {
            return Ok(None);
        }

        let unit = self.acc;
        self.reset();
        Ok(Some(unit))
    }
}
