//! Leading-byte classification.
//!
//! [`SEQUENCE_LEN`] maps every byte value to the length of the UTF-8
//! sequence it starts, or zero when the byte can never start one:
//!
//! | Bytes       | Length |
//! |-------------|--------|
//! | `00..=7F`   | 1      |
//! | `80..=BF`   | 0 (continuation bytes) |
//! | `C0..=C1`   | 0 (only overlong two-byte forms) |
//! | `C2..=DF`   | 2      |
//! | `E0..=EF`   | 3      |
//! | `F0..=F4`   | 4      |
//! | `F5..=FF`   | 0 (beyond `U+10FFFF`) |

use crate::Utf8Error;

/// Longest UTF-8 sequence, in bytes.
pub const UTF8_MAX_LEN: usize = 4;

/// Sequence length started by each byte value, `0` for invalid leading bytes.
pub static SEQUENCE_LEN: [u8; 256] = build_table();

const fn build_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut b = 0usize;
    while b < 256 {
        table[b] = match b {
            0x00..=0x7F => 1,
            0xC2..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF4 => 4,
            _ => 0,
        };
        b += 1;
    }
    table
}

/// Length of the sequence a leading byte starts.
///
/// # Errors
///
/// [`Utf8Error::BadLeadingByte`] if `byte` cannot start a sequence.
#[inline]
pub fn sequence_len(byte: u8) -> Result<usize, Utf8Error> {
    match SEQUENCE_LEN[usize::from(byte)] {
        0 => Err(Utf8Error::BadLeadingByte),
        n => Ok(usize::from(n)),
    }
}

/// Whether `byte` has the `10xxxxxx` shape.
#[inline]
#[must_use]
pub const fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}
