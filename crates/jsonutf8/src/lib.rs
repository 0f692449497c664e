//! A strict UTF-8 codec for the string literals of JSON-like text formats.
//!
//! The crate converts between UTF-8 bytes and Unicode code points, validates
//! whole buffers, does UTF-16 surrogate-pair arithmetic, and measures the
//! UTF-8 length of `\uXXXX` escapes. Only shortest forms are accepted
//! (Unicode Corrigendum #1); surrogates, noncharacters and values above
//! `U+10FFFF` are rejected.
//!
//! Every operation is a pure function over caller-owned slices: nothing
//! allocates, blocks, or keeps state. Failures come back as [`Utf8Error`],
//! whose variants map one-to-one to the integer codes that [`describe`]
//! translates.
//!
//! ```rust
//! use jsonutf8::{Utf8Error, decode, encode, validate};
//!
//! let mut buf = [0u8; 4];
//! let n = encode(0x1F600, &mut buf).unwrap();
//! assert_eq!(decode(&buf[..n]), Ok((0x1F600, 4)));
//!
//! let v = validate(&[b'a', 0xED, 0xA0, 0x80]);
//! assert_eq!(v.status, Err(Utf8Error::SurrogatePair));
//! assert_eq!(v.bytes_consumed, 2);
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;
#[cfg(test)]
extern crate std;

mod classify;
mod count;
mod decode;
mod encode;
mod error;
mod escape;
mod escape_buffer;
mod resync;
mod surrogate;
mod validate;

#[cfg(test)]
mod tests;

pub use classify::{SEQUENCE_LEN, UTF8_MAX_LEN, is_continuation, sequence_len};
pub use count::{chars_to_byte_offset, count_chars, count_chars_fast};
pub use decode::{decode, decode_unchecked};
pub use encode::{
    NUL_TERMINATED_CAPACITY, UNICODE_MAX, Utf8Seq, encode, encode_escaped, encode_nul_terminated,
    encode_seq, is_noncharacter, is_surrogate,
};
pub use error::{OK, Utf8Error, ValidationError, describe};
pub use escape::{
    ESCAPE_LEN, EscapeDecoded, escape_to_utf8, escape_utf8_len, parse_escape, value_utf8_len,
};
pub use escape_buffer::EscapeBuffer;
pub use resync::resync;
pub use surrogate::{
    HALF_BASE, from_surrogates, is_high_surrogate, is_low_surrogate, surrogates_to_utf8,
    to_surrogates,
};
pub use validate::{Validation, is_valid_utf8, validate};
