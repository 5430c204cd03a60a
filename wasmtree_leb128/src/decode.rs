use num::{BigInt, BigUint, One, Zero};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("unexpected end of input after {consumed} byte(s), continuation bit still set")]
    UnexpectedEnd { consumed: usize },
}

/// Reads one unsigned LEB128 value from the front of `bytes`, returning it
/// together with the number of bytes it occupied.
pub fn decode_unsigned(bytes: &[u8]) -> Result<(BigUint, usize), DecodeError> {
    let mut result = BigUint::zero();
    let mut shift = 0usize;
    for (i, b) in bytes.iter().enumerate() {
        result |= BigUint::from(b & 0x7f) << shift;
        shift += 7;
        if b & 0x80 == 0 {
            return Ok((result, i + 1));
        }
    }
    Err(DecodeError::UnexpectedEnd {
        consumed: bytes.len(),
    })
}

/// Signed counterpart of [`decode_unsigned`]. The bit below the continuation
/// bit of the last byte is the sign bit.
pub fn decode_signed(bytes: &[u8]) -> Result<(BigInt, usize), DecodeError> {
    let mut result = BigInt::zero();
    let mut shift = 0usize;
    for (i, b) in bytes.iter().enumerate() {
        result += BigInt::from(b & 0x7f) << shift;
        shift += 7;
        if b & 0x80 == 0 {
            if b & 0x40 != 0 {
                result -= BigInt::one() << shift;
            }
            return Ok((result, i + 1));
        }
    }
    Err(DecodeError::UnexpectedEnd {
        consumed: bytes.len(),
    })
}
