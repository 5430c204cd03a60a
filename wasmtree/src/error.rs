use crate::structure::IntKind;
use num::BigInt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, EncodeError>;

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("value {value} is out of range for {kind}")]
    OutOfRange { kind: IntKind, value: BigInt },

    #[error("block result type has {0} value types, at most one is allowed")]
    MultiValueResult(usize),

    #[error("length {0} does not fit in a u32 length field")]
    LengthOverflow(usize),
}
