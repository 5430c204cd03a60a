//! LEB128 variable-length integer codec.
//!
//! Unsigned values are written seven bits at a time, least significant group
//! first, with the high bit of every byte but the last set. Signed values use
//! the same layout over their two's complement representation and stop once
//! the remaining bits are pure sign extension of the last group.

mod decode;
mod encode;

pub use decode::*;
pub use encode::*;
