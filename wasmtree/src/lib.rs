//! Encoder from an in-memory WebAssembly module tree to the binary format.
//!
//! The tree mirrors the binary grammar: [`Module`] holds [`Section`]s in the
//! order they are emitted, code bodies hold [`Instr`] trees, and every node
//! implements [`Encode`]. [`encode`] turns a module into its byte image.

mod config;
mod encode;
mod error;
mod instr;
mod names;
mod structure;

pub use config::*;
pub use encode::{encode, Encode, Encoder, MAGIC_NUMBER, VERSION};
pub use error::*;
pub use instr::*;
pub use names::*;
pub use structure::*;

