//! infinifuck Assembler
//!
//! Compile infinifuck, whose cells hold unbounded integers, into programs
//! for the eight-opcode byte tape machine.
//!
//! Every infinifuck command maps to a fixed fragment from the operation
//! library. The fragments keep integers as base-256 digit chains on the
//! tape (see [`infinifuck_spec::encoding`]) and grow a chain, shifting its
//! right-hand neighbours, whenever a carry runs off its end.
//!
//! ## Example
//!
//! ```rust
//! use infinifuck_assembler::assemble;
//!
//! // Echo input until a NUL byte or end of input
//! let program = assemble(",[.,]").unwrap();
//! assert!(program.to_string().starts_with(">>>+"));
//! ```

pub mod error;
pub mod lexer;
pub mod operations;
pub mod peephole;
pub mod assembler;

pub use error::{AssemblerError, Result};
pub use assembler::{assemble, compile, parse_operations};
pub use operations::Operation;
pub use peephole::{minify, minify_source};
