//! # infinifuck Specification
//!
//! Core definitions shared by the runtime and the assembler.
//!
//! ## Key Features
//! - The eight primitive opcodes of the target tape machine
//! - Fragments (free opcode sequences) and programs (bracket-balanced, with
//!   a resolved jump table)
//! - The triplet encoding of unbounded base-256 integers on a byte tape,
//!   and a decoder that checks its invariants

pub mod opcode;
pub mod program;
pub mod encoding;
pub mod error;

pub use opcode::Opcode;
pub use program::{distill, Fragment, Program, COMMENT_MARKER};
pub use encoding::{
    digits_of, CellReader, Integer, Layout, Triplet, DATA, DIGIT_BASE, FLAG, PREAMBLE_MARGIN,
    TRIPLET_WIDTH, X,
};
pub use error::{Result, SpecError};
