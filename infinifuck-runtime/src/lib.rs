//! # infinifuck Runtime
//!
//! Execute primitive programs on a byte tape.
//!
//! ## Features
//!
//! - **Tape**: unbounded in both directions, unset cells read as 0
//! - **Tape notation**: `1 2 | 3 [4] 5` fixture syntax with a pretty printer
//!   that parses back to the same tape
//! - **8 opcodes**: wrapping cell arithmetic, pointer moves, loops, byte I/O
//! - **Non-blocking input**: reading past the end yields 0
//! - **Step limit**: optional fuel bound for programs that may not halt
//!
//! ## Example
//!
//! ```rust
//! use infinifuck_runtime::{notation, VM, VMConfig};
//! use infinifuck_spec::Program;
//!
//! let program = Program::parse(",[.,]").unwrap();
//! let tape = notation::parse("[0]").unwrap();
//! let result = VM::new(program, tape, b"echo".to_vec(), VMConfig::default()).run();
//! assert_eq!(result.output, b"echo");
//! ```

pub mod error;
pub mod tape;
pub mod notation;
pub mod io;
pub mod state;
pub mod vm;

pub use error::{NotationError, Result, RuntimeError};
pub use tape::Tape;
pub use io::IOHandler;
pub use state::{HaltReason, VMState};
pub use vm::{ExecutionResult, VMConfig, VM};

/// Simple execution helper
///
/// Runs a program to completion with the default configuration.
pub fn run(program: &infinifuck_spec::Program, tape: Tape, input: &[u8]) -> ExecutionResult {
    VM::new(program.clone(), tape, input.to_vec(), VMConfig::default()).run()
}

/// Run primitive source text against a tape given in notation form
pub fn run_source(source: &str, tape: &str, input: &[u8]) -> Result<ExecutionResult> {
    let program = infinifuck_spec::Program::parse(source)?;
    let tape = notation::parse(tape)?;
    Ok(run(&program, tape, input))
}
