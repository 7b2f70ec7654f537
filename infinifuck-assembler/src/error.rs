//! Assembler errors

use infinifuck_spec::SpecError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssemblerError {
    #[error("Syntax error at line {line}, column {column}: {message}")]
    SyntaxError {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Program error: {0}")]
    ProgramError(#[from] SpecError),
}

pub type Result<T> = std::result::Result<T, AssemblerError>;
