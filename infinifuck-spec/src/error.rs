//! # Error Types for infinifuck

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecError {
    // Program structure errors
    #[error("Unbalanced brackets: `]` at position {position} has no matching `[`")]
    UnmatchedClose { position: usize },

    #[error("Unbalanced brackets: `[` at position {position} is never closed")]
    UnclosedOpen { position: usize },

    // Tape layout errors
    #[error("Malformed triplet at index {index}: [{}, {}, {}]", cells[0], cells[1], cells[2])]
    MalformedTriplet { index: i64, cells: [u8; 3] },

    #[error("Pointer at index {pointer} is not on the leftmost flag of an integer")]
    PointerNotOnInteger { pointer: i64 },

    #[error("Gap of {spacing} spacing triplets before the integer at index {index}")]
    IntegerGap { index: i64, spacing: usize },
}

impl SpecError {
    /// Is this an error in program text rather than in tape contents?
    pub fn is_program_error(&self) -> bool {
        matches!(
            self,
            SpecError::UnmatchedClose { .. } | SpecError::UnclosedOpen { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, SpecError>;
