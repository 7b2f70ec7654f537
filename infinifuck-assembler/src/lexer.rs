//! # Lexer for infinifuck source
//!
//! Infinifuck shares its eight command characters with the primitive
//! machine. Everything else is commentary, and `#` comments out the rest of
//! a line.

use crate::operations::Operation;
use logos::Logos;

/// Tokens of infinifuck source
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[^+\-<>\[\].,#]+")] // Skip prose and whitespace
#[logos(skip r"#[^\n]*")] // Skip comments
pub enum Token {
    #[token(">")]
    Right,

    #[token("<")]
    Left,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("[")]
    Open,

    #[token("]")]
    Close,

    #[token(",")]
    Get,

    #[token(".")]
    Put,
}

impl Token {
    /// The library operation this command compiles to
    pub fn operation(self) -> Operation {
        match self {
            Token::Right => Operation::NavigateRight,
            Token::Left => Operation::NavigateLeft,
            Token::Plus => Operation::Increment,
            Token::Minus => Operation::Decrement,
            Token::Open => Operation::LoopOpen,
            Token::Close => Operation::LoopClose,
            Token::Get => Operation::Input,
            Token::Put => Operation::Output,
        }
    }
}
