//! # Tape Notation
//!
//! Fixture syntax for tapes:
//!
//! ```text
//! 1 2 | 3 [4] 5 6
//! ```
//!
//! Values are whitespace-separated bytes. The value right after `|` sits at
//! index 0 (without a bar, the first value does); values before the bar get
//! negative indices. The single bracketed value marks the pointer (without
//! one, the pointer is at 0).
//!
//! [`pretty`] is a right inverse of [`parse`]: `parse(&pretty(t)) == t` for
//! every tape. It groups cells into triplets by padding before every index
//! divisible by 3.

use crate::error::NotationError;
use crate::tape::Tape;
use logos::Logos;
use std::fmt;
use std::str::FromStr;

/// Tokens of the tape notation
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"\s+")]
pub enum Token {
    /// Cell value (range checked by the parser)
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Number(String),

    /// Start of the pointer marker
    #[token("[")]
    Open,

    /// End of the pointer marker
    #[token("]")]
    Close,

    /// Index 0 marker
    #[token("|")]
    Bar,
}

/// Parse tape notation
pub fn parse(text: &str) -> Result<Tape, NotationError> {
    let mut lexer = Token::lexer(text);
    let mut values: Vec<u8> = Vec::new();
    let mut pointer_at: Option<usize> = None;
    let mut bar_at: Option<usize> = None;

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        match token {
            Ok(Token::Number(digits)) => values.push(parse_value(&digits, position)?),
            Ok(Token::Open) => {
                if pointer_at.is_some() {
                    return Err(NotationError::DuplicatePointer { position });
                }
                let value = match lexer.next() {
                    Some(Ok(Token::Number(digits))) => parse_value(&digits, lexer.span().start)?,
                    _ => return Err(NotationError::UnterminatedPointer { position }),
                };
                if lexer.next() != Some(Ok(Token::Close)) {
                    return Err(NotationError::UnterminatedPointer { position });
                }
                pointer_at = Some(values.len());
                values.push(value);
            }
            Ok(Token::Bar) => {
                if bar_at.is_some() {
                    return Err(NotationError::DuplicateBar { position });
                }
                bar_at = Some(values.len());
            }
            Ok(Token::Close) | Err(()) => {
                return Err(NotationError::UnexpectedToken {
                    token: lexer.slice().to_string(),
                    position,
                });
            }
        }
    }

    let offset = -(bar_at.unwrap_or(0) as i64);
    let pointer = pointer_at.map_or(0, |at| at as i64 + offset);
    Ok(Tape::from_cells(offset, &values, pointer))
}

fn parse_value(digits: &str, position: usize) -> Result<u8, NotationError> {
    digits
        .parse::<u8>()
        .map_err(|_| NotationError::ValueOutOfRange {
            value: digits.to_string(),
            position,
        })
}

/// Render a tape in notation form
pub fn pretty(tape: &Tape) -> String {
    let (lo, hi) = tape.extent();
    (lo..=hi)
        .map(|index| {
            let mut cell = tape.get(index).to_string();
            if index == tape.pointer() {
                cell = format!("[{}]", cell);
            }
            if index == 0 && lo < 0 {
                cell = format!("| {}", cell);
            }
            if index.rem_euclid(3) == 0 {
                cell = format!("  {}", cell);
            }
            cell
        })
        .collect::<Vec<_>>()
        .join(" ")
}

impl FromStr for Tape {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl fmt::Display for Tape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&pretty(self))
    }
}
