//! # Primitive Opcode Definitions
//!
//! The target machine understands exactly eight opcodes, each written as a
//! single ASCII character. Every other character in primitive source text is
//! commentary and is removed by [`crate::distill`] before a program is built.
//!
//! ## Opcode Table
//!
//! | char | opcode       | effect                                          |
//! |------|--------------|-------------------------------------------------|
//! | `+`  | `Increment`  | current cell += 1 (mod 256)                     |
//! | `-`  | `Decrement`  | current cell -= 1 (mod 256)                     |
//! | `<`  | `MoveLeft`   | pointer -= 1                                    |
//! | `>`  | `MoveRight`  | pointer += 1                                    |
//! | `[`  | `LoopOpen`   | jump past the matching `]` if current cell is 0 |
//! | `]`  | `LoopClose`  | jump back to the matching `[`                   |
//! | `,`  | `Input`      | read one byte, 0 once input is exhausted        |
//! | `.`  | `Output`     | write the current cell as one byte              |

use serde::{Deserialize, Serialize};
use std::fmt;

/// Primitive machine opcode
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Opcode {
    /// `+`: cell = cell + 1 (mod 256)
    Increment = b'+',
    /// `-`: cell = cell - 1 (mod 256)
    Decrement = b'-',
    /// `<`: pointer = pointer - 1
    MoveLeft = b'<',
    /// `>`: pointer = pointer + 1
    MoveRight = b'>',
    /// `[`: if cell == 0, continue after the matching `]`
    LoopOpen = b'[',
    /// `]`: continue at the matching `[`
    LoopClose = b']',
    /// `,`: cell = next input byte, or 0
    Input = b',',
    /// `.`: emit cell
    Output = b'.',
}

impl Opcode {
    /// All opcodes, in table order
    pub const ALL: [Opcode; 8] = [
        Opcode::Increment,
        Opcode::Decrement,
        Opcode::MoveLeft,
        Opcode::MoveRight,
        Opcode::LoopOpen,
        Opcode::LoopClose,
        Opcode::Input,
        Opcode::Output,
    ];

    /// Decode an opcode from its source character
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Opcode::Increment),
            '-' => Some(Opcode::Decrement),
            '<' => Some(Opcode::MoveLeft),
            '>' => Some(Opcode::MoveRight),
            '[' => Some(Opcode::LoopOpen),
            ']' => Some(Opcode::LoopClose),
            ',' => Some(Opcode::Input),
            '.' => Some(Opcode::Output),
            _ => None,
        }
    }

    /// Source character of this opcode
    #[inline]
    pub const fn to_char(self) -> char {
        self as u8 as char
    }

    /// Is this a bracket opcode?
    #[inline]
    pub const fn is_bracket(self) -> bool {
        matches!(self, Opcode::LoopOpen | Opcode::LoopClose)
    }

    /// The opcode that undoes this one when placed directly after it.
    ///
    /// Only cell arithmetic and pointer moves have inverses; brackets and
    /// I/O never cancel.
    pub const fn inverse(self) -> Option<Self> {
        match self {
            Opcode::Increment => Some(Opcode::Decrement),
            Opcode::Decrement => Some(Opcode::Increment),
            Opcode::MoveLeft => Some(Opcode::MoveRight),
            Opcode::MoveRight => Some(Opcode::MoveLeft),
            _ => None,
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl TryFrom<char> for Opcode {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Opcode::from_char(c).ok_or(c)
    }
}
