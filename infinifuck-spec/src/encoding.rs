//! # Integer Tape Encoding
//!
//! Unbounded integers live on the byte tape as chains of three-cell
//! *triplets*, aligned to the flag cell of the active integer.
//!
//! ```text
//!   ( ( flag x data )*N  a b c )*K
//!     ^^^^^^^^^^^^^^^^   ^^^^^
//!       digit triplet    spacing triplet
//!     ^^^^^^^^^^^^^^^^^^^^^^^^^
//!              one integer
//! ```
//!
//! - digit triplet: `flag = 1`, `x = 0`, `data` holds one base-256 digit
//! - spacing triplet: `a = b = c = 0`, ends a chain
//! - the leftmost digit is the least significant
//! - integers are separated by exactly one spacing triplet
//!
//! Every operation expects and restores: the pointer on the leftmost `flag`
//! of some integer, and every triplet well formed. Operations are free to
//! break the format while they run.

use crate::error::{Result, SpecError};

/// Cells per triplet
pub const TRIPLET_WIDTH: i64 = 3;

/// Offset of the `flag` (or `a`) cell within a triplet
pub const FLAG: i64 = 0;

/// Offset of the `x` (or `b`) scratch cell within a triplet
pub const X: i64 = 1;

/// Offset of the `data` (or `c`) cell within a triplet
pub const DATA: i64 = 2;

/// Radix of one digit
pub const DIGIT_BASE: u32 = 256;

/// Cells the preamble reserves to the left of the first integer
pub const PREAMBLE_MARGIN: i64 = TRIPLET_WIDTH;

/// Read access to a tape, enough to decode its integer layout
pub trait CellReader {
    /// Value at `index`; unset cells read as 0
    fn cell(&self, index: i64) -> u8;

    /// Current pointer index
    fn pointer(&self) -> i64;

    /// Lowest and highest populated index, if any
    fn populated(&self) -> Option<(i64, i64)>;

    /// The three cells starting at `base`
    fn triplet(&self, base: i64) -> [u8; 3] {
        [
            self.cell(base + FLAG),
            self.cell(base + X),
            self.cell(base + DATA),
        ]
    }
}

/// A well-formed triplet
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Triplet {
    Digit(u8),
    Spacing,
}

impl Triplet {
    /// Classify three cells; `None` if they are neither a digit nor spacing
    pub fn classify(cells: [u8; 3]) -> Option<Self> {
        match cells {
            [1, 0, data] => Some(Triplet::Digit(data)),
            [0, 0, 0] => Some(Triplet::Spacing),
            _ => None,
        }
    }

    pub fn cells(self) -> [u8; 3] {
        match self {
            Triplet::Digit(data) => [1, 0, data],
            Triplet::Spacing => [0, 0, 0],
        }
    }
}

/// Little-endian base-256 digits of `value`, never empty
pub fn digits_of(mut value: u128) -> Vec<u8> {
    let mut digits = vec![(value & 0xFF) as u8];
    value >>= 8;
    while value != 0 {
        digits.push((value & 0xFF) as u8);
        value >>= 8;
    }
    digits
}

/// One integer decoded from (or destined for) the tape
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Integer {
    /// Index of the leftmost `flag` cell
    pub start: i64,
    /// Digits, least significant first
    pub digits: Vec<u8>,
}

impl Integer {
    pub fn new(start: i64, digits: Vec<u8>) -> Self {
        debug_assert!(!digits.is_empty(), "an integer has at least one digit");
        Integer { start, digits }
    }

    /// Integer with the shortest digit chain holding `value`
    pub fn from_value(start: i64, value: u128) -> Self {
        Integer::new(start, digits_of(value))
    }

    /// Number of digit triplets
    #[inline]
    pub fn width(&self) -> usize {
        self.digits.len()
    }

    /// Index of the trailing spacing triplet
    #[inline]
    pub fn end(&self) -> i64 {
        self.start + self.digits.len() as i64 * TRIPLET_WIDTH
    }

    /// Index of the next integer's flag under the one-spacing-triplet rule
    #[inline]
    pub fn next_start(&self) -> i64 {
        self.end() + TRIPLET_WIDTH
    }

    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|&d| d == 0)
    }

    /// The only byte observable through output
    #[inline]
    pub fn low_byte(&self) -> u8 {
        self.digits[0]
    }

    /// Numeric value, if it fits in 128 bits
    pub fn to_u128(&self) -> Option<u128> {
        self.digits.iter().rev().try_fold(0u128, |acc, &d| {
            acc.checked_mul(DIGIT_BASE as u128)
                .map(|shifted| shifted | d as u128)
        })
    }

    /// Cells of the digit chain followed by its spacing triplet
    pub fn cells(&self) -> Vec<u8> {
        self.digits
            .iter()
            .map(|&d| Triplet::Digit(d))
            .chain(std::iter::once(Triplet::Spacing))
            .flat_map(Triplet::cells)
            .collect()
    }
}

/// The integers on a tape and which one is active
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    integers: Vec<Integer>,
    active: usize,
}

impl Layout {
    /// Decode every integer on the tape, checking the format invariants.
    ///
    /// Triplets are aligned to the pointer. Zero triplets before the first
    /// integer and after the last one are free space.
    pub fn decode<T: CellReader + ?Sized>(tape: &T) -> Result<Self> {
        let pointer = tape.pointer();
        let (lo, hi) = tape
            .populated()
            .ok_or(SpecError::PointerNotOnInteger { pointer })?;

        let mut base = lo - (lo - pointer).rem_euclid(TRIPLET_WIDTH);
        let mut integers: Vec<Integer> = Vec::new();
        let mut current: Option<Integer> = None;
        let mut spacing = 0usize;

        while base <= hi {
            let cells = tape.triplet(base);
            match Triplet::classify(cells) {
                Some(Triplet::Digit(data)) => match current.as_mut() {
                    Some(integer) => integer.digits.push(data),
                    None => {
                        if !integers.is_empty() && spacing != 1 {
                            return Err(SpecError::IntegerGap {
                                index: base,
                                spacing,
                            });
                        }
                        current = Some(Integer::new(base, vec![data]));
                    }
                },
                Some(Triplet::Spacing) => {
                    if let Some(integer) = current.take() {
                        integers.push(integer);
                        spacing = 0;
                    }
                    spacing += 1;
                }
                None => return Err(SpecError::MalformedTriplet { index: base, cells }),
            }
            base += TRIPLET_WIDTH;
        }
        integers.extend(current);

        let active = integers
            .iter()
            .position(|integer| integer.start == pointer)
            .ok_or(SpecError::PointerNotOnInteger { pointer })?;

        Ok(Layout { integers, active })
    }

    pub fn integers(&self) -> &[Integer] {
        &self.integers
    }

    /// The integer under the pointer
    pub fn active(&self) -> &Integer {
        &self.integers[self.active]
    }

    /// Position of the active integer among all integers
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Values of all integers, left to right
    pub fn values(&self) -> Vec<Option<u128>> {
        self.integers.iter().map(Integer::to_u128).collect()
    }
}
