//! Tape subsystem
//!
//! A byte tape unbounded in both directions. Cells at or right of index 0
//! live in one buffer, cells left of 0 in another (index -1 first), so
//! negative indices never need a hash map. Cells that were never written
//! read as 0.

use infinifuck_spec::{CellReader, Integer, Layout, SpecError};

#[derive(Debug, Clone, Default)]
pub struct Tape {
    /// Cells 0, 1, 2, ...
    right: Vec<u8>,
    /// Cells -1, -2, -3, ...
    left: Vec<u8>,
    pointer: i64,
}

impl Tape {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tape holding `cells` from index `start` onward
    pub fn from_cells(start: i64, cells: &[u8], pointer: i64) -> Self {
        let mut tape = Tape::new();
        for (offset, &value) in cells.iter().enumerate() {
            tape.set(start + offset as i64, value);
        }
        tape.pointer = pointer;
        tape
    }

    /// Integers laid out from index 0, one spacing triplet apart, with the
    /// pointer on the flag of integer number `active`
    pub fn from_values(values: &[u128], active: usize) -> Self {
        let mut tape = Tape::new();
        let mut start = 0;
        for (i, &value) in values.iter().enumerate() {
            let integer = Integer::from_value(start, value);
            if i == active {
                tape.pointer = start;
            }
            start = integer.next_start();
            tape.write_integer(&integer);
        }
        tape
    }

    /// Write an integer's digit chain and trailing spacing triplet
    pub fn write_integer(&mut self, integer: &Integer) {
        for (offset, value) in integer.cells().into_iter().enumerate() {
            self.set(integer.start + offset as i64, value);
        }
    }

    #[inline]
    pub fn get(&self, index: i64) -> u8 {
        if index >= 0 {
            self.right.get(index as usize).copied().unwrap_or(0)
        } else {
            self.left.get((-index - 1) as usize).copied().unwrap_or(0)
        }
    }

    pub fn set(&mut self, index: i64, value: u8) {
        let (side, slot) = if index >= 0 {
            (&mut self.right, index as usize)
        } else {
            (&mut self.left, (-index - 1) as usize)
        };
        if slot >= side.len() {
            side.resize(slot + 1, 0);
        }
        side[slot] = value;
    }

    #[inline]
    pub fn pointer(&self) -> i64 {
        self.pointer
    }

    #[inline]
    pub fn set_pointer(&mut self, pointer: i64) {
        self.pointer = pointer;
    }

    #[inline]
    pub fn current(&self) -> u8 {
        self.get(self.pointer)
    }

    #[inline]
    pub fn set_current(&mut self, value: u8) {
        self.set(self.pointer, value);
    }

    #[inline]
    pub fn increment(&mut self) {
        self.set_current(self.current().wrapping_add(1));
    }

    #[inline]
    pub fn decrement(&mut self) {
        self.set_current(self.current().wrapping_sub(1));
    }

    #[inline]
    pub fn move_left(&mut self) {
        self.pointer -= 1;
    }

    #[inline]
    pub fn move_right(&mut self) {
        self.pointer += 1;
    }

    /// Lowest and highest index ever written, if any
    pub fn populated(&self) -> Option<(i64, i64)> {
        if self.left.is_empty() && self.right.is_empty() {
            return None;
        }
        let lo = if self.left.is_empty() {
            0
        } else {
            -(self.left.len() as i64)
        };
        let hi = self.right.len() as i64 - 1;
        Some((lo, hi))
    }

    /// Inclusive index range covering index 0, the pointer, and every
    /// populated cell
    pub fn extent(&self) -> (i64, i64) {
        let (lo, hi) = self.populated().unwrap_or((0, 0));
        (lo.min(0).min(self.pointer), hi.max(0).max(self.pointer))
    }

    /// Decode the integer layout around the pointer
    pub fn layout(&self) -> Result<Layout, SpecError> {
        Layout::decode(self)
    }
}

impl CellReader for Tape {
    fn cell(&self, index: i64) -> u8 {
        self.get(index)
    }

    fn pointer(&self) -> i64 {
        self.pointer
    }

    fn populated(&self) -> Option<(i64, i64)> {
        Tape::populated(self)
    }
}

/// Tapes are equal when their pointers match and every cell matches,
/// treating unset cells as 0
impl PartialEq for Tape {
    fn eq(&self, other: &Self) -> bool {
        if self.pointer != other.pointer {
            return false;
        }
        let (lo_a, hi_a) = self.extent();
        let (lo_b, hi_b) = other.extent();
        (lo_a.min(lo_b)..=hi_a.max(hi_b)).all(|index| self.get(index) == other.get(index))
    }
}

impl Eq for Tape {}
