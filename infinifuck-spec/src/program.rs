//! # Fragments and Programs
//!
//! A [`Fragment`] is any opcode sequence. Fragments concatenate freely, which
//! is how operation bodies are composed: the loop-open body is a nonzero test
//! followed by an unmatched `[`, so it can only ever be a fragment.
//!
//! A [`Program`] is a fragment whose brackets nest properly, paired with a
//! jump table resolved once at construction. Only programs can be executed.

use crate::error::{Result, SpecError};
use crate::opcode::Opcode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// Everything after this character on a line is commentary
pub const COMMENT_MARKER: char = '#';

/// Strip comments and every non-opcode character from primitive source text.
///
/// Comments are removed first, line by line, so a `#` line may freely
/// mention opcode characters.
pub fn distill(source: &str) -> Fragment {
    source
        .lines()
        .map(|line| line.split(COMMENT_MARKER).next().unwrap_or(""))
        .flat_map(str::chars)
        .filter_map(Opcode::from_char)
        .collect()
}

/// An opcode sequence with no structural guarantees
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fragment {
    code: Vec<Opcode>,
}

impl Fragment {
    /// Create an empty fragment
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an opcode vector
    pub fn from_opcodes(code: Vec<Opcode>) -> Self {
        Fragment { code }
    }

    /// Distill primitive source text into a fragment
    pub fn parse(source: &str) -> Self {
        distill(source)
    }

    /// Opcodes in order
    #[inline]
    pub fn opcodes(&self) -> &[Opcode] {
        &self.code
    }

    /// Number of opcodes
    #[inline]
    pub fn len(&self) -> usize {
        self.code.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    /// Append a single opcode
    pub fn push(&mut self, op: Opcode) {
        self.code.push(op);
    }

    /// Concatenate `other` after `self`
    pub fn then(mut self, other: &Fragment) -> Self {
        self.code.extend_from_slice(&other.code);
        self
    }

    /// Consume into the underlying opcode vector
    pub fn into_opcodes(self) -> Vec<Opcode> {
        self.code
    }

    /// Net bracket depth change (`[` minus `]`)
    pub fn bracket_balance(&self) -> isize {
        self.code.iter().fold(0, |depth, op| match op {
            Opcode::LoopOpen => depth + 1,
            Opcode::LoopClose => depth - 1,
            _ => depth,
        })
    }
}

impl Add<&Fragment> for Fragment {
    type Output = Fragment;

    fn add(self, rhs: &Fragment) -> Fragment {
        self.then(rhs)
    }
}

impl Add for Fragment {
    type Output = Fragment;

    fn add(self, rhs: Fragment) -> Fragment {
        self.then(&rhs)
    }
}

impl FromIterator<Opcode> for Fragment {
    fn from_iter<I: IntoIterator<Item = Opcode>>(iter: I) -> Self {
        Fragment {
            code: iter.into_iter().collect(),
        }
    }
}

impl Extend<Opcode> for Fragment {
    fn extend<I: IntoIterator<Item = Opcode>>(&mut self, iter: I) {
        self.code.extend(iter);
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for op in &self.code {
            write!(f, "{}", op)?;
        }
        Ok(())
    }
}

/// A bracket-balanced opcode sequence with its jump table
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Program {
    code: Vec<Opcode>,
    /// `jumps[i]` is the partner of the bracket at `i`; `i` itself otherwise
    jumps: Vec<usize>,
}

impl Program {
    /// Validate bracket structure and resolve the jump table
    pub fn new(fragment: Fragment) -> Result<Self> {
        let code = fragment.into_opcodes();
        let jumps = build_jump_table(&code)?;
        Ok(Program { code, jumps })
    }

    /// Distill and validate primitive source text
    pub fn parse(source: &str) -> Result<Self> {
        Program::new(distill(source))
    }

    #[inline]
    pub fn opcodes(&self) -> &[Opcode] {
        &self.code
    }

    #[inline]
    pub fn get(&self, ip: usize) -> Option<Opcode> {
        self.code.get(ip).copied()
    }

    /// Index of the bracket paired with the bracket at `ip`
    #[inline]
    pub fn partner(&self, ip: usize) -> usize {
        self.jumps[ip]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.code.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    /// Drop the jump table, keeping the opcodes
    pub fn into_fragment(self) -> Fragment {
        Fragment::from_opcodes(self.code)
    }
}

impl TryFrom<Fragment> for Program {
    type Error = SpecError;

    fn try_from(fragment: Fragment) -> Result<Self> {
        Program::new(fragment)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for op in &self.code {
            write!(f, "{}", op)?;
        }
        Ok(())
    }
}

/// Pair every `[` with its `]` using an explicit stack of pending opens
fn build_jump_table(code: &[Opcode]) -> Result<Vec<usize>> {
    let mut jumps: Vec<usize> = (0..code.len()).collect();
    let mut pending = Vec::new();

    for (ip, op) in code.iter().enumerate() {
        match op {
            Opcode::LoopOpen => pending.push(ip),
            Opcode::LoopClose => {
                let open = pending
                    .pop()
                    .ok_or(SpecError::UnmatchedClose { position: ip })?;
                jumps[open] = ip;
                jumps[ip] = open;
            }
            _ => {}
        }
    }

    if let Some(&open) = pending.last() {
        return Err(SpecError::UnclosedOpen { position: open });
    }

    Ok(jumps)
}
