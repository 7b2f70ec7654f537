//! Peephole minification
//!
//! Removes adjacent `+-`, `-+`, `<>` and `><` pairs until none remain.
//! Cancelling one pair can bring another together (`+<>-`), so a single
//! left-to-right pass keeps the survivors on a stack and pops whenever the
//! next opcode undoes the top.

use infinifuck_spec::{distill, Fragment, Opcode};

/// Cancel every adjacent inverse pair
pub fn minify(fragment: &Fragment) -> Fragment {
    let mut kept: Vec<Opcode> = Vec::with_capacity(fragment.len());
    for &op in fragment.opcodes() {
        match kept.last() {
            Some(&top) if op.inverse() == Some(top) => {
                kept.pop();
            }
            _ => kept.push(op),
        }
    }
    Fragment::from_opcodes(kept)
}

/// Distill primitive source text and minify it
pub fn minify_source(source: &str) -> Fragment {
    minify(&distill(source))
}
