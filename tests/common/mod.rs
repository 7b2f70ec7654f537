//! Shared conformance harness
//!
//! Runs a sequence of library operations on a tape given in notation form
//! and compares the resulting tape, output and leftmost pointer position
//! against expectations.

#![allow(dead_code)]

use infinifuck_assembler::Operation;
use infinifuck_runtime::{notation, ExecutionResult, Tape, VMConfig, VM};
use infinifuck_spec::{Fragment, Program};
use tracing_subscriber::EnvFilter;

/// Generous fuel so a broken fragment fails instead of hanging the suite
pub const MAX_STEPS: u64 = 50_000_000;

/// One fixture: run `ops` on `tape` with `input`, expect `want`
#[derive(Debug, Default)]
pub struct Case {
    pub ops: &'static [Operation],
    pub tape: &'static str,
    pub input: &'static str,
    pub want: &'static str,
    pub want_output: &'static str,
    /// The run must never move the pointer below index 0
    pub left_bounded: bool,
    /// Exact lowest pointer index the run must reach
    pub want_min_pointer: Option<i64>,
}

/// Install a test-friendly subscriber once; `RUST_LOG` picks the level
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Concatenate the fragments of `ops`
pub fn fragment_of(ops: &[Operation]) -> Fragment {
    ops.iter()
        .fold(Fragment::new(), |acc, op| acc + op.fragment())
}

/// Run a fragment to completion on a tape
pub fn run_fragment(fragment: Fragment, tape: Tape, input: &[u8]) -> ExecutionResult {
    init_tracing();
    let program = Program::new(fragment).expect("fragment is not bracket balanced");
    let result = VM::new(program, tape, input.to_vec(), VMConfig::with_max_steps(MAX_STEPS)).run();
    assert!(result.completed(), "run hit the step limit after {} steps", result.steps);
    result
}

/// Run operations to completion on a tape
pub fn run_ops(ops: &[Operation], tape: Tape, input: &[u8]) -> ExecutionResult {
    run_fragment(fragment_of(ops), tape, input)
}

/// Check one fixture, printing both tapes on mismatch
pub fn check(case: Case) {
    let tape = notation::parse(case.tape).expect("bad tape notation");
    check_entry(case.ops, &tape);
    let result = run_ops(case.ops, tape, case.input.as_bytes());
    let want = notation::parse(case.want).expect("bad expected tape notation");

    if case.left_bounded {
        assert!(
            result.min_pointer >= 0,
            "tape was bounded to the left but the pointer reached index {}",
            result.min_pointer
        );
    }
    if let Some(min_pointer) = case.want_min_pointer {
        assert_eq!(result.min_pointer, min_pointer, "unexpected lowest pointer index");
    }
    assert!(
        result.tape == want,
        "want tape:\n\t{}\nbut got:\n\t{}",
        notation::pretty(&want),
        notation::pretty(&result.tape)
    );
    assert_eq!(result.output_text(), case.want_output, "unexpected output");
    check_exit(case.ops, &result.tape);
}

/// The preamble starts from a blank tape; every other operation starts on
/// a well-formed layout
fn check_entry(ops: &[Operation], tape: &Tape) {
    if ops.first() == Some(&Operation::Preamble) {
        let (lo, hi) = tape.extent();
        assert!(
            (lo..=hi).all(|index| tape.get(index) == 0),
            "fixture tape for the preamble must be blank: {}",
            notation::pretty(tape)
        );
    } else if let Err(err) = tape.layout() {
        panic!("fixture tape {} is not a valid layout: {}", notation::pretty(tape), err);
    }
}

/// Only the nonzero test may leave its scratch cell set
fn check_exit(ops: &[Operation], tape: &Tape) {
    if ops.last() == Some(&Operation::NonzeroTest) {
        return;
    }
    if let Err(err) = tape.layout() {
        panic!("result tape {} is not a valid layout: {}", notation::pretty(tape), err);
    }
}
