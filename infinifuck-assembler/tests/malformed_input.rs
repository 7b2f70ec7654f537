//! Tests for malformed input handling in the assembler
//!
//! The only way infinifuck source can be malformed is bracket nesting.

use infinifuck_assembler::{assemble, parse_operations, AssemblerError};

fn position(source: &str) -> (usize, usize) {
    match assemble(source) {
        Err(AssemblerError::SyntaxError { line, column, .. }) => (line, column),
        other => panic!("Expected SyntaxError, got {:?}", other.map(|p| p.len())),
    }
}

// ============================================================================
// Unbalanced Brackets
// ============================================================================

#[test]
fn test_lone_close() {
    assert_eq!(position("]"), (1, 1));
}

#[test]
fn test_lone_open() {
    assert_eq!(position("["), (1, 1));
}

#[test]
fn test_close_before_open() {
    assert_eq!(position("+][-"), (1, 2));
}

#[test]
fn test_reports_innermost_unclosed_open() {
    assert_eq!(position("[\n  [\n    [-]\n"), (2, 3));
}

#[test]
fn test_extra_close_after_balanced_loop() {
    assert_eq!(position("[-]\n[-]]"), (2, 4));
}

#[test]
fn test_brackets_in_comments_are_ignored() {
    assert!(assemble("+ # ] unbalanced in a comment [[").is_ok());
}

#[test]
fn test_column_counts_characters() {
    // `é` is two bytes but one column
    assert_eq!(position("é ]"), (1, 3));
}

#[test]
fn test_error_message() {
    let err = assemble("+\n]").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Syntax error at line 2, column 1: `]` without a matching `[`"
    );
}

// ============================================================================
// Tolerated Input
// ============================================================================

#[test]
fn test_empty_source() {
    assert!(parse_operations("").unwrap().is_empty());
}

#[test]
fn test_prose_is_ignored() {
    let ops = parse_operations("hello world: add one+ and print it.").unwrap();
    assert_eq!(ops.len(), 2);
}

#[test]
fn test_only_comments() {
    let ops = parse_operations("# nothing here\n# or here +-").unwrap();
    assert!(ops.is_empty());
}
