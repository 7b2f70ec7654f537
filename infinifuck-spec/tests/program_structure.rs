//! Fragment composition and program validation

use infinifuck_spec::{Fragment, Opcode, Program, SpecError};
use proptest::prelude::*;

fn arb_fragment() -> impl Strategy<Value = Fragment> {
    prop::collection::vec(prop::sample::select(Opcode::ALL.to_vec()), 0..40)
        .prop_map(Fragment::from_opcodes)
}

/// Fragments whose brackets always nest
fn arb_balanced() -> impl Strategy<Value = Fragment> {
    let leaf = prop::collection::vec(
        prop::sample::select(vec![
            Opcode::Increment,
            Opcode::Decrement,
            Opcode::MoveLeft,
            Opcode::MoveRight,
            Opcode::Input,
            Opcode::Output,
        ]),
        0..6,
    )
    .prop_map(Fragment::from_opcodes);

    leaf.prop_recursive(4, 64, 4, |inner| {
        prop::collection::vec(inner, 1..4).prop_map(|parts| {
            let mut body = Fragment::new();
            body.push(Opcode::LoopOpen);
            for part in &parts {
                body = body.then(part);
            }
            body.push(Opcode::LoopClose);
            body
        })
    })
}

#[test]
fn test_open_and_close_halves_compose() {
    let open = Fragment::parse("[>>>]<<< >[-<");
    let close = Fragment::parse("[>>>]<<< >]<");
    assert!(Program::new(open.clone()).is_err());
    assert!(Program::new(close.clone()).is_err());
    assert!(Program::new(open + close).is_ok());
}

#[test]
fn test_error_positions_count_opcodes_only() {
    // Prose between opcodes does not shift reported positions
    let err = Program::parse("+ then ] stray").unwrap_err();
    assert_eq!(err, SpecError::UnmatchedClose { position: 1 });
}

proptest! {
    #[test]
    fn prop_concat_is_associative(a in arb_fragment(), b in arb_fragment(), c in arb_fragment()) {
        let left = (a.clone() + &b) + &c;
        let right = a + &(b + &c);
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_empty_fragment_is_neutral(a in arb_fragment()) {
        prop_assert_eq!(Fragment::new() + &a, a.clone());
        prop_assert_eq!(a.clone() + &Fragment::new(), a);
    }

    #[test]
    fn prop_display_parse_roundtrip(a in arb_fragment()) {
        prop_assert_eq!(Fragment::parse(&a.to_string()), a);
    }

    #[test]
    fn prop_balanced_fragments_build(a in arb_balanced(), b in arb_balanced()) {
        let program = Program::new(a + b).unwrap();
        for (ip, op) in program.opcodes().iter().enumerate() {
            if op.is_bracket() {
                let partner = program.partner(ip);
                prop_assert_eq!(program.partner(partner), ip);
                prop_assert_ne!(program.get(partner), Some(*op));
            }
        }
    }

    #[test]
    fn prop_validation_matches_bracket_balance(a in arb_fragment()) {
        if Program::new(a.clone()).is_ok() {
            prop_assert_eq!(a.bracket_balance(), 0);
        }
    }
}
