//! # Operation Library
//!
//! One opcode fragment per infinifuck operation, plus the preamble and the
//! nonzero test that several operations embed.
//!
//! Each body is written as annotated primitive source below, distilled, and
//! minified once per process. Every body except the nonzero test upholds
//! the tape contract of [`infinifuck_spec::encoding`]: it starts and ends
//! with the pointer on the leftmost flag of an integer, and leaves every
//! triplet well formed.
//!
//! Cell names in the annotations: `flag x data` for a digit triplet and
//! `a b c` for a spacing triplet. `x'` is the `x` cell one triplet right.

use crate::peephole::minify;
use infinifuck_spec::Fragment;
use std::fmt;
use std::sync::OnceLock;

/// Reserve one triplet of margin, then plant the first integer's flag.
///
/// The margin keeps every scan that stays on the existing integers at or
/// above index 0. Navigating left from the first integer is not covered:
/// it looks three triplets back, down to index -6, and creates a new
/// integer at -3.
const PREAMBLE: &str = r#"
>>>   # margin for tapes bounded on the left
+     # flag of the first integer
"#;

/// Move to the next integer, creating a zero integer if there is none.
const NAVIGATE_RIGHT: &str = r#"
[>>>]   # walk the flags to the spacing triplet
>>>     # one triplet further: next flag, or empty space
[-]+    # force a flag; a fresh zero digit if the slot was empty
"#;

/// Move to the previous integer, creating a zero integer if there is none.
const NAVIGATE_LEFT: &str = r#"
<<<<<<<<<   # three triplets back: the digit before the previous integer's
            # last one, or spacing if that integer has one digit
[<<<]>>>    # back up to the previous integer's leftmost flag
[-]+        # force a flag; creates the integer when the slot was empty
"#;

/// Add one, least significant digit first.
///
/// While a carry is pending the current digit is bumped; a wrap to zero
/// keeps the carry and moves one triplet right. Reaching the spacing
/// triplet there grows the chain: every integer further right shifts one
/// triplet over and the freed triplet becomes a new zero digit.
const INCREMENT: &str = r#"
>+                      # x = carry = 1
[                       # while carry
  >+<                   #   data += 1
  -<->                  #   x = flag = 0
  >[-<+<+>>]<[->+<]     #   flag = data (copy via x)
  +<[>-<[-]]+>          #   x = (data == 0); flag = 1
  [                     #   if the digit wrapped
    -                   #     x = 0
    >>>                 #     x of the next triplet (or b of the spacing)
    +<[>-<-]+>          #     x/b = (flag/a == 0); flag/a = 1
    [                   #     only at the end of the chain
      <->-              #       a = b = 0 again
      >>[[>>>]>+>>]<<   #       mark b after every integer to the right
      [-<<<<[>>[->>>+<<<]>+<<<-<<<]>]  # walk back left shifting each
                        #       digit one triplet right and clearing marks
      <+>               #       a = 1: the spacing is now a zero digit
    ]
    +                   #     carry on into this digit
  -<->                  #   flag = x = 0 to leave the branch
  ]
  <-[>+<[-]]+>          #   restore flag = 1; x = carry
]
<[<<<]>>>               # back to the leftmost flag
"#;

/// OR every digit into the leftmost digit's `x`, scanning right to left.
///
/// Ends on the leftmost flag with `x = 1` iff the integer is nonzero. The
/// scratch cell is left set, so this is a building block and not a full
/// operation.
const NONZERO_TEST: &str = r#"
[>>>]<<<                   # rightmost digit
[                          # while on a digit
  ->>[-<+<+>>]<<[->>+<<]+  #   x = data (flag as temporary)
  ->[<+>[-]]<[->+<]+       #   x = (x != 0)
  >>>>[-<<<+>>>]<<<<       #   x += x'; x' = 0
  ->[<+>[-]]<[->+<]+       #   x = (x != 0)
  <<<                      #   previous triplet
]
>>>                        # leftmost flag
"#;

/// Borrow loop run after the nonzero test. While `x` is set the digit is
/// decremented and `x'` records whether it was zero, i.e. whether the
/// borrow moves on. Zero therefore stays zero, and nothing ever shrinks.
const DECREMENT_BODY: &str = r#"
>                              # x
[                              # while borrowing
  -                            #   x = 0
  <->>[-<+<+>>]<<[->>+<<]+>    #   x = data
  >>>+<<<[[-]>>>-<<<]          #   x' = (data == 0); x = 0
  >-<                          #   data -= 1
  >>>                          #   x'
]
<                              # flag or a
<<<[<<<]>>>                    # leftmost flag
"#;

/// Open a native loop guarded on the nonzero test's result.
const LOOP_OPEN_BODY: &str = r#"
>    # x
[    # loop while the integer is nonzero
-<   # clear x; back to the flag
"#;

/// Close the native loop, re-testing the integer.
const LOOP_CLOSE_BODY: &str = r#"
>    # x
]    # back to the matching open while nonzero
<    # flag
"#;

/// Zero every digit, then read one byte into the lowest digit.
const INPUT: &str = r#"
[>>[-]>]      # clear each data cell, ending on the spacing triplet
<<<[<<<]>>>   # leftmost flag
>>,<<         # read into the lowest digit
"#;

/// Write the lowest digit, i.e. the value mod 256.
const OUTPUT: &str = r#"
>>.<<
"#;

/// A subroutine of the operation library
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Preamble,
    NavigateRight,
    NavigateLeft,
    Increment,
    Decrement,
    NonzeroTest,
    LoopOpen,
    LoopClose,
    Input,
    Output,
}

impl Operation {
    pub const ALL: [Operation; 10] = [
        Operation::Preamble,
        Operation::NavigateRight,
        Operation::NavigateLeft,
        Operation::Increment,
        Operation::Decrement,
        Operation::NonzeroTest,
        Operation::LoopOpen,
        Operation::LoopClose,
        Operation::Input,
        Operation::Output,
    ];

    /// The operation an infinifuck command compiles to
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            '>' => Some(Operation::NavigateRight),
            '<' => Some(Operation::NavigateLeft),
            '+' => Some(Operation::Increment),
            '-' => Some(Operation::Decrement),
            '[' => Some(Operation::LoopOpen),
            ']' => Some(Operation::LoopClose),
            ',' => Some(Operation::Input),
            '.' => Some(Operation::Output),
            _ => None,
        }
    }

    /// Infinifuck command for this operation, if it has one
    pub const fn symbol(self) -> Option<char> {
        match self {
            Operation::NavigateRight => Some('>'),
            Operation::NavigateLeft => Some('<'),
            Operation::Increment => Some('+'),
            Operation::Decrement => Some('-'),
            Operation::LoopOpen => Some('['),
            Operation::LoopClose => Some(']'),
            Operation::Input => Some(','),
            Operation::Output => Some('.'),
            Operation::Preamble | Operation::NonzeroTest => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Operation::Preamble => "preamble",
            Operation::NavigateRight => "navigate-right",
            Operation::NavigateLeft => "navigate-left",
            Operation::Increment => "increment",
            Operation::Decrement => "decrement",
            Operation::NonzeroTest => "nonzero-test",
            Operation::LoopOpen => "loop-open",
            Operation::LoopClose => "loop-close",
            Operation::Input => "input",
            Operation::Output => "output",
        }
    }

    /// Minified opcode fragment
    pub fn fragment(self) -> &'static Fragment {
        &fragments()[self as usize]
    }

    /// Build the fragment from its annotated source
    fn build(self) -> Fragment {
        let nonzero_test = || Fragment::parse(NONZERO_TEST);
        let body = match self {
            Operation::Preamble => Fragment::parse(PREAMBLE),
            Operation::NavigateRight => Fragment::parse(NAVIGATE_RIGHT),
            Operation::NavigateLeft => Fragment::parse(NAVIGATE_LEFT),
            Operation::Increment => Fragment::parse(INCREMENT),
            Operation::Decrement => nonzero_test() + Fragment::parse(DECREMENT_BODY),
            Operation::NonzeroTest => nonzero_test(),
            Operation::LoopOpen => nonzero_test() + Fragment::parse(LOOP_OPEN_BODY),
            Operation::LoopClose => nonzero_test() + Fragment::parse(LOOP_CLOSE_BODY),
            Operation::Input => Fragment::parse(INPUT),
            Operation::Output => Fragment::parse(OUTPUT),
        };
        minify(&body)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn fragments() -> &'static [Fragment] {
    static FRAGMENTS: OnceLock<Vec<Fragment>> = OnceLock::new();
    FRAGMENTS.get_or_init(|| Operation::ALL.iter().map(|op| op.build()).collect())
}
