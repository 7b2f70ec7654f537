//! Main assembler logic
//!
//! Infinifuck compiles by substitution: the preamble, then the library
//! fragment of each command in source order.

use crate::error::{AssemblerError, Result};
use crate::lexer::Token;
use crate::operations::Operation;
use infinifuck_spec::{Fragment, Program};
use logos::Logos;

/// Lex infinifuck source into operations, checking bracket nesting
pub fn parse_operations(source: &str) -> Result<Vec<Operation>> {
    let mut lexer = Token::lexer(source);
    let mut operations = Vec::new();
    let mut open_brackets = Vec::new();

    while let Some(token) = lexer.next() {
        let offset = lexer.span().start;
        let token = token.map_err(|_| {
            syntax_error(source, offset, format!("unexpected input {:?}", lexer.slice()))
        })?;

        match token {
            Token::Open => open_brackets.push(offset),
            Token::Close => {
                if open_brackets.pop().is_none() {
                    return Err(syntax_error(source, offset, "`]` without a matching `[`"));
                }
            }
            _ => {}
        }
        operations.push(token.operation());
    }

    if let Some(&offset) = open_brackets.last() {
        return Err(syntax_error(source, offset, "`[` is never closed"));
    }

    Ok(operations)
}

/// Concatenate the preamble and the fragment of every operation
pub fn compile(operations: &[Operation]) -> Fragment {
    operations
        .iter()
        .fold(Operation::Preamble.fragment().clone(), |program, op| {
            program + op.fragment()
        })
}

/// Assemble infinifuck source into a primitive program
pub fn assemble(source: &str) -> Result<Program> {
    let operations = parse_operations(source)?;
    let program = Program::new(compile(&operations))?;
    tracing::debug!(
        operations = operations.len(),
        opcodes = program.len(),
        "assembled program"
    );
    Ok(program)
}

fn syntax_error(source: &str, offset: usize, message: impl Into<String>) -> AssemblerError {
    let before = &source[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    AssemblerError::SyntaxError {
        line,
        column: before[line_start..].chars().count() + 1,
        message: message.into(),
    }
}
