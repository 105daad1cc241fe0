//! Human readable dumps of each pipeline stage.

use std::fmt::Write;

use crate::ir::Ir;
use crate::lexer::TokenKind;
use crate::parser::{AstKind, Block, Program};

const INDENT: &str = "  ";

/// Tokens mapped back to their source symbols.
pub fn format_tokens(tokens: &[TokenKind]) -> String {
    tokens.iter().filter_map(|token| token.symbol()).collect()
}

/// One line per instruction, loop bodies indented under a `Loop` line.
pub fn format_ast(program: &Program) -> String {
    let mut out = String::new();
    write_block(&mut out, &program.block, 0);
    out
}

fn write_block(out: &mut String, block: &Block, depth: usize) {
    for instruction in block.instructions.iter() {
        let indent = INDENT.repeat(depth);
        match instruction {
            AstKind::NonLoop(token) => {
                let _ = writeln!(out, "{}{}", indent, token);
            }
            AstKind::Loop(body) => {
                let _ = writeln!(out, "{}Loop", indent);
                write_block(out, body, depth + 1);
            }
        }
    }
}

/// One opcode per line, `JUMP` bodies indented under it.
pub fn format_ir(instructions: &[Ir]) -> String {
    let mut out = String::new();
    write_ir(&mut out, instructions, 0);
    out
}

fn write_ir(out: &mut String, instructions: &[Ir], depth: usize) {
    for instruction in instructions {
        let _ = writeln!(out, "{}{}", INDENT.repeat(depth), instruction.name());
        if let Ir::Jump(body) = instruction {
            write_ir(out, body, depth + 1);
        }
    }
}
