use log::debug;

use crate::error::{Error, Result};
use crate::lexer::TokenKind;
use crate::parser::{AstKind, Block, Program};

use super::Ir;

pub fn lower_program(program: &Program) -> Result<Vec<Ir>> {
    let mut instructions = vec![];
    lower_block(&mut instructions, &program.block)?;
    debug!("lowered program into {} top level instructions", instructions.len());
    Ok(instructions)
}

fn lower_block(instructions: &mut Vec<Ir>, block: &Block) -> Result<()> {
    for instruction in block.instructions.iter() {
        match instruction {
            AstKind::NonLoop(token) => instructions.push(lower_token(*token)?),
            AstKind::Loop(inner_block) => {
                // the body gets its own list, the parent only ever sees the one jump
                let mut body = vec![];
                lower_block(&mut body, inner_block)?;
                instructions.push(Ir::Jump(body));
            }
        }
    }
    Ok(())
}

fn lower_token(token: TokenKind) -> Result<Ir> {
    match token {
        TokenKind::Increment => Ok(Ir::Add),
        TokenKind::Decrease => Ok(Ir::Sub),
        TokenKind::MoveNext => Ok(Ir::Next),
        TokenKind::MovePrev => Ok(Ir::Prev),
        TokenKind::Input => Ok(Ir::Input),
        TokenKind::Output => Ok(Ir::Output),
        // the parser never puts these in a leaf
        TokenKind::LoopOpen | TokenKind::LoopClose | TokenKind::EOF => {
            Err(Error::UnbalancedBrackets)
        }
    }
}
