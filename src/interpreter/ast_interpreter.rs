use crate::error::{Error, Result};
use crate::lexer::TokenKind;
use crate::parser::{self, AstKind};

use super::Runtime;

/// Walks the AST directly.
pub struct AstInterpreter {}

impl AstInterpreter {
    pub fn new() -> Self {
        Self {}
    }

    pub fn interpret(&mut self, runtime: &mut Runtime, program: &parser::Program) -> Result<()> {
        self.interpret_block(runtime, &program.block)
    }

    fn interpret_block(&mut self, runtime: &mut Runtime, block: &parser::Block) -> Result<()> {
        for instruction in block.instructions.iter() {
            runtime.tick()?;
            match instruction {
                AstKind::NonLoop(token) => self.interpret_token(runtime, *token)?,
                AstKind::Loop(sub_block) => loop {
                    // the cursor may have moved, always test whatever is under it now
                    runtime.tick()?;
                    if runtime.value_is_zero() {
                        break;
                    }
                    self.interpret_block(runtime, sub_block)?;
                },
            }
        }
        Ok(())
    }

    fn interpret_token(&mut self, runtime: &mut Runtime, token: TokenKind) -> Result<()> {
        match token {
            TokenKind::Increment => runtime.increment(),
            TokenKind::Decrease => runtime.decrease(),
            TokenKind::MoveNext => runtime.move_next(),
            TokenKind::MovePrev => runtime.move_prev(),
            TokenKind::Input => runtime.read(),
            TokenKind::Output => runtime.write(),
            // the parser never puts these in a leaf
            TokenKind::LoopOpen | TokenKind::LoopClose | TokenKind::EOF => {
                Err(Error::UnbalancedBrackets)
            }
        }
    }
}

impl Default for AstInterpreter {
    fn default() -> Self {
        Self::new()
    }
}
