use log::debug;

use crate::error::{Error, Result};
use crate::lexer::{Lexer, TokenKind};

use super::{AstKind, Block, Program};

/// Deepest loop nesting accepted, every later stage recurses once per level.
pub const MAX_NESTING_DEPTH: usize = 1024;

pub struct Parser {
    lexer: Lexer,

    /// Reject a `]` with no matching `[` and a `[` that is never closed.
    /// Off by default, in which case a stray `]` just ends the enclosing block
    /// and a missing `]` is treated like the end of input.
    strict: bool,
}

impl Parser {
    pub fn new(lexer: Lexer) -> Parser {
        Parser {
            lexer,
            strict: false,
        }
    }

    pub fn strict(lexer: Lexer) -> Parser {
        Parser {
            lexer,
            strict: true,
        }
    }

    /// Is the next token `kind`? Doesn't consume anything.
    pub fn check(&mut self, kind: TokenKind) -> Result<bool> {
        Ok(self.lexer.peek()? == kind)
    }

    /// Consume the next token, it has to be `kind`.
    pub fn expect(&mut self, kind: TokenKind) -> Result<()> {
        let found = self.lexer.peek()?;
        if found != kind {
            return Err(Error::UnexpectedToken {
                expected: kind,
                found,
            });
        }
        self.lexer.next()?;
        Ok(())
    }

    pub fn parse_program(&mut self) -> Result<Program> {
        let block = self.parse_block(0)?;
        self.expect(TokenKind::EOF)?;
        debug!(
            "parsed program with {} top level instructions",
            block.instructions.len()
        );
        Ok(Program { block })
    }

    fn parse_block(&mut self, depth: usize) -> Result<Block> {
        let mut instructions = vec![];

        loop {
            match self.lexer.peek()? {
                TokenKind::EOF => {
                    if self.strict && depth > 0 {
                        return Err(Error::UnbalancedBrackets);
                    }
                    break;
                }
                token if token.is_primitive() => instructions.push(self.parse_non_loop()?),
                TokenKind::LoopOpen => {
                    if depth >= MAX_NESTING_DEPTH {
                        return Err(Error::NestingTooDeep {
                            limit: MAX_NESTING_DEPTH,
                        });
                    }
                    self.lexer.next()?;
                    instructions.push(self.parse_loop(depth + 1)?);
                }
                // the loop has ended so we can break
                // (at the top level this swallows a stray `]` unless we're strict)
                TokenKind::LoopClose => {
                    self.lexer.next()?;
                    if self.strict && depth == 0 {
                        return Err(Error::UnbalancedBrackets);
                    }
                    break;
                }
                _ => return Err(Error::UnbalancedBrackets),
            }
        }

        Ok(Block { instructions })
    }

    fn parse_loop(&mut self, depth: usize) -> Result<AstKind> {
        Ok(AstKind::Loop(self.parse_block(depth)?))
    }

    fn parse_non_loop(&mut self) -> Result<AstKind> {
        match self.lexer.next()? {
            token if token.is_primitive() => Ok(AstKind::NonLoop(token)),
            _ => Err(Error::UnbalancedBrackets),
        }
    }
}
