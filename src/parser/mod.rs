pub mod parser;

pub use self::parser::{Parser, MAX_NESTING_DEPTH};

use crate::lexer::TokenKind;

#[derive(Debug, Clone, PartialEq)]
pub enum AstKind {
    /// A single primitive instruction, always one of the six tape tokens
    NonLoop(TokenKind),

    /// `[ ... ]`
    Loop(Block),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub instructions: Vec<AstKind>,
}

/// The root of the tree, the whole source as a single block.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub block: Block,
}
