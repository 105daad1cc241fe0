use std::fmt;

pub mod lexer;

pub use self::lexer::Lexer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // `+`: Increment the cell under the cursor by one
    Increment,
    // `-`: Decrease the cell under the cursor by one
    Decrease,

    // `>`: Move the cursor one cell to the right
    MoveNext,
    // `<`: Move the cursor one cell to the left
    MovePrev,

    // `,`: Read an integer from the input and store it in the cell under the cursor
    Input,
    // `.`: Write the cell under the cursor to the output as a character
    Output,

    // `[`: Start of a loop, the body runs while the cell under the cursor is non-zero
    LoopOpen,
    // `]`: End of a loop body
    LoopClose,

    // End of file: no more tokens left
    EOF,
}

impl TokenKind {
    pub fn from_symbol(c: char) -> Option<TokenKind> {
        match c {
            '+' => Some(TokenKind::Increment),
            '-' => Some(TokenKind::Decrease),
            '>' => Some(TokenKind::MoveNext),
            '<' => Some(TokenKind::MovePrev),
            '.' => Some(TokenKind::Output),
            ',' => Some(TokenKind::Input),
            '[' => Some(TokenKind::LoopOpen),
            ']' => Some(TokenKind::LoopClose),
            _ => None,
        }
    }

    /// The source symbol for this token, `None` for [`TokenKind::EOF`].
    pub fn symbol(self) -> Option<char> {
        match self {
            TokenKind::Increment => Some('+'),
            TokenKind::Decrease => Some('-'),
            TokenKind::MoveNext => Some('>'),
            TokenKind::MovePrev => Some('<'),
            TokenKind::Output => Some('.'),
            TokenKind::Input => Some(','),
            TokenKind::LoopOpen => Some('['),
            TokenKind::LoopClose => Some(']'),
            TokenKind::EOF => None,
        }
    }

    /// One of the six instructions that act on the tape directly.
    pub fn is_primitive(self) -> bool {
        !matches!(
            self,
            TokenKind::LoopOpen | TokenKind::LoopClose | TokenKind::EOF
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Increment => "Increment",
            TokenKind::Decrease => "Decrease",
            TokenKind::MoveNext => "MoveNext",
            TokenKind::MovePrev => "MovePrev",
            TokenKind::Input => "Input",
            TokenKind::Output => "Output",
            TokenKind::LoopOpen => "LoopOpen",
            TokenKind::LoopClose => "LoopClose",
            TokenKind::EOF => "EOF",
        };
        f.write_str(name)
    }
}
