use log::debug;

use super::TokenKind;
use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct Lexer {
    /** offset within the stripped source (in terms of 'codepoints') */
    position: usize,

    chars: Vec<char>,
}

impl Lexer {
    /// Whitespace is dropped once here, every other position is relative to what remains.
    pub fn new(source: &str) -> Lexer {
        Lexer {
            position: 0,
            chars: source.chars().filter(|&c| !is_blank(c)).collect(),
        }
    }

    pub fn eof(&self) -> bool {
        self.position >= self.chars.len()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn set_position(&mut self, position: usize) {
        self.position = position.min(self.chars.len());
    }

    /// Returns the next token and advances past it.
    ///
    /// Once the source is exhausted every call returns [`TokenKind::EOF`].
    /// An unrecognised character is an error and the position stays on it.
    pub fn next(&mut self) -> Result<TokenKind> {
        let Some(&c) = self.chars.get(self.position) else {
            return Ok(TokenKind::EOF);
        };

        let token = TokenKind::from_symbol(c).ok_or(Error::InvalidToken { symbol: c })?;
        self.position += 1;
        Ok(token)
    }

    /// Returns the next token without consuming it.
    pub fn peek(&mut self) -> Result<TokenKind> {
        let saved = self.position();
        let token = self.next();
        self.set_position(saved);
        token
    }

    pub fn collect_results(&mut self) -> Result<Vec<TokenKind>> {
        let mut v = vec![];
        loop {
            match self.next()? {
                TokenKind::EOF => break,
                tok => v.push(tok),
            }
        }
        debug!("lexed {} tokens", v.len());
        Ok(v)
    }
}

/// Only ASCII whitespace (including vertical tab) counts, anything else is a token or an error.
pub fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols(tokens: &[TokenKind]) -> String {
        tokens.iter().filter_map(|t| t.symbol()).collect()
    }

    #[test]
    fn maps_every_symbol() {
        let tokens = Lexer::new("+-><.,[]").collect_results().unwrap();
        assert_eq!(
            tokens,
            vec![
                TokenKind::Increment,
                TokenKind::Decrease,
                TokenKind::MoveNext,
                TokenKind::MovePrev,
                TokenKind::Output,
                TokenKind::Input,
                TokenKind::LoopOpen,
                TokenKind::LoopClose,
            ]
        );
    }

    #[test]
    fn tokens_reproduce_stripped_source() {
        for source in [
            "",
            "   \n\t ",
            "+++++++[>++++++++++<-]>++.",
            "+ + +\n[ > , < - ]\r\n>.",
            "<<>>[[]]..,,",
        ] {
            let stripped: String = source.chars().filter(|&c| !is_blank(c)).collect();
            let tokens = Lexer::new(source).collect_results().unwrap();
            assert_eq!(symbols(&tokens), stripped, "source {:?}", source);
        }
    }

    #[test]
    fn eof_is_sticky() {
        let mut lexer = Lexer::new("+");
        assert_eq!(lexer.next().unwrap(), TokenKind::Increment);
        assert!(lexer.eof());
        assert_eq!(lexer.next().unwrap(), TokenKind::EOF);
        assert_eq!(lexer.next().unwrap(), TokenKind::EOF);
        assert_eq!(lexer.position(), 1);
    }

    #[test]
    fn peek_does_not_consume() {
        let mut lexer = Lexer::new("+ -");
        assert_eq!(lexer.peek().unwrap(), TokenKind::Increment);
        assert_eq!(lexer.peek().unwrap(), TokenKind::Increment);
        assert_eq!(lexer.next().unwrap(), TokenKind::Increment);
        assert_eq!(lexer.peek().unwrap(), TokenKind::Decrease);
        assert_eq!(lexer.next().unwrap(), TokenKind::Decrease);
        assert_eq!(lexer.peek().unwrap(), TokenKind::EOF);
    }

    #[test]
    fn position_can_be_restored() {
        let mut lexer = Lexer::new("+-");
        let saved = lexer.position();
        lexer.next().unwrap();
        lexer.next().unwrap();
        lexer.set_position(saved);
        assert_eq!(lexer.next().unwrap(), TokenKind::Increment);
    }

    #[test]
    fn vertical_tab_and_form_feed_are_blank() {
        let tokens = Lexer::new("+\x0B-\x0C.").collect_results().unwrap();
        assert_eq!(
            tokens,
            vec![TokenKind::Increment, TokenKind::Decrease, TokenKind::Output]
        );
    }

    #[test]
    fn unicode_whitespace_is_not_blank() {
        let mut lexer = Lexer::new("+\u{a0}+");
        assert_eq!(lexer.next().unwrap(), TokenKind::Increment);
        assert!(matches!(
            lexer.next().unwrap_err(),
            Error::InvalidToken { symbol: '\u{a0}' }
        ));
    }

    #[test]
    fn invalid_character_is_an_error() {
        let mut lexer = Lexer::new("+;+");
        assert_eq!(lexer.next().unwrap(), TokenKind::Increment);
        let err = lexer.next().unwrap_err();
        assert!(matches!(err, Error::InvalidToken { symbol: ';' }));
        // still sitting on the bad character
        assert_eq!(lexer.position(), 1);
    }
}
