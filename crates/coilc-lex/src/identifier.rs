//! Identifier and keyword scanning.

use crate::classify;
use crate::location::SourceLocation;
use crate::token::{keyword_from_text, Token, TokenKind, TokenValue};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Consumes the maximal `[A-Za-z0-9_]` run starting at `start` and
    /// classifies it as a keyword or a plain identifier.
    pub(crate) fn lex_identifier_or_keyword(&mut self, start: usize, location: SourceLocation<'a>) -> Token<'a> {
        while self.cursor.current().map_or(false, classify::is_ident_continue) {
            self.cursor.advance();
        }
        let text = self.cursor.slice_from(start);
        let kind = keyword_from_text(text).unwrap_or(TokenKind::Identifier);
        Token::new(kind, location, text, TokenValue::None)
    }
}

#[cfg(test)]
mod tests {
    use coilc_arena::Arena;

    use crate::token::TokenKind;
    use crate::Lexer;

    #[test]
    fn plain_identifier() {
        let arena = Arena::create(256).unwrap();
        let mut lexer = Lexer::create(b"foo_bar123", "t.c", &arena);
        let tok = lexer.next();
        assert_eq!(tok.kind, TokenKind::Identifier);
        assert_eq!(tok.text, b"foo_bar123");
    }

    #[test]
    fn keyword_is_not_an_identifier() {
        let arena = Arena::create(256).unwrap();
        let mut lexer = Lexer::create(b"struct", "t.c", &arena);
        let tok = lexer.next();
        assert_eq!(tok.kind, TokenKind::Struct);
        assert_eq!(tok.text, b"struct");
    }

    #[test]
    fn keyword_prefix_is_an_identifier() {
        let arena = Arena::create(256).unwrap();
        let mut lexer = Lexer::create(b"structure", "t.c", &arena);
        let tok = lexer.next();
        assert_eq!(tok.kind, TokenKind::Identifier);
        assert_eq!(tok.text, b"structure");
    }

    #[test]
    fn underscore_prefixed_identifier() {
        let arena = Arena::create(256).unwrap();
        let mut lexer = Lexer::create(b"_private", "t.c", &arena);
        assert_eq!(lexer.next().kind, TokenKind::Identifier);
    }
}
