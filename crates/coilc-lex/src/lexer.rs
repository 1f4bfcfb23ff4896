//! The scanner's public contract: `create`, `peek`, `next`, `check`,
//! `consume`, `expect`, `location`, `error`.

use coilc_arena::Arena;

use crate::classify;
use crate::cursor::Cursor;
use crate::diagnostic::Diagnostic;
use crate::location::SourceLocation;
use crate::operator::starts_operator_or_punctuator;
use crate::token::{Token, TokenKind, TokenValue};

/// A single-pass, two-byte-lookahead scanner over an immutable source
/// buffer. Token payloads that can't simply borrow the source (decoded
/// strings) are owned by `arena`.
///
/// Not `Send`/`Sync`-friendly by design: one `Lexer` carries mutable
/// position state and is meant for one thread scanning one source. Two
/// lexers over disjoint sources and disjoint arenas need no coordination.
pub struct Lexer<'a> {
    pub(crate) cursor: Cursor<'a>,
    pub(crate) filename: &'a str,
    pub(crate) arena: &'a Arena,
    current: Token<'a>,
    pub(crate) error: Option<Diagnostic<'a>>,
}

impl<'a> Lexer<'a> {
    /// Initializes scanner state at position 0, line 1, column 0, and
    /// immediately scans and buffers the first token.
    pub fn create(source: &'a [u8], filename: &'a str, arena: &'a Arena) -> Self {
        let mut lexer = Self {
            cursor: Cursor::new(source),
            filename,
            arena,
            current: Token::new(
                TokenKind::Eof,
                SourceLocation::new(filename, 1, 0),
                b"",
                TokenValue::None,
            ),
            error: None,
        };
        lexer.current = lexer.scan_token();
        lexer
    }

    /// Returns the buffered token without advancing.
    pub fn peek(&self) -> Token<'a> {
        self.current
    }

    /// Returns the current token and scans the next one into the buffer.
    /// Once EOF has been returned, subsequent calls keep returning EOF
    /// without touching the cursor again.
    pub fn next(&mut self) -> Token<'a> {
        let token = self.current;
        if token.kind != TokenKind::Eof {
            self.current = self.scan_token();
        }
        token
    }

    pub fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    /// Advances and returns `true` if the buffered token matches `kind`;
    /// otherwise leaves the buffer untouched and returns `false`.
    pub fn consume(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.next();
            true
        } else {
            false
        }
    }

    /// As [`consume`](Self::consume), but records an `UnexpectedToken`
    /// diagnostic on mismatch.
    pub fn expect(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.next();
            true
        } else {
            let found = self.peek();
            self.error = Some(Diagnostic::unexpected_token(kind, found.kind, found.location));
            false
        }
    }

    /// The scanner's current position, for external diagnostics.
    pub fn location(&self) -> SourceLocation<'a> {
        self.current_location()
    }

    /// The last diagnostic message recorded, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_ref().map(|d| d.message.as_str())
    }

    pub(crate) fn current_location(&self) -> SourceLocation<'a> {
        SourceLocation::new(self.filename, self.cursor.line(), self.cursor.column())
    }

    pub(crate) fn eof_token(&self) -> Token<'a> {
        Token::new(TokenKind::Eof, self.current_location(), b"", TokenValue::None)
    }

    /// The top-level scanning loop: skip trivia, dispatch on the first
    /// byte, recover from `UnexpectedCharacter` by resyncing one byte and
    /// trying again.
    fn scan_token(&mut self) -> Token<'a> {
        loop {
            if self.skip_trivia() {
                return self.eof_token();
            }

            let location = self.current_location();
            let start = self.cursor.position();

            let current = match self.cursor.current() {
                Some(b) => b,
                None => return Token::new(TokenKind::Eof, location, b"", TokenValue::None),
            };

            if classify::is_ident_start(current) {
                return self.lex_identifier_or_keyword(start, location);
            }
            if classify::is_digit(current) {
                return self.lex_number(start, location);
            }
            if current == b'"' {
                return self.lex_string(start, location);
            }
            if current == b'\'' {
                return self.lex_char(start, location);
            }
            if starts_operator_or_punctuator(current) {
                return self.lex_operator_or_punctuator(start, location, current);
            }

            // UnexpectedCharacter recovers by resynchronizing on the next
            // byte rather than forcing EOF, unlike unterminated literals
            // and comments.
            self.cursor.advance();
            self.error = Some(Diagnostic::unexpected_character(current, location));
        }
    }
}

#[cfg(test)]
mod tests {
    use coilc_arena::Arena;

    use crate::token::{TokenKind, TokenValue};
    use crate::Lexer;

    fn kinds(source: &[u8]) -> Vec<TokenKind> {
        let arena = Arena::create(1024).unwrap();
        let mut lexer = Lexer::create(source, "t.c", &arena);
        let mut out = Vec::new();
        loop {
            let tok = lexer.next();
            let is_eof = tok.kind == TokenKind::Eof;
            out.push(tok.kind);
            if is_eof {
                break;
            }
        }
        out
    }

    #[test]
    fn declaration_statement() {
        assert_eq!(
            kinds(b"int x = 42;"),
            vec![
                TokenKind::Int,
                TokenKind::Identifier,
                TokenKind::Eq,
                TokenKind::IntegerLiteral,
                TokenKind::Semicolon,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn peek_does_not_advance() {
        let arena = Arena::create(256).unwrap();
        let mut lexer = Lexer::create(b"a b", "t.c", &arena);
        assert_eq!(lexer.peek().kind, TokenKind::Identifier);
        assert_eq!(lexer.peek().kind, TokenKind::Identifier);
        lexer.next();
        assert_eq!(lexer.peek().text, b"b");
    }

    #[test]
    fn check_consume_expect() {
        let arena = Arena::create(256).unwrap();
        let mut lexer = Lexer::create(b"int x", "t.c", &arena);
        assert!(lexer.check(TokenKind::Int));
        assert!(lexer.consume(TokenKind::Int));
        assert!(!lexer.consume(TokenKind::Semicolon));
        assert!(lexer.expect(TokenKind::Identifier));
        assert!(lexer.error().is_none());
        assert!(!lexer.expect(TokenKind::Semicolon));
        assert!(lexer.error().is_some());
    }

    #[test]
    fn eof_is_sticky() {
        let arena = Arena::create(256).unwrap();
        let mut lexer = Lexer::create(b"", "t.c", &arena);
        assert_eq!(lexer.next().kind, TokenKind::Eof);
        assert_eq!(lexer.next().kind, TokenKind::Eof);
        assert_eq!(lexer.next().kind, TokenKind::Eof);
    }

    #[test]
    fn unexpected_character_resyncs_and_keeps_scanning() {
        let arena = Arena::create(256).unwrap();
        let mut lexer = Lexer::create(b"a $ b", "t.c", &arena);
        assert_eq!(lexer.next().kind, TokenKind::Identifier); // a
        let tok = lexer.next();
        assert_eq!(tok.kind, TokenKind::Identifier); // b, after skipping '$'
        assert_eq!(tok.text, b"b");
        assert!(lexer.error().is_some());
    }

    #[test]
    fn line_and_column_advance_across_newlines() {
        let arena = Arena::create(256).unwrap();
        let mut lexer = Lexer::create(b"a\nbb", "t.c", &arena);
        let first = lexer.next();
        assert_eq!(first.location.line, 1);
        assert_eq!(first.location.column, 0);
        let second = lexer.next();
        assert_eq!(second.location.line, 2);
        assert_eq!(second.location.column, 0);
    }

    #[test]
    fn shift_assign_chain_scenario() {
        assert_eq!(
            kinds(b"a<<=b>>c"),
            vec![
                TokenKind::Identifier,
                TokenKind::LtLtEq,
                TokenKind::Identifier,
                TokenKind::GtGt,
                TokenKind::Identifier,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn every_finite_input_terminates_in_eof() {
        for source in [
            &b""[..],
            b"int x;",
            b"/* open",
            b"\"open",
            b"1e",
            b"@#$",
        ] {
            let arena = Arena::create(256).unwrap();
            let mut lexer = Lexer::create(source, "t.c", &arena);
            let mut calls = 0usize;
            loop {
                let tok = lexer.next();
                calls += 1;
                if tok.kind == TokenKind::Eof {
                    break;
                }
                assert!(calls <= source.len() + 1);
            }
        }
    }

    #[test]
    fn integer_value_is_decoded() {
        let arena = Arena::create(256).unwrap();
        let mut lexer = Lexer::create(b"42", "t.c", &arena);
        assert_eq!(lexer.next().value, TokenValue::Int(42));
    }
}
