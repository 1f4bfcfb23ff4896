//! Integer and floating-point literal scanning.

use crate::classify;
use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::location::SourceLocation;
use crate::token::{Token, TokenKind, TokenValue};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a numeric literal starting at `start`. `self.cursor.current()`
    /// is guaranteed to be an ASCII digit on entry.
    pub(crate) fn lex_number(&mut self, start: usize, location: SourceLocation<'a>) -> Token<'a> {
        if self.cursor.current() == Some(b'0') {
            match self.cursor.peek_byte(1) {
                Some(b'x') | Some(b'X') => {
                    self.cursor.advance();
                    self.cursor.advance();
                    return self.lex_radix_integer(16, start, location);
                }
                Some(c) if classify::is_octal_digit(c) => {
                    self.cursor.advance();
                    return self.lex_radix_integer(8, start, location);
                }
                _ => {}
            }
        }

        while self.cursor.current().map_or(false, classify::is_digit) {
            self.cursor.advance();
        }

        let mut is_float = false;

        if self.cursor.current() == Some(b'.') && self.cursor.peek_byte(1).map_or(false, classify::is_digit) {
            is_float = true;
            self.cursor.advance();
            while self.cursor.current().map_or(false, classify::is_digit) {
                self.cursor.advance();
            }
        }

        if matches!(self.cursor.current(), Some(b'e') | Some(b'E')) {
            is_float = true;
            self.cursor.advance();
            if matches!(self.cursor.current(), Some(b'+') | Some(b'-')) {
                self.cursor.advance();
            }
            let digits_start = self.cursor.position();
            while self.cursor.current().map_or(false, classify::is_digit) {
                self.cursor.advance();
            }
            if self.cursor.position() == digits_start {
                self.error = Some(Diagnostic::new(DiagnosticKind::ExpectedExponentDigit, location));
            }
        }

        let digits_text = self.cursor.slice_from(start);
        self.consume_numeric_suffix();
        let full_text = self.cursor.slice_from(start);

        if is_float {
            let value = std::str::from_utf8(digits_text)
                .ok()
                .and_then(|s| s.parse::<f64>().ok())
                .unwrap_or(0.0);
            Token::new(TokenKind::FloatLiteral, location, full_text, TokenValue::Float(value))
        } else {
            let value = parse_decimal_saturating(digits_text);
            Token::new(TokenKind::IntegerLiteral, location, full_text, TokenValue::Int(value))
        }
    }

    /// Lexes the digit run of a `0x`/`0`-prefixed hex or octal integer.
    /// `self.cursor` is positioned just past the prefix on entry.
    fn lex_radix_integer(&mut self, base: u32, start: usize, location: SourceLocation<'a>) -> Token<'a> {
        let mut value: i64 = 0;
        let mut overflowed = false;

        loop {
            let digit = match (base, self.cursor.current()) {
                (16, Some(b)) if classify::is_hex_digit(b) => classify::hex_value(b),
                (8, Some(b)) if classify::is_octal_digit(b) => classify::octal_value(b),
                _ => break,
            };
            self.cursor.advance();
            match value
                .checked_mul(base as i64)
                .and_then(|v| v.checked_add(digit as i64))
            {
                Some(v) => value = v,
                None => overflowed = true,
            }
        }

        if overflowed {
            value = i64::MAX;
        }

        self.consume_numeric_suffix();
        let text = self.cursor.slice_from(start);
        Token::new(TokenKind::IntegerLiteral, location, text, TokenValue::Int(value))
    }

    /// Consumes up to three trailing integer-suffix characters
    /// (`L`, `l`, `U`, `u`, `F`, `f`). Validation is permissive: any
    /// combination is accepted and folded into the lexeme text without
    /// affecting the decoded value.
    fn consume_numeric_suffix(&mut self) {
        let mut consumed = 0;
        while consumed < 3 && self.cursor.current().map_or(false, classify::is_suffix_char) {
            self.cursor.advance();
            consumed += 1;
        }
    }
}

/// Parses a run of ASCII decimal digits into `i64`, saturating to
/// `i64::MAX` on overflow instead of erroring.
fn parse_decimal_saturating(digits: &[u8]) -> i64 {
    let mut value: i64 = 0;
    let mut overflowed = false;
    for &b in digits {
        if !classify::is_digit(b) {
            continue;
        }
        let d = (b - b'0') as i64;
        match value.checked_mul(10).and_then(|v| v.checked_add(d)) {
            Some(v) => value = v,
            None => overflowed = true,
        }
    }
    if overflowed {
        i64::MAX
    } else {
        value
    }
}
