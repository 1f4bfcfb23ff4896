//! String and character literal scanning, and shared escape-sequence
//! decoding (§4.5-4.7 territory in one file since they all funnel through
//! the same escape decoder).

use crate::classify;
use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::location::SourceLocation;
use crate::token::{Token, TokenKind, TokenValue};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Opening `"` is the current byte on entry. `text` and `value` both end
    /// up pointing at the decoded, arena-owned buffer rather than the raw
    /// source span, so the starting offset isn't needed here.
    pub(crate) fn lex_string(&mut self, _start: usize, location: SourceLocation<'a>) -> Token<'a> {
        self.cursor.advance(); // opening quote

        // Decoded bytes are staged on the heap and copied into the arena
        // once, at their exact final size, rather than growing an
        // arena-backed buffer in place and re-copying on every doubling.
        let mut decoded: Vec<u8> = Vec::with_capacity(16);

        loop {
            match self.cursor.current() {
                None => {
                    self.error = Some(Diagnostic::new(DiagnosticKind::UnterminatedString, location));
                    return self.eof_token();
                }
                Some(b'"') => {
                    self.cursor.advance();
                    break;
                }
                Some(b'\\') => {
                    self.cursor.advance();
                    match self.decode_escape(location) {
                        Some(byte) => decoded.push(byte),
                        None => return self.eof_token(),
                    }
                }
                Some(b) => {
                    self.cursor.advance();
                    decoded.push(b);
                }
            }
        }

        decoded.push(0);
        match self.store_in_arena(&decoded, location) {
            Some(stored) => Token::new(TokenKind::StringLiteral, location, stored, TokenValue::Str(stored)),
            None => self.eof_token(),
        }
    }

    /// Opening `'` is the current byte on entry.
    pub(crate) fn lex_char(&mut self, start: usize, location: SourceLocation<'a>) -> Token<'a> {
        self.cursor.advance(); // opening quote

        let value = match self.cursor.current() {
            None => {
                self.error = Some(Diagnostic::new(DiagnosticKind::UnterminatedChar, location));
                return self.eof_token();
            }
            Some(b'\\') => {
                self.cursor.advance();
                match self.decode_escape(location) {
                    Some(byte) => byte,
                    None => return self.eof_token(),
                }
            }
            Some(b) => {
                self.cursor.advance();
                b
            }
        };

        if !self.cursor.match_byte(b'\'') {
            self.error = Some(Diagnostic::new(DiagnosticKind::UnterminatedChar, location));
            return self.eof_token();
        }

        let text = self.cursor.slice_from(start);
        Token::new(TokenKind::CharLiteral, location, text, TokenValue::Char(value))
    }

    /// Decodes one escape sequence. `self.cursor` is positioned just past
    /// the backslash on entry. Returns `None` (after recording a
    /// diagnostic) when the escape is malformed.
    fn decode_escape(&mut self, location: SourceLocation<'a>) -> Option<u8> {
        let selector = self.cursor.current()?;

        match selector {
            b'\'' | b'"' | b'?' | b'\\' => {
                self.cursor.advance();
                Some(selector)
            }
            b'a' => {
                self.cursor.advance();
                Some(0x07)
            }
            b'b' => {
                self.cursor.advance();
                Some(0x08)
            }
            b'f' => {
                self.cursor.advance();
                Some(0x0c)
            }
            b'n' => {
                self.cursor.advance();
                Some(b'\n')
            }
            b'r' => {
                self.cursor.advance();
                Some(b'\r')
            }
            b't' => {
                self.cursor.advance();
                Some(b'\t')
            }
            b'v' => {
                self.cursor.advance();
                Some(0x0b)
            }
            b'x' => {
                self.cursor.advance();
                let mut value: u32 = 0;
                let mut digits = 0;
                while digits < 2 {
                    match self.cursor.current() {
                        Some(c) if classify::is_hex_digit(c) => {
                            value = value * 16 + classify::hex_value(c);
                            self.cursor.advance();
                            digits += 1;
                        }
                        _ => break,
                    }
                }
                if digits == 0 {
                    self.error = Some(Diagnostic::new(DiagnosticKind::InvalidHexEscape, location));
                    None
                } else {
                    Some(value as u8)
                }
            }
            b'0'..=b'7' => {
                let mut value: u32 = 0;
                let mut digits = 0;
                while digits < 3 {
                    match self.cursor.current() {
                        Some(c) if classify::is_octal_digit(c) => {
                            value = value * 8 + classify::octal_value(c);
                            self.cursor.advance();
                            digits += 1;
                        }
                        _ => break,
                    }
                }
                Some(value as u8)
            }
            other => {
                self.cursor.advance();
                self.error = Some(Diagnostic::invalid_escape(other, location));
                None
            }
        }
    }

    fn store_in_arena(&mut self, bytes: &[u8], location: SourceLocation<'a>) -> Option<&'a [u8]> {
        match self.arena.alloc(bytes.len()) {
            Ok(slice) => {
                slice[..bytes.len()].copy_from_slice(bytes);
                Some(&slice[..bytes.len()])
            }
            Err(_) => {
                self.error = Some(Diagnostic::out_of_memory(location));
                None
            }
        }
    }
}
