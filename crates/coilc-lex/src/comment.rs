//! Whitespace and comment skipping.
//!
//! C's `/* */` comments do not nest — the first `*/` closes the comment
//! regardless of any `/*` seen since — unlike the nested form this was
//! modeled on.

use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips runs of whitespace and comments. Returns `true` if an
    /// unterminated block comment was hit, in which case the caller should
    /// stop scanning and emit EOF.
    pub(crate) fn skip_trivia(&mut self) -> bool {
        loop {
            match self.cursor.current() {
                Some(b' ') | Some(b'\t') | Some(b'\r') | Some(b'\n') => {
                    self.cursor.advance();
                }
                Some(b'/') if self.cursor.peek_byte(1) == Some(b'/') => {
                    self.skip_line_comment();
                }
                Some(b'/') if self.cursor.peek_byte(1) == Some(b'*') => {
                    if self.skip_block_comment() {
                        return true;
                    }
                }
                _ => return false,
            }
        }
    }

    fn skip_line_comment(&mut self) {
        self.cursor.advance(); // '/'
        self.cursor.advance(); // '/'
        while let Some(b) = self.cursor.current() {
            if b == b'\n' {
                break;
            }
            self.cursor.advance();
        }
    }

    /// Returns `true` if the comment was unterminated.
    fn skip_block_comment(&mut self) -> bool {
        let location = self.current_location();
        self.cursor.advance(); // '/'
        self.cursor.advance(); // '*'
        loop {
            match self.cursor.current() {
                None => {
                    self.error = Some(Diagnostic::new(DiagnosticKind::UnterminatedBlockComment, location));
                    return true;
                }
                Some(b'*') if self.cursor.peek_byte(1) == Some(b'/') => {
                    self.cursor.advance();
                    self.cursor.advance();
                    return false;
                }
                _ => {
                    self.cursor.advance();
                }
            }
        }
    }
}
