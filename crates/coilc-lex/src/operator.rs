//! Punctuator and operator scanning: single-char punctuators plus maximal
//! munch over the `+ - * / % & | ^ ! = < >` operator families.

use crate::location::SourceLocation;
use crate::token::{Token, TokenKind, TokenValue};
use crate::Lexer;

/// Bytes that start a punctuator or an operator family — used by the
/// top-level dispatcher to decide whether to route here.
pub(crate) fn starts_operator_or_punctuator(b: u8) -> bool {
    matches!(
        b,
        b'(' | b')'
            | b'{'
            | b'}'
            | b'['
            | b']'
            | b';'
            | b','
            | b'.'
            | b'?'
            | b':'
            | b'~'
            | b'+'
            | b'-'
            | b'*'
            | b'/'
            | b'%'
            | b'&'
            | b'|'
            | b'^'
            | b'!'
            | b'='
            | b'<'
            | b'>'
    )
}

impl<'a> Lexer<'a> {
    pub(crate) fn lex_operator_or_punctuator(
        &mut self,
        start: usize,
        location: SourceLocation<'a>,
        first: u8,
    ) -> Token<'a> {
        let kind = match first {
            b'(' => {
                self.cursor.advance();
                TokenKind::LParen
            }
            b')' => {
                self.cursor.advance();
                TokenKind::RParen
            }
            b'{' => {
                self.cursor.advance();
                TokenKind::LBrace
            }
            b'}' => {
                self.cursor.advance();
                TokenKind::RBrace
            }
            b'[' => {
                self.cursor.advance();
                TokenKind::LBracket
            }
            b']' => {
                self.cursor.advance();
                TokenKind::RBracket
            }
            b';' => {
                self.cursor.advance();
                TokenKind::Semicolon
            }
            b',' => {
                self.cursor.advance();
                TokenKind::Comma
            }
            b'.' => {
                self.cursor.advance();
                TokenKind::Dot
            }
            b'?' => {
                self.cursor.advance();
                TokenKind::Question
            }
            b':' => {
                self.cursor.advance();
                TokenKind::Colon
            }
            b'~' => {
                self.cursor.advance();
                TokenKind::Tilde
            }
            b'+' => {
                self.cursor.advance();
                self.lex_plus_family()
            }
            b'-' => {
                self.cursor.advance();
                self.lex_minus_family()
            }
            b'*' => {
                self.cursor.advance();
                self.lex_star_family()
            }
            b'/' => {
                self.cursor.advance();
                self.lex_slash_family()
            }
            b'%' => {
                self.cursor.advance();
                self.lex_percent_family()
            }
            b'&' => {
                self.cursor.advance();
                self.lex_amp_family()
            }
            b'|' => {
                self.cursor.advance();
                self.lex_pipe_family()
            }
            b'^' => {
                self.cursor.advance();
                self.lex_caret_family()
            }
            b'!' => {
                self.cursor.advance();
                self.lex_bang_family()
            }
            b'=' => {
                self.cursor.advance();
                self.lex_eq_family()
            }
            b'<' => {
                self.cursor.advance();
                self.lex_lt_family()
            }
            b'>' => {
                self.cursor.advance();
                self.lex_gt_family()
            }
            _ => unreachable!("dispatch only routes here for operator/punctuator bytes"),
        };
        let text = self.cursor.slice_from(start);
        Token::new(kind, location, text, TokenValue::None)
    }

    fn lex_plus_family(&mut self) -> TokenKind {
        if self.cursor.match_byte(b'+') {
            TokenKind::PlusPlus
        } else if self.cursor.match_byte(b'=') {
            TokenKind::PlusEq
        } else {
            TokenKind::Plus
        }
    }

    fn lex_minus_family(&mut self) -> TokenKind {
        if self.cursor.match_byte(b'-') {
            TokenKind::MinusMinus
        } else if self.cursor.match_byte(b'=') {
            TokenKind::MinusEq
        } else if self.cursor.match_byte(b'>') {
            TokenKind::Arrow
        } else {
            TokenKind::Minus
        }
    }

    fn lex_star_family(&mut self) -> TokenKind {
        if self.cursor.match_byte(b'=') {
            TokenKind::StarEq
        } else {
            TokenKind::Star
        }
    }

    fn lex_slash_family(&mut self) -> TokenKind {
        if self.cursor.match_byte(b'=') {
            TokenKind::SlashEq
        } else {
            TokenKind::Slash
        }
    }

    fn lex_percent_family(&mut self) -> TokenKind {
        if self.cursor.match_byte(b'=') {
            TokenKind::PercentEq
        } else {
            TokenKind::Percent
        }
    }

    fn lex_amp_family(&mut self) -> TokenKind {
        if self.cursor.match_byte(b'&') {
            TokenKind::AmpAmp
        } else if self.cursor.match_byte(b'=') {
            TokenKind::AmpEq
        } else {
            TokenKind::Amp
        }
    }

    fn lex_pipe_family(&mut self) -> TokenKind {
        if self.cursor.match_byte(b'|') {
            TokenKind::PipePipe
        } else if self.cursor.match_byte(b'=') {
            TokenKind::PipeEq
        } else {
            TokenKind::Pipe
        }
    }

    fn lex_caret_family(&mut self) -> TokenKind {
        if self.cursor.match_byte(b'=') {
            TokenKind::CaretEq
        } else {
            TokenKind::Caret
        }
    }

    fn lex_bang_family(&mut self) -> TokenKind {
        if self.cursor.match_byte(b'=') {
            TokenKind::BangEq
        } else {
            TokenKind::Bang
        }
    }

    fn lex_eq_family(&mut self) -> TokenKind {
        if self.cursor.match_byte(b'=') {
            TokenKind::EqEq
        } else {
            TokenKind::Eq
        }
    }

    fn lex_lt_family(&mut self) -> TokenKind {
        if self.cursor.match_byte(b'<') {
            if self.cursor.match_byte(b'=') {
                TokenKind::LtLtEq
            } else {
                TokenKind::LtLt
            }
        } else if self.cursor.match_byte(b'=') {
            TokenKind::LtEq
        } else {
            TokenKind::Lt
        }
    }

    fn lex_gt_family(&mut self) -> TokenKind {
        if self.cursor.match_byte(b'>') {
            if self.cursor.match_byte(b'=') {
                TokenKind::GtGtEq
            } else {
                TokenKind::GtGt
            }
        } else if self.cursor.match_byte(b'=') {
            TokenKind::GtEq
        } else {
            TokenKind::Gt
        }
    }
}
