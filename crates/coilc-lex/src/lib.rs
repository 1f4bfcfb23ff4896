//! A single-pass, two-byte-lookahead C89/C99 lexical analyzer.
//!
//! [`Lexer`] turns a byte slice of already-preprocessed C source into a
//! stream of classified [`Token`]s — keywords, identifiers, literals,
//! punctuators, and operators — with source positions and decoded values.
//! Token payloads that can't simply borrow the source (decoded string
//! bodies) live in a caller-provided [`coilc_arena::Arena`].
//!
//! # Example
//!
//! ```
//! use coilc_arena::Arena;
//! use coilc_lex::{Lexer, TokenKind};
//!
//! let arena = Arena::create(256).unwrap();
//! let mut lexer = Lexer::create(b"int x = 42;", "main.c", &arena);
//!
//! assert_eq!(lexer.next().kind, TokenKind::Int);
//! assert_eq!(lexer.next().kind, TokenKind::Identifier);
//! assert_eq!(lexer.next().kind, TokenKind::Eq);
//! assert_eq!(lexer.next().kind, TokenKind::IntegerLiteral);
//! assert_eq!(lexer.next().kind, TokenKind::Semicolon);
//! assert_eq!(lexer.next().kind, TokenKind::Eof);
//! ```
//!
//! What this lexer does not do: preprocess (`#include`/`#define`/trigraphs),
//! intern token text, re-lex incrementally, or recognize wide strings,
//! digit separators, universal character names, or raw strings. Those stay
//! with the preprocessor and the parser this crate feeds.

mod classify;
mod comment;
mod cursor;
mod diagnostic;
mod identifier;
mod lexer;
mod location;
mod number;
mod operator;
mod string;
mod token;

pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use lexer::Lexer;
pub use location::SourceLocation;
pub use token::{Token, TokenKind, TokenValue};
