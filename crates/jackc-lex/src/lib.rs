//! jackc-lex - Lexical Analyzer for the Jack Language
//!
//! ============================================================================
//! LEXICAL ANALYSIS OVERVIEW
//! ============================================================================
//!
//! Lexical analysis is the first phase of compilation. It transforms a stream
//! of characters into a stream of tokens that the compilation engine can walk
//! with one-token lookahead.
//!
//! Example:
//! ```text
//! Source: "let x = 5;"
//!
//! Lexemes:  "let", "x", "=", "5", ";"
//! Tokens:   [Keyword] [Identifier] [Symbol] [IntConst] [Symbol]
//! ```
//!
//! TOKEN CATEGORIES:
//! -----------------
//! 1. KEYWORDS - the 21 reserved words (`class`, `let`, `while`, ...)
//! 2. SYMBOLS - the 21 punctuation characters (`{`, `;`, `+`, ...)
//! 3. INTEGER CONSTANTS - decimal literals, reduced modulo 32768 on read
//! 4. STRING CONSTANTS - quote-delimited byte sequences, escapes kept verbatim
//! 5. IDENTIFIERS - everything else matching `[A-Za-z0-9_]+`
//!
//! PIPELINE:
//! ---------
//! The crate is split along the two halves of the job:
//!
//! - [`scanner`] cuts raw source lines into raw lexemes, stripping `//` and
//!   `/* */` comments and honoring string literals (including the
//!   unterminated-string recovery at end of line).
//! - [`stream`] classifies each lexeme and exposes the cursor-based
//!   [`TokenStream`] with typed accessors and single-token lookahead.
//!
//! The scanner never fails: malformed input produces a best-effort lexeme
//! sequence, and any misuse of a typed accessor is a caller bug that panics
//! with an identifying message.

mod edge_cases;
pub mod scanner;
pub mod stream;
pub mod token;

pub use scanner::{scan, Scanner};
pub use stream::TokenStream;
pub use token::{Keyword, Token, TokenKind, KEYWORDS, SYMBOLS};
