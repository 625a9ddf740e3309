//! The indexed token stream and its typed accessors.

use crate::scanner::scan;
use crate::token::{Keyword, Token, TokenKind};

/// An immutable token sequence with a cursor.
///
/// The cursor starts before the first token; [`TokenStream::advance`] is the
/// only operation that moves it. All other accessors read the current token
/// (or, for [`TokenStream::peek`], the one after it) without side effects.
///
/// Typed accessors require the current token to be of the matching kind;
/// calling one on the wrong kind is a caller bug and panics.
///
/// # Example
///
/// ```
/// use jackc_lex::{TokenKind, TokenStream};
///
/// let mut tokens = TokenStream::new("let x = 42;");
/// tokens.advance();
/// assert_eq!(tokens.token_kind(), TokenKind::Keyword);
/// assert_eq!(tokens.raw(), "let");
/// assert_eq!(tokens.peek(), "x");
/// ```
#[derive(Debug)]
pub struct TokenStream {
    tokens: Vec<Token>,
    /// `None` until the first `advance`.
    cursor: Option<usize>,
}

impl TokenStream {
    /// Scans and classifies `source` into a stream positioned before the
    /// first token.
    pub fn new(source: &str) -> TokenStream {
        let tokens = scan(source).into_iter().map(Token::new).collect();
        TokenStream {
            tokens,
            cursor: None,
        }
    }

    /// Whether `advance` has another token to move to.
    pub fn has_more(&self) -> bool {
        match self.cursor {
            None => !self.tokens.is_empty(),
            Some(index) => index + 1 < self.tokens.len(),
        }
    }

    /// Moves the cursor to the next token. Does nothing at the end.
    pub fn advance(&mut self) {
        if self.has_more() {
            self.cursor = Some(match self.cursor {
                None => 0,
                Some(index) => index + 1,
            });
        }
    }

    fn current(&self) -> &Token {
        match self.cursor {
            Some(index) => &self.tokens[index],
            None => panic!("advance() must be called before reading the current token"),
        }
    }

    /// Classification of the current token.
    pub fn token_kind(&self) -> TokenKind {
        self.current().kind
    }

    /// The raw lexeme of the current token.
    pub fn raw(&self) -> &str {
        &self.current().text
    }

    /// The raw lexeme one past the current token, without advancing.
    ///
    /// Returns the empty string when no such token exists.
    pub fn peek(&self) -> &str {
        let next = match self.cursor {
            None => self.tokens.first(),
            Some(index) => self.tokens.get(index + 1),
        };
        next.map_or("", |token| token.text.as_str())
    }

    /// The current token as a [`Keyword`].
    pub fn keyword(&self) -> Keyword {
        let token = self.current();
        match Keyword::from_lexeme(&token.text) {
            Some(keyword) => keyword,
            None => panic!("current token '{}' is not a keyword", token.text),
        }
    }

    /// The current symbol character.
    ///
    /// `<`, `>`, and `&` are reported in their encoded forms `&lt;`, `&gt;`,
    /// and `&amp;`; operator tables downstream are keyed on these.
    pub fn symbol(&self) -> &'static str {
        match self.current().text.as_str() {
            "{" => "{",
            "}" => "}",
            "(" => "(",
            ")" => ")",
            "[" => "[",
            "]" => "]",
            "." => ".",
            "," => ",",
            ";" => ";",
            "+" => "+",
            "-" => "-",
            "*" => "*",
            "/" => "/",
            "&" => "&amp;",
            "|" => "|",
            "<" => "&lt;",
            ">" => "&gt;",
            "=" => "=",
            "~" => "~",
            "^" => "^",
            "#" => "#",
            other => panic!("current token '{}' is not a symbol", other),
        }
    }

    /// The current identifier lexeme.
    pub fn identifier(&self) -> &str {
        let token = self.current();
        if token.kind != TokenKind::Identifier {
            panic!("current token '{}' is not an identifier", token.text);
        }
        &token.text
    }

    /// The current integer literal, reduced modulo 32768.
    ///
    /// The reduction is folded into the decimal parse, so literals of any
    /// length stay in range.
    pub fn int_val(&self) -> u16 {
        let token = self.current();
        if token.kind != TokenKind::IntConst {
            panic!("current token '{}' is not an integer literal", token.text);
        }
        let value = token
            .text
            .bytes()
            .fold(0u32, |acc, b| (acc * 10 + u32::from(b - b'0')) % 32768);
        value as u16
    }

    /// The current string literal without its surrounding quote marks.
    pub fn string_val(&self) -> &str {
        let token = self.current();
        if token.kind != TokenKind::StringConst {
            panic!("current token '{}' is not a string literal", token.text);
        }
        if token.text.len() >= 2 {
            &token.text[1..token.text.len() - 1]
        } else {
            ""
        }
    }
}
