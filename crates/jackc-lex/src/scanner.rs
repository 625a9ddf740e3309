//! Raw lexeme scanning.
//!
//! The scanner works line by line, carrying a single flag across lines for
//! block comments. Within a line it strips `//` and `/* */` comments, keeps
//! string literals intact (quote marks included), and otherwise cuts the
//! text with the greedy alternation "word-character run, or one single
//! non-word non-space character".

/// Line scanner with cross-line block-comment state.
///
/// # Example
///
/// ```
/// use jackc_lex::Scanner;
///
/// let mut scanner = Scanner::new();
/// let mut lexemes = Vec::new();
/// scanner.scan_line("let x = 42; // trailing", &mut lexemes);
/// assert_eq!(lexemes, ["let", "x", "=", "42", ";"]);
/// ```
#[derive(Debug, Default)]
pub struct Scanner {
    /// Whether the cursor is inside a `/* */` comment spanning lines.
    in_block_comment: bool,
}

impl Scanner {
    /// Creates a scanner outside of any comment.
    pub fn new() -> Scanner {
        Scanner {
            in_block_comment: false,
        }
    }

    /// Scans one source line, appending its raw lexemes to `lexemes`.
    ///
    /// `line` must not contain a line terminator.
    pub fn scan_line(&mut self, line: &str, lexemes: &mut Vec<String>) {
        let bytes = line.as_bytes();
        let mut i = 0;

        while i < bytes.len() {
            if self.in_block_comment {
                match line[i..].find("*/") {
                    Some(offset) => {
                        self.in_block_comment = false;
                        i += offset + 2;
                    }
                    None => break,
                }
            } else if bytes[i] == b'/' && i + 1 < bytes.len() && bytes[i + 1] == b'*' {
                self.in_block_comment = true;
                i += 2;
            } else if bytes[i] == b'"' || bytes[i] == b'\'' {
                i = self.scan_string(line, i, lexemes);
            } else if bytes[i] == b'/' && i + 1 < bytes.len() && bytes[i + 1] == b'/' {
                break;
            } else if bytes[i].is_ascii_whitespace() {
                i += 1;
            } else if is_word_byte(bytes[i]) {
                let start = i;
                while i < bytes.len() && is_word_byte(bytes[i]) {
                    i += 1;
                }
                lexemes.push(line[start..i].to_string());
            } else {
                // one non-word character is one lexeme
                let Some(c) = line[i..].chars().next() else {
                    break;
                };
                if !c.is_whitespace() {
                    lexemes.push(c.to_string());
                }
                i += c.len_utf8();
            }
        }
    }

    /// Scans a string literal starting at the quote at byte `start`.
    ///
    /// A backslash before the closing quote keeps the literal open. When the
    /// line ends before the closing quote, the rest of the line is kept as
    /// the lexeme (tolerated recovery). Returns the byte index after the
    /// consumed text.
    fn scan_string(&mut self, line: &str, start: usize, lexemes: &mut Vec<String>) -> usize {
        let bytes = line.as_bytes();
        let quote = bytes[start];
        let mut end = start + 1;
        while end < bytes.len() && (bytes[end] != quote || bytes[end - 1] == b'\\') {
            end += 1;
        }
        if end < bytes.len() {
            lexemes.push(line[start..=end].to_string());
            end + 1
        } else {
            lexemes.push(line[start..].to_string());
            bytes.len()
        }
    }
}

/// Splits source text into raw lexemes.
///
/// Handles Unix and DOS line endings; block comments may span lines.
pub fn scan(source: &str) -> Vec<String> {
    let mut scanner = Scanner::new();
    let mut lexemes = Vec::new();
    for line in source.lines() {
        scanner.scan_line(line, &mut lexemes);
    }
    lexemes
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
