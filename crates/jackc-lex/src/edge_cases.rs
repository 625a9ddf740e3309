//! Edge case and property tests for jackc-lex

#[cfg(test)]
mod tests {
    use crate::{scan, TokenKind, TokenStream};
    use proptest::prelude::*;

    #[test]
    fn test_edge_comment_only_source() {
        assert!(scan("// nothing here\n/* or\nhere */").is_empty());
    }

    #[test]
    fn test_edge_block_comment_unclosed_swallows_rest() {
        assert_eq!(scan("a /* open\nb\nc"), ["a"]);
    }

    #[test]
    fn test_edge_block_comment_reopens() {
        assert_eq!(scan("/* a */ x /* b\nstill b */ y"), ["x", "y"]);
    }

    #[test]
    fn test_edge_slash_is_a_token_when_not_a_comment() {
        assert_eq!(scan("a / b"), ["a", "/", "b"]);
    }

    #[test]
    fn test_edge_trailing_slash() {
        assert_eq!(scan("a /"), ["a", "/"]);
    }

    #[test]
    fn test_edge_shift_operators_scan_as_symbols() {
        let mut tokens = TokenStream::new("#x ^y");
        tokens.advance();
        assert_eq!(tokens.token_kind(), TokenKind::Symbol);
        assert_eq!(tokens.symbol(), "#");
        tokens.advance();
        tokens.advance();
        assert_eq!(tokens.symbol(), "^");
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        assert_eq!(scan(&name), [name.clone()]);
    }

    #[test]
    fn test_edge_bare_quote_is_a_string_token() {
        let mut tokens = TokenStream::new("\"");
        tokens.advance();
        assert_eq!(tokens.token_kind(), TokenKind::StringConst);
        assert_eq!(tokens.string_val(), "");
    }

    /// A small pool of lexemes to build sources from. Word-class lexemes
    /// (identifiers, keywords, numbers) must be separated by whitespace or a
    /// symbol to survive re-joining; always inserting a separator keeps the
    /// perturbations token-preserving.
    fn lexeme_pool() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("let".to_string()),
            Just("while".to_string()),
            Just("x".to_string()),
            Just("count_1".to_string()),
            Just("42".to_string()),
            Just("0".to_string()),
            Just(";".to_string()),
            Just("(".to_string()),
            Just(")".to_string()),
            Just("+".to_string()),
            Just("<".to_string()),
            Just("\"a b\"".to_string()),
        ]
    }

    fn whitespace_pool() -> impl Strategy<Value = String> {
        prop_oneof![
            Just(" ".to_string()),
            Just("\t".to_string()),
            Just("   ".to_string()),
            Just("\n".to_string()),
            Just(" \t ".to_string()),
        ]
    }

    proptest! {
        #[test]
        fn prop_whitespace_perturbation_preserves_tokens(
            lexemes in proptest::collection::vec(lexeme_pool(), 0..24),
            separators in proptest::collection::vec(whitespace_pool(), 24),
        ) {
            let canonical = lexemes.join(" ");
            let mut perturbed = String::new();
            for (lexeme, separator) in lexemes.iter().zip(&separators) {
                perturbed.push_str(lexeme);
                perturbed.push_str(separator);
            }
            prop_assert_eq!(scan(&canonical), scan(&perturbed));
        }

        #[test]
        fn prop_comment_stripping_is_idempotent(
            lexemes in proptest::collection::vec(lexeme_pool(), 0..24),
            pick_block in proptest::collection::vec(any::<bool>(), 24),
        ) {
            let plain = lexemes.join(" ");
            let mut commented = String::new();
            for (lexeme, block) in lexemes.iter().zip(&pick_block) {
                commented.push_str(lexeme);
                if *block {
                    commented.push_str(" /* noise ; 123 */ ");
                } else {
                    commented.push_str(" // noise ; 123\n");
                }
            }
            prop_assert_eq!(scan(&plain), scan(&commented));
        }

        #[test]
        fn prop_int_val_wraps_modulo_32768(n in 0u64..1_000_000_000_000) {
            let mut tokens = TokenStream::new(&n.to_string());
            tokens.advance();
            prop_assert_eq!(tokens.int_val(), (n % 32768) as u16);
        }

        #[test]
        fn prop_scanning_is_deterministic(source in "[ -~\n]{0,200}") {
            prop_assert_eq!(scan(&source), scan(&source));
        }
    }
}
