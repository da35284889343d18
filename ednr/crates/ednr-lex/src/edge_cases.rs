//! Edge case tests for ednr-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, ErrorType, Lexer, Token, TokenKind};
    use ednr_util::Handler;

    fn lex_all(source: &str) -> Vec<Token<'_>> {
        let handler = Handler::new();
        Lexer::new(source, &handler).collect()
    }

    fn summary(source: &str) -> Vec<(TokenKind, &str)> {
        lex_all(source).iter().map(|t| (t.kind, t.text)).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_eof_is_idempotent() {
        let handler = Handler::new();
        let mut lexer = Lexer::new("ab", &handler);
        assert_eq!(lexer.next_token().text, "ab");
        for _ in 0..3 {
            assert_eq!(lexer.next_token(), Token::eof(3));
        }
        assert_eq!(lexer.next(), None);
        assert_eq!(lexer.position(), 3);
    }

    #[test]
    fn test_edge_only_whitespace() {
        assert_eq!(summary(" ,,\n\t"), vec![(TokenKind::Whitespace, " ,,\n\t")]);
    }

    #[test]
    fn test_edge_long_symbol() {
        let name = "a".repeat(10000);
        let tokens = lex_all(&name);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].len(), 10000);
    }

    #[test]
    fn test_edge_reserved_prefixes() {
        assert_eq!(
            summary("nil? true- falsey"),
            vec![
                (TokenKind::Symbol, "nil?"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Symbol, "true-"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Symbol, "falsey"),
            ]
        );
    }

    #[test]
    fn test_edge_sign_and_dot_without_digit() {
        assert_eq!(
            summary("- + . .x"),
            vec![
                (TokenKind::Symbol, "-"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Symbol, "+"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Symbol, "."),
                (TokenKind::Whitespace, " "),
                (TokenKind::Symbol, ".x"),
            ]
        );
    }

    #[test]
    fn test_edge_negative_number_in_vector() {
        assert_eq!(
            summary("[-1 +2]"),
            vec![
                (TokenKind::LBracket, "["),
                (TokenKind::Number, "-1"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Number, "+2"),
                (TokenKind::RBracket, "]"),
            ]
        );
    }

    #[test]
    fn test_edge_number_followed_by_keyword() {
        assert_eq!(
            summary("1:a"),
            vec![(TokenKind::Number, "1"), (TokenKind::Keyword, ":a")]
        );
    }

    #[test]
    fn test_edge_number_followed_by_string() {
        assert_eq!(
            summary("1\"a\""),
            vec![(TokenKind::Number, "1"), (TokenKind::String, "\"a\"")]
        );
    }

    #[test]
    fn test_edge_keyword_swallows_hash() {
        assert_eq!(summary(":a#{1}")[0], (TokenKind::Keyword, ":a#"));
    }

    #[test]
    fn test_edge_character_before_delimiter() {
        assert_eq!(
            summary("(\\))"),
            vec![
                (TokenKind::LParen, "("),
                (TokenKind::Character, "\\)"),
                (TokenKind::RParen, ")"),
            ]
        );
    }

    #[test]
    fn test_edge_unicode_escape_swallows_delimiter() {
        assert_eq!(
            summary("[\\u]"),
            vec![(TokenKind::LBracket, "["), (TokenKind::Character, "\\u]")]
        );
    }

    #[test]
    fn test_edge_backslash_at_eof() {
        assert_eq!(
            summary("a \\"),
            vec![
                (TokenKind::Symbol, "a"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Character, "\\"),
            ]
        );
    }

    #[test]
    fn test_edge_comment_without_newline() {
        assert_eq!(
            summary("1;x"),
            vec![(TokenKind::Number, "1"), (TokenKind::Comment, ";x")]
        );
    }

    #[test]
    fn test_edge_quadruple_colon() {
        let tokens = lex_all("::::a");
        assert_eq!(tokens[0].text, ":::");
        assert_eq!(tokens[0].error_type(), Some(ErrorType::InvalidKeyword));
        assert_eq!(tokens[1].kind, TokenKind::Keyword);
        assert_eq!(tokens[1].text, ":a");
    }

    #[test]
    fn test_edge_dispatch_error_stops_at_whitespace() {
        assert_eq!(
            summary("#(f %) 1"),
            vec![
                (TokenKind::LexError, "#(f"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Symbol, "%"),
                (TokenKind::RParen, ")"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Number, "1"),
            ]
        );
    }

    #[test]
    fn test_edge_reader_macros_are_unrecognized() {
        for source in ["'", "`", "~", "@", "^"] {
            let tokens = lex_all(source);
            assert_eq!(tokens.len(), 1, "{:?}", source);
            assert_eq!(
                tokens[0].error_type(),
                Some(ErrorType::UnrecognizedCharacter),
                "{:?}",
                source
            );
        }
    }

    #[test]
    fn test_edge_multibyte_offsets() {
        let tokens = tokenize("\"ü\" λ :k");
        let starts: Vec<usize> = tokens.iter().map(|t| t.start).collect();
        assert_eq!(starts, vec![1, 4, 5, 6, 7, 9]);
    }

    #[test]
    fn test_edge_crlf_line_endings() {
        assert_eq!(
            summary("a\r\nb"),
            vec![
                (TokenKind::Symbol, "a"),
                (TokenKind::Whitespace, "\r\n"),
                (TokenKind::Symbol, "b"),
            ]
        );
    }

    #[test]
    fn test_edge_error_recovery_continues() {
        let tokens = lex_all("[1x \"ok\" #! :::k ~ \"open");
        let errors: Vec<Option<ErrorType>> = tokens
            .iter()
            .filter(|t| t.is_error())
            .map(|t| t.error_type())
            .collect();
        assert_eq!(
            errors,
            vec![
                Some(ErrorType::InvalidNumberFormat),
                Some(ErrorType::InvalidHashtagDispatcher),
                Some(ErrorType::InvalidKeyword),
                Some(ErrorType::UnrecognizedCharacter),
                None,
            ]
        );
        assert!(tokens.iter().any(|t| t.text == "\"ok\""));
    }
}
