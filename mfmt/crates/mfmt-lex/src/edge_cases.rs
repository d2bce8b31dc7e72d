//! Edge case tests for mfmt-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, tokenize_with_handler, Lexer, Token, TokenKind};
    use mfmt_util::Handler;

    fn lex_all(source: &str) -> Vec<Token> {
        let mut handler = Handler::new();
        Lexer::new(source, &mut handler).collect()
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex_all(source).iter().map(Token::kind).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
        assert_eq!(tokenize("").len(), 1);
    }

    #[test]
    fn test_edge_whitespace_only() {
        let tokens = tokenize(" \t\n\r\n ");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].line(), 3);
    }

    #[test]
    fn test_edge_single_char_ident() {
        assert_eq!(kinds("x"), vec![TokenKind::Ident]);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let t = lex_all(&format!("{} = 1;", name));
        assert_eq!(t[0].lexeme(), name);
    }

    #[test]
    fn test_edge_long_number() {
        let digits = "9".repeat(5000);
        let t = lex_all(&digits);
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].kind(), TokenKind::Int);
    }

    #[test]
    fn test_edge_dot_at_end_of_input() {
        assert_eq!(kinds("x."), vec![TokenKind::Ident, TokenKind::Period]);
    }

    #[test]
    fn test_edge_double_dot_at_end_of_input() {
        let t = lex_all("x..");
        assert_eq!(t[1].kind(), TokenKind::Illegal);
        assert_eq!(t[1].lexeme(), "..");
    }

    #[test]
    fn test_edge_field_access() {
        assert_eq!(
            kinds("s.field.x"),
            vec![
                TokenKind::Ident,
                TokenKind::Period,
                TokenKind::Ident,
                TokenKind::Period,
                TokenKind::Ident
            ]
        );
    }

    #[test]
    fn test_edge_number_then_elementwise_operator() {
        // The dot is claimed by the number, so this is not `1 .* 2`.
        let t = lex_all("1.*2");
        assert_eq!(t[0].lexeme(), "1.");
        assert_eq!(t[0].kind(), TokenKind::Illegal);
        assert_eq!(t[1].kind(), TokenKind::Mul);
        assert_eq!(t[2].kind(), TokenKind::Int);
    }

    #[test]
    fn test_edge_number_then_transpose_after_space() {
        assert_eq!(
            kinds("A .' * 2"),
            vec![TokenKind::Ident, TokenKind::Transp, TokenKind::Mul, TokenKind::Int]
        );
    }

    #[test]
    fn test_edge_range() {
        assert_eq!(
            kinds("1:0.5:10"),
            vec![
                TokenKind::Int,
                TokenKind::Colon,
                TokenKind::Float,
                TokenKind::Colon,
                TokenKind::Int
            ]
        );
    }

    #[test]
    fn test_edge_exponent_plus_sign() {
        let t = lex_all("1e+5");
        let lexemes: Vec<&str> = t.iter().map(Token::lexeme).collect();
        assert_eq!(lexemes, vec!["1e", "+", "5"]);
        assert_eq!(t[0].kind(), TokenKind::Illegal);
    }

    #[test]
    fn test_edge_malformed_exponent_then_imaginary() {
        let t = lex_all("1ei");
        assert_eq!(t[0].lexeme(), "1e");
        assert_eq!(t[1].kind(), TokenKind::Ident);
        assert_eq!(t[1].lexeme(), "i");
    }

    #[test]
    fn test_edge_ellipsis_continuation() {
        let t = lex_all("A = [1,2,...\n3,4];");
        let ellipsis = t.iter().position(|t| t.kind() == TokenKind::Ellipsis).unwrap();
        assert_eq!(t[ellipsis].line(), 1);
        assert_eq!(t[ellipsis + 1].line(), 2);
    }

    #[test]
    fn test_edge_crlf_lines() {
        let t = lex_all("a\r\nb\r\nc");
        let lines: Vec<u32> = t.iter().map(Token::line).collect();
        assert_eq!(lines, vec![1, 2, 3]);
    }

    #[test]
    fn test_edge_lone_carriage_returns_do_not_count() {
        let t = lex_all("a\rb\rc");
        assert!(t.iter().all(|t| t.line() == 1));
    }

    #[test]
    fn test_edge_non_breaking_space_is_illegal() {
        assert_eq!(
            kinds("a\u{A0}b"),
            vec![TokenKind::Ident, TokenKind::Illegal, TokenKind::Ident]
        );
    }

    #[test]
    fn test_edge_byte_order_mark_is_illegal() {
        let t = lex_all("\u{FEFF}x");
        assert_eq!(t[0].kind(), TokenKind::Illegal);
        assert_eq!(t[1].span().column, 2);
    }

    #[test]
    fn test_edge_comment_chars_are_illegal() {
        assert_eq!(kinds("%"), vec![TokenKind::Illegal]);
        assert_eq!(kinds("x'"), vec![TokenKind::Ident, TokenKind::Illegal]);
        assert_eq!(kinds("\"s\""), vec![TokenKind::Illegal, TokenKind::Ident, TokenKind::Illegal]);
    }

    #[test]
    fn test_edge_keywords_not_idents() {
        assert_eq!(
            kinds("function end"),
            vec![TokenKind::Function, TokenKind::End]
        );
    }

    #[test]
    fn test_edge_consec_ops() {
        assert_eq!(
            kinds("+++"),
            vec![TokenKind::Add, TokenKind::Add, TokenKind::Add]
        );
        assert_eq!(kinds("<=="), vec![TokenKind::Leq, TokenKind::Assign]);
    }

    #[test]
    fn test_err_mixed_valid_invalid() {
        let mut h = Handler::new();
        let tokens = tokenize_with_handler("x = # 1;", &mut h);
        assert_eq!(tokens.len(), 6);
        assert_eq!(h.error_count(), 1);
    }

    #[test]
    fn test_err_clean_source_has_no_diagnostics() {
        let mut h = Handler::new();
        tokenize_with_handler("y = x.^2 ./ (1 + abs(x));", &mut h);
        assert!(!h.has_errors());
    }

    // ==================== PROPERTIES ====================

    mod properties {
        use crate::{tokenize, TokenKind};
        use proptest::prelude::*;

        /// Rebuilds the source from lexemes, filling the gaps from the
        /// original text. Every gap must be whitespace.
        fn reconstruct(source: &str) -> String {
            let mut out = String::new();
            let mut offset = 0;
            for token in tokenize(source) {
                let span = token.span();
                let gap = &source[offset..span.start];
                assert!(
                    gap.chars().all(|c| matches!(c, ' ' | '\t' | '\r' | '\n' | '\u{0B}' | '\u{0C}')),
                    "non-whitespace gap {:?}",
                    gap
                );
                out.push_str(gap);
                out.push_str(token.lexeme());
                offset = span.end;
            }
            out
        }

        fn matlab_like() -> impl Strategy<Value = String> {
            proptest::string::string_regex(r"[a-zA-Z0-9_ .,;:=<>~&|+\-*/\\^'@()\[\]{}eij\n\t\r%]{0,64}")
                .expect("valid regex")
        }

        proptest! {
            #[test]
            fn prop_totality(source in any::<String>()) {
                let tokens = tokenize(&source);
                prop_assert!(!tokens.is_empty());
                prop_assert_eq!(tokens.last().map(|t| t.kind()), Some(TokenKind::Eof));
                prop_assert_eq!(tokens.iter().filter(|t| t.is_eof()).count(), 1);
            }

            #[test]
            fn prop_coverage_arbitrary(source in any::<String>()) {
                prop_assert_eq!(reconstruct(&source), source);
            }

            #[test]
            fn prop_coverage_matlab_like(source in matlab_like()) {
                prop_assert_eq!(reconstruct(&source), source);
            }

            #[test]
            fn prop_lines_are_monotonic(source in matlab_like()) {
                let tokens = tokenize(&source);
                for pair in tokens.windows(2) {
                    prop_assert!(pair[0].line() <= pair[1].line());
                }
                let newlines = source.matches('\n').count() as u32;
                prop_assert_eq!(tokens.last().map(|t| t.line()), Some(newlines + 1));
            }

            #[test]
            fn prop_line_is_newlines_before_token(source in matlab_like()) {
                for token in tokenize(&source) {
                    let before = source[..token.span().start].matches('\n').count() as u32;
                    prop_assert_eq!(token.line(), before + 1);
                }
            }

            #[test]
            fn prop_identifier_maximal_munch(word in "[a-zA-Z][a-zA-Z0-9_]{0,30}") {
                let tokens = tokenize(&word);
                prop_assert_eq!(tokens.len(), 2);
                prop_assert_eq!(tokens[0].lexeme(), word.as_str());
                prop_assert!(matches!(tokens[0].kind(), TokenKind::Ident) || tokens[0].kind().is_keyword());
            }

            #[test]
            fn prop_integer_literal(digits in "[0-9]{1,40}") {
                let tokens = tokenize(&digits);
                prop_assert_eq!(tokens[0].kind(), TokenKind::Int);
                prop_assert_eq!(tokens[0].lexeme(), digits.as_str());
            }

            #[test]
            fn prop_float_literal(int in "[0-9]{0,5}", frac in "[0-9]{1,5}", exp in proptest::option::of("-?[0-9]{1,3}")) {
                let text = match exp {
                    Some(exp) => format!("{}.{}e{}", int, frac, exp),
                    None => format!("{}.{}", int, frac),
                };
                let tokens = tokenize(&text);
                prop_assert_eq!(tokens.len(), 2);
                prop_assert_eq!(tokens[0].kind(), TokenKind::Float);
                prop_assert_eq!(tokens[0].lexeme(), text.as_str());
            }

            #[test]
            fn prop_illegal_tokens_are_non_empty(source in matlab_like()) {
                for token in tokenize(&source) {
                    if token.is_illegal() {
                        prop_assert!(!token.lexeme().is_empty());
                    }
                }
            }
        }
    }
}
