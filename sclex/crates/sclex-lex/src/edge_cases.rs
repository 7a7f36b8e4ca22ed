//! Edge case tests for sclex-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, Token, TokenKind};

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).into_iter().map(|t| t.kind).collect()
    }

    fn texts(source: &str) -> Vec<String> {
        tokenize(source).into_iter().map(|t| t.text).collect()
    }

    // ==================== KEYWORDS ====================

    #[test]
    fn test_edge_keyword_before_punctuation() {
        assert_eq!(kinds("int("), [TokenKind::Int, TokenKind::LeftParen]);
        assert_eq!(kinds("int;"), [TokenKind::Int, TokenKind::SemiColon]);
        assert_eq!(kinds("if("), [TokenKind::If, TokenKind::LeftParen]);
    }

    #[test]
    fn test_edge_keyword_at_end_of_input() {
        assert_eq!(kinds("int"), [TokenKind::Int]);
        assert_eq!(kinds("x else"), [TokenKind::Identifier, TokenKind::Else]);
    }

    #[test]
    fn test_edge_keyword_lookalikes() {
        assert_eq!(
            kinds("if else iff elsewhere"),
            [
                TokenKind::If,
                TokenKind::Else,
                TokenKind::Identifier,
                TokenKind::Identifier
            ]
        );
        assert_eq!(texts("int2 i1 in0 els"), ["int2", "i1", "in0", "els"]);
        assert!(kinds("int2 i1 in0 els")
            .iter()
            .all(|k| *k == TokenKind::Identifier));
    }

    #[test]
    fn test_edge_case_sensitivity() {
        assert_eq!(kinds("Int INT int"), [TokenKind::Identifier, TokenKind::Identifier, TokenKind::Int]);
    }

    #[test]
    fn test_edge_keyword_glued_to_operator() {
        assert_eq!(
            kinds("int+1"),
            [TokenKind::Int, TokenKind::Plus, TokenKind::IntLiteral]
        );
    }

    // ==================== OPERATORS ====================

    #[test]
    fn test_edge_ge_followed_by_non_blank() {
        assert_eq!(
            tokenize(">=x"),
            vec![
                Token::new(TokenKind::Ge, ">=", sclex_util::Span::new(0, 2, 1, 1)),
                Token::new(TokenKind::Identifier, "x", sclex_util::Span::new(2, 3, 1, 3)),
            ]
        );
    }

    #[test]
    fn test_edge_relational_family() {
        assert_eq!(
            kinds("a <= b == c < d > e"),
            [
                TokenKind::Identifier,
                TokenKind::Le,
                TokenKind::Identifier,
                TokenKind::Eq,
                TokenKind::Identifier,
                TokenKind::Lt,
                TokenKind::Identifier,
                TokenKind::Gt,
                TokenKind::Identifier,
            ]
        );
    }

    #[test]
    fn test_edge_three_equals() {
        assert_eq!(texts("==="), ["==", "="]);
        assert_eq!(kinds("==="), [TokenKind::Eq, TokenKind::Assignment]);
    }

    #[test]
    fn test_edge_ge_then_equals() {
        assert_eq!(kinds(">=="), [TokenKind::Ge, TokenKind::Assignment]);
    }

    #[test]
    fn test_edge_repeated_single_char_operators() {
        assert_eq!(texts("++--**//"), ["+", "+", "-", "-", "*", "*", "/", "/"]);
        assert_eq!(texts(";;"), [";", ";"]);
    }

    #[test]
    fn test_edge_nested_parens() {
        let t = kinds("((()))");
        assert_eq!(t.iter().filter(|k| **k == TokenKind::LeftParen).count(), 3);
        assert_eq!(t.iter().filter(|k| **k == TokenKind::RightParen).count(), 3);
    }

    #[test]
    fn test_edge_right_paren_redispatches() {
        assert_eq!(
            kinds(")x"),
            [TokenKind::RightParen, TokenKind::Identifier]
        );
    }

    #[test]
    fn test_edge_no_spaces() {
        assert_eq!(texts("a=b*(c+12);"), ["a", "=", "b", "*", "(", "c", "+", "12", ")", ";"]);
    }

    // ==================== LITERALS ====================

    #[test]
    fn test_edge_leading_zeros_kept() {
        assert_eq!(texts("007"), ["007"]);
    }

    #[test]
    fn test_edge_number_then_identifier() {
        assert_eq!(kinds("45abc"), [TokenKind::IntLiteral, TokenKind::Identifier]);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10_000);
        let tokens = tokenize(&format!("int {} = 1;", name));
        assert_eq!(tokens[1].text, name);
    }

    #[test]
    fn test_edge_empty_string() {
        assert_eq!(texts("\"\""), ["\"\""]);
        assert_eq!(kinds("\"\""), [TokenKind::StringLiteral]);
    }

    #[test]
    fn test_edge_string_keeps_everything_inside() {
        assert_eq!(texts("\"int # x\n\" y"), ["\"int # x\n\"", "y"]);
    }

    #[test]
    fn test_edge_adjacent_strings() {
        assert_eq!(texts("\"a\"\"b\""), ["\"a\"", "\"b\""]);
    }

    // ==================== UNRECOGNIZED INPUT ====================

    #[test]
    fn test_edge_unknown_symbols_dropped() {
        assert_eq!(texts("a # b $ c"), ["a", "b", "c"]);
    }

    #[test]
    fn test_edge_unknown_symbol_splits_identifier() {
        assert_eq!(texts("ab#cd"), ["ab", "cd"]);
    }

    #[test]
    fn test_edge_non_ascii_letters_dropped() {
        assert_eq!(texts("café"), ["caf"]);
        assert!(tokenize("éèê").is_empty());
    }

    #[test]
    fn test_edge_underscore_is_not_identifier() {
        assert_eq!(texts("a_b"), ["a", "b"]);
    }

    #[test]
    fn test_edge_unknown_only() {
        assert!(tokenize("#@$%^&").is_empty());
    }

    // ==================== POSITIONS ====================

    #[test]
    fn test_edge_multiline_positions() {
        let tokens = tokenize("int a;\n  a = 1;");
        let second_a = &tokens[3];
        assert_eq!(second_a.text, "a");
        assert_eq!(second_a.span.line, 2);
        assert_eq!(second_a.span.column, 3);
        assert_eq!(second_a.span.start, 9);
    }

    #[test]
    fn test_edge_crlf_is_blank() {
        assert_eq!(texts("int a;\r\nb"), ["int", "a", ";", "b"]);
    }
}
