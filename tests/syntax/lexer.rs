//! Integration tests for the lexer
//!
//! Tests tokenization of grammar-description text.

use gramdex_syntax::{Lexer, TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    Lexer::tokenize_all(source)
        .into_iter()
        .map(|t| t.kind)
        .filter(|k| !k.is_trivia())
        .collect()
}

fn rule(name: &str) -> TokenKind {
    TokenKind::Rule(name.to_string())
}

fn terminal(name: &str) -> TokenKind {
    TokenKind::Terminal(name.to_string())
}

// =============================================================================
// Names and markers
// =============================================================================

#[test]
fn lex_rule_definition() {
    assert_eq!(
        kinds("expr: term"),
        vec![rule("expr"), TokenKind::Colon, rule("term"), TokenKind::Eof]
    );
}

#[test]
fn lex_markers_at_statement_start() {
    assert_eq!(
        kinds("!_item: a\n?expr: b"),
        vec![
            rule("!_item"),
            TokenKind::Colon,
            rule("a"),
            TokenKind::Newline,
            rule("?expr"),
            TokenKind::Colon,
            rule("b"),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn lex_question_after_item_is_operator() {
    assert_eq!(
        kinds("a: b?"),
        vec![
            rule("a"),
            TokenKind::Colon,
            rule("b"),
            TokenKind::Question,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn lex_inner_prefix_anywhere() {
    assert_eq!(
        kinds("a: _b _C"),
        vec![rule("a"), TokenKind::Colon, rule("_b"), terminal("_C"), TokenKind::Eof]
    );
}

#[test]
fn lex_mixed_case_name_is_error() {
    let tokens = kinds("Mixed: a");
    assert!(matches!(tokens[0], TokenKind::Error(_)));
}

// =============================================================================
// Literals
// =============================================================================

#[test]
fn lex_strings_and_regexps() {
    assert_eq!(
        kinds(r#""if"i /\d+/x"#),
        vec![
            TokenKind::String {
                text: "if".to_string(),
                case_insensitive: true,
            },
            TokenKind::Regexp {
                pattern: r"\d+".to_string(),
                flags: "x".to_string(),
            },
            TokenKind::Eof,
        ]
    );
}

#[test]
fn lex_numbers_and_ranges() {
    assert_eq!(
        kinds("a.-1: b ~ 2..3"),
        vec![
            rule("a"),
            TokenKind::Dot,
            TokenKind::Number(-1),
            TokenKind::Colon,
            rule("b"),
            TokenKind::Tilde,
            TokenKind::Number(2),
            TokenKind::DotDot,
            TokenKind::Number(3),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn lex_unterminated_string_is_error() {
    let tokens = kinds("a: \"open");
    assert!(tokens.iter().any(|k| matches!(k, TokenKind::Error(_))));
}

// =============================================================================
// Line structure
// =============================================================================

#[test]
fn lex_blank_lines_collapse() {
    assert_eq!(
        kinds("a: b\n\n\n// comment\n\nc: d"),
        vec![
            rule("a"),
            TokenKind::Colon,
            rule("b"),
            TokenKind::Newline,
            rule("c"),
            TokenKind::Colon,
            rule("d"),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn lex_pipe_on_next_line_continues() {
    assert_eq!(
        kinds("a: b\n  | c\n\n  | d"),
        vec![
            rule("a"),
            TokenKind::Colon,
            rule("b"),
            TokenKind::Pipe,
            rule("c"),
            TokenKind::Pipe,
            rule("d"),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn lex_directives() {
    let tokens = kinds("%import common.NUMBER\n%ignore WS");
    assert_eq!(tokens[0], TokenKind::Directive("import".to_string()));
    assert!(tokens.contains(&TokenKind::Directive("ignore".to_string())));
}

#[test]
fn lex_spans_track_lines() {
    let tokens = Lexer::tokenize_all("a: b\n\nc: d");
    let c = tokens
        .iter()
        .find(|t| t.kind == rule("c"))
        .expect("c is lexed");
    assert_eq!((c.span.line, c.span.column), (3, 1));
}
