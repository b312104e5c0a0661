//! Integration tests for the parser
//!
//! Tests parsing of grammar-description text into syntax trees.

use gramdex_syntax::{Child, NodeKind, Tree, parse};

fn statements(source: &str) -> Vec<Tree> {
    parse(source)
        .unwrap()
        .children
        .into_iter()
        .filter_map(|c| match c {
            Child::Tree(tree) => Some(tree),
            _ => None,
        })
        .collect()
}

fn count(tree: &Tree, kind: NodeKind) -> usize {
    tree.iter_subtrees_topdown().filter(|t| t.kind == kind).count()
}

// =============================================================================
// Statements
// =============================================================================

#[test]
fn parse_empty_grammar() {
    let tree = parse("").unwrap();
    assert_eq!(tree.kind, NodeKind::Start);
    assert!(tree.children.is_empty());
}

#[test]
fn parse_comment_only_grammar() {
    let tree = parse("// nothing here\n\n# still nothing\n").unwrap();
    assert!(tree.children.is_empty());
}

#[test]
fn parse_statement_kinds() {
    let kinds: Vec<NodeKind> = statements(
        "start: a\nA: \"a\"\n%ignore \" \"\n%import common.WORD\n%import .lib (x, Y)\n%declare _INDENT\n%override start: b\n%extend A: \"b\"",
    )
    .iter()
    .map(|t| t.kind)
    .collect();
    assert_eq!(
        kinds,
        vec![
            NodeKind::Rule,
            NodeKind::Term,
            NodeKind::Ignore,
            NodeKind::Import,
            NodeKind::MultiImport,
            NodeKind::Declare,
            NodeKind::Override,
            NodeKind::Extend,
        ]
    );
}

#[test]
fn parse_rule_layout() {
    let rules = statements("pair{k, v}.2: k \":\" v");
    let rule = &rules[0];
    assert_eq!(rule.kind, NodeKind::Rule);
    assert_eq!(rule.children.len(), 4);
    assert_eq!(
        rule.children[0].as_token().and_then(|t| t.as_rule()),
        Some("pair")
    );
    assert_eq!(
        rule.children[1].as_tree().map(|t| t.kind),
        Some(NodeKind::TemplateParams)
    );
    assert!(rule.children[2].as_token().is_some());
    assert_eq!(
        rule.children[3].as_tree().map(|t| t.kind),
        Some(NodeKind::Expansions)
    );
}

#[test]
fn parse_marked_rule_names() {
    let names: Vec<String> = statements("!a: x\n_b: y\n?c: z\n!_d: w\n!?e: v")
        .iter()
        .filter_map(|r| r.first_child()?.as_token()?.as_rule().map(str::to_string))
        .collect();
    assert_eq!(names, ["!a", "_b", "?c", "!_d", "!?e"]);
}

// =============================================================================
// Alternatives and aliases
// =============================================================================

#[test]
fn every_alternative_is_an_alias_node() {
    let tree = parse("start: a | b -> named\n     | c").unwrap();
    let aliases: Vec<&Tree> = tree
        .iter_subtrees_topdown()
        .filter(|t| t.kind == NodeKind::Alias)
        .collect();
    assert_eq!(aliases.len(), 3);
    assert!(aliases.iter().all(|a| a.children.len() == 2));

    let targets: Vec<Option<&str>> = aliases
        .iter()
        .map(|a| a.children[1].as_token().and_then(|t| t.as_rule()))
        .collect();
    assert_eq!(targets, [None, Some("named"), None]);
}

#[test]
fn empty_alternative_is_allowed() {
    let tree = parse("opt: a |").unwrap();
    assert_eq!(count(&tree, NodeKind::Alias), 2);
}

#[test]
fn alias_in_terminal_is_rejected() {
    let err = parse("A: \"a\" -> b").unwrap_err();
    assert!(err.to_string().contains("aliases are only allowed in rule definitions"));
}

// =============================================================================
// Expressions
// =============================================================================

#[test]
fn parse_operators_groups_and_ranges() {
    let tree = parse("start: (a | b)* [c] \"0\"..\"9\" d ~ 2..3 e{f, \"g\"}").unwrap();
    assert_eq!(count(&tree, NodeKind::Expr), 2);
    assert_eq!(count(&tree, NodeKind::Maybe), 1);
    assert_eq!(count(&tree, NodeKind::Range), 1);
    assert_eq!(count(&tree, NodeKind::TemplateUsage), 1);
    // rule, group, optional group
    assert_eq!(count(&tree, NodeKind::Expansions), 3);
}

#[test]
fn parse_multiline_rule() {
    let tree = parse("?sum: product\n    | sum \"+\" product -> add\n    | sum \"-\" product -> sub\n").unwrap();
    assert_eq!(tree.children.len(), 1);
    assert_eq!(count(&tree, NodeKind::Alias), 3);
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn error_reports_line_and_source_line() {
    let err = parse("start: a\n\nbad rule").unwrap_err();
    assert!(err.is_parse_error());
    let (line, _) = err.position().unwrap();
    assert_eq!(line, 3);
    let gramdex_foundation::ErrorKind::ParseError { context, .. } = &err.kind else {
        panic!("expected parse error");
    };
    assert_eq!(context, "bad rule");
}

#[test]
fn error_on_unknown_directive() {
    let err = parse("%frobnicate x").unwrap_err();
    assert!(err.to_string().contains("unknown directive"));
}

#[test]
fn error_on_missing_colon() {
    assert!(parse("start a").is_err());
}

#[test]
fn error_on_unbalanced_group() {
    assert!(parse("start: (a b").is_err());
    assert!(parse("start: a b]").is_err());
}

#[test]
fn error_on_two_statements_on_one_line() {
    assert!(parse("a: b c: d").is_err());
}

#[test]
fn error_on_excessive_nesting() {
    let depth = 10_000;
    let source = format!("start: {}a{}", "(".repeat(depth), ")".repeat(depth));
    let err = parse(&source).unwrap_err();
    assert!(err.is_parse_error());
    assert!(err.to_string().contains("groups nested too deeply"));
    assert_eq!(err.position().map(|(line, _)| line), Some(1));
}
