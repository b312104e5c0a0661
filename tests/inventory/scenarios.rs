//! The reference scenarios for rule-name inventory.
//!
//! All of them use one grammar declaring `start`, `_item` (inner), `?expr`
//! (conditional), `!token` (pinned) and an alternative aliased to `bar`.

use gramdex_inventory::{FilterPolicy, assemble, collect, rule_names};
use gramdex_syntax::{Child, NodeKind, Span, Token, TokenKind, Tree};

const GRAMMAR: &str = "\
start: _item expr token -> bar
_item: \"i\"
?expr: \"e\"
!token: \"t\"
";

fn names(policy: &FilterPolicy) -> Vec<String> {
    rule_names(GRAMMAR, policy).unwrap()
}

fn name(spelling: &str) -> Child {
    Child::Token(Token::new(TokenKind::Rule(spelling.to_string()), Span::default()))
}

fn node(kind: NodeKind, children: Vec<Child>) -> Tree {
    Tree::new(kind, children, Span::default())
}

fn rule(spelling: &str) -> Child {
    let alias = node(NodeKind::Alias, vec![node(NodeKind::Expansion, vec![]).into(), Child::Absent]);
    let body = node(NodeKind::Expansions, vec![alias.into()]);
    node(
        NodeKind::Rule,
        vec![name(spelling), Child::Absent, Child::Absent, body.into()],
    )
    .into()
}

#[test]
fn default_policy() {
    assert_eq!(names(&FilterPolicy::default()), ["start", "token", "bar"]);
}

#[test]
fn show_inner_adds_item_in_place() {
    assert_eq!(
        names(&FilterPolicy::default().with_inner(true)),
        ["start", "item", "token", "bar"]
    );
}

#[test]
fn hide_alias_removes_bar() {
    assert_eq!(
        names(&FilterPolicy::default().with_alias(false)),
        ["start", "token"]
    );
}

#[test]
fn zero_declarations() {
    let tree = node(NodeKind::Start, vec![]);
    assert!(assemble(&collect(&tree), &FilterPolicy::default()).is_empty());
    assert!(rule_names("", &FilterPolicy::everything()).unwrap().is_empty());
}

#[test]
fn duplicate_rule_spelling() {
    let tree = node(NodeKind::Start, vec![rule("dup"), rule("other"), rule("dup")]);
    assert_eq!(
        assemble(&collect(&tree), &FilterPolicy::default()),
        ["dup", "other"]
    );
}

#[test]
fn alias_without_target() {
    let alias = node(NodeKind::Alias, vec![node(NodeKind::Expansion, vec![]).into(), Child::Absent]);
    let tree = node(NodeKind::Start, vec![alias.into()]);
    let collected = collect(&tree);
    assert!(collected.rule_names().is_empty());
    assert!(collected.alias_names().is_empty());
}
