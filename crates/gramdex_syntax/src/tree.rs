//! Syntax tree for grammar-description text.
//!
//! The tree is deliberately generic: every node carries a [`NodeKind`] tag
//! and an ordered list of [`Child`] values. Optional parts that were not
//! written stay in place as [`Child::Absent`], so each node kind has a fixed
//! child layout (see [`NodeKind`]).

use crate::span::Span;
use crate::token::Token;

/// The syntactic construct a tree node stands for.
///
/// Child layouts, in order:
///
/// | Kind            | Children                                                      |
/// |-----------------|---------------------------------------------------------------|
/// | `Start`         | one node per statement                                        |
/// | `Rule`          | rule name, `TemplateParams` or absent, priority or absent, `Expansions` |
/// | `Term`          | terminal name, priority or absent, `Expansions`               |
/// | `TemplateParams`| rule names                                                    |
/// | `Expansions`    | one `Alias` per alternative                                   |
/// | `Alias`         | `Expansion`, alias name or absent                             |
/// | `Expansion`     | items (possibly none)                                         |
/// | `Expr`          | atom, operator; or atom, count, upper count or absent         |
/// | `Maybe`         | `Expansions`                                                  |
/// | `Range`         | two strings                                                   |
/// | `TemplateUsage` | rule name, arguments                                          |
/// | `Ignore`        | `Expansions`                                                  |
/// | `Import`        | `ImportPath`, alias name or absent                            |
/// | `MultiImport`   | `ImportPath`, names                                           |
/// | `ImportPath`    | optional leading `.`, names                                   |
/// | `Declare`       | names                                                         |
/// | `Override`      | `Rule` or `Term`                                              |
/// | `Extend`        | `Rule` or `Term`                                              |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// The whole grammar.
    Start,
    /// A rule definition.
    Rule,
    /// A terminal definition.
    Term,
    /// Template parameters of a rule, `{a, b}`.
    TemplateParams,
    /// Alternatives separated by `|`.
    Expansions,
    /// One alternative with its optional `-> name`.
    Alias,
    /// A sequence of items.
    Expansion,
    /// An item with an operator (`?`, `*`, `+`, `~ n..m`).
    Expr,
    /// An optional group, `[ ... ]`.
    Maybe,
    /// A character range, `"a".."z"`.
    Range,
    /// A template instantiation, `name{args}`.
    TemplateUsage,
    /// `%ignore`
    Ignore,
    /// `%import path (-> name)?`
    Import,
    /// `%import path (a, b)`
    MultiImport,
    /// The dotted path of an import.
    ImportPath,
    /// `%declare`
    Declare,
    /// `%override`
    Override,
    /// `%extend`
    Extend,
}

impl NodeKind {
    /// Returns the `snake_case` name of this node kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Rule => "rule",
            Self::Term => "term",
            Self::TemplateParams => "template_params",
            Self::Expansions => "expansions",
            Self::Alias => "alias",
            Self::Expansion => "expansion",
            Self::Expr => "expr",
            Self::Maybe => "maybe",
            Self::Range => "range",
            Self::TemplateUsage => "template_usage",
            Self::Ignore => "ignore",
            Self::Import => "import",
            Self::MultiImport => "multi_import",
            Self::ImportPath => "import_path",
            Self::Declare => "declare",
            Self::Override => "override",
            Self::Extend => "extend",
        }
    }
}

/// A child slot of a tree node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Child {
    /// A nested node.
    Tree(Tree),
    /// A leaf token.
    Token(Token),
    /// An optional part that was not written.
    Absent,
}

impl Child {
    /// Returns the nested node, or None for tokens and placeholders.
    #[must_use]
    pub const fn as_tree(&self) -> Option<&Tree> {
        match self {
            Self::Tree(tree) => Some(tree),
            _ => None,
        }
    }

    /// Returns the leaf token, or None for nodes and placeholders.
    #[must_use]
    pub const fn as_token(&self) -> Option<&Token> {
        match self {
            Self::Token(token) => Some(token),
            _ => None,
        }
    }

    /// Returns true if this slot holds nothing.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl From<Tree> for Child {
    fn from(tree: Tree) -> Self {
        Self::Tree(tree)
    }
}

impl From<Token> for Child {
    fn from(token: Token) -> Self {
        Self::Token(token)
    }
}

impl From<Option<Token>> for Child {
    fn from(token: Option<Token>) -> Self {
        token.map_or(Self::Absent, Self::Token)
    }
}

/// A node of the syntax tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tree {
    /// What this node stands for.
    pub kind: NodeKind,
    /// Child slots in source order.
    pub children: Vec<Child>,
    /// Source range covered by this node.
    pub span: Span,
}

impl Tree {
    /// Creates a new node.
    #[must_use]
    pub fn new(kind: NodeKind, children: Vec<Child>, span: Span) -> Self {
        Self {
            kind,
            children,
            span,
        }
    }

    /// Returns the first child slot, if any.
    #[must_use]
    pub fn first_child(&self) -> Option<&Child> {
        self.children.first()
    }

    /// Returns the last child slot, if any.
    #[must_use]
    pub fn last_child(&self) -> Option<&Child> {
        self.children.last()
    }

    /// Iterates over the nested nodes among the children.
    pub fn subtrees(&self) -> impl Iterator<Item = &Tree> {
        self.children.iter().filter_map(Child::as_tree)
    }

    /// Iterates over this node and every node below it, parents before
    /// children and siblings in source order.
    #[must_use]
    pub fn iter_subtrees_topdown(&self) -> TopDown<'_> {
        TopDown { stack: vec![self] }
    }

    /// Counts every node in this tree, including `self`.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.iter_subtrees_topdown().count()
    }
}

/// Pre-order iterator returned by [`Tree::iter_subtrees_topdown`].
pub struct TopDown<'a> {
    stack: Vec<&'a Tree>,
}

impl<'a> Iterator for TopDown<'a> {
    type Item = &'a Tree;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.stack.pop()?;
        // Reversed so the leftmost child is popped first.
        let start = self.stack.len();
        self.stack.extend(tree.subtrees());
        self.stack[start..].reverse();
        Some(tree)
    }
}

/// Helper constructors for tree nodes (for testing).
impl Tree {
    /// Creates a node with default span.
    #[cfg(test)]
    pub(crate) fn node(kind: NodeKind, children: Vec<Child>) -> Self {
        Self::new(kind, children, Span::default())
    }
}

/// Creates a rule-name token child with default span (for testing).
#[cfg(test)]
pub(crate) fn rule_token(name: &str) -> Child {
    Child::Token(Token::new(
        crate::token::TokenKind::Rule(name.to_string()),
        Span::default(),
    ))
}
