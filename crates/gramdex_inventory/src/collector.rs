//! Collection of declared names from a syntax tree.
//!
//! The collector walks the tree once, parents before children, and records
//! every rule name and every alias target in the order it first appears.
//! A spelling is recorded at most once across both kinds: whichever kind
//! introduces it first keeps it.

use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use gramdex_syntax::{Child, NodeKind, Token, Tree};

use crate::declaration::{DeclarationKind, RawDeclaration};

/// Names declared in one grammar, in first-seen order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CollectedDeclarations {
    rule_names: Vec<String>,
    alias_names: Vec<String>,
}

impl CollectedDeclarations {
    /// Rule spellings, markers included.
    #[must_use]
    pub fn rule_names(&self) -> &[String] {
        &self.rule_names
    }

    /// Alias spellings, markers included.
    #[must_use]
    pub fn alias_names(&self) -> &[String] {
        &self.alias_names
    }

    /// Iterates over every declaration, rules first, then aliases.
    pub fn declarations(&self) -> impl Iterator<Item = RawDeclaration<'_>> {
        self.rules().chain(self.aliases())
    }

    /// Iterates over rule declarations.
    pub fn rules(&self) -> impl Iterator<Item = RawDeclaration<'_>> {
        self.rule_names
            .iter()
            .map(|s| RawDeclaration::new(s, DeclarationKind::Rule))
    }

    /// Iterates over alias declarations.
    pub fn aliases(&self) -> impl Iterator<Item = RawDeclaration<'_>> {
        self.alias_names
            .iter()
            .map(|s| RawDeclaration::new(s, DeclarationKind::Alias))
    }

    /// Total number of declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rule_names.len() + self.alias_names.len()
    }

    /// Returns true if nothing was declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rule_names.is_empty() && self.alias_names.is_empty()
    }
}

/// Accumulates declarations during a single traversal.
///
/// A collector is meant to be used for one tree and then consumed with
/// [`DeclarationCollector::finish`]; see [`collect`] for the usual entry
/// point.
#[derive(Debug, Default)]
pub struct DeclarationCollector {
    seen: HashSet<String>,
    collected: CollectedDeclarations,
}

impl DeclarationCollector {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Visits every node of `tree` in pre-order.
    ///
    /// # Panics
    ///
    /// Panics if a rule or alias node does not have the shape the parser
    /// produces (see [`DeclarationCollector::visit`]).
    pub fn visit_all(&mut self, tree: &Tree) {
        for node in tree.iter_subtrees_topdown() {
            self.visit(node);
        }
    }

    /// Records the declaration introduced by a single node, if any.
    ///
    /// Nodes other than rules and aliases are ignored. Children are not
    /// visited.
    ///
    /// # Panics
    ///
    /// Panics if an alias node does not have exactly two children, if its
    /// last child is neither a rule name nor absent, or if a rule node's
    /// first child is not a rule name.
    pub fn visit(&mut self, node: &Tree) {
        match node.kind {
            NodeKind::Rule => {
                let spelling = rule_spelling(node);
                self.record(spelling, DeclarationKind::Rule);
            }
            NodeKind::Alias => {
                if let Some(spelling) = alias_target(node) {
                    self.record(spelling, DeclarationKind::Alias);
                }
            }
            _ => {}
        }
    }

    /// Records `spelling` under `kind` unless it was already seen under
    /// either kind. Returns true if it was recorded.
    pub fn record(&mut self, spelling: &str, kind: DeclarationKind) -> bool {
        if self.seen.contains(spelling) {
            trace!(spelling, %kind, "duplicate declaration dropped");
            return false;
        }
        self.seen.insert(spelling.to_string());

        trace!(spelling, %kind, "declaration recorded");
        let bucket = match kind {
            DeclarationKind::Rule => &mut self.collected.rule_names,
            DeclarationKind::Alias => &mut self.collected.alias_names,
        };
        bucket.push(spelling.to_string());
        true
    }

    /// Consumes the collector and returns what it gathered.
    #[must_use]
    pub fn finish(self) -> CollectedDeclarations {
        debug!(
            rules = self.collected.rule_names.len(),
            aliases = self.collected.alias_names.len(),
            "collected declarations"
        );
        self.collected
    }
}

/// Collects every rule and alias declaration in `tree`.
///
/// The walk is pre-order: a rule node is visited before the aliases in its
/// own body. When one spelling is declared both as a rule and as an alias,
/// this order decides which kind keeps it. The order is part of the
/// contract and callers may rely on it.
///
/// # Panics
///
/// Panics if the tree contains a rule or alias node with an unexpected
/// shape. Trees produced by [`gramdex_syntax::parse`] never do.
#[must_use]
pub fn collect(tree: &Tree) -> CollectedDeclarations {
    let mut collector = DeclarationCollector::new();
    collector.visit_all(tree);
    collector.finish()
}

fn rule_spelling(node: &Tree) -> &str {
    node.first_child()
        .and_then(Child::as_token)
        .and_then(Token::as_rule)
        .unwrap_or_else(|| malformed(node, "first child is not a rule name"))
}

fn alias_target(node: &Tree) -> Option<&str> {
    let [_, target] = node.children.as_slice() else {
        malformed(
            node,
            &format!("expected 2 children, found {}", node.children.len()),
        );
    };
    match target {
        Child::Absent => None,
        child => Some(
            child
                .as_token()
                .and_then(Token::as_rule)
                .unwrap_or_else(|| malformed(node, "target is not a rule name")),
        ),
    }
}

fn malformed(node: &Tree, detail: &str) -> ! {
    panic!(
        "malformed {} node at {}:{}: {detail}",
        node.kind.name(),
        node.span.line,
        node.span.column
    )
}
