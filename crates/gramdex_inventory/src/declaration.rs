//! Raw declarations as they appear in grammar text.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which syntactic construct introduced a name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DeclarationKind {
    /// A rule definition, `name: ...`.
    Rule,
    /// An alternative renamed with `-> name`.
    Alias,
}

impl DeclarationKind {
    /// Returns the lowercase name of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rule => "rule",
            Self::Alias => "alias",
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A declared name exactly as written, markers included.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RawDeclaration<'a> {
    /// The identifier text, e.g. `!_item` or `expr`.
    pub spelling: &'a str,
    /// The construct that introduced it first.
    pub kind: DeclarationKind,
}

impl<'a> RawDeclaration<'a> {
    /// Creates a new raw declaration.
    #[must_use]
    pub const fn new(spelling: &'a str, kind: DeclarationKind) -> Self {
        Self { spelling, kind }
    }
}
