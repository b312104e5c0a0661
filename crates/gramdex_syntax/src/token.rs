//! Token types for grammar-description text.
//!
//! Tokens are the output of the lexer and input to the parser.

use crate::span::Span;

/// A token from lexical analysis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// The type and value of this token.
    pub kind: TokenKind,
    /// Source location of this token.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns the text this token covers in the given source.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        self.span.text(source)
    }

    /// Returns the declared name carried by a rule or terminal token.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Rule(name) | TokenKind::Terminal(name) => Some(name),
            _ => None,
        }
    }

    /// Returns the rule name carried by this token, or None for any other kind.
    #[must_use]
    pub fn as_rule(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Rule(name) => Some(name),
            _ => None,
        }
    }
}

/// Token types for grammar-description text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    // Names
    /// Rule name like `expr`, `_item`, `?atom` or `!keyword`
    Rule(String),
    /// Terminal name like `NUMBER` or `_NL`
    Terminal(String),

    // Literals
    /// String literal like `"if"` or `"select"i`
    String {
        /// Text between the quotes, escapes kept verbatim.
        text: String,
        /// True when the `i` flag follows the closing quote.
        case_insensitive: bool,
    },
    /// Regular expression like `/[0-9]+/` or `/\w+/i`
    Regexp {
        /// Pattern between the slashes, escapes kept verbatim.
        pattern: String,
        /// Trailing flag letters.
        flags: String,
    },
    /// Integer like `2` or `-1`
    Number(i64),
    /// Directive like `%import` (stored without the `%`)
    Directive(String),

    // Punctuation
    /// `:`
    Colon,
    /// `|`
    Pipe,
    /// `->`
    Arrow,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `..`
    DotDot,
    /// `~`
    Tilde,
    /// `?`
    Question,
    /// `*`
    Star,
    /// `+`
    Plus,

    // Meta
    /// End of a statement (one or more line breaks)
    Newline,
    /// Comment text (including the `//` or `#`)
    Comment(String),
    /// End of input
    Eof,
    /// Lexer error
    Error(String),
}

impl TokenKind {
    /// Returns true if this token kind should be ignored during parsing.
    #[must_use]
    pub const fn is_trivia(&self) -> bool {
        matches!(self, Self::Comment(_))
    }

    /// Returns true if this token ends a statement.
    #[must_use]
    pub const fn ends_statement(&self) -> bool {
        matches!(self, Self::Newline | Self::Eof)
    }

    /// Returns a human-readable name for this token kind.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rule(_) => "rule name",
            Self::Terminal(_) => "terminal name",
            Self::String { .. } => "string",
            Self::Regexp { .. } => "regexp",
            Self::Number(_) => "number",
            Self::Directive(_) => "directive",
            Self::Colon => "':'",
            Self::Pipe => "'|'",
            Self::Arrow => "'->'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::LBracket => "'['",
            Self::RBracket => "']'",
            Self::LBrace => "'{'",
            Self::RBrace => "'}'",
            Self::Comma => "','",
            Self::Dot => "'.'",
            Self::DotDot => "'..'",
            Self::Tilde => "'~'",
            Self::Question => "'?'",
            Self::Star => "'*'",
            Self::Plus => "'+'",
            Self::Newline => "end of line",
            Self::Comment(_) => "comment",
            Self::Eof => "end of input",
            Self::Error(_) => "error",
        }
    }
}
