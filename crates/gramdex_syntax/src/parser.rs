//! Parser for grammar-description text.
//!
//! The parser converts a stream of tokens into a syntax [`Tree`]. It is a
//! recursive-descent parser with one token of lookahead; line breaks end
//! statements.

use gramdex_foundation::{Error, Result};
use tracing::{debug, trace};

use crate::lexer::Lexer;
use crate::span::Span;
use crate::token::{Token, TokenKind};
use crate::tree::{Child, NodeKind, Tree};

/// Deepest allowed nesting of groups and template arguments.
pub const MAX_NESTING: usize = 128;

/// Parser for grammar-description text.
pub struct Parser<'src> {
    /// The lexer providing tokens.
    lexer: Lexer<'src>,
    /// Current token (lookahead). Never trivia.
    current: Token,
    /// Source text (for error messages).
    source: &'src str,
    /// Number of groups and template argument lists currently open.
    depth: usize,
}

impl<'src> Parser<'src> {
    /// Creates a new parser for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        let mut lexer = Lexer::new(source);
        let current = next_significant(&mut lexer);
        Self {
            lexer,
            current,
            source,
            depth: 0,
        }
    }

    /// Parses a whole grammar into a `Start` node.
    ///
    /// # Errors
    /// Returns an error if the source cannot be parsed.
    pub fn parse_grammar(&mut self) -> Result<Tree> {
        let mut statements = Vec::new();
        self.skip_newlines();

        while self.current.kind != TokenKind::Eof {
            let statement = self.parse_statement()?;
            trace!(
                kind = statement.kind.name(),
                line = statement.span.line,
                "parsed statement"
            );
            statements.push(Child::Tree(statement));
            self.end_statement()?;
            self.skip_newlines();
        }

        debug!(statements = statements.len(), "parsed grammar");
        let span = Span::new(0, self.source.len(), 1, 1);
        Ok(Tree::new(NodeKind::Start, statements, span))
    }

    /// Parses one statement: a rule, a terminal, or a directive.
    fn parse_statement(&mut self) -> Result<Tree> {
        match &self.current.kind {
            TokenKind::Rule(_) => self.parse_rule(),
            TokenKind::Terminal(_) => self.parse_term(),
            TokenKind::Directive(name) => {
                let name = name.clone();
                self.parse_directive(&name)
            }
            TokenKind::Error(msg) => Err(self.error(msg)),
            other => Err(self.error(&format!(
                "expected a rule, terminal or directive, found {}",
                other.name()
            ))),
        }
    }

    /// Parses `name {params}? (. priority)? : expansions`.
    fn parse_rule(&mut self) -> Result<Tree> {
        let name = self.bump();
        let start_span = name.span;

        let params = if self.current.kind == TokenKind::LBrace {
            Child::Tree(self.parse_template_params()?)
        } else {
            Child::Absent
        };
        let priority = self.parse_priority()?;
        self.expect(&TokenKind::Colon)?;
        let body = self.parse_expansions(true)?;

        let span = start_span.merge(body.span);
        Ok(Tree::new(
            NodeKind::Rule,
            vec![name.into(), params, priority, body.into()],
            span,
        ))
    }

    /// Parses `NAME (. priority)? : expansions`.
    fn parse_term(&mut self) -> Result<Tree> {
        let name = self.bump();
        let start_span = name.span;

        let priority = self.parse_priority()?;
        self.expect(&TokenKind::Colon)?;
        let body = self.parse_expansions(false)?;

        let span = start_span.merge(body.span);
        Ok(Tree::new(
            NodeKind::Term,
            vec![name.into(), priority, body.into()],
            span,
        ))
    }

    /// Parses `{a, b, ...}` after a rule name.
    fn parse_template_params(&mut self) -> Result<Tree> {
        let start_span = self.current.span;
        self.expect(&TokenKind::LBrace)?;

        let mut params = vec![Child::Token(self.expect_rule_name()?)];
        while self.current.kind == TokenKind::Comma {
            self.advance();
            params.push(Child::Token(self.expect_rule_name()?));
        }

        let end_span = self.current.span;
        self.expect(&TokenKind::RBrace)?;
        Ok(Tree::new(
            NodeKind::TemplateParams,
            params,
            start_span.merge(end_span),
        ))
    }

    /// Parses an optional `.N` priority.
    fn parse_priority(&mut self) -> Result<Child> {
        if self.current.kind != TokenKind::Dot {
            return Ok(Child::Absent);
        }
        self.advance();
        Ok(Child::Token(self.expect_number()?))
    }

    /// Parses `alias (| alias)*`.
    fn parse_expansions(&mut self, allow_alias: bool) -> Result<Tree> {
        let first = self.parse_alias(allow_alias)?;
        let mut span = first.span;
        let mut alternatives = vec![Child::Tree(first)];

        while self.current.kind == TokenKind::Pipe {
            self.advance();
            let alternative = self.parse_alias(allow_alias)?;
            span = span.merge(alternative.span);
            alternatives.push(Child::Tree(alternative));
        }

        Ok(Tree::new(NodeKind::Expansions, alternatives, span))
    }

    /// Parses `expansion (-> name)?`. The result always has two children.
    fn parse_alias(&mut self, allow_alias: bool) -> Result<Tree> {
        let expansion = self.parse_expansion()?;
        let mut span = expansion.span;

        let target = if self.current.kind == TokenKind::Arrow {
            if !allow_alias {
                return Err(self.error("aliases are only allowed in rule definitions"));
            }
            self.advance();
            let name = self.expect_rule_name()?;
            span = span.merge(name.span);
            Child::Token(name)
        } else {
            Child::Absent
        };

        Ok(Tree::new(
            NodeKind::Alias,
            vec![expansion.into(), target],
            span,
        ))
    }

    /// Parses a possibly empty sequence of items.
    fn parse_expansion(&mut self) -> Result<Tree> {
        let start = self.current.span;
        let mut span = Span::new(start.start, start.start, start.line, start.column);
        let mut items = Vec::new();

        loop {
            match &self.current.kind {
                TokenKind::LParen
                | TokenKind::LBracket
                | TokenKind::String { .. }
                | TokenKind::Regexp { .. }
                | TokenKind::Terminal(_)
                | TokenKind::Rule(_) => {
                    let (item, item_span) = self.parse_expr()?;
                    span = span.merge(item_span);
                    items.push(item);
                }
                TokenKind::Error(msg) => return Err(self.error(msg)),
                _ => break,
            }
        }

        Ok(Tree::new(NodeKind::Expansion, items, span))
    }

    /// Parses an atom with an optional operator.
    fn parse_expr(&mut self) -> Result<(Child, Span)> {
        let (atom, atom_span) = self.parse_atom()?;

        match &self.current.kind {
            TokenKind::Question | TokenKind::Star | TokenKind::Plus => {
                let op = self.bump();
                let span = atom_span.merge(op.span);
                Ok((
                    Tree::new(NodeKind::Expr, vec![atom, op.into()], span).into(),
                    span,
                ))
            }
            TokenKind::Tilde => {
                self.advance();
                let count = self.expect_number()?;
                let mut span = atom_span.merge(count.span);
                let upper = if self.current.kind == TokenKind::DotDot {
                    self.advance();
                    let upper = self.expect_number()?;
                    span = span.merge(upper.span);
                    Child::Token(upper)
                } else {
                    Child::Absent
                };
                Ok((
                    Tree::new(NodeKind::Expr, vec![atom, count.into(), upper], span).into(),
                    span,
                ))
            }
            _ => Ok((atom, atom_span)),
        }
    }

    /// Parses a group, an optional group, or a single value.
    fn parse_atom(&mut self) -> Result<(Child, Span)> {
        match self.current.kind {
            TokenKind::LParen | TokenKind::LBracket => self.nested(Self::parse_group),
            _ => self.parse_value(),
        }
    }

    /// Parses `( expansions )` or `[ expansions ]`.
    fn parse_group(&mut self) -> Result<(Child, Span)> {
        let start_span = self.current.span;
        if self.current.kind == TokenKind::LParen {
            self.advance();
            let mut inner = self.parse_expansions(true)?;
            let end_span = self.current.span;
            self.expect(&TokenKind::RParen)?;
            inner.span = start_span.merge(end_span);
            let span = inner.span;
            Ok((inner.into(), span))
        } else {
            self.advance();
            let inner = self.parse_expansions(true)?;
            let end_span = self.current.span;
            self.expect(&TokenKind::RBracket)?;
            let span = start_span.merge(end_span);
            Ok((
                Tree::new(NodeKind::Maybe, vec![inner.into()], span).into(),
                span,
            ))
        }
    }

    /// Parses a literal, a name, a range, or a template usage.
    fn parse_value(&mut self) -> Result<(Child, Span)> {
        match &self.current.kind {
            TokenKind::String { .. } => {
                let low = self.bump();
                if self.current.kind != TokenKind::DotDot {
                    let span = low.span;
                    return Ok((low.into(), span));
                }
                self.advance();
                if !matches!(self.current.kind, TokenKind::String { .. }) {
                    return Err(self.error(&format!(
                        "expected string after '..', found {}",
                        self.current.kind.name()
                    )));
                }
                let high = self.bump();
                let span = low.span.merge(high.span);
                Ok((
                    Tree::new(NodeKind::Range, vec![low.into(), high.into()], span).into(),
                    span,
                ))
            }
            TokenKind::Regexp { .. } | TokenKind::Terminal(_) => {
                let token = self.bump();
                let span = token.span;
                Ok((token.into(), span))
            }
            TokenKind::Rule(_) => {
                let name = self.bump();
                if self.current.kind != TokenKind::LBrace {
                    let span = name.span;
                    return Ok((name.into(), span));
                }
                self.parse_template_usage(name)
            }
            TokenKind::Error(msg) => Err(self.error(msg)),
            other => Err(self.error(&format!(
                "expected a name, string or regexp, found {}",
                other.name()
            ))),
        }
    }

    /// Parses the `{arg, ...}` part of `name{arg, ...}`.
    fn parse_template_usage(&mut self, name: Token) -> Result<(Child, Span)> {
        let start_span = name.span;
        self.expect(&TokenKind::LBrace)?;

        let mut children = vec![Child::Token(name)];
        loop {
            let (arg, _) = self.nested(Self::parse_value)?;
            children.push(arg);
            if self.current.kind == TokenKind::Comma {
                self.advance();
            } else {
                break;
            }
        }

        let end_span = self.current.span;
        self.expect(&TokenKind::RBrace)?;
        let span = start_span.merge(end_span);
        Ok((
            Tree::new(NodeKind::TemplateUsage, children, span).into(),
            span,
        ))
    }

    /// Parses a `%directive` statement.
    fn parse_directive(&mut self, name: &str) -> Result<Tree> {
        let start_span = self.current.span;
        self.advance();

        match name {
            "ignore" => {
                let body = self.parse_expansions(false)?;
                let span = start_span.merge(body.span);
                Ok(Tree::new(NodeKind::Ignore, vec![body.into()], span))
            }
            "import" => self.parse_import(start_span),
            "declare" => {
                let mut names = vec![Child::Token(self.expect_name()?)];
                while !self.current.kind.ends_statement() {
                    names.push(Child::Token(self.expect_name()?));
                }
                let span = names
                    .last()
                    .and_then(Child::as_token)
                    .map_or(start_span, |t| start_span.merge(t.span));
                Ok(Tree::new(NodeKind::Declare, names, span))
            }
            "override" | "extend" => {
                let kind = if name == "override" {
                    NodeKind::Override
                } else {
                    NodeKind::Extend
                };
                let definition = match &self.current.kind {
                    TokenKind::Rule(_) => self.parse_rule()?,
                    TokenKind::Terminal(_) => self.parse_term()?,
                    TokenKind::Error(msg) => return Err(self.error(msg)),
                    other => {
                        return Err(self.error(&format!(
                            "expected a rule or terminal definition after %{name}, found {}",
                            other.name()
                        )));
                    }
                };
                let span = start_span.merge(definition.span);
                Ok(Tree::new(kind, vec![definition.into()], span))
            }
            other => Err(self.error_at(start_span, &format!("unknown directive: %{other}"))),
        }
    }

    /// Parses the remainder of `%import path (-> name | (a, b))?`.
    fn parse_import(&mut self, start_span: Span) -> Result<Tree> {
        let path = self.parse_import_path()?;
        let mut span = start_span.merge(path.span);

        match self.current.kind {
            TokenKind::LParen => {
                self.advance();
                let mut children = vec![Child::Tree(path), Child::Token(self.expect_name()?)];
                while self.current.kind == TokenKind::Comma {
                    self.advance();
                    children.push(Child::Token(self.expect_name()?));
                }
                span = span.merge(self.current.span);
                self.expect(&TokenKind::RParen)?;
                Ok(Tree::new(NodeKind::MultiImport, children, span))
            }
            TokenKind::Arrow => {
                self.advance();
                let alias = self.expect_name()?;
                span = span.merge(alias.span);
                Ok(Tree::new(
                    NodeKind::Import,
                    vec![path.into(), alias.into()],
                    span,
                ))
            }
            _ => Ok(Tree::new(
                NodeKind::Import,
                vec![path.into(), Child::Absent],
                span,
            )),
        }
    }

    /// Parses `.? name (. name)*`.
    fn parse_import_path(&mut self) -> Result<Tree> {
        let start_span = self.current.span;
        let mut parts = Vec::new();
        if self.current.kind == TokenKind::Dot {
            parts.push(Child::Token(self.bump()));
        }

        let mut last = self.expect_name()?;
        while self.current.kind == TokenKind::Dot {
            parts.push(Child::Token(last));
            self.advance();
            last = self.expect_name()?;
        }
        let span = start_span.merge(last.span);
        parts.push(Child::Token(last));

        Ok(Tree::new(NodeKind::ImportPath, parts, span))
    }

    /// Requires the current statement to be finished.
    fn end_statement(&mut self) -> Result<()> {
        match &self.current.kind {
            TokenKind::Newline => {
                self.advance();
                Ok(())
            }
            TokenKind::Eof => Ok(()),
            TokenKind::Error(msg) => Err(self.error(msg)),
            other => Err(self.error(&format!("expected end of line, found {}", other.name()))),
        }
    }

    /// Skips blank statement separators.
    fn skip_newlines(&mut self) {
        while self.current.kind == TokenKind::Newline {
            self.advance();
        }
    }

    /// Advances to the next significant token.
    fn advance(&mut self) {
        self.current = next_significant(&mut self.lexer);
    }

    /// Returns the current token and advances past it.
    fn bump(&mut self) -> Token {
        let next = next_significant(&mut self.lexer);
        std::mem::replace(&mut self.current, next)
    }

    /// Expects the current token to be of a specific kind, then advances.
    fn expect(&mut self, expected: &TokenKind) -> Result<()> {
        // Use discriminant comparison for token kinds that carry data
        let matches =
            std::mem::discriminant(&self.current.kind) == std::mem::discriminant(expected);

        if matches {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected(expected.name()))
        }
    }

    /// Expects a plain rule name.
    fn expect_rule_name(&mut self) -> Result<Token> {
        if matches!(self.current.kind, TokenKind::Rule(_)) {
            Ok(self.bump())
        } else {
            Err(self.unexpected("rule name"))
        }
    }

    /// Expects a rule or terminal name.
    fn expect_name(&mut self) -> Result<Token> {
        if matches!(self.current.kind, TokenKind::Rule(_) | TokenKind::Terminal(_)) {
            Ok(self.bump())
        } else {
            Err(self.unexpected("name"))
        }
    }

    /// Expects an integer.
    fn expect_number(&mut self) -> Result<Token> {
        if matches!(self.current.kind, TokenKind::Number(_)) {
            Ok(self.bump())
        } else {
            Err(self.unexpected("number"))
        }
    }

    /// Creates an "expected X, found Y" error, preferring lexer messages.
    fn unexpected(&self, expected: &str) -> Error {
        match &self.current.kind {
            TokenKind::Error(msg) => self.error(msg),
            found => self.error(&format!("expected {expected}, found {}", found.name())),
        }
    }

    /// Runs `parse` one nesting level deeper.
    fn nested<T>(&mut self, parse: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        if self.depth >= MAX_NESTING {
            return Err(self.error("groups nested too deeply"));
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    /// Creates a parse error at the current position.
    fn error(&self, message: &str) -> Error {
        self.error_at(self.current.span, message)
    }

    /// Creates a parse error at a specific span.
    fn error_at(&self, span: Span, message: &str) -> Error {
        Error::parse(
            message,
            span.line,
            span.column,
            span.line_text(self.source).to_string(),
        )
    }
}

/// Pulls tokens from the lexer until one is not trivia.
fn next_significant(lexer: &mut Lexer<'_>) -> Token {
    loop {
        let token = lexer.next_token();
        if !token.kind.is_trivia() {
            return token;
        }
    }
}

/// Parses grammar text into a syntax tree.
///
/// # Errors
/// Returns an error if the source cannot be parsed.
pub fn parse(source: &str) -> Result<Tree> {
    Parser::new(source).parse_grammar()
}
