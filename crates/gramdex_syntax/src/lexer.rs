//! Lexer for grammar-description text.
//!
//! The lexer converts source text into a stream of tokens. Line breaks are
//! significant: a run of them ends a statement, unless the next significant
//! character is `|`, in which case the alternative list simply continues.

use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Directives understood by the parser.
const DIRECTIVES: &[&str] = &["import", "ignore", "declare", "override", "extend"];

/// Lexer for grammar-description text.
pub struct Lexer<'src> {
    /// Source text being tokenized.
    source: &'src str,
    /// Remaining source text.
    rest: &'src str,
    /// Current byte offset in source.
    position: usize,
    /// Current line number (1-based).
    line: u32,
    /// Current column number (1-based).
    column: u32,
    /// True until the first significant token of a statement is produced.
    at_statement_start: bool,
    /// True if the last significant token was a `Newline`.
    after_newline: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            rest: source,
            position: 0,
            line: 1,
            column: 1,
            at_statement_start: true,
            after_newline: false,
        }
    }

    /// Returns the next token from the source.
    pub fn next_token(&mut self) -> Token {
        loop {
            self.skip_blanks();

            let start = self.position;
            let start_line = self.line;
            let start_column = self.column;

            let Some(c) = self.peek_char() else {
                return Token::new(
                    TokenKind::Eof,
                    Span::new(start, start, start_line, start_column),
                );
            };

            let kind = match c {
                '\n' => {
                    self.skip_line_breaks();
                    // Comment-only lines must not split one run into two.
                    if self.after_newline || self.continues_with_pipe() {
                        continue;
                    }
                    TokenKind::Newline
                }
                ':' => self.single(TokenKind::Colon),
                '|' => self.single(TokenKind::Pipe),
                '(' => self.single(TokenKind::LParen),
                ')' => self.single(TokenKind::RParen),
                '[' => self.single(TokenKind::LBracket),
                ']' => self.single(TokenKind::RBracket),
                '{' => self.single(TokenKind::LBrace),
                '}' => self.single(TokenKind::RBrace),
                ',' => self.single(TokenKind::Comma),
                '~' => self.single(TokenKind::Tilde),
                '*' => self.single(TokenKind::Star),
                '+' => self.single(TokenKind::Plus),
                '.' => {
                    self.advance();
                    if self.peek_char() == Some('.') {
                        self.advance();
                        TokenKind::DotDot
                    } else {
                        TokenKind::Dot
                    }
                }
                '-' => match self.peek_char_n(1) {
                    Some('>') => {
                        self.advance();
                        self.advance();
                        TokenKind::Arrow
                    }
                    Some(d) if d.is_ascii_digit() => self.scan_number(),
                    _ => {
                        self.advance();
                        TokenKind::Error("expected '->' or a number after '-'".into())
                    }
                },
                '#' => self.scan_comment(),
                '/' if self.peek_char_n(1) == Some('/') => self.scan_comment(),
                '/' => self.scan_regexp(),
                '"' => self.scan_string(),
                '%' => self.scan_directive(),
                '!' | '?' if self.at_statement_start && self.marker_precedes_name() => {
                    self.scan_marked_rule()
                }
                '?' => self.single(TokenKind::Question),
                c if c.is_ascii_digit() => self.scan_number(),
                c if is_name_start(c) => {
                    let text = self.scan_name_text();
                    classify_name(text)
                }
                c => {
                    self.advance();
                    TokenKind::Error(format!("unexpected character: {c}"))
                }
            };

            if !kind.is_trivia() {
                self.after_newline = kind == TokenKind::Newline;
            }
            match &kind {
                TokenKind::Newline => self.at_statement_start = true,
                // The definition after these directives may carry markers.
                TokenKind::Directive(name) if name == "override" || name == "extend" => {}
                TokenKind::Comment(_) => {}
                _ => self.at_statement_start = false,
            }

            return Token::new(
                kind,
                Span::new(start, self.position, start_line, start_column),
            );
        }
    }

    /// Tokenizes all source and returns a vector of tokens.
    ///
    /// Comments are included in the output.
    #[must_use]
    pub fn tokenize_all(source: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&self) -> Option<char> {
        self.rest.chars().next()
    }

    /// Peeks `n` characters ahead.
    fn peek_char_n(&self, n: usize) -> Option<char> {
        self.rest.chars().nth(n)
    }

    /// Advances past the next character.
    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            let len = c.len_utf8();
            self.rest = &self.rest[len..];
            self.position += len;
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    /// Consumes one character and yields `kind`.
    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.advance();
        kind
    }

    /// Skips spaces, tabs and carriage returns. Line feeds are significant.
    fn skip_blanks(&mut self) {
        while let Some(c) = self.peek_char() {
            if c != '\n' && c.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Skips a run of line breaks together with the indentation between them.
    fn skip_line_breaks(&mut self) {
        while self.peek_char().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    /// Looks past blank and comment-only lines for a leading `|`.
    fn continues_with_pipe(&self) -> bool {
        let mut rest = self.rest;
        loop {
            rest = rest.trim_start();
            if rest.starts_with("//") || rest.starts_with('#') {
                rest = rest.find('\n').map_or("", |i| &rest[i..]);
            } else {
                return rest.starts_with('|');
            }
        }
    }

    /// Returns true if the `!`/`?` markers at the cursor are followed by a name.
    fn marker_precedes_name(&self) -> bool {
        self.rest
            .trim_start_matches(['!', '?'])
            .chars()
            .next()
            .is_some_and(is_name_start)
    }

    /// Scans a comment starting with `//` or `#`.
    fn scan_comment(&mut self) -> TokenKind {
        let mut text = String::new();
        while let Some(c) = self.peek_char() {
            if c == '\n' {
                break;
            }
            text.push(c);
            self.advance();
        }
        TokenKind::Comment(text.trim_end_matches('\r').to_string())
    }

    /// Scans a string literal, keeping escapes verbatim.
    fn scan_string(&mut self) -> TokenKind {
        self.advance(); // consume opening '"'
        let mut text = String::new();
        loop {
            match self.peek_char() {
                Some('"') => {
                    self.advance();
                    break;
                }
                Some('\\') => {
                    self.advance();
                    match self.peek_char() {
                        Some('\n') | None => {
                            return TokenKind::Error("unterminated string literal".into());
                        }
                        Some(c) => {
                            self.advance();
                            text.push('\\');
                            text.push(c);
                        }
                    }
                }
                Some('\n') | None => {
                    return TokenKind::Error("unterminated string literal".into());
                }
                Some(c) => {
                    self.advance();
                    text.push(c);
                }
            }
        }

        let case_insensitive =
            self.peek_char() == Some('i') && !self.peek_char_n(1).is_some_and(is_name_char);
        if case_insensitive {
            self.advance();
        }
        TokenKind::String {
            text,
            case_insensitive,
        }
    }

    /// Scans a regular expression literal and its flags.
    fn scan_regexp(&mut self) -> TokenKind {
        self.advance(); // consume opening '/'
        let mut pattern = String::new();
        loop {
            match self.peek_char() {
                Some('/') => {
                    self.advance();
                    break;
                }
                Some('\\') => {
                    self.advance();
                    match self.peek_char() {
                        Some('\n') | None => {
                            return TokenKind::Error("unterminated regexp".into());
                        }
                        Some(c) => {
                            self.advance();
                            pattern.push('\\');
                            pattern.push(c);
                        }
                    }
                }
                Some('\n') | None => return TokenKind::Error("unterminated regexp".into()),
                Some(c) => {
                    self.advance();
                    pattern.push(c);
                }
            }
        }

        let mut flags = String::new();
        while let Some(c) = self.peek_char() {
            if matches!(c, 'i' | 'm' | 's' | 'l' | 'u' | 'x') {
                flags.push(c);
                self.advance();
            } else {
                break;
            }
        }
        TokenKind::Regexp { pattern, flags }
    }

    /// Scans an integer, with an optional leading `-`.
    fn scan_number(&mut self) -> TokenKind {
        let start = self.position;
        if self.peek_char() == Some('-') {
            self.advance();
        }
        while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        let text = &self.source[start..self.position];
        match text.parse::<i64>() {
            Ok(n) => TokenKind::Number(n),
            Err(e) => TokenKind::Error(format!("invalid number: {e}")),
        }
    }

    /// Scans a `%directive`.
    fn scan_directive(&mut self) -> TokenKind {
        self.advance(); // consume '%'
        let name = self.scan_name_text();
        if DIRECTIVES.contains(&name) {
            TokenKind::Directive(name.to_string())
        } else if name.is_empty() {
            TokenKind::Error("expected directive name after '%'".into())
        } else {
            TokenKind::Error(format!("unknown directive: %{name}"))
        }
    }

    /// Scans a rule name carrying `!` and/or `?` markers.
    fn scan_marked_rule(&mut self) -> TokenKind {
        let start = self.position;
        let pinned = self.peek_char() == Some('!');
        if pinned {
            self.advance();
        }
        let conditional = self.peek_char() == Some('?');
        if conditional {
            self.advance();
        }

        let name = self.scan_name_text();
        let spelling = &self.source[start..self.position];
        match classify_name(name) {
            TokenKind::Rule(_) if conditional && name.starts_with('_') => TokenKind::Error(
                format!("a rule cannot be both inlined and conditional: {spelling}"),
            ),
            TokenKind::Rule(_) => TokenKind::Rule(spelling.to_string()),
            TokenKind::Terminal(_) => {
                TokenKind::Error(format!("markers only apply to rule names: {spelling}"))
            }
            other => other,
        }
    }

    /// Scans a run of name characters.
    fn scan_name_text(&mut self) -> &'src str {
        let start = self.position;
        while self.peek_char().is_some_and(is_name_char) {
            self.advance();
        }
        &self.source[start..self.position]
    }
}

/// Decides whether a name run spells a rule, a terminal, or neither.
fn classify_name(text: &str) -> TokenKind {
    let body = text.strip_prefix('_').unwrap_or(text);
    let Some(first) = body.chars().next() else {
        return TokenKind::Error(format!("invalid name: {text}"));
    };
    let tail = &body[first.len_utf8()..];

    if first.is_ascii_lowercase()
        && tail
            .chars()
            .all(|c| c == '_' || c.is_ascii_lowercase() || c.is_ascii_digit())
    {
        TokenKind::Rule(text.to_string())
    } else if first.is_ascii_uppercase()
        && tail
            .chars()
            .all(|c| c == '_' || c.is_ascii_uppercase() || c.is_ascii_digit())
    {
        TokenKind::Terminal(text.to_string())
    } else {
        TokenKind::Error(format!("invalid name: {text}"))
    }
}

/// Returns true if `c` can start a name.
fn is_name_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic()
}

/// Returns true if `c` can appear in a name (not at start).
fn is_name_char(c: char) -> bool {
    is_name_start(c) || c.is_ascii_digit()
}
