//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use std::error::Error as _;
use std::io;

use gramdex_foundation::{Error, ErrorContext, ErrorKind, Result};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_parse() {
    let err = Error::parse("expected ':', found rule name", 2, 8, "broken b".to_string());
    assert!(err.is_parse_error());
    assert_eq!(err.position(), Some((2, 8)));
    let ErrorKind::ParseError { context, .. } = &err.kind else {
        panic!("expected parse error");
    };
    assert_eq!(context, "broken b");
}

#[test]
fn error_io() {
    let err = Error::io("calc.grammar", io::Error::new(io::ErrorKind::NotFound, "gone"));
    assert!(matches!(err.kind, ErrorKind::Io { .. }));
    assert!(!err.is_parse_error());
    assert_eq!(err.position(), None);
}

#[test]
fn error_output() {
    let err = Error::output(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
    assert!(matches!(err.kind, ErrorKind::Output(_)));
}

#[test]
fn error_serialization() {
    let err = Error::new(ErrorKind::Serialization("unsupported value".to_string()));
    assert!(matches!(err.kind, ErrorKind::Serialization(_)));
    assert!(err.context.is_none());
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn display_messages() {
    let cases = [
        (
            Error::parse("unexpected '|'", 1, 1, "|".to_string()),
            "parse error at 1:1: unexpected '|'",
        ),
        (
            Error::io("a.grammar", io::Error::new(io::ErrorKind::NotFound, "gone")),
            "cannot read a.grammar: gone",
        ),
        (
            Error::new(ErrorKind::Serialization("bad value".to_string())),
            "serialization error: bad value",
        ),
        (
            Error::output(io::Error::new(io::ErrorKind::BrokenPipe, "closed")),
            "cannot write output: closed",
        ),
    ];
    for (err, expected) in cases {
        assert_eq!(err.to_string(), expected);
    }
}

#[test]
fn io_error_source_chain() {
    let err = Error::io("a.grammar", io::Error::new(io::ErrorKind::NotFound, "gone"));
    let source = err.kind.source().expect("io error has a source");
    assert_eq!(source.to_string(), "gone");
}

// =============================================================================
// Context
// =============================================================================

#[test]
fn context_display() {
    let ctx = ErrorContext::new()
        .with_source("calc.grammar")
        .with_position(12, 4);
    assert_eq!(ctx.to_string(), "at calc.grammar:12:4");

    let without_position = ErrorContext::new().with_source("calc.grammar");
    assert_eq!(without_position.to_string(), "at calc.grammar");
}

#[test]
fn context_does_not_change_message() {
    let err = Error::parse("bad", 1, 2, String::new())
        .with_context(ErrorContext::new().with_source("x.grammar"));
    assert_eq!(err.to_string(), "parse error at 1:2: bad");
    assert!(err.context.is_some());
}

#[test]
fn result_alias_propagates() {
    fn inner() -> Result<u32> {
        Err(Error::parse("inner", 1, 1, String::new()))
    }
    fn outer() -> Result<u32> {
        let value = inner()?;
        Ok(value + 1)
    }
    assert!(outer().is_err());
}
