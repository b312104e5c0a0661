//! Core error types for gramdex.
//!
//! This crate provides:
//! - [`Error`] - Rich error type with context
//! - [`ErrorKind`] - Categorized error kinds for pattern matching
//! - [`Result`] - Convenience alias used throughout the workspace

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;

pub use error::{Error, ErrorContext, ErrorKind};

/// Result type for gramdex operations.
pub type Result<T> = std::result::Result<T, Error>;
