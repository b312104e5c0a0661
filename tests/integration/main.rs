//! Cross-layer integration tests for gramdex
//!
//! Tests that verify correct interaction between multiple crates.

mod commands;
mod pipeline;
