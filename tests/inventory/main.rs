//! Integration tests for Layer 2: Inventory
//!
//! Tests for declaration collection, name classification and filtering.

mod scenarios;
