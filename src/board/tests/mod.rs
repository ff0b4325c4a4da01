//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Per-piece destination lists
//! - `edge_cases.rs` - Board edges, obstruction ordering, odd inputs
//! - `proptest.rs` - Property-based tests
