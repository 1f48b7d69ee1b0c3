//! Unit tests for the message module.
//!
//! Tests are organised by domain concept, covering happy paths, degenerate
//! inputs, and edge cases for all public APIs.

mod hash_tests;
