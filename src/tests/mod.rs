//! Test modules for Lanai.
//!
//! This module contains the crate-internal testing infrastructure:
//! - Unit and scenario tests for the trie
//! - Property-based tests using proptest
//! - Listener tests with mockall mocks
//! - Configuration and dictionary tests against temporary files
//! - Test fixtures and utilities

pub mod config_tests;
