//! Lanai Library
//!
//! This library contains the core components of Lanai: an in-memory prefix
//! trie for predictive typing, the dictionary loader that fills it, and the
//! configuration and error handling shared with the `lanai` binary.
//!
//! # Architecture
//!
//! Lanai is designed with the following principles in mind:
//! - Strict component boundaries
//! - Strict tree ownership with no shared or back pointers
//! - Comprehensive error handling and propagation
//! - Zero-copy query results borrowed from the trie

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod dictionary;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

use std::sync::Arc;

/// Version information for Lanai.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function.
///
/// Installs the tracing-backed error reporter. Calling it more than once keeps
/// the first reporter.
pub fn init() {
    if !error::set_error_reporter(Arc::new(error::TracingErrorReporter)) {
        tracing::debug!("error reporter already installed");
    }
}
