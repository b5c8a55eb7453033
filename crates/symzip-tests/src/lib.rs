//! SymZip testing suite
//!
//! Shared data generators for the integration tests and criterion benchmarks
//! of the SymZip workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Unified test utilities
///
/// Deterministic data generators shared by the integration tests and
/// benchmarks so that every suite exercises the same inputs.
pub mod test_utils;

pub use test_utils::{generate_test_data, generate_test_text, CommonSizes, TestDataPattern};
