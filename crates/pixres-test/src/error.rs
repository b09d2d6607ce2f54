//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while building regression fixtures
#[derive(Debug, Error)]
pub enum TestError {
    /// Fixture construction failed
    #[error("failed to build fixture '{name}': {source}")]
    Fixture {
        name: &'static str,
        #[source]
        source: pixres_core::Error,
    },
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
