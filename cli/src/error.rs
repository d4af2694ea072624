#![deny(missing_docs)]

//! # CLI Errors
//!
//! Error types for the CLI crate.

use derive_more::{Display, From};
use oas_filter_core::AppError;

/// Main error enum for CLI operations.
#[derive(Debug, Display, From)]
pub enum CliError {
    /// IO Error wrapper.
    #[display("IO Error: {}", _0)]
    Io(std::io::Error),

    /// Failure reported by the core library (parsing, patterns, ...).
    #[display("{}", _0)]
    Core(AppError),

    /// General failure message.
    #[display("Operation failed: {}", _0)]
    General(String),
}

/// Manual implementation of the standard Error trait.
///
/// `General(String)` holds no error source, so `source()` stays the default.
impl std::error::Error for CliError {}

/// Result type alias.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_convert() {
        let err: CliError = AppError::Parse("bad yaml".into()).into();
        assert!(matches!(err, CliError::Core(_)));
        assert_eq!(err.to_string(), "Parse Error: bad yaml");
    }

    #[test]
    fn test_general_display() {
        let err = CliError::General("no input".into());
        assert_eq!(err.to_string(), "Operation failed: no input");
    }
}
