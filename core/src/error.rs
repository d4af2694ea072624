//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.
//! The filter engine itself is infallible; these errors come from loading
//! documents and configuration and from compiling filter patterns.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// An invalid path or name pattern in a filter definition.
    #[display("Invalid Pattern: {_0}")]
    Pattern(regex::Error),

    /// A document or configuration file that could not be (de)serialized.
    /// Excluded from `From<String>` to avoid conflict with General.
    #[from(ignore)]
    #[display("Parse Error: {_0}")]
    Parse(String),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
