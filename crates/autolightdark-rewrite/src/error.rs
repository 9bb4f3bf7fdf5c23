//! Error types for the rewrite crate.

use thiserror::Error;

/// Errors that can occur when rewriting a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RewriteError {
    /// A mode name other than `auto`, `light` or `dark` was requested.
    #[error("unsupported mode: {0:?}")]
    UnsupportedMode(String),
}

/// Result type for rewrite operations.
pub type Result<T> = std::result::Result<T, RewriteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_mode_display_quotes_name() {
        let err = RewriteError::UnsupportedMode("sepia".to_string());
        assert_eq!(err.to_string(), "unsupported mode: \"sepia\"");
    }
}
