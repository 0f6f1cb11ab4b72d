//! Error types for the folio site.

use thiserror::Error;

/// Top-level error type for folio parsing surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FolioError {
    #[error("Invalid color: {0}")]
    InvalidColor(#[from] ColorError),

    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    #[error("Unknown theme kind: {0} (expected \"light\" or \"dark\")")]
    UnknownThemeKind(String),
}

/// Errors produced while parsing a hex color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("expected 3 or 6 hex digits, got {0}")]
    InvalidLength(usize),

    #[error("non-hex digit in {0:?}")]
    InvalidDigit(String),
}

/// Convenience result alias.
pub type Result<T> = std::result::Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rgb;

    #[test]
    fn test_color_error_converts() {
        let err: FolioError = "#12".parse::<Rgb>().unwrap_err().into();
        assert_eq!(
            err.to_string(),
            "Invalid color: expected 3 or 6 hex digits, got 2"
        );
    }
}
