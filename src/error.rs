//! Error types for grid construction and configuration

use thiserror::Error;

/// Raised when a grid or its settings cannot be built.
///
/// All of these are detected up front; a validly constructed grid never
/// produces an error while ticking.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("grid dimensions must be positive, got {rows}x{columns}")]
    InvalidDimensions { rows: i64, columns: i64 },

    #[error("threshold {0} must be between 0.0 and 1.0")]
    InvalidThreshold(f64),

    #[error("pattern cannot be empty")]
    EmptyPattern,

    #[error("pattern length {len} is not a perfect square")]
    PatternNotSquare { len: usize },

    #[error("invalid pattern value {symbol:?} at position {position}; only 0 and 1 are allowed")]
    InvalidPatternSymbol { symbol: String, position: usize },

    #[error("row {row} has length {actual}, expected {expected}")]
    RaggedRows {
        row: usize,
        actual: usize,
        expected: usize,
    },

    #[error("frames per second must be positive, got {0}")]
    InvalidFps(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ConfigurationError::InvalidDimensions { rows: 0, columns: 5 };
        assert_eq!(err.to_string(), "grid dimensions must be positive, got 0x5");

        let err = ConfigurationError::PatternNotSquare { len: 7 };
        assert!(err.to_string().contains("7"));
    }
}
