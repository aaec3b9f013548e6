/// Error types for matrix math and configuration loading
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MatrixError {
    /// Left operand's column count differs from the right operand's row count.
    #[error(
        "cannot multiply {left_rows}x{left_cols} and {right_rows}x{right_cols} matrices: inner dimension must match"
    )]
    DimensionMismatch {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },

    #[error("matrix must have at least one row and one column")]
    Empty,

    #[error("row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("point set needs exactly 3 rows, got {rows}")]
    NotPointSet { rows: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_mismatch_reports_all_dimensions() {
        let err = MatrixError::DimensionMismatch {
            left_rows: 2,
            left_cols: 3,
            right_rows: 2,
            right_cols: 2,
        };
        assert_eq!(
            err.to_string(),
            "cannot multiply 2x3 and 2x2 matrices: inner dimension must match"
        );
    }

    #[test]
    fn construction_errors_display() {
        assert_eq!(
            MatrixError::Empty.to_string(),
            "matrix must have at least one row and one column"
        );
        let err = MatrixError::Ragged {
            row: 1,
            expected: 3,
            found: 2,
        };
        assert_eq!(err.to_string(), "row 1 has 2 columns, expected 3");
        assert_eq!(
            MatrixError::NotPointSet { rows: 4 }.to_string(),
            "point set needs exactly 3 rows, got 4"
        );
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ValidationError("spin_rate must be finite".into());
        assert_eq!(
            err.to_string(),
            "config validation error: spin_rate must be finite"
        );
    }
}
