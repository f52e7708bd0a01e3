use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Board sides must be positive.
    #[error("invalid board dimensions {width}x{height}")]
    InvalidDimension { width: i64, height: i64 },
    /// Cell index or pattern placement outside the board.
    #[error("({row}, {column}) with extent {rows}x{columns} is out of bounds of {height}x{width} board")]
    OutOfBounds {
        row: i64,
        column: i64,
        rows: usize,
        columns: usize,
        height: usize,
        width: usize,
    },
    /// Pattern rows do not match the declared shape or contain non-binary values.
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),
    /// Tokio runtime for row tasks could not be started.
    #[error("failed to start runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
