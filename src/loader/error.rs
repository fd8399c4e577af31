//! Error types for dataset loading
//!
//! Loading is deliberately lenient: a malformed row degrades into a
//! record with defaulted fields instead of failing the load. The errors
//! here cover the conditions that make the whole dataset unusable.

use thiserror::Error;

/// Errors that can occur while loading the line-record dataset
#[derive(Error, Debug)]
pub enum ParseError {
    /// Failed to read the dataset file
    #[error("无法读取文件: {0}")]
    IoError(#[from] std::io::Error),

    /// The CSV reader could not make sense of the input
    #[error("CSV 格式无效: {0}")]
    InvalidCsv(#[from] csv::Error),

    /// A required column is missing from the header row
    #[error("缺少必需列: {0}")]
    MissingColumn(String),

    /// The dataset contains a header but no data rows
    #[error("数据集为空")]
    EmptyDataset,
}

impl ParseError {
    /// Create a MissingColumn error
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn(column.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ParseError::missing_column("commit");
        assert_eq!(err.to_string(), "缺少必需列: commit");

        let err = ParseError::EmptyDataset;
        assert_eq!(err.to_string(), "数据集为空");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let parse_err: ParseError = io_err.into();
        assert!(matches!(parse_err, ParseError::IoError(_)));
    }
}
