//! Unified application error types
//!
//! Provides a single error type for the crate surface, suitable for
//! returning to an embedding shell.

use serde::Serialize;
use thiserror::Error;

use crate::loader::ParseError;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Dataset parsing error
    #[error("解析错误: {0}")]
    Parse(#[from] ParseError),

    /// File operation error
    #[error("文件操作错误: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error
    #[error("内部错误: {0}")]
    Internal(String),
}

/// Serializable error response for an embedding UI shell
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for client-side handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl From<AppError> for ErrorResponse {
    fn from(err: AppError) -> Self {
        let (code, message) = match &err {
            AppError::Parse(e) => ("PARSE_ERROR".to_string(), e.to_string()),
            AppError::Io(e) => ("IO_ERROR".to_string(), e.to_string()),
            AppError::Internal(msg) => ("INTERNAL_ERROR".to_string(), msg.clone()),
        };
        Self { code, message }
    }
}

impl AppError {
    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::internal("something went wrong");
        assert_eq!(err.to_string(), "内部错误: something went wrong");
    }

    #[test]
    fn test_error_response_codes() {
        let err = AppError::from(ParseError::EmptyDataset);
        let response = ErrorResponse::from(err);
        assert_eq!(response.code, "PARSE_ERROR");
        assert!(response.message.contains("数据集为空"));

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("PARSE_ERROR"));
    }
}
