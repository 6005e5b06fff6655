//! 数据层错误

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DataError {
    #[error("record not found: {0}")]
    NotFound(String),

    #[error("data source unavailable: {0}")]
    Unavailable(String),
}

impl DataError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }

    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }
}
