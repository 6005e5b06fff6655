//! 统一错误处理
//!
//! HTTP 边界只有一种响应形态：
//!
//! ```json
//! { "error": "Failed to fetch products" }
//! ```
//!
//! 数据层错误在此折叠为不透明的消息 + 500，内部细节只写入日志。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::data::DataError;

/// 错误响应体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// 应用错误枚举
///
/// | 变体 | 状态码 |
/// |------|--------|
/// | DataSource | 500 |
/// | NotFound | 404 |
/// | Validation | 400 |
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 数据层失败 (500)，`context` 是对外暴露的唯一信息
    #[error("{context}: {source}")]
    DataSource {
        context: &'static str,
        #[source]
        source: DataError,
    },

    #[error("Resource not found: {0}")]
    /// 资源不存在 (404)
    NotFound(String),

    #[error("Validation failed: {0}")]
    /// 验证失败 (400)
    Validation(String),
}

impl AppError {
    /// Wrap a data-layer failure with the message the caller will see
    pub fn data_source(context: &'static str, source: DataError) -> Self {
        Self::DataSource { context, source }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound(resource.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::DataSource { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            AppError::DataSource { context, source } => {
                error!(target: "data_source", error = %source, "{}", context);
                (*context).to_string()
            }
            AppError::NotFound(_) | AppError::Validation(_) => self.to_string(),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
