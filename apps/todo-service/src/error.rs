//! # Todo Service エラー定義
//!
//! Todo Service 固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! 「見つからない」はエラーではなく `Option::None` で表現するため、
//! ここに現れるのはサーバー内部の失敗のみ。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use todo_shared::ErrorResponse;

/// Todo Service で発生するエラー
#[derive(Debug, Error)]
pub enum TodoError {
    /// データベースエラー
    #[error("データベースエラー: {0}")]
    Database(#[from] todo_infra::InfraError),

    /// 内部エラー
    #[error("内部エラー: {0}")]
    Internal(String),
}

impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        match &self {
            TodoError::Database(e) => {
                tracing::error!(
                    error.kind = "database",
                    span_trace = %e.span_trace(),
                    "データベースエラー: {}",
                    e
                );
            }
            TodoError::Internal(msg) => {
                tracing::error!(error.kind = "internal", "内部エラー: {}", msg);
            }
        }

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::internal_error()),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use todo_infra::InfraError;

    use super::*;

    #[tokio::test]
    async fn test_databaseエラーは500と固定detailを返す() {
        let error = TodoError::from(InfraError::unexpected("connection reset"));

        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], 500);
        assert_eq!(json["detail"], "内部エラーが発生しました");
        // 内部メッセージは漏らさない
        assert!(!String::from_utf8_lossy(&body).contains("connection reset"));
    }

    #[tokio::test]
    async fn test_internalエラーは500を返す() {
        let response = TodoError::Internal("id が採番されていません".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
