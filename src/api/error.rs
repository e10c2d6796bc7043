use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use super::types::ErrorResponse;

/// API層のエラー型
///
/// サービスは成否を真偽値で返すため、ハンドラーが`false`をこのエラーに変換する。
#[derive(Debug, Error)]
pub enum ApiError {
    /// 書籍が存在しない
    #[error("Book not found: {0}")]
    BookNotFound(String),

    /// 貸出できなかった（書籍なし、または貸出中）
    #[error("Book {0} could not be issued")]
    IssueRejected(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            // 404 Not Found - リクエストされたリソースが存在しない
            ApiError::BookNotFound(_) => (StatusCode::NOT_FOUND, "BOOK_NOT_FOUND"),

            // 409 Conflict - 存在しないか既に貸出中（サービスは区別しない）
            ApiError::IssueRejected(_) => (StatusCode::CONFLICT, "ISSUE_REJECTED"),
        };

        tracing::debug!(error = %self, "Request rejected");

        let body = Json(ErrorResponse::new(error_type, self.to_string()));
        (status, body).into_response()
    }
}
