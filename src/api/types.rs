use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{Book, User};

/// リクエスト中の利用者
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPayload {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub is_admin: bool,
}

impl From<UserPayload> for User {
    fn from(payload: UserPayload) -> Self {
        User::new(payload.id, payload.name, payload.is_admin)
    }
}

/// 貸出リクエスト（POST /books/:isbn/issue）
///
/// `due_date`を指定すると借り手と返却期限を記録し、通知も行う。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueBookRequest {
    pub user: UserPayload,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

/// 返却リクエスト（POST /books/:isbn/return）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnBookRequest {
    pub user: UserPayload,
    /// 借り手と返却期限もクリアするか
    #[serde(default)]
    pub clear_borrower: bool,
}

/// 延滞処理リクエスト（POST /overdue/process）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessOverdueRequest {
    pub current_date: NaiveDate,
}

/// 書籍レスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookResponse {
    pub isbn: String,
    pub title: String,
    pub available: bool,
    /// 借り手の利用者ID
    pub borrowed_by: Option<String>,
    pub due_date: Option<NaiveDate>,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            isbn: book.isbn.value().to_string(),
            title: book.title,
            available: book.available,
            borrowed_by: book.borrowed_by.map(|user| user.id.value().to_string()),
            due_date: book.due_date,
        }
    }
}

/// エラーレスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
