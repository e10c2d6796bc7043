use crate::application::library::LibraryService;
use crate::domain::User;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;

use super::{
    error::ApiError,
    types::{BookResponse, IssueBookRequest, ProcessOverdueRequest, ReturnBookRequest, UserPayload},
};

// ============================================================================
// State
// ============================================================================

/// ハンドラー間で共有されるアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub library: LibraryService,
}

/// ストアから現在の書籍を取得してレスポンスに変換する
fn current_book(state: &AppState, isbn: String) -> Result<BookResponse, ApiError> {
    state
        .library
        .data_store()
        .find_book_by_isbn(&isbn)
        .map(BookResponse::from)
        .ok_or_else(|| ApiError::BookNotFound(isbn))
}

// ============================================================================
// Query handlers (GET)
// ============================================================================

/// GET /books/:isbn - 書籍の貸出状態を取得
pub async fn get_book(
    State(state): State<Arc<AppState>>,
    Path(isbn): Path<String>,
) -> Result<Json<BookResponse>, ApiError> {
    current_book(&state, isbn).map(Json)
}

// ============================================================================
// Command handlers (POST)
// ============================================================================

/// POST /books/:isbn/issue - 書籍を貸し出す
///
/// `due_date`があれば借り手と返却期限を記録する貸出（通知あり）、
/// なければ貸出可能フラグのみを切り替える基本の貸出を行う。
///
/// 書籍がない場合も貸出中の場合も409を返す。
pub async fn issue_book(
    State(state): State<Arc<AppState>>,
    Path(isbn): Path<String>,
    Json(req): Json<IssueBookRequest>,
) -> Result<Json<BookResponse>, ApiError> {
    let user = User::from(req.user);

    let issued = match req.due_date {
        Some(due_date) => state.library.issue_book_with_due_date(&user, &isbn, due_date),
        None => state.library.issue_book(&user, &isbn),
    };

    if !issued {
        return Err(ApiError::IssueRejected(isbn));
    }

    current_book(&state, isbn).map(Json)
}

/// POST /books/:isbn/return - 書籍を返却
///
/// 書籍が存在すれば、以前の状態に関係なく返却を受け付ける。
pub async fn return_book(
    State(state): State<Arc<AppState>>,
    Path(isbn): Path<String>,
    Json(req): Json<ReturnBookRequest>,
) -> Result<Json<BookResponse>, ApiError> {
    let user = User::from(req.user);

    let returned = if req.clear_borrower {
        state.library.return_book_enhanced(&user, &isbn)
    } else {
        state.library.return_book(&user, &isbn)
    };

    if !returned {
        return Err(ApiError::BookNotFound(isbn));
    }

    current_book(&state, isbn).map(Json)
}

/// POST /books/:isbn/reservation-notice - 予約者に貸出可能を通知
///
/// 通知が送られたかどうかに関係なく202を返す。
pub async fn reservation_notice(
    State(state): State<Arc<AppState>>,
    Path(isbn): Path<String>,
    Json(user): Json<UserPayload>,
) -> StatusCode {
    state.library.notify_reservation(&User::from(user), &isbn);
    StatusCode::ACCEPTED
}

/// POST /overdue/process - 延滞処理を起動
pub async fn process_overdue(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ProcessOverdueRequest>,
) -> StatusCode {
    state.library.process_overdue_books(req.current_date);
    StatusCode::ACCEPTED
}
