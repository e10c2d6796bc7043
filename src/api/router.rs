use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{
    AppState, get_book, issue_book, process_overdue, reservation_notice, return_book,
};

/// Creates the API router with all circulation endpoints
///
/// Query endpoints:
/// - GET /books/:isbn - Get a book's circulation state
///
/// Command endpoints:
/// - POST /books/:isbn/issue - Issue a book (optionally with a due date)
/// - POST /books/:isbn/return - Return a book
/// - POST /books/:isbn/reservation-notice - Notify a reserving user
/// - POST /overdue/process - Run overdue processing
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        .route("/books/:isbn", get(get_book))
        .route("/books/:isbn/issue", post(issue_book))
        .route("/books/:isbn/return", post(return_book))
        .route("/books/:isbn/reservation-notice", post(reservation_notice))
        .route("/overdue/process", post(process_overdue))
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        // Add application state
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
