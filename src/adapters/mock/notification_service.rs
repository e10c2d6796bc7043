use crate::domain::{Book, User};
use crate::ports::notification_service::NotificationService as NotificationServiceTrait;
use std::sync::{Mutex, PoisonError};

/// Kind of notification that was requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    BookBorrowed,
    ReservationAvailable,
    Overdue,
}

/// A single recorded notification call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub user: User,
    pub book: Book,
}

/// Recording implementation of NotificationService
///
/// Does not send actual notifications.
/// Records every call in order so tests can verify interactions.
pub struct NotificationService {
    sent: Mutex<Vec<Notification>>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
        }
    }

    /// All recorded notifications, in call order
    pub fn sent(&self) -> Vec<Notification> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of recorded notifications of the given kind
    pub fn count(&self, kind: NotificationKind) -> usize {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|n| n.kind == kind)
            .count()
    }

    fn record(&self, kind: NotificationKind, user: &User, book: &Book) {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Notification {
                kind,
                user: user.clone(),
                book: book.clone(),
            });
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationServiceTrait for NotificationService {
    fn notify_overdue(&self, user: &User, book: &Book) {
        self.record(NotificationKind::Overdue, user, book);
    }

    fn notify_reservation_available(&self, user: &User, book: &Book) {
        self.record(NotificationKind::ReservationAvailable, user, book);
    }

    fn notify_book_borrowed(&self, user: &User, book: &Book) {
        self.record(NotificationKind::BookBorrowed, user, book);
    }
}
