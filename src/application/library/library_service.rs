use crate::domain::{Book, User};
use crate::ports::*;
use chrono::NaiveDate;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// 貸出・返却ワークフローを調停するサービス
///
/// 依存関係（データストアと任意の通知サービス）は構築時に明示的に注入される。
/// グローバルな状態は持たない。
///
/// 「見つからない」「前提条件を満たさない（貸出中・貸出可能）」は
/// エラーではなく`false`で表す。どちらが原因かは区別しない。
///
/// 貸出・返却の「検索→更新」は貸出ロックを保持したまま行う。
/// ロックはクローン間で共有されるため、同じ書籍を同時に貸し出せるのは1件のみ。
#[derive(Clone)]
pub struct LibraryService {
    store: Arc<dyn DataStore>,
    notification_service: Option<Arc<dyn NotificationService>>,
    circulation_lock: Arc<Mutex<()>>,
}

impl LibraryService {
    /// 通知なしで構築する
    pub fn new(store: Arc<dyn DataStore>) -> Self {
        Self {
            store,
            notification_service: None,
            circulation_lock: Arc::new(Mutex::new(())),
        }
    }

    /// 通知サービス付きで構築する
    pub fn with_notifications(
        store: Arc<dyn DataStore>,
        notification_service: Arc<dyn NotificationService>,
    ) -> Self {
        Self {
            store,
            notification_service: Some(notification_service),
            circulation_lock: Arc::new(Mutex::new(())),
        }
    }

    /// 注入されたデータストア
    pub fn data_store(&self) -> &Arc<dyn DataStore> {
        &self.store
    }

    pub fn has_notifier(&self) -> bool {
        self.notification_service.is_some()
    }

    /// 書籍を貸し出す（基本）
    ///
    /// ビジネスルール：
    /// - 書籍が存在すること
    /// - 書籍が貸出可能であること
    ///
    /// 貸出可能フラグのみを切り替える。借り手・返却期限は変更しない。
    pub fn issue_book(&self, user: &User, isbn: &str) -> bool {
        let _guard = self.lock_circulation();
        let Some(mut book) = self.find_available(isbn) else {
            return false;
        };

        book.set_available(false);
        self.store.update_book(book);

        tracing::info!(isbn, user_id = %user.id, "Book issued");
        true
    }

    /// 返却期限付きで書籍を貸し出す
    ///
    /// ビジネスルール：`issue_book`と同じ。
    ///
    /// 成功時は借り手と返却期限を記録して永続化し、その後、通知サービスが
    /// 設定されていれば貸出完了を通知する。失敗時は副作用なし。
    pub fn issue_book_with_due_date(&self, user: &User, isbn: &str, due_date: NaiveDate) -> bool {
        let book = {
            let _guard = self.lock_circulation();
            let Some(mut book) = self.find_available(isbn) else {
                return false;
            };

            book.borrow_by(user.clone(), due_date);
            self.store.update_book(book.clone());
            book
        };

        tracing::info!(isbn, user_id = %user.id, %due_date, "Book issued with due date");

        if let Some(notifier) = &self.notification_service {
            notifier.notify_book_borrowed(user, &book);
        }
        true
    }

    /// 書籍を返却する（基本）
    ///
    /// 書籍が存在すれば、以前の状態に関係なく貸出可能にしてtrueを返す。
    /// 借り手・返却期限はクリアしない。
    pub fn return_book(&self, user: &User, isbn: &str) -> bool {
        let _guard = self.lock_circulation();
        let Some(mut book) = self.store.find_book_by_isbn(isbn) else {
            tracing::debug!(isbn, "Return rejected: book not found");
            return false;
        };

        book.set_available(true);
        self.store.update_book(book);

        tracing::info!(isbn, user_id = %user.id, "Book returned");
        true
    }

    /// 書籍を返却し、借り手と返却期限をクリアする
    pub fn return_book_enhanced(&self, user: &User, isbn: &str) -> bool {
        let _guard = self.lock_circulation();
        let Some(mut book) = self.store.find_book_by_isbn(isbn) else {
            tracing::debug!(isbn, "Return rejected: book not found");
            return false;
        };

        book.mark_returned();
        self.store.update_book(book);

        tracing::info!(isbn, user_id = %user.id, "Book returned, borrower cleared");
        true
    }

    /// 予約した書籍が貸出可能であれば利用者に通知する
    ///
    /// 通知サービス未設定、書籍なし、貸出中のいずれかの場合は何もしない。
    pub fn notify_reservation(&self, user: &User, isbn: &str) {
        let Some(notifier) = &self.notification_service else {
            return;
        };

        match self.store.find_book_by_isbn(isbn) {
            Some(book) if book.is_available() => {
                notifier.notify_reservation_available(user, &book);
            }
            _ => tracing::debug!(isbn, "Reservation notice skipped"),
        }
    }

    /// 延滞書籍の処理
    ///
    /// 拡張ポイント。現時点では貸出中の書籍の列挙も通知も行わない。
    pub fn process_overdue_books(&self, current_date: NaiveDate) {
        if self.notification_service.is_none() {
            return;
        }

        tracing::debug!(%current_date, "Overdue processing requested; nothing to scan");
    }

    fn lock_circulation(&self) -> MutexGuard<'_, ()> {
        self.circulation_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn find_available(&self, isbn: &str) -> Option<Book> {
        match self.store.find_book_by_isbn(isbn) {
            Some(book) if book.is_available() => Some(book),
            Some(_) => {
                tracing::debug!(isbn, "Issue rejected: book already issued");
                None
            }
            None => {
                tracing::debug!(isbn, "Issue rejected: book not found");
                None
            }
        }
    }
}
