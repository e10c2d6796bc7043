use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Isbn, User};

/// 書籍 - 蔵書カタログの1冊とその貸出状態
///
/// 不変条件（拡張ワークフロー）：
/// - `borrowed_by` と `due_date` は `available == false` の場合のみ設定される
///
/// 基本ワークフロー（`set_available`のみ）は借り手・返却期限を変更しない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub isbn: Isbn,
    pub title: String,
    pub available: bool,
    pub borrowed_by: Option<User>,
    pub due_date: Option<NaiveDate>,
}

impl Book {
    /// 貸出可能な状態で新規作成
    pub fn new(isbn: impl Into<Isbn>, title: impl Into<String>) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            available: true,
            borrowed_by: None,
            due_date: None,
        }
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    /// 利用者に貸し出す
    ///
    /// 借り手と返却期限を記録し、貸出不可にする。
    pub fn borrow_by(&mut self, user: User, due_date: NaiveDate) {
        self.borrowed_by = Some(user);
        self.due_date = Some(due_date);
        self.available = false;
    }

    /// 返却済みにする（借り手と返却期限をクリア）
    pub fn mark_returned(&mut self) {
        self.borrowed_by = None;
        self.due_date = None;
        self.available = true;
    }

    /// 延滞判定
    ///
    /// 返却期限が設定されていて、`current_date`が期限を過ぎ、かつ貸出中の場合のみtrue。
    /// 期限当日は延滞ではない。
    pub fn is_overdue(&self, current_date: NaiveDate) -> bool {
        match self.due_date {
            Some(due_date) => current_date > due_date && !self.available,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_book_properties() {
        let book = Book::new("123", "Clean Code");
        assert_eq!(book.isbn.value(), "123");
        assert_eq!(book.title, "Clean Code");
        assert!(book.is_available());
        assert!(book.borrowed_by.is_none());
        assert!(book.due_date.is_none());
    }

    #[test]
    fn test_availability_setter() {
        let mut book = Book::new("123", "Refactoring");
        book.set_available(false);
        assert!(!book.is_available());
        // 基本ワークフローは借り手を設定しない
        assert!(book.borrowed_by.is_none());
    }

    #[test]
    fn test_borrow_by_records_borrower_and_due_date() {
        let mut book = Book::new("123", "Refactoring");
        let user = User::new("u1", "Alice", false);

        book.borrow_by(user.clone(), date(2024, 3, 15));

        assert!(!book.is_available());
        assert_eq!(book.borrowed_by, Some(user));
        assert_eq!(book.due_date, Some(date(2024, 3, 15)));
    }

    #[test]
    fn test_mark_returned_clears_borrower() {
        let mut book = Book::new("123", "Refactoring");
        book.borrow_by(User::new("u1", "Alice", false), date(2024, 3, 15));

        book.mark_returned();

        assert!(book.is_available());
        assert!(book.borrowed_by.is_none());
        assert!(book.due_date.is_none());
    }

    #[test]
    fn test_is_overdue_after_due_date() {
        let mut book = Book::new("123", "Refactoring");
        book.borrow_by(User::new("u1", "Alice", false), date(2024, 3, 15));

        assert!(!book.is_overdue(date(2024, 3, 14)));
        assert!(!book.is_overdue(date(2024, 3, 15)));
        assert!(book.is_overdue(date(2024, 3, 16)));
    }

    #[test]
    fn test_is_overdue_false_without_due_date() {
        let mut book = Book::new("123", "Refactoring");
        book.set_available(false);
        assert!(!book.is_overdue(date(2099, 1, 1)));
    }

    #[test]
    fn test_is_overdue_false_when_available() {
        let mut book = Book::new("123", "Refactoring");
        book.borrow_by(User::new("u1", "Alice", false), date(2024, 3, 15));
        // 基本の返却は期限をクリアしないが、貸出可能なら延滞ではない
        book.set_available(true);
        assert!(!book.is_overdue(date(2024, 4, 1)));
    }
}
