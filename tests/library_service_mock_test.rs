use library_checkout::application::library::LibraryService;
use library_checkout::domain::{Book, User};
use library_checkout::ports::*;
use mockall::{Sequence, mock};
use std::sync::Arc;

mod common;

use common::{due_date, regular_user};

mock! {
    Store {}

    impl DataStore for Store {
        fn find_book_by_isbn(&self, isbn: &str) -> Option<Book>;
        fn update_book(&self, book: Book);
    }
}

mock! {
    Notifier {}

    impl NotificationService for Notifier {
        fn notify_overdue(&self, user: &User, book: &Book);
        fn notify_reservation_available(&self, user: &User, book: &Book);
        fn notify_book_borrowed(&self, user: &User, book: &Book);
    }
}

/// 指定ISBNで常に同じ書籍を返すストア
fn store_returning(isbn: &'static str, book: Option<Book>) -> MockStore {
    let mut store = MockStore::new();
    store
        .expect_find_book_by_isbn()
        .withf(move |requested| requested == isbn)
        .returning(move |_| book.clone());
    store
}

#[test]
fn test_issue_book_updates_store_once() {
    let mut store = store_returning("111", Some(Book::new("111", "Clean Code")));
    store
        .expect_update_book()
        .withf(|book| book.isbn.value() == "111" && !book.available)
        .times(1)
        .return_const(());

    let service = LibraryService::new(Arc::new(store));

    assert!(service.issue_book(&regular_user(), "111"));
}

#[test]
fn test_issue_book_missing_never_updates() {
    let mut store = store_returning("404", None);
    store.expect_update_book().never();

    let service = LibraryService::new(Arc::new(store));

    assert!(!service.issue_book(&regular_user(), "404"));
}

#[test]
fn test_issue_with_due_date_persists_before_notifying() {
    let mut seq = Sequence::new();
    let user = regular_user();

    let mut store = MockStore::new();
    store
        .expect_find_book_by_isbn()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Some(Book::new("notify001", "Notification Test")));

    let expected_user = user.clone();
    store
        .expect_update_book()
        .withf(move |book| {
            book.borrowed_by.as_ref() == Some(&expected_user) && book.due_date == Some(due_date())
        })
        .times(1)
        .in_sequence(&mut seq)
        .return_const(());

    let mut notifier = MockNotifier::new();
    let expected_user = user.clone();
    notifier
        .expect_notify_book_borrowed()
        .withf(move |u, book| *u == expected_user && book.isbn.value() == "notify001")
        .times(1)
        .in_sequence(&mut seq)
        .return_const(());

    let service = LibraryService::with_notifications(Arc::new(store), Arc::new(notifier));

    assert!(service.issue_book_with_due_date(&user, "notify001", due_date()));
}

#[test]
fn test_issue_with_due_date_unavailable_never_notifies() {
    let mut borrowed = Book::new("notify002", "Unavailable Book");
    borrowed.set_available(false);

    let mut store = store_returning("notify002", Some(borrowed));
    store.expect_update_book().never();

    let mut notifier = MockNotifier::new();
    notifier.expect_notify_book_borrowed().never();

    let service = LibraryService::with_notifications(Arc::new(store), Arc::new(notifier));

    assert!(!service.issue_book_with_due_date(&regular_user(), "notify002", due_date()));
}

#[test]
fn test_return_book_enhanced_clears_borrower() {
    let mut issued = Book::new("111", "Clean Code");
    issued.borrow_by(regular_user(), due_date());

    let mut store = store_returning("111", Some(issued));
    store
        .expect_update_book()
        .withf(|book| book.available && book.borrowed_by.is_none() && book.due_date.is_none())
        .times(1)
        .return_const(());

    let service = LibraryService::new(Arc::new(store));

    assert!(service.return_book_enhanced(&regular_user(), "111"));
}

#[test]
fn test_notify_reservation_only_when_available() {
    let mut store = MockStore::new();
    store
        .expect_find_book_by_isbn()
        .withf(|isbn| isbn == "free")
        .returning(|_| Some(Book::new("free", "Reserved Book")));
    store
        .expect_find_book_by_isbn()
        .withf(|isbn| isbn == "taken")
        .returning(|_| {
            let mut book = Book::new("taken", "Borrowed Book");
            book.set_available(false);
            Some(book)
        });

    let mut notifier = MockNotifier::new();
    notifier
        .expect_notify_reservation_available()
        .withf(|_, book| book.isbn.value() == "free")
        .times(1)
        .return_const(());

    let service = LibraryService::with_notifications(Arc::new(store), Arc::new(notifier));
    let user = User::new("u3", "Charlie", false);

    service.notify_reservation(&user, "free");
    service.notify_reservation(&user, "taken");
}

#[test]
fn test_notify_reservation_without_notifier_skips_lookup() {
    let mut store = MockStore::new();
    store.expect_find_book_by_isbn().never();

    let service = LibraryService::new(Arc::new(store));

    service.notify_reservation(&regular_user(), "111");
}

#[test]
fn test_process_overdue_books_touches_nothing() {
    let mut store = MockStore::new();
    store.expect_find_book_by_isbn().never();
    store.expect_update_book().never();

    let mut notifier = MockNotifier::new();
    notifier.expect_notify_overdue().never();

    let service = LibraryService::with_notifications(Arc::new(store), Arc::new(notifier));

    service.process_overdue_books(due_date());
}
