use crate::domain::{Book, Isbn};
use crate::ports::data_store::DataStore;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// サンプルデータ投入済みのインメモリデータストア
///
/// デモ用。プロセスのメモリ以外には永続化しない。
pub struct DatabaseStore {
    books: RwLock<HashMap<Isbn, Book>>,
}

impl DatabaseStore {
    /// サンプルの蔵書（"111" Clean Code, "222" Effective Java）で初期化
    pub fn new() -> Self {
        let store = Self::empty();
        store.update_book(Book::new("111", "Clean Code"));
        store.update_book(Book::new("222", "Effective Java"));
        store
    }

    /// サンプルデータなしで初期化
    pub fn empty() -> Self {
        Self {
            books: RwLock::new(HashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.books
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for DatabaseStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DataStore for DatabaseStore {
    fn find_book_by_isbn(&self, isbn: &str) -> Option<Book> {
        self.books
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(isbn)
            .cloned()
    }

    fn update_book(&self, book: Book) {
        self.books
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(book.isbn.clone(), book);
    }
}
