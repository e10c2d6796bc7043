use crate::domain::{Book, Isbn};
use crate::ports::data_store::DataStore;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// Stub implementation of DataStore
///
/// Starts empty. Tests seed it with `add_book` before exercising the service.
pub struct StubDataStore {
    books: Mutex<HashMap<Isbn, Book>>,
}

impl StubDataStore {
    pub fn new() -> Self {
        Self {
            books: Mutex::new(HashMap::new()),
        }
    }

    /// Add a book for testing purposes
    pub fn add_book(&self, book: Book) {
        self.books
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(book.isbn.clone(), book);
    }

    pub fn len(&self) -> usize {
        self.books.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for StubDataStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DataStore for StubDataStore {
    fn find_book_by_isbn(&self, isbn: &str) -> Option<Book> {
        self.books
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(isbn)
            .cloned()
    }

    fn update_book(&self, book: Book) {
        self.add_book(book);
    }
}
