#![allow(dead_code)]

use chrono::NaiveDate;
use library_checkout::domain::{Book, User};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// テスト用の一般利用者
pub fn regular_user() -> User {
    User::new("u1", "Alice", false)
}

/// 固定の返却期限（テストの再現性のため現在日付は使わない）
pub fn due_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

/// 貸出可能な書籍
pub fn clean_code() -> Book {
    Book::new("111", "Clean Code")
}

/// 複数の書き手で共有できる出力先
///
/// メール通知サービスの出力をテスト側から読み出すために使用する。
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
