use crate::domain::{Book, User};
use crate::ports::notification_service::NotificationService as NotificationServiceTrait;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

/// メール通知サービス
///
/// 本番ではメール配信基盤と連携する想定。現在は整形済みの1行を
/// テキスト出力先（既定は標準出力）に書き込む。
///
/// 書き込みに失敗してもログに残すのみで、呼び出し側には返さない。
pub struct NotificationService<W: Write + Send = io::Stdout> {
    sink: Mutex<W>,
}

impl NotificationService<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for NotificationService<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write + Send> NotificationService<W> {
    /// 任意の出力先に書き込む通知サービスを作成する
    pub fn with_writer(sink: W) -> Self {
        Self {
            sink: Mutex::new(sink),
        }
    }

    /// 出力先を取り出す
    pub fn into_writer(self) -> W {
        self.sink.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn send(&self, user: &User, message: String) {
        tracing::info!(user_id = %user.id, "Sending email notification");

        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = writeln!(sink, "{}", message).and_then(|_| sink.flush()) {
            tracing::warn!(user_id = %user.id, error = %e, "Failed to write email notification");
        }
    }
}

impl<W: Write + Send> NotificationServiceTrait for NotificationService<W> {
    fn notify_overdue(&self, user: &User, book: &Book) {
        self.send(
            user,
            format!("EMAIL: Dear {}, your book '{}' is overdue!", user.name, book.title),
        );
    }

    fn notify_reservation_available(&self, user: &User, book: &Book) {
        self.send(
            user,
            format!(
                "EMAIL: Dear {}, your reserved book '{}' is now available!",
                user.name, book.title
            ),
        );
    }

    fn notify_book_borrowed(&self, user: &User, book: &Book) {
        self.send(
            user,
            format!(
                "EMAIL: Dear {}, you have successfully borrowed '{}'.",
                user.name, book.title
            ),
        );
    }
}
