use crate::domain::{Book, User};

/// 通知サービスポート
///
/// 利用者への通知配信メカニズムを抽象化する。
/// 実装はメール、SMS、プッシュ通知などが考えられる。
///
/// いずれも送りっぱなしの副作用で、失敗は呼び出し側に返さない。
pub trait NotificationService: Send + Sync {
    /// 延滞通知を利用者に送信する
    fn notify_overdue(&self, user: &User, book: &Book);

    /// 予約した書籍が貸出可能になったことを利用者に通知する
    fn notify_reservation_available(&self, user: &User, book: &Book);

    /// 貸出完了の確認を利用者に送信する
    ///
    /// 貸出が永続化された後に呼ばれる。
    fn notify_book_borrowed(&self, user: &User, book: &Book);
}
