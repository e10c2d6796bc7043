use crate::domain::Book;

/// データストアポート
///
/// ISBN → 書籍 のマッピングの参照と永続化を抽象化する。
/// 見つからないことはエラーではなく`None`で表す。
pub trait DataStore: Send + Sync {
    /// ISBNの完全一致で書籍を検索する
    ///
    /// 保存されている書籍のコピーを返す。変更を反映するには`update_book`を呼ぶ。
    fn find_book_by_isbn(&self, isbn: &str) -> Option<Book>;

    /// 書籍を保存する（upsert）
    ///
    /// 書籍のISBNをキーとして、存在しなければ追加、存在すれば上書きする。
    /// 検証は行わない。
    fn update_book(&self, book: Book);
}
