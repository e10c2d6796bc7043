use serde::{Deserialize, Serialize};

use super::UserId;

/// 利用者
///
/// 不変の値。ライフサイクルは呼び出し側が管理し、コアは保持しない
/// （貸出中の書籍が借り手としてコピーを持つのみ）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub is_admin: bool,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>, is_admin: bool) -> Self {
        Self {
            id: UserId::new(id),
            name: name.into(),
            is_admin,
        }
    }
}
