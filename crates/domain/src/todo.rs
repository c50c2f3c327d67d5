//! # Todo アイテム
//!
//! システム唯一のエンティティ。ID・名前・完了フラグを持つ。
//!
//! ## ライフサイクル
//!
//! - 作成: ID 未採番（[`TodoItemId::UNSET`]）の状態で生成し、ストアが採番する
//! - 更新: [`TodoItem::with_contents`] で変更後のコピーを作り、明示的に永続化する
//! - 削除: ストアから物理削除する（他エンティティからの参照はない）
//!
//! ## 使用例
//!
//! ```rust
//! use todo_domain::todo::{TodoItem, TodoItemId};
//!
//! let stored = TodoItem::from_db(TodoItemId::new(1), "Item 1".to_string(), false);
//! let updated = stored.with_contents("Item 1 Updated".to_string(), true);
//!
//! assert_eq!(updated.id(), TodoItemId::new(1));
//! assert!(updated.is_complete());
//! ```

use derive_more::Display;

/// Todo アイテムの一意識別子
///
/// ストアが採番する整数 ID。`0` は未採番（未永続化）を表す。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
#[display("{_0}")]
pub struct TodoItemId(i32);

impl TodoItemId {
    /// 未採番を表す ID
    pub const UNSET: Self = Self(0);

    /// 整数値から ID を作成する
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    /// 内部の整数値を取得する
    pub fn as_i32(&self) -> i32 {
        self.0
    }

    /// 未採番かどうか
    pub fn is_unset(&self) -> bool {
        *self == Self::UNSET
    }
}

impl Default for TodoItemId {
    fn default() -> Self {
        Self::UNSET
    }
}

/// Todo アイテムエンティティ
///
/// # 不変条件
///
/// - 永続化済みのアイテムは一意な `id` を持つ
/// - `id` は作成後に変更されない（[`with_contents`](TodoItem::with_contents) は `id` を保持する）
/// - `name` の内容は検証しない（空文字列も許容）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    id:          TodoItemId,
    name:        String,
    is_complete: bool,
}

impl TodoItem {
    /// 未永続化のアイテムを作成する
    pub fn new(name: impl Into<String>, is_complete: bool) -> Self {
        Self {
            id: TodoItemId::UNSET,
            name: name.into(),
            is_complete,
        }
    }

    /// データベースからアイテムを復元する
    pub fn from_db(id: TodoItemId, name: String, is_complete: bool) -> Self {
        Self {
            id,
            name,
            is_complete,
        }
    }

    /// ID を設定したコピーを返す
    ///
    /// 採番結果の反映や、パスパラメータの ID で対象を指定する際に使用する。
    pub fn with_id(self, id: TodoItemId) -> Self {
        Self { id, ..self }
    }

    /// 名前と完了フラグを置き換えたコピーを返す（`id` は保持）
    pub fn with_contents(self, name: String, is_complete: bool) -> Self {
        Self {
            name,
            is_complete,
            ..self
        }
    }

    // Getter メソッド

    pub fn id(&self) -> TodoItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete
    }
}
