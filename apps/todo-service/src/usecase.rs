//! # ユースケース層
//!
//! Todo Service のビジネスロジックを実装する。
//!
//! ## 設計方針
//!
//! - **トレイトベースの設計**: ハンドラのテストでスタブに差し替えられるようトレイトを定義
//! - **依存性注入**: リポジトリはコンストラクタで外部から注入
//! - **Not Found は値で表現**: 対象が存在しない場合は `Ok(None)` を返す

pub mod seed;
pub mod todo;

use async_trait::async_trait;
pub use seed::{DEFAULT_SEED_COUNT, seed_default_items};
pub use todo::TodoUseCaseImpl;
use todo_domain::todo::{TodoItem, TodoItemId};

use crate::error::TodoError;

/// Todo ユースケーストレイト
#[async_trait]
pub trait TodoUseCase: Send + Sync {
    /// ID でアイテムを取得する
    async fn get_by_id(&self, id: TodoItemId) -> Result<Option<TodoItem>, TodoError>;

    /// 全アイテムを取得する
    async fn get_all(&self) -> Result<Vec<TodoItem>, TodoError>;

    /// アイテムを作成する
    ///
    /// 戻り値のアイテムは常に採番済み（`id > 0`）。
    async fn create(&self, item: TodoItem) -> Result<TodoItem, TodoError>;

    /// アイテムの名前と完了フラグを更新する
    ///
    /// ## 戻り値
    ///
    /// - `Ok(Some(item))`: 更新後のアイテム
    /// - `Ok(None)`: 対象が存在しない（ストアは変更しない）
    async fn update(&self, item: TodoItem) -> Result<Option<TodoItem>, TodoError>;

    /// アイテムを削除する
    ///
    /// ## 戻り値
    ///
    /// - `Ok(Some(item))`: 削除されたアイテム
    /// - `Ok(None)`: 対象が存在しない（ストアは変更しない）
    async fn delete(&self, id: TodoItemId) -> Result<Option<TodoItem>, TodoError>;
}
