//! # TodoItemRepository
//!
//! Todo アイテムの永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **ID 採番**: 未採番（[`TodoItemId::UNSET`]）のアイテムは IDENTITY 列で採番する
//! - **明示 ID**: ID 指定で挿入した場合は IDENTITY のシーケンスを最大値に追従させる
//! - **一覧の順序**: `id` 昇順で返す

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use todo_domain::todo::{TodoItem, TodoItemId};

use crate::error::InfraError;

/// Todo アイテムリポジトリトレイト
///
/// 見つからない場合は `Option::None` を返し、エラーにはしない。
#[async_trait]
pub trait TodoItemRepository: Send + Sync {
    /// アイテムを挿入し、採番済みのアイテムを返す
    ///
    /// `id` が未採番ならストアが採番する。
    /// 負の `id`、または既に存在する `id` を指定した場合はエラー。
    async fn insert(&self, item: &TodoItem) -> Result<TodoItem, InfraError>;

    /// ID でアイテムを検索する
    async fn find_by_id(&self, id: TodoItemId) -> Result<Option<TodoItem>, InfraError>;

    /// 全アイテムを `id` 昇順で取得する
    async fn find_all(&self) -> Result<Vec<TodoItem>, InfraError>;

    /// アイテムの名前と完了フラグを更新する
    ///
    /// 対象が存在した場合は `true` を返す。
    async fn update(&self, item: &TodoItem) -> Result<bool, InfraError>;

    /// アイテムを削除する
    ///
    /// 対象が存在した場合は `true` を返す。
    async fn delete(&self, id: TodoItemId) -> Result<bool, InfraError>;

    /// 保存されているアイテム数を返す
    async fn count(&self) -> Result<i64, InfraError>;

    /// 全アイテムを削除する
    async fn delete_all(&self) -> Result<u64, InfraError>;
}

/// `todo_items` テーブルの行
#[derive(Debug, FromRow)]
struct TodoItemRow {
    id:          i32,
    name:        String,
    is_complete: bool,
}

impl From<TodoItemRow> for TodoItem {
    fn from(row: TodoItemRow) -> Self {
        TodoItem::from_db(TodoItemId::new(row.id), row.name, row.is_complete)
    }
}

/// PostgreSQL 実装の TodoItemRepository
#[derive(Debug, Clone)]
pub struct PostgresTodoItemRepository {
    pool: PgPool,
}

impl PostgresTodoItemRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert_generated(&self, item: &TodoItem) -> Result<TodoItem, InfraError> {
        let row = sqlx::query_as::<_, TodoItemRow>(
            r#"
            INSERT INTO todo_items (name, is_complete)
            VALUES ($1, $2)
            RETURNING id, name, is_complete
            "#,
        )
        .bind(item.name())
        .bind(item.is_complete())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn insert_with_id(&self, item: &TodoItem) -> Result<TodoItem, InfraError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, TodoItemRow>(
            r#"
            INSERT INTO todo_items (id, name, is_complete)
            VALUES ($1, $2, $3)
            RETURNING id, name, is_complete
            "#,
        )
        .bind(item.id().as_i32())
        .bind(item.name())
        .bind(item.is_complete())
        .fetch_one(&mut *tx)
        .await?;

        // 以降の自動採番が明示 ID と衝突しないようにする
        sqlx::query(
            r#"
            SELECT setval(
                pg_get_serial_sequence('todo_items', 'id'),
                (SELECT MAX(id) FROM todo_items)
            )
            "#,
        )
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(row.into())
    }
}

#[async_trait]
impl TodoItemRepository for PostgresTodoItemRepository {
    #[tracing::instrument(skip_all, level = "debug", fields(id = %item.id()))]
    async fn insert(&self, item: &TodoItem) -> Result<TodoItem, InfraError> {
        if item.id().is_unset() {
            return self.insert_generated(item).await;
        }
        if item.id().as_i32() < 0 {
            return Err(InfraError::unexpected(format!(
                "不正な ID です: {}",
                item.id()
            )));
        }
        self.insert_with_id(item).await
    }

    #[tracing::instrument(skip_all, level = "debug", fields(id = %id))]
    async fn find_by_id(&self, id: TodoItemId) -> Result<Option<TodoItem>, InfraError> {
        let row = sqlx::query_as::<_, TodoItemRow>(
            r#"
            SELECT id, name, is_complete
            FROM todo_items
            WHERE id = $1
            "#,
        )
        .bind(id.as_i32())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(TodoItem::from))
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<TodoItem>, InfraError> {
        let rows = sqlx::query_as::<_, TodoItemRow>(
            r#"
            SELECT id, name, is_complete
            FROM todo_items
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(TodoItem::from).collect())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(id = %item.id()))]
    async fn update(&self, item: &TodoItem) -> Result<bool, InfraError> {
        let result = sqlx::query(
            r#"
            UPDATE todo_items
            SET name = $2, is_complete = $3
            WHERE id = $1
            "#,
        )
        .bind(item.id().as_i32())
        .bind(item.name())
        .bind(item.is_complete())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    #[tracing::instrument(skip_all, level = "debug", fields(id = %id))]
    async fn delete(&self, id: TodoItemId) -> Result<bool, InfraError> {
        let result = sqlx::query("DELETE FROM todo_items WHERE id = $1")
            .bind(id.as_i32())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn count(&self) -> Result<i64, InfraError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM todo_items")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn delete_all(&self) -> Result<u64, InfraError> {
        let result = sqlx::query("DELETE FROM todo_items")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_トレイトはsendとsyncを実装している() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Box<dyn TodoItemRepository>>();
    }

    #[test]
    fn test_行からアイテムに変換される() {
        let row = TodoItemRow {
            id:          7,
            name:        "Item 7".to_string(),
            is_complete: true,
        };

        let item = TodoItem::from(row);

        assert_eq!(
            item,
            TodoItem::from_db(TodoItemId::new(7), "Item 7".to_string(), true)
        );
    }
}
