//! # Todo ユースケース
//!
//! Todo アイテムの CRUD を実装する。
//!
//! 更新と削除は「取得 → 変更 → 明示的な永続化」の順で行う。
//! 取得と書き込みの間にトランザクションは張らないため、
//! 同一 ID への同時更新は後勝ちになる。

use std::sync::Arc;

use async_trait::async_trait;
use todo_domain::todo::{TodoItem, TodoItemId};
use todo_infra::repository::TodoItemRepository;

use super::TodoUseCase;
use crate::error::TodoError;

/// Todo ユースケースの実装
pub struct TodoUseCaseImpl {
    todo_item_repository: Arc<dyn TodoItemRepository>,
}

impl TodoUseCaseImpl {
    pub fn new(todo_item_repository: Arc<dyn TodoItemRepository>) -> Self {
        Self {
            todo_item_repository,
        }
    }
}

#[async_trait]
impl TodoUseCase for TodoUseCaseImpl {
    async fn get_by_id(&self, id: TodoItemId) -> Result<Option<TodoItem>, TodoError> {
        Ok(self.todo_item_repository.find_by_id(id).await?)
    }

    async fn get_all(&self) -> Result<Vec<TodoItem>, TodoError> {
        Ok(self.todo_item_repository.find_all().await?)
    }

    async fn create(&self, item: TodoItem) -> Result<TodoItem, TodoError> {
        let created = self.todo_item_repository.insert(&item).await?;

        if created.id().is_unset() {
            return Err(TodoError::Internal(
                "作成したアイテムに ID が採番されていません".to_string(),
            ));
        }

        tracing::info!(id = %created.id(), "Todo アイテムを作成しました");
        Ok(created)
    }

    async fn update(&self, item: TodoItem) -> Result<Option<TodoItem>, TodoError> {
        let Some(existing) = self.todo_item_repository.find_by_id(item.id()).await? else {
            return Ok(None);
        };

        let updated = existing.with_contents(item.name().to_string(), item.is_complete());
        if !self.todo_item_repository.update(&updated).await? {
            // 取得後に別リクエストで削除された
            return Ok(None);
        }

        tracing::info!(id = %updated.id(), "Todo アイテムを更新しました");
        Ok(Some(updated))
    }

    async fn delete(&self, id: TodoItemId) -> Result<Option<TodoItem>, TodoError> {
        let Some(existing) = self.todo_item_repository.find_by_id(id).await? else {
            return Ok(None);
        };

        if !self.todo_item_repository.delete(id).await? {
            return Ok(None);
        }

        tracing::info!(%id, "Todo アイテムを削除しました");
        Ok(Some(existing))
    }
}
