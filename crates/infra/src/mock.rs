//! # テスト用モックリポジトリ
//!
//! ユースケーステストや API テストで使用するインメモリモックリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! todo-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use todo_domain::todo::{TodoItem, TodoItemId};

use crate::{error::InfraError, repository::TodoItemRepository};

// ===== MockTodoItemRepository =====

/// インメモリの TodoItemRepository
///
/// 採番は「現在の最大 ID + 1」。`Clone` したインスタンスは同じストアを共有する。
#[derive(Clone, Default)]
pub struct MockTodoItemRepository {
    items: Arc<Mutex<Vec<TodoItem>>>,
}

impl MockTodoItemRepository {
    pub fn new() -> Self {
        Self {
            items: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// 採番済みのアイテムをそのまま追加する
    pub fn add_item(&self, item: TodoItem) {
        self.items.lock().unwrap().push(item);
    }

    fn next_id(items: &[TodoItem]) -> TodoItemId {
        let max = items.iter().map(|i| i.id().as_i32()).max().unwrap_or(0);
        TodoItemId::new(max + 1)
    }
}

#[async_trait]
impl TodoItemRepository for MockTodoItemRepository {
    async fn insert(&self, item: &TodoItem) -> Result<TodoItem, InfraError> {
        let mut items = self.items.lock().unwrap();

        let id = if item.id().is_unset() {
            Self::next_id(&items)
        } else {
            item.id()
        };
        if id.as_i32() < 0 {
            return Err(InfraError::unexpected(format!("不正な ID です: {id}")));
        }
        if items.iter().any(|i| i.id() == id) {
            return Err(InfraError::unexpected(format!("ID {id} は既に存在します")));
        }

        let stored = item.clone().with_id(id);
        items.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: TodoItemId) -> Result<Option<TodoItem>, InfraError> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.id() == id)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<TodoItem>, InfraError> {
        let mut items = self.items.lock().unwrap().clone();
        items.sort_by_key(TodoItem::id);
        Ok(items)
    }

    async fn update(&self, item: &TodoItem) -> Result<bool, InfraError> {
        let mut items = self.items.lock().unwrap();
        match items.iter_mut().find(|i| i.id() == item.id()) {
            Some(existing) => {
                *existing = item.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: TodoItemId) -> Result<bool, InfraError> {
        let mut items = self.items.lock().unwrap();
        let before = items.len();
        items.retain(|i| i.id() != id);
        Ok(items.len() < before)
    }

    async fn count(&self) -> Result<i64, InfraError> {
        Ok(self.items.lock().unwrap().len() as i64)
    }

    async fn delete_all(&self) -> Result<u64, InfraError> {
        let mut items = self.items.lock().unwrap();
        let removed = items.len() as u64;
        items.clear();
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn test_未採番のアイテムは最大id_plus_1で採番される() {
        let sut = MockTodoItemRepository::new();
        sut.add_item(TodoItem::from_db(TodoItemId::new(5), "Item 5".to_string(), false));

        let stored = sut.insert(&TodoItem::new("Item 6", true)).await.unwrap();

        assert_eq!(stored.id(), TodoItemId::new(6));
        assert_eq!(stored.name(), "Item 6");
    }

    #[tokio::test]
    async fn test_重複したidの挿入はエラーになる() {
        let sut = MockTodoItemRepository::new();
        let item = TodoItem::from_db(TodoItemId::new(1), "Item 1".to_string(), false);
        sut.insert(&item).await.unwrap();

        let result = sut.insert(&item).await;

        assert!(result.is_err());
        assert_eq!(sut.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_負のidの挿入はエラーになる() {
        let sut = MockTodoItemRepository::new();
        let item = TodoItem::from_db(TodoItemId::new(-1), "x".to_string(), false);

        let result = sut.insert(&item).await;

        assert!(result.is_err());
        assert_eq!(sut.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_find_allはid昇順で返す() {
        let sut = MockTodoItemRepository::new();
        sut.add_item(TodoItem::from_db(TodoItemId::new(3), "c".to_string(), false));
        sut.add_item(TodoItem::from_db(TodoItemId::new(1), "a".to_string(), false));
        sut.add_item(TodoItem::from_db(TodoItemId::new(2), "b".to_string(), false));

        let ids: Vec<i32> = sut
            .find_all()
            .await
            .unwrap()
            .iter()
            .map(|i| i.id().as_i32())
            .collect();

        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_存在しないアイテムの更新と削除はfalseを返す() {
        let sut = MockTodoItemRepository::new();
        let missing = TodoItem::from_db(TodoItemId::new(99), "x".to_string(), false);

        assert!(!sut.update(&missing).await.unwrap());
        assert!(!sut.delete(TodoItemId::new(99)).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_allは削除件数を返し空にする() {
        let sut = MockTodoItemRepository::new();
        sut.insert(&TodoItem::new("a", false)).await.unwrap();
        sut.insert(&TodoItem::new("b", false)).await.unwrap();

        assert_eq!(sut.delete_all().await.unwrap(), 2);
        assert_eq!(sut.count().await.unwrap(), 0);
    }
}
