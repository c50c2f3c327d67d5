//! # 初期データ投入
//!
//! 起動時に一度だけ呼び出す。ストアが空の場合のみ `"Item 1"` 〜 `"Item {count}"`
//! を投入するため、何度呼んでも結果は変わらない。

use todo_domain::todo::TodoItem;
use todo_infra::{InfraError, repository::TodoItemRepository};

/// 投入するアイテム数のデフォルト値
pub const DEFAULT_SEED_COUNT: usize = 10;

/// ストアが空なら初期アイテムを投入する
///
/// 投入した件数を返す。ストアが空でなければ何もせず `0` を返す。
#[tracing::instrument(skip_all, fields(count = count))]
pub async fn seed_default_items(
    repository: &dyn TodoItemRepository,
    count: usize,
) -> Result<usize, InfraError> {
    if repository.count().await? > 0 {
        tracing::debug!("既存データがあるため初期データの投入をスキップします");
        return Ok(0);
    }

    for i in 1..=count {
        repository
            .insert(&TodoItem::new(format!("Item {i}"), false))
            .await?;
    }

    tracing::info!(count, "初期データを投入しました");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use todo_domain::todo::TodoItemId;
    use todo_infra::mock::MockTodoItemRepository;

    use super::*;

    #[tokio::test]
    async fn test_空のストアに既定件数のアイテムが投入される() {
        let repo = MockTodoItemRepository::new();

        let inserted = seed_default_items(&repo, DEFAULT_SEED_COUNT).await.unwrap();

        assert_eq!(inserted, 10);
        let items = repo.find_all().await.unwrap();
        let names: Vec<&str> = items.iter().map(|i| i.name()).collect();
        assert_eq!(names.first(), Some(&"Item 1"));
        assert_eq!(names.last(), Some(&"Item 10"));
        assert!(items.iter().all(|i| !i.is_complete()));
    }

    #[tokio::test]
    async fn test_空でないストアには投入しない() {
        let repo = MockTodoItemRepository::new();
        repo.add_item(TodoItem::from_db(
            TodoItemId::new(1),
            "既存".to_string(),
            true,
        ));

        let inserted = seed_default_items(&repo, DEFAULT_SEED_COUNT).await.unwrap();

        assert_eq!(inserted, 0);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_2回実行しても件数は変わらない() {
        let repo = MockTodoItemRepository::new();

        seed_default_items(&repo, DEFAULT_SEED_COUNT).await.unwrap();
        let second = seed_default_items(&repo, DEFAULT_SEED_COUNT).await.unwrap();

        assert_eq!(second, 0);
        assert_eq!(repo.count().await.unwrap(), 10);
    }
}
