//! # リポジトリ実装
//!
//! Todo アイテムストアのトレイトと PostgreSQL 実装を提供する。
//!
//! ## 設計方針
//!
//! - **依存性逆転**: ユースケースはトレイト経由でストアにアクセスする
//! - **データベース抽象化**: sqlx を使用し、PostgreSQL 固有の処理をカプセル化
//! - **テスタビリティ**: トレイト経由でモック可能な設計

pub mod todo_item_repository;

pub use todo_item_repository::{PostgresTodoItemRepository, TodoItemRepository};
