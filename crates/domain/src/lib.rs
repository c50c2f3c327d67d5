//! # Todo ドメイン層
//!
//! Todo アイテムのドメインモデルを定義する。
//!
//! ## 依存関係の方向
//!
//! ```text
//! todo-service → todo-infra → todo-domain
//! ```
//!
//! ドメイン層はインフラ層（DB、外部サービス）には一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`todo`] - Todo アイテムエンティティと識別子
//!
//! ## 使用例
//!
//! ```rust
//! use todo_domain::todo::TodoItem;
//!
//! let item = TodoItem::new("牛乳を買う", false);
//! assert!(item.id().is_unset());
//! ```

pub mod todo;
