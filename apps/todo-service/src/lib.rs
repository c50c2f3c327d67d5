//! # Todo Service ライブラリ
//!
//! Todo API のユースケース、ハンドラ、ルーター構築を公開する。
//! `main.rs` と統合テストの双方から利用する。

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
