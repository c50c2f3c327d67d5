//! # Todo ハンドラ
//!
//! Todo アイテムの CRUD エンドポイントを提供する。
//!
//! ## エンドポイント
//!
//! - `GET /api/todo` - 一覧取得
//! - `GET /api/todo/{id}` - 取得
//! - `POST /api/todo` - 作成
//! - `PUT /api/todo/{id}` - 更新
//! - `DELETE /api/todo/{id}` - 削除
//!
//! 404 はボディを持たない。

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use todo_domain::todo::{TodoItem, TodoItemId};

use crate::{error::TodoError, usecase::TodoUseCase};

/// Todo ハンドラの共有状態
pub struct TodoState {
    pub usecase: Arc<dyn TodoUseCase>,
}

// --- リクエスト/レスポンス型 ---

/// 作成・更新リクエスト
///
/// 省略または `null` のフィールドは `name = ""`、`isComplete = false` として扱う。
/// ボディ中の `id` は読まない（作成時は採番、更新時はパスの ID を使う）。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItemRequest {
    pub name:        Option<String>,
    pub is_complete: Option<bool>,
}

impl TodoItemRequest {
    fn into_item(self) -> TodoItem {
        TodoItem::new(
            self.name.unwrap_or_default(),
            self.is_complete.unwrap_or_default(),
        )
    }
}

/// Todo アイテムのレスポンス表現
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItemDto {
    pub id:          i32,
    pub name:        String,
    pub is_complete: bool,
}

impl From<&TodoItem> for TodoItemDto {
    fn from(item: &TodoItem) -> Self {
        Self {
            id:          item.id().as_i32(),
            name:        item.name().to_string(),
            is_complete: item.is_complete(),
        }
    }
}

// --- ハンドラ ---

/// GET /api/todo
pub async fn list_todos(
    State(state): State<Arc<TodoState>>,
) -> Result<Json<Vec<TodoItemDto>>, TodoError> {
    let items = state.usecase.get_all().await?;
    Ok(Json(items.iter().map(TodoItemDto::from).collect()))
}

/// GET /api/todo/{id}
pub async fn get_todo(
    State(state): State<Arc<TodoState>>,
    Path(id): Path<i32>,
) -> Result<Response, TodoError> {
    let response = match state.usecase.get_by_id(TodoItemId::new(id)).await? {
        Some(item) => Json(TodoItemDto::from(&item)).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    };
    Ok(response)
}

/// POST /api/todo
///
/// 作成したアイテムを `201 Created` で返し、`Location` に取得用 URL を設定する。
pub async fn create_todo(
    State(state): State<Arc<TodoState>>,
    Json(req): Json<TodoItemRequest>,
) -> Result<impl IntoResponse, TodoError> {
    let created = state.usecase.create(req.into_item()).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/todo/{}", created.id()))],
        Json(TodoItemDto::from(&created)),
    ))
}

/// PUT /api/todo/{id}
///
/// パスの ID を対象として名前と完了フラグを上書きする。
pub async fn update_todo(
    State(state): State<Arc<TodoState>>,
    Path(id): Path<i32>,
    Json(req): Json<TodoItemRequest>,
) -> Result<StatusCode, TodoError> {
    let item = req.into_item().with_id(TodoItemId::new(id));

    match state.usecase.update(item).await? {
        Some(_) => Ok(StatusCode::NO_CONTENT),
        None => Ok(StatusCode::NOT_FOUND),
    }
}

/// DELETE /api/todo/{id}
pub async fn delete_todo(
    State(state): State<Arc<TodoState>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, TodoError> {
    match state.usecase.delete(TodoItemId::new(id)).await? {
        Some(_) => Ok(StatusCode::NO_CONTENT),
        None => Ok(StatusCode::NOT_FOUND),
    }
}
