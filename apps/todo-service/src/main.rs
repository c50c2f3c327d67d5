//! # Todo Service サーバー
//!
//! Todo アイテムの CRUD を提供する HTTP API サーバー。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `TODO_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `TODO_PORT` | No | ポート番号（デフォルト: `3000`） |
//! | `DATABASE_URL` | **Yes** | PostgreSQL 接続 URL |
//! | `SEED_DEFAULT_ITEMS` | No | `true` でストアが空なら初期データを投入 |
//! | `LOG_FORMAT` | No | `json` / `pretty`（デフォルト: `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境
//! cargo run -p todo-service
//!
//! # 本番環境
//! TODO_PORT=8080 DATABASE_URL=postgres://... LOG_FORMAT=json cargo run -p todo-service --release
//! ```

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context as _;
use todo_infra::{
    db,
    repository::{PostgresTodoItemRepository, TodoItemRepository},
};
use todo_service::{
    app_builder::build_app,
    config::TodoConfig,
    handler::{ReadinessState, TodoState},
    usecase::{DEFAULT_SEED_COUNT, TodoUseCaseImpl, seed_default_items},
};
use todo_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

/// Todo Service サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    let tracing_config = TracingConfig::from_env("todo-service");
    init_tracing(tracing_config.clone());
    let _tracing_guard = tracing_config.app_span().entered();

    let config = TodoConfig::from_env().context("設定の読み込みに失敗しました")?;

    tracing::info!(
        "Todo Service サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    let pool = db::create_pool(&config.database_url)
        .await
        .context("データベース接続に失敗しました")?;
    tracing::info!("データベースに接続しました");

    db::run_migrations(&pool)
        .await
        .context("マイグレーションの実行に失敗しました")?;
    tracing::info!("マイグレーションを適用しました");

    // Readiness Check 用 State（pool が move される前に clone）
    let readiness_state = Arc::new(ReadinessState { pool: pool.clone() });

    let todo_item_repository: Arc<dyn TodoItemRepository> =
        Arc::new(PostgresTodoItemRepository::new(pool));

    if config.seed_default_items {
        seed_default_items(todo_item_repository.as_ref(), DEFAULT_SEED_COUNT)
            .await
            .context("初期データの投入に失敗しました")?;
    }

    let todo_state = Arc::new(TodoState {
        usecase: Arc::new(TodoUseCaseImpl::new(todo_item_repository)),
    });

    let app = build_app(todo_state, readiness_state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("アドレスのパースに失敗しました")?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Todo Service サーバーが起動しました: {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Todo Service サーバーを停止しました");
    Ok(())
}

/// Ctrl+C を受けたら完了する
///
/// シグナルハンドラを登録できない場合は完了せず、サーバーは稼働を続ける。
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "シグナルハンドラの登録に失敗しました");
        std::future::pending::<()>().await;
    }
    tracing::info!("シャットダウンシグナルを受信しました");
}
