//! # BFF (Backend for Frontend) サーバー
//!
//! LazyPeople のブラウザ向けサーバー。
//!
//! ## 役割
//!
//! - **ページ配信**: ビルド済みフロントエンドを配信し、遷移前に認証ガードを適用
//! - **認証プロキシ**: 外部バックエンドの認証 API を中継し、エラーを共通形式に整形
//! - **認証状態**: `auth_token` / `user_info` Cookie の発行と削除
//! - **モック API**: バックエンド未実装の画面向けの固定データ
//!
//! ## アーキテクチャ
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │   Browser    │────▶│     BFF      │────▶│ External Backend │
//! │              │     │  port: 13000 │     │   (/api/Auth/*)  │
//! └──────────────┘     └──────────────┘     └──────────────────┘
//! ```
//!
//! ## 環境変数
//!
//! 一覧は [`config`](lazypeople_bff::config) を参照。`.env` ファイルがあれば読み込む。
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（.env ファイルを使用）
//! cargo run -p lazypeople-bff
//!
//! # 本番環境（環境変数を直接指定）
//! BFF_PORT=3000 FRONTEND_DIST_DIR=/srv/dist cargo run -p lazypeople-bff --release
//! ```

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use lazypeople_bff::{
    app_builder::build_app,
    client::{RemoteAuthClient, RemoteAuthClientImpl},
    config::BffConfig,
};
use lazypeople_domain::clock::{Clock, SystemClock};
use lazypeople_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

/// BFF サーバーのエントリーポイント
///
/// 以下の順序で初期化を行う:
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. アプリケーション設定の読み込み
/// 4. ルーターの構築
/// 5. HTTP サーバーの起動
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    // 本番環境では .env ファイルは使用せず、環境変数を直接設定する
    dotenvy::dotenv().ok();

    init_tracing(TracingConfig::from_env("bff"));
    let _tracing_guard = tracing::info_span!("app", service = "bff").entered();

    let config = BffConfig::from_env().context("設定の読み込みに失敗しました")?;

    tracing::info!(
        remote_api_base = %config.remote_api_base,
        dev_mode = config.dev_mode,
        frontend_dist_dir = %config.frontend_dist_dir.display(),
        "BFF サーバーを起動します: {}:{}",
        config.host,
        config.port
    );
    if config.dev_mode {
        tracing::warn!("開発モードが有効です。開発専用ページに認証なしでアクセスできます");
    }

    let remote_client: Arc<dyn RemoteAuthClient> =
        Arc::new(RemoteAuthClientImpl::new(&config.remote_api_base));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let app = build_app(&config, remote_client, clock);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("アドレスのパースに失敗しました")?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("BFF サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
