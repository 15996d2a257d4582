//! # BFF アプリケーション構築
//!
//! State の初期化とルーター構築を担当する。
//! `main.rs` は設定の読み込みとサーバー起動に集中する。
//!
//! ## ルーティング
//!
//! ```text
//! /health            ヘルスチェック
//! /api/v1/auth/...   認証プロキシ
//! /api/v1/navigation 遷移可否の判定
//! /api/mock/...      モック API
//! /api/...           上記以外は JSON の 404
//! その他             ページガード → ビルド済みフロントエンド（見つからなければ index.html）
//! ```

use std::sync::Arc;

use axum::{
    Router,
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
};
use lazypeople_domain::{clock::Clock, page_route::PageRouteTable};
use lazypeople_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
    cors::CorsLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::{
    client::RemoteAuthClient,
    config::BffConfig,
    error::ProxyError,
    handler::{
        AuthState,
        MockState,
        create_rescue,
        get_dashboard,
        get_map_helpers,
        get_map_hotspots,
        get_map_layers,
        get_map_rescue_requests,
        get_rescue,
        health_check,
        login,
        logout,
        navigation_guard,
        register,
        session,
    },
    middleware::{PageGuardState, no_cache, page_guard, request_id::store_request_id},
    session::CookiePolicy,
};

/// ルーター定義を行う
///
/// 外部バックエンドのクライアントと時刻は呼び出し側から受け取る。
/// テストではスタブと固定時刻を渡す。
pub fn build_app(
    config: &BffConfig,
    remote_client: Arc<dyn RemoteAuthClient>,
    clock: Arc<dyn Clock>,
) -> Router {
    let auth_state = Arc::new(AuthState {
        remote_client,
        cookie_policy: CookiePolicy::new(config.cookie_secure),
    });
    let guard_state = Arc::new(PageGuardState::new(
        PageRouteTable::application(),
        config.dev_mode,
    ));
    let mock_state = Arc::new(MockState::new(clock, config.mock_latency));

    let api = Router::new()
        // 認証 API
        .route("/v1/auth/login", post(login))
        .route("/v1/auth/register", post(register))
        .route("/v1/auth/logout", post(logout))
        .route("/v1/auth/session", get(session))
        .with_state(auth_state)
        // ナビゲーション API
        .route("/v1/navigation/guard", get(navigation_guard))
        .with_state(guard_state.clone())
        // モック API
        .route("/mock/dashboard", get(get_dashboard))
        .route("/mock/rescue", post(create_rescue))
        .route("/mock/rescue/{id}", get(get_rescue))
        .route("/mock/map/layers", get(get_map_layers))
        .route("/mock/map/hotspots", get(get_map_hotspots))
        .route("/mock/map/rescue-requests", get(get_map_rescue_requests))
        .route("/mock/map/helpers", get(get_map_helpers))
        .with_state(mock_state)
        // API 配下の未定義パスはフロントエンドに渡さない
        .fallback(api_not_found)
        // キャッシュ制御: 動的 API レスポンスがブラウザにキャッシュされないようにする
        .layer(from_fn(no_cache));

    let dist = &config.frontend_dist_dir;
    let frontend = Router::new()
        .fallback_service(ServeDir::new(dist).fallback(ServeFile::new(dist.join("index.html"))))
        .layer(from_fn_with_state(guard_state, page_guard));

    let app = Router::new()
        .route("/health", get(health_check))
        .nest("/api", api)
        .fallback_service(frontend);

    // フロントエンドの開発サーバー（別オリジン）から Cookie 付きで呼べるようにする
    let app = if config.dev_mode {
        app.layer(CorsLayer::very_permissive())
    } else {
        app
    };

    // Request ID レイヤー（レイヤー順序が重要: 下に書いたものが外側）
    // 1. SetRequestIdLayer（最外）: リクエスト受信時に UUID v7 を生成（またはクライアント提供値を使用）
    // 2. TraceLayer: カスタムスパンに request_id を含め、全ログに自動注入
    // 3. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
    // 4. store_request_id: task-local に保存し、BFF → 外部バックエンドのヘッダー伝播に使用
    app.layer(from_fn(store_request_id))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}

async fn api_not_found() -> ProxyError {
    ProxyError::NotFound("找不到此 API".to_string())
}
