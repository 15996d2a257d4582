//! # ページガードミドルウェア
//!
//! フロントエンドのページを配信する前に、ルートガードで遷移可否を判定する。
//!
//! ## 対象
//!
//! - `GET` / `HEAD` のページリクエストのみ
//! - 静的アセット（`/_nuxt/…`、`/assets/…`、末尾セグメントに `.` を含むパス）は素通し
//!
//! ## 判定結果
//!
//! - `Allow` → 後続のサービス（静的ファイル配信）へ渡す
//! - `RedirectHome` → `302 Found` で `/` へリダイレクト

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{Method, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use lazypeople_domain::{
    page_route::PageRouteTable,
    route_guard::{AuthAction, HOME_PATH},
};

use crate::session::AuthSession;

/// ページガードの共有状態
#[derive(Debug, Clone)]
pub struct PageGuardState {
    pub routes:              PageRouteTable,
    pub is_development_mode: bool,
}

impl PageGuardState {
    pub fn new(routes: PageRouteTable, is_development_mode: bool) -> Self {
        Self {
            routes,
            is_development_mode,
        }
    }

    /// パスと認証状態から遷移可否を判定する
    pub fn decide(&self, path: &str, session: &AuthSession) -> AuthAction {
        let resolved = self.routes.resolve(path);
        let env = session.environment(self.is_development_mode);
        let action = resolved.navigation.decide(&resolved.meta, &env);

        tracing::debug!(
            path,
            matched_route_count = resolved.navigation.matched_route_count,
            is_authenticated = env.is_authenticated,
            action = %action,
            "ページ遷移を判定"
        );

        action
    }
}

/// 静的アセットのパスかどうか
pub fn is_asset_path(path: &str) -> bool {
    path.starts_with("/_nuxt/")
        || path.starts_with("/assets/")
        || path
            .rsplit('/')
            .next()
            .is_some_and(|segment| segment.contains('.'))
}

/// ページ遷移の認証ガード
pub async fn page_guard(
    State(state): State<Arc<PageGuardState>>,
    session: AuthSession,
    request: Request,
    next: Next,
) -> Response {
    let is_page_request = matches!(*request.method(), Method::GET | Method::HEAD)
        && !is_asset_path(request.uri().path());
    if !is_page_request {
        return next.run(request).await;
    }

    match state.decide(request.uri().path(), &session) {
        AuthAction::Allow => next.run(request).await,
        AuthAction::RedirectHome => {
            (StatusCode::FOUND, [(header::LOCATION, HOME_PATH)]).into_response()
        }
    }
}
