//! セッション取得ハンドラ

use axum::Json;
use lazypeople_domain::user::AuthUser;
use serde::Serialize;

use crate::session::AuthSession;

/// 認証状態レスポンス
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub is_authenticated: bool,
    pub user:             Option<AuthUser>,
}

/// GET /api/v1/auth/session
///
/// Cookie から復元した認証状態を返す。外部バックエンドには問い合わせない。
pub async fn session(session: AuthSession) -> Json<SessionResponse> {
    Json(SessionResponse {
        is_authenticated: session.is_authenticated(),
        user:             session.user,
    })
}
