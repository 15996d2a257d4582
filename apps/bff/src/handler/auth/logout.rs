//! ログアウトハンドラ

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use lazypeople_shared::{event_log::event, log_business_event};

use super::AuthState;
use crate::{
    error::{ProxyError, ProxyOperation},
    session::AuthSession,
};

/// POST /api/v1/auth/logout
///
/// `auth_token` Cookie のトークンで外部バックエンドにログアウトを中継する。
///
/// トークンがあれば、外部バックエンドの成否にかかわらず認証 Cookie を削除する。
/// ローカルの認証状態が残ると、フロントエンドが無効なトークンを使い続けるため。
#[tracing::instrument(skip_all)]
pub async fn logout(
    State(state): State<Arc<AuthState>>,
    session: AuthSession,
    jar: CookieJar,
) -> Response {
    let Some(token) = session.token else {
        return ProxyError::Unauthorized("未提供認證 token".to_string()).into_response();
    };

    let result = state.remote_client.logout(&token).await;
    let jar = state.cookie_policy.clear_all(jar);

    log_business_event!(
        event.category = event::category::AUTH,
        event.action = event::action::LOGOUT,
        event.entity_type = event::entity_type::USER,
        event.entity_id = session.user.as_ref().map_or("unknown", |u| u.user_id.as_str()),
        event.result = if result.is_ok() {
            event::result::SUCCESS
        } else {
            event::result::FAILURE
        },
        "ログアウト"
    );

    match result {
        Ok(response) => (jar, Json(response)).into_response(),
        Err(e) => (jar, ProxyOperation::Logout.fail(e)).into_response(),
    }
}
