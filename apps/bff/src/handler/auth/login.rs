//! ログインハンドラ

use std::sync::Arc;

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use axum_extra::extract::CookieJar;
use lazypeople_domain::{auth::LoginForm, user::AuthUser};
use lazypeople_shared::{event_log::event, log_business_event};

use super::AuthState;
use crate::{
    client::LoginResponse,
    error::{ProxyError, ProxyOperation},
};

/// POST /api/v1/auth/login
///
/// 入力を検証したうえで外部バックエンドにログインを中継し、
/// 成功時は `auth_token` と `user_info` の Cookie を設定する。
///
/// ## リクエストボディ
///
/// ```json
/// {
///   "email": "user@example.com",
///   "password": "password123"
/// }
/// ```
///
/// ## レスポンス
///
/// 外部バックエンドのレスポンス（`{ token, email, userId }`）をそのまま返す。
#[tracing::instrument(skip_all)]
pub async fn login(
    State(state): State<Arc<AuthState>>,
    jar: CookieJar,
    payload: Result<Json<LoginForm>, JsonRejection>,
) -> Result<(CookieJar, Json<LoginResponse>), ProxyError> {
    let Json(form) = payload?;
    let credentials = form.validate().map_err(ProxyError::Validation)?;

    let response = match state.remote_client.login(&credentials).await {
        Ok(response) => response,
        Err(e) => {
            log_business_event!(
                event.category = event::category::AUTH,
                event.action = event::action::LOGIN_FAILURE,
                event.entity_type = event::entity_type::USER,
                event.result = event::result::FAILURE,
                event.reason = e.status().map_or("remote_unavailable", |_| "remote_rejected"),
                "ログイン失敗"
            );
            return Err(ProxyOperation::Login.fail(e));
        }
    };

    let user = AuthUser::new(response.email.as_str(), response.user_id.as_str());
    let user_cookie = state
        .cookie_policy
        .user_info_cookie(&user)
        .map_err(|e| ProxyError::Internal(format!("user_info Cookie の生成に失敗: {e}")))?;
    let jar = jar
        .add(state.cookie_policy.token_cookie(&response.token))
        .add(user_cookie);

    log_business_event!(
        event.category = event::category::AUTH,
        event.action = event::action::LOGIN_SUCCESS,
        event.entity_type = event::entity_type::USER,
        event.entity_id = %response.user_id,
        event.result = event::result::SUCCESS,
        "ログイン成功"
    );

    Ok((jar, Json(response)))
}
