//! 会員登録ハンドラ

use std::sync::Arc;

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use axum_extra::extract::CookieJar;
use lazypeople_domain::{auth::RegisterForm, user::AuthUser};
use lazypeople_shared::{event_log::event, log_business_event};
use serde::Serialize;

use super::AuthState;
use crate::error::{ProxyError, ProxyOperation};

/// 会員登録レスポンス
///
/// 外部バックエンドがトークンを返しても含めない。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponseData {
    pub email:   String,
    pub user_id: String,
}

/// POST /api/v1/auth/register
///
/// 入力を検証し、表示名を正規化してから外部バックエンドに会員登録を中継する。
/// 成功時は `user_info` Cookie のみを設定する（ログインは別途必要）。
#[tracing::instrument(skip_all)]
pub async fn register(
    State(state): State<Arc<AuthState>>,
    jar: CookieJar,
    payload: Result<Json<RegisterForm>, JsonRejection>,
) -> Result<(CookieJar, Json<RegisterResponseData>), ProxyError> {
    let Json(form) = payload?;
    let payload = form.validate().map_err(ProxyError::Validation)?;

    let response = match state.remote_client.register(&payload).await {
        Ok(response) => response,
        Err(e) => {
            log_business_event!(
                event.category = event::category::AUTH,
                event.action = event::action::REGISTER_FAILURE,
                event.entity_type = event::entity_type::USER,
                event.result = event::result::FAILURE,
                "会員登録失敗"
            );
            return Err(ProxyOperation::Register.fail(e));
        }
    };

    let user = AuthUser::new(response.email.as_str(), response.user_id.as_str());
    let user_cookie = state
        .cookie_policy
        .user_info_cookie(&user)
        .map_err(|e| ProxyError::Internal(format!("user_info Cookie の生成に失敗: {e}")))?;

    log_business_event!(
        event.category = event::category::AUTH,
        event.action = event::action::REGISTER_SUCCESS,
        event.entity_type = event::entity_type::USER,
        event.entity_id = %response.user_id,
        event.result = event::result::SUCCESS,
        "会員登録成功"
    );

    Ok((
        jar.add(user_cookie),
        Json(RegisterResponseData {
            email:   response.email,
            user_id: response.user_id,
        }),
    ))
}
