//! # ナビゲーションガードハンドラ
//!
//! フロントエンドがクライアント側で遷移する直前に、遷移可否を問い合わせるためのエンドポイント。
//! 判定はページ配信時のガード（[`page_guard`](crate::middleware::page_guard)）と同じ
//! [`PageGuardState::decide`] を使う。

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
};
use lazypeople_domain::route_guard::{AuthAction, HOME_PATH};
use serde::{Deserialize, Serialize};

use crate::{error::ProxyError, middleware::PageGuardState, session::AuthSession};

#[derive(Debug, Deserialize)]
pub struct NavigationQuery {
    pub path: Option<String>,
}

/// 判定結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationDecision {
    pub action:      AuthAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_to: Option<&'static str>,
}

impl From<AuthAction> for NavigationDecision {
    fn from(action: AuthAction) -> Self {
        let redirect_to = match action {
            AuthAction::Allow => None,
            AuthAction::RedirectHome => Some(HOME_PATH),
        };
        Self {
            action,
            redirect_to,
        }
    }
}

/// GET /api/v1/navigation/guard?path=/dashboard
pub async fn navigation_guard(
    State(state): State<Arc<PageGuardState>>,
    session: AuthSession,
    Query(query): Query<NavigationQuery>,
) -> Result<Json<NavigationDecision>, ProxyError> {
    let path = query
        .path
        .filter(|path| !path.is_empty())
        .ok_or_else(|| ProxyError::BadRequest("path は必須です".to_string()))?;

    Ok(Json(state.decide(&path, &session).into()))
}
