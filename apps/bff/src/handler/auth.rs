//! # 認証ハンドラ
//!
//! 外部バックエンドの認証 API を中継し、認証状態を Cookie に保存する。
//!
//! ## エンドポイント
//!
//! - `POST /api/v1/auth/login` - ログイン
//! - `POST /api/v1/auth/register` - 会員登録
//! - `POST /api/v1/auth/logout` - ログアウト
//! - `GET /api/v1/auth/session` - Cookie から復元した認証状態を取得
//!
//! 外部バックエンドのエラーは [`ProxyOperation`](crate::error::ProxyOperation) で整形してから返す。

mod login;
mod logout;
mod register;
mod session;

use std::sync::Arc;

pub use login::*;
pub use logout::*;
pub use register::*;
pub use session::*;

use crate::{client::RemoteAuthClient, session::CookiePolicy};

/// 認証ハンドラの共有状態
pub struct AuthState {
    pub remote_client: Arc<dyn RemoteAuthClient>,
    pub cookie_policy: CookiePolicy,
}

// --- テストユーティリティ ---

#[cfg(test)]
pub(super) mod test_utils {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::{
        Router,
        body::Body,
        http::{Method, Request, header},
        routing::{get, post},
    };
    use lazypeople_domain::auth::{LoginCredentials, RegisterPayload};

    use super::{AuthState, login, logout, register, session};
    use crate::{
        client::{
            LoginResponse,
            LogoutResponse,
            RegisterResponse,
            RemoteApiError,
            RemoteAuthClient,
        },
        session::CookiePolicy,
    };

    /// 外部バックエンドのスタブ
    ///
    /// 受け取ったリクエストを記録し、あらかじめ設定した結果を返す。
    pub struct StubRemoteAuthClient {
        pub login_result:    Result<LoginResponse, RemoteApiError>,
        pub register_result: Result<RegisterResponse, RemoteApiError>,
        pub logout_result:   Result<LogoutResponse, RemoteApiError>,
        pub logout_tokens:   Mutex<Vec<String>>,
        pub registered:      Mutex<Vec<RegisterPayload>>,
    }

    impl StubRemoteAuthClient {
        pub fn success() -> Self {
            Self {
                login_result:    Ok(LoginResponse {
                    token:   "token-abc".to_string(),
                    email:   "user@example.com".to_string(),
                    user_id: "user-001".to_string(),
                }),
                register_result: Ok(RegisterResponse {
                    email:   "new@example.com".to_string(),
                    user_id: "user-002".to_string(),
                    token:   Some("token-should-not-leak".to_string()),
                }),
                logout_result:   Ok(LogoutResponse {
                    message: Some("登出成功".to_string()),
                }),
                logout_tokens:   Mutex::new(Vec::new()),
                registered:      Mutex::new(Vec::new()),
            }
        }

        pub fn failing(err: RemoteApiError) -> Self {
            Self {
                login_result: Err(err.clone()),
                register_result: Err(err.clone()),
                logout_result: Err(err),
                ..Self::success()
            }
        }
    }

    #[async_trait]
    impl RemoteAuthClient for StubRemoteAuthClient {
        async fn login(
            &self,
            _credentials: &LoginCredentials,
        ) -> Result<LoginResponse, RemoteApiError> {
            self.login_result.clone()
        }

        async fn register(
            &self,
            payload: &RegisterPayload,
        ) -> Result<RegisterResponse, RemoteApiError> {
            self.registered.lock().unwrap().push(payload.clone());
            self.register_result.clone()
        }

        async fn logout(&self, token: &str) -> Result<LogoutResponse, RemoteApiError> {
            self.logout_tokens.lock().unwrap().push(token.to_string());
            self.logout_result.clone()
        }
    }

    pub fn create_test_app(remote_client: Arc<StubRemoteAuthClient>) -> Router {
        let state = Arc::new(AuthState {
            remote_client,
            cookie_policy: CookiePolicy::new(true),
        });

        Router::new()
            .route("/api/v1/auth/login", post(login))
            .route("/api/v1/auth/register", post(register))
            .route("/api/v1/auth/logout", post(logout))
            .route("/api/v1/auth/session", get(session))
            .with_state(state)
    }

    pub fn json_request(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    pub fn set_cookies(response: &axum::response::Response) -> Vec<String> {
        response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .map(|v| v.to_str().unwrap().to_string())
            .collect()
    }
}
