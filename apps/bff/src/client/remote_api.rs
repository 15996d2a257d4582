//! # 外部バックエンド認証クライアント
//!
//! BFF から外部バックエンドの認証 API への通信を担当する。
//!
//! ## エンドポイント
//!
//! - `POST /Auth/login` - ログイン（トークンを発行）
//! - `POST /Auth/register` - 会員登録
//! - `POST /Auth/logout` - ログアウト（`Authorization: Bearer` 必須）
//!
//! エラー時のボディは `{ "errors"?: {...}, "message"?: "..." }` を想定するが、
//! JSON でない場合も空のボディとして扱い、呼び出し側の整形処理に委ねる。

use async_trait::async_trait;
use lazypeople_domain::auth::{LoginCredentials, RegisterPayload};
use lazypeople_shared::FieldErrors;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;

use crate::middleware::request_id::inject_request_id;

/// 外部バックエンドのエンドポイント一覧
///
/// 外部バックエンドのパスが変わった場合はここだけを修正する。
pub struct RemoteEndpoints;

impl RemoteEndpoints {
    pub const LOGIN: &'static str = "/Auth/login";
    pub const REGISTER: &'static str = "/Auth/register";
    pub const LOGOUT: &'static str = "/Auth/logout";
}

/// 外部バックエンドのエラーボディ
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RemoteErrorBody {
    #[serde(default)]
    pub errors:  Option<FieldErrors>,
    #[serde(default)]
    pub message: Option<String>,
}

impl RemoteErrorBody {
    /// エラーボディを寛容にパースする
    ///
    /// `errors` と `message` は別々に読み取り、片方の形が想定外でももう片方は残す。
    pub fn parse(text: &str) -> Self {
        let Ok(serde_json::Value::Object(mut body)) = serde_json::from_str(text) else {
            return Self::default();
        };

        let errors = body
            .remove("errors")
            .and_then(|errors| serde_json::from_value(errors).ok());
        let message = body
            .remove("message")
            .and_then(|message| serde_json::from_value(message).ok());

        Self { errors, message }
    }
}

/// 外部バックエンドクライアントエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteApiError {
    /// 2xx 以外のステータス
    #[error("外部バックエンドがステータス {status} を返しました")]
    Status {
        status:      u16,
        /// ステータスの理由句（標準にないステータスでは `None`）
        status_text: Option<String>,
        body:        RemoteErrorBody,
    },

    /// ネットワークエラー
    #[error("ネットワークエラー: {0}")]
    Network(String),

    /// 成功レスポンスのボディを解釈できない
    #[error("レスポンスの解析に失敗しました: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for RemoteApiError {
    fn from(err: reqwest::Error) -> Self {
        RemoteApiError::Network(err.to_string())
    }
}

impl RemoteApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn status_text(&self) -> Option<&str> {
        match self {
            Self::Status { status_text, .. } => status_text.as_deref(),
            _ => None,
        }
    }

    pub fn body(&self) -> Option<&RemoteErrorBody> {
        match self {
            Self::Status { body, .. } => Some(body),
            _ => None,
        }
    }
}

// --- レスポンス型 ---

/// ログインレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token:   String,
    pub email:   String,
    pub user_id: String,
}

/// 会員登録レスポンス
///
/// 外部バックエンドがトークンを返すことがあるが、BFF はフロントエンドへ転送しない。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub email:   String,
    pub user_id: String,
    #[serde(default)]
    pub token:   Option<String>,
}

/// ログアウトレスポンス
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoutResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// 外部バックエンド認証クライアントトレイト
///
/// テスト時にスタブを使用できるようトレイトで定義。
#[async_trait]
pub trait RemoteAuthClient: Send + Sync {
    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginResponse, RemoteApiError>;

    async fn register(&self, payload: &RegisterPayload) -> Result<RegisterResponse, RemoteApiError>;

    async fn logout(&self, token: &str) -> Result<LogoutResponse, RemoteApiError>;
}

/// 外部バックエンド認証クライアント実装
pub struct RemoteAuthClientImpl {
    base_url: String,
    client:   reqwest::Client,
}

impl RemoteAuthClientImpl {
    /// # 引数
    ///
    /// - `base_url`: 外部バックエンドのベース URL（例: `https://lazypeople.zeabur.app/api`）
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client:   reqwest::Client::new(),
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }
}

#[async_trait]
impl RemoteAuthClient for RemoteAuthClientImpl {
    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginResponse, RemoteApiError> {
        let request = self
            .client
            .post(self.url(RemoteEndpoints::LOGIN))
            .json(credentials);
        let response = inject_request_id(request).send().await?;

        handle_response(response).await
    }

    async fn register(&self, payload: &RegisterPayload) -> Result<RegisterResponse, RemoteApiError> {
        let request = self
            .client
            .post(self.url(RemoteEndpoints::REGISTER))
            .json(payload);
        let response = inject_request_id(request).send().await?;

        handle_response(response).await
    }

    async fn logout(&self, token: &str) -> Result<LogoutResponse, RemoteApiError> {
        let request = self
            .client
            .post(self.url(RemoteEndpoints::LOGOUT))
            .bearer_auth(token)
            .header(reqwest::header::CONTENT_TYPE, "application/json");
        let response = inject_request_id(request).send().await?;

        handle_response(response).await
    }
}

/// 外部バックエンドレスポンスの共通ハンドリング
///
/// 成功時はボディを `T` にデシリアライズする（空のボディは `{}` とみなす）。
/// エラー時はステータスとボディを [`RemoteApiError::Status`] に詰めて返す。
async fn handle_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, RemoteApiError> {
    let status = response.status();
    let text = response.text().await?;

    if !status.is_success() {
        return Err(RemoteApiError::Status {
            status:      status.as_u16(),
            status_text: status.canonical_reason().map(str::to_string),
            body:        RemoteErrorBody::parse(&text),
        });
    }

    let text = if text.trim().is_empty() { "{}" } else { &text };
    serde_json::from_str(text).map_err(|e| RemoteApiError::Decode(e.to_string()))
}
