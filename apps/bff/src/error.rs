//! # BFF エラーハンドリング
//!
//! ハンドラ共通のエラー型と、外部バックエンドのエラーを BFF のエラーボディへ
//! 整形する処理（リシェイプ）を集約する。
//!
//! ## リシェイプ規則
//!
//! | 操作 | 条件 | ステータス（既定） | statusMessage（既定） | 内容 |
//! |------|------|--------------------|----------------------|------|
//! | ログイン | 欄位エラーあり または 401 | 400 | `Authentication Failed` | 欄位エラー（なければ `帳號或密碼錯誤`） |
//! | 会員登録 | 欄位エラーあり | 400 | `Validation Error` | 欄位エラー |
//! | ログアウト | - | 500 | `Logout Failed` | メッセージ |
//! | いずれも | 上記以外 | 500 | `Internal Server Error` | メッセージ（なければ操作ごとの既定文言） |
//!
//! 外部バックエンドのステータス・理由句があればそれを優先し、既定値は取得できない場合にのみ使う。
//! ネットワークエラーの詳細はログにのみ出し、クライアントには返さない。

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use lazypeople_domain::{DomainError, rescue::RescueRequest};
use lazypeople_shared::{
    ErrorResponse,
    FieldErrors,
    event_log::error::{category, kind},
};
use thiserror::Error;

use crate::client::RemoteApiError;

/// ハンドラで発生するエラー
///
/// `IntoResponse` を実装しているため、axum が共通のエラーボディに変換する。
#[derive(Debug, Error)]
pub enum ProxyError {
    /// 入力値の検証エラー（400）
    #[error("入力値が不正です")]
    Validation(FieldErrors),

    /// リクエストの形式エラー（400）
    #[error("リクエストが不正です: {0}")]
    BadRequest(String),

    /// 未認証（401）
    #[error("認証が必要です: {0}")]
    Unauthorized(String),

    /// リソースが存在しない（404）
    #[error("リソースが見つかりません: {0}")]
    NotFound(String),

    /// 外部バックエンドのエラーを整形したもの
    #[error("外部バックエンドのエラー: {}", .0.status_message)]
    Remote(ErrorResponse),

    /// 内部エラー（500）
    #[error("内部エラー: {0}")]
    Internal(String),
}

impl ProxyError {
    /// レスポンスボディに変換する
    pub fn to_error_response(&self) -> ErrorResponse {
        match self {
            Self::Validation(errors) => ErrorResponse::validation_error(errors.clone()),
            Self::BadRequest(message) => ErrorResponse::bad_request(message.clone()),
            Self::Unauthorized(message) => ErrorResponse::unauthorized(message.clone()),
            Self::NotFound(message) => ErrorResponse::not_found(message.clone()),
            Self::Remote(response) => response.clone(),
            Self::Internal(_) => ErrorResponse::internal_error(),
        }
    }
}

/// ドメインエラーをクライアント向けの文言に置き換える
///
/// 検証エラーの文言はそのまま返す。
impl From<DomainError> for ProxyError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(message) => Self::BadRequest(message),
            DomainError::NotFound { entity_type, id } => {
                tracing::debug!(entity_type, id = %id, "エンティティが見つかりません");
                let message = match entity_type {
                    RescueRequest::ENTITY_TYPE => "找不到此救援請求",
                    _ => "找不到指定的資源",
                };
                Self::NotFound(message.to_string())
            }
        }
    }
}

impl From<JsonRejection> for ProxyError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        if let Self::Internal(detail) = &self {
            tracing::error!(
                error.category = category::INTERNAL,
                "内部エラー: {}",
                detail
            );
        }

        let body = self.to_error_response();
        let status =
            StatusCode::from_u16(body.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(body)).into_response()
    }
}

/// 外部バックエンドを呼び出す操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProxyOperation {
    Login,
    Register,
    Logout,
}

impl ProxyOperation {
    /// 操作ごとの既定の失敗メッセージ
    fn fallback_message(self) -> &'static str {
        match self {
            Self::Login => "登入失敗，請稍後再試",
            Self::Register => "註冊失敗，請稍後再試",
            Self::Logout => "登出失敗，請稍後再試",
        }
    }

    /// 欄位エラー以外の失敗時の既定 statusMessage
    fn fallback_status_message(self) -> &'static str {
        match self {
            Self::Login | Self::Register => "Internal Server Error",
            Self::Logout => "Logout Failed",
        }
    }

    /// 外部バックエンドのエラーを BFF のエラーボディに整形する
    pub fn reshape(self, err: &RemoteApiError) -> ErrorResponse {
        let status = err.status();
        let status_text = err.status_text();
        let body = err.body();
        let remote_errors = body.and_then(|b| b.errors.clone());

        match (self, remote_errors) {
            (Self::Login, errors) if errors.is_some() || status == Some(401) => {
                ErrorResponse::field_errors(
                    status.unwrap_or(400),
                    status_text.unwrap_or("Authentication Failed"),
                    errors.unwrap_or_else(|| FieldErrors::message("帳號或密碼錯誤")),
                )
            }
            (Self::Register, Some(errors)) => ErrorResponse::field_errors(
                status.unwrap_or(400),
                status_text.unwrap_or("Validation Error"),
                errors,
            ),
            _ => ErrorResponse::with_message(
                status.unwrap_or(500),
                status_text.unwrap_or(self.fallback_status_message()),
                body.and_then(|b| b.message.clone())
                    .unwrap_or_else(|| self.fallback_message().to_string()),
            ),
        }
    }

    /// 外部バックエンドのエラーをログに出力し、[`ProxyError`] に変換する
    pub fn fail(self, err: RemoteApiError) -> ProxyError {
        match &err {
            RemoteApiError::Network(_) => tracing::error!(
                error.category = category::EXTERNAL_SERVICE,
                error.kind = kind::SERVICE_COMMUNICATION,
                operation = ?self,
                "外部バックエンドとの通信に失敗: {}",
                err
            ),
            RemoteApiError::Decode(_) => tracing::error!(
                error.category = category::EXTERNAL_SERVICE,
                error.kind = kind::RESPONSE_DECODE,
                operation = ?self,
                "外部バックエンドのレスポンスを解析できない: {}",
                err
            ),
            RemoteApiError::Status { status, .. } => tracing::warn!(
                operation = ?self,
                status,
                "外部バックエンドがエラーを返しました"
            ),
        }
        ProxyError::Remote(self.reshape(&err))
    }
}
