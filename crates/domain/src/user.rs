//! # ユーザー
//!
//! ログイン中ユーザーの情報と、メールアドレスの値オブジェクトを定義する。
//!
//! [`AuthUser`] は `user_info` Cookie に保存される形そのもので、
//! ページ遷移の認証判定にも使われる。

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::DomainError;

/// メールアドレスの最大長（文字数）
pub const MAX_EMAIL_LENGTH: usize = 255;

static EMAIL_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("メールアドレスの正規表現は固定値")
});

/// メールアドレス（値オブジェクト）
///
/// # バリデーション
///
/// - 空文字列ではない（前後の空白は除去してから判定）
/// - `local@domain.tld` の形式
/// - 最大 255 文字
///
/// エラーメッセージは画面にそのまま表示される文言。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        let value = value.trim();

        if value.is_empty() {
            return Err(DomainError::Validation("Email 為必填欄位".to_string()));
        }

        if !EMAIL_FORMAT.is_match(value) {
            return Err(DomainError::Validation("Email 格式不正確".to_string()));
        }

        if value.chars().count() > MAX_EMAIL_LENGTH {
            return Err(DomainError::Validation(format!(
                "Email 長度不可超過 {MAX_EMAIL_LENGTH} 字元"
            )));
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Email {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// ログイン中ユーザーの基本情報
///
/// 外部バックエンドが返す値をそのまま保持するため、`email` は検証しない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub email:   String,
    pub user_id: String,
}

impl AuthUser {
    pub fn new(email: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            email:   email.into(),
            user_id: user_id.into(),
        }
    }
}
