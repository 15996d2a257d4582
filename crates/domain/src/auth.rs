//! # 認証フォーム
//!
//! ログイン・会員登録フォームの入力値と、その検証を定義する。
//!
//! 検証に成功すると外部バックエンドへ送る形（[`LoginCredentials`] / [`RegisterPayload`]）を返し、
//! 失敗すると欄位ごとのエラーメッセージ（[`FieldErrors`]）を返す。
//! 1 つの欄位で複数の規則に違反しても、表示するのは最初の 1 件のみ。

use lazypeople_shared::FieldErrors;
use serde::{Deserialize, Serialize};

use crate::{
    DomainError,
    password::{PasswordCriteria, PlainPassword},
    user::Email,
};

const PASSWORD_REQUIRED: &str = "密碼為必填欄位";
const PASSWORD_CRITERIA_UNMET: &str = "請先滿足所有密碼檢查條件";
const FIRST_NAME_REQUIRED: &str = "名字為必填欄位";
const LAST_NAME_REQUIRED: &str = "姓氏為必填欄位";

/// ログインフォームの入力値
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoginForm {
    pub email:    String,
    pub password: String,
}

/// 検証済みのログイン情報
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginCredentials {
    pub email:    Email,
    pub password: PlainPassword,
}

impl LoginForm {
    /// 入力値を検証する
    ///
    /// ログイン時はパスワード強度を問わない（登録済みのパスワードを受け付けるため）。
    pub fn validate(self) -> Result<LoginCredentials, FieldErrors> {
        let mut errors = FieldErrors::default();

        let email = validate_email(&self.email, &mut errors);
        if self.password.is_empty() {
            FieldErrors::push(&mut errors.password, PASSWORD_REQUIRED);
        }

        match email {
            Some(email) if errors.is_empty() => Ok(LoginCredentials {
                email,
                password: PlainPassword::new(self.password),
            }),
            _ => Err(errors),
        }
    }
}

/// 会員登録フォームの入力値
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegisterForm {
    pub email:        String,
    pub password:     String,
    pub first_name:   String,
    pub last_name:    String,
    pub display_name: Option<String>,
}

/// 検証済みの会員登録情報
///
/// `displayName` は未入力でも `null` として必ず送る。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPayload {
    pub email:        Email,
    pub password:     PlainPassword,
    pub first_name:   String,
    pub last_name:    String,
    pub display_name: Option<String>,
}

impl RegisterForm {
    /// 入力値を検証する
    pub fn validate(self) -> Result<RegisterPayload, FieldErrors> {
        let mut errors = FieldErrors::default();

        let email = validate_email(&self.email, &mut errors);

        if self.password.is_empty() {
            FieldErrors::push(&mut errors.password, PASSWORD_REQUIRED);
        } else if !PasswordCriteria::evaluate(&self.password).is_valid() {
            FieldErrors::push(&mut errors.password, PASSWORD_CRITERIA_UNMET);
        }

        let first_name = self.first_name.trim();
        if first_name.is_empty() {
            FieldErrors::push(&mut errors.first_name, FIRST_NAME_REQUIRED);
        }

        let last_name = self.last_name.trim();
        if last_name.is_empty() {
            FieldErrors::push(&mut errors.last_name, LAST_NAME_REQUIRED);
        }

        let Some(email) = email else {
            return Err(errors);
        };
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(RegisterPayload {
            email,
            password: PlainPassword::new(self.password),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            display_name: normalize_display_name(self.display_name.as_deref()),
        })
    }
}

/// 表示名を正規化する（前後の空白を除去し、空なら `None`）
pub fn normalize_display_name(display_name: Option<&str>) -> Option<String> {
    display_name
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}

fn validate_email(input: &str, errors: &mut FieldErrors) -> Option<Email> {
    match Email::new(input) {
        Ok(email) => Some(email),
        Err(DomainError::Validation(message)) => {
            FieldErrors::push(&mut errors.email, message);
            None
        }
        Err(other) => {
            FieldErrors::push(&mut errors.email, other.to_string());
            None
        }
    }
}
