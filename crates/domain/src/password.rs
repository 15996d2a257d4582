//! # パスワード
//!
//! 会員登録フォームで表示するパスワード強度チェックと、平文パスワードの値オブジェクト。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 用途 |
//! |---|------------|------|
//! | [`PasswordCriteria`] | 強度チェック結果 | 4 項目それぞれの充足状況 |
//! | [`PasswordCriterion`] | チェック項目 | 画面に表示するラベルを持つ |
//! | [`PlainPassword`] | 平文パスワード | フォーム入力値 |

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// 最小文字数（UTF-16 コード単位で数える）
pub const MIN_PASSWORD_LENGTH: usize = 6;

static SPECIAL_CHAR: LazyLock<Regex> = LazyLock::new(|| {
   Regex::new(r#"[!@#$%^&*()_+\-=\[\]{};':"\\|,.<>/?]"#).expect("特殊文字の正規表現は固定値")
});
static UPPER_CASE: LazyLock<Regex> =
   LazyLock::new(|| Regex::new("[A-Z]").expect("大文字の正規表現は固定値"));
static LOWER_CASE: LazyLock<Regex> =
   LazyLock::new(|| Regex::new("[a-z]").expect("小文字の正規表現は固定値"));

/// パスワード強度のチェック項目
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::EnumIter, strum::IntoStaticStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PasswordCriterion {
   Length,
   Special,
   Upper,
   Lower,
}

impl PasswordCriterion {
   /// 画面表示用のラベル
   pub fn label(self) -> &'static str {
      match self {
         Self::Length => "長度 ≥ 6",
         Self::Special => "含特殊字元",
         Self::Upper => "含大寫字母",
         Self::Lower => "含小寫字母",
      }
   }
}

/// パスワード強度のチェック結果
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PasswordCriteria {
   pub length:  bool,
   pub special: bool,
   pub upper:   bool,
   pub lower:   bool,
}

impl PasswordCriteria {
   /// パスワードを評価する
   ///
   /// 長さはブラウザの `String.length` に合わせて UTF-16 コード単位で数える。
   pub fn evaluate(password: &str) -> Self {
      Self {
         length:  password.encode_utf16().count() >= MIN_PASSWORD_LENGTH,
         special: SPECIAL_CHAR.is_match(password),
         upper:   UPPER_CASE.is_match(password),
         lower:   LOWER_CASE.is_match(password),
      }
   }

   /// すべての項目を満たしているか
   pub fn is_valid(&self) -> bool {
      self.entries().into_iter().all(|(_, satisfied)| satisfied)
   }

   /// 項目と充足状況の組を表示順で返す
   pub fn entries(&self) -> [(PasswordCriterion, bool); 4] {
      [
         (PasswordCriterion::Length, self.length),
         (PasswordCriterion::Special, self.special),
         (PasswordCriterion::Upper, self.upper),
         (PasswordCriterion::Lower, self.lower),
      ]
   }
}

/// 平文パスワード（フォーム入力値）
///
/// # セキュリティ
///
/// Debug 出力ではパスワードの値をマスクする。
#[derive(Clone, PartialEq, Eq)]
pub struct PlainPassword(String);

impl std::fmt::Debug for PlainPassword {
   fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
      f.debug_tuple("PlainPassword").field(&"[REDACTED]").finish()
   }
}

impl PlainPassword {
   pub fn new(value: impl Into<String>) -> Self {
      Self(value.into())
   }

   pub fn as_str(&self) -> &str {
      &self.0
   }

   pub fn criteria(&self) -> PasswordCriteria {
      PasswordCriteria::evaluate(&self.0)
   }
}

impl Serialize for PlainPassword {
   fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
      serializer.serialize_str(&self.0)
   }
}
