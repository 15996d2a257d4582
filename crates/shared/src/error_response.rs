//! # エラーレスポンス
//!
//! BFF が返す全エラーで共通のレスポンスボディを提供する。
//!
//! ## 形式
//!
//! フロントエンドは Nitro の `createError` が生成する JSON を前提に作られている。
//! そのため RFC 9457 ではなく、以下の形をそのまま採用する。
//!
//! ```json
//! {
//!   "statusCode": 400,
//!   "statusMessage": "Validation Error",
//!   "message": "Validation Error",
//!   "data": { "errors": { "email": ["Email 為必填欄位"] } }
//! }
//! ```
//!
//! ## 設計
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - axum の `IntoResponse` 変換は BFF の責務（shared に axum 依存を入れない）
//! - 外部バックエンドのエラーボディ（`errors` / `message`）も同じ型で受け取る

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// 欄位単位のエラーメッセージ
///
/// キーは外部バックエンドのフィールド名（camelCase）に揃える。
/// `message` は特定の欄位に紐付かない全体エラーに使う。
/// 既知以外のキーは `other` に保持し、そのままフロントエンドへ返す。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldErrors {
   #[serde(default, skip_serializing_if = "Option::is_none")]
   pub email:        Option<Vec<String>>,
   #[serde(default, skip_serializing_if = "Option::is_none")]
   pub password:     Option<Vec<String>>,
   #[serde(default, skip_serializing_if = "Option::is_none")]
   pub first_name:   Option<Vec<String>>,
   #[serde(default, skip_serializing_if = "Option::is_none")]
   pub last_name:    Option<Vec<String>>,
   #[serde(default, skip_serializing_if = "Option::is_none")]
   pub display_name: Option<Vec<String>>,
   #[serde(default, skip_serializing_if = "Option::is_none")]
   pub message:      Option<Vec<String>>,
   #[serde(flatten)]
   pub other:        BTreeMap<String, Vec<String>>,
}

impl FieldErrors {
   /// 全体メッセージのみを持つエラーを作成する
   pub fn message(message: impl Into<String>) -> Self {
      Self {
         message: Some(vec![message.into()]),
         ..Self::default()
      }
   }

   /// 欄位にメッセージを追加する
   pub fn push(slot: &mut Option<Vec<String>>, message: impl Into<String>) {
      slot.get_or_insert_with(Vec::new).push(message.into());
   }

   /// エラーが 1 件もないかどうか
   pub fn is_empty(&self) -> bool {
      [
         &self.email,
         &self.password,
         &self.first_name,
         &self.last_name,
         &self.display_name,
         &self.message,
      ]
      .into_iter()
      .all(|slot| slot.as_ref().is_none_or(Vec::is_empty))
         && self.other.values().all(Vec::is_empty)
   }
}

/// エラーの付加情報
///
/// 欄位エラーと全体メッセージはどちらか一方だけが入るのが通常。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorData {
   #[serde(default, skip_serializing_if = "Option::is_none")]
   pub errors:  Option<FieldErrors>,
   #[serde(default, skip_serializing_if = "Option::is_none")]
   pub message: Option<String>,
}

impl ErrorData {
   pub fn is_empty(&self) -> bool {
      self.errors.is_none() && self.message.is_none()
   }
}

/// BFF のエラーレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
   pub status_code:    u16,
   pub status_message: String,
   pub message:        String,
   #[serde(default, skip_serializing_if = "ErrorData::is_empty")]
   pub data:           ErrorData,
}

impl ErrorResponse {
   /// 汎用コンストラクタ
   ///
   /// トップレベルの `message` は `data.message` があればそれを、
   /// なければ `status_message` を使う。
   pub fn new(status_code: u16, status_message: impl Into<String>, data: ErrorData) -> Self {
      let status_message = status_message.into();
      let message = data
         .message
         .clone()
         .unwrap_or_else(|| status_message.clone());
      Self {
         status_code,
         status_message,
         message,
         data,
      }
   }

   /// 欄位エラー付きのレスポンス
   pub fn field_errors(
      status_code: u16,
      status_message: impl Into<String>,
      errors: FieldErrors,
   ) -> Self {
      Self::new(
         status_code,
         status_message,
         ErrorData {
            errors:  Some(errors),
            message: None,
         },
      )
   }

   /// 全体メッセージ付きのレスポンス
   pub fn with_message(
      status_code: u16,
      status_message: impl Into<String>,
      message: impl Into<String>,
   ) -> Self {
      Self::new(
         status_code,
         status_message,
         ErrorData {
            errors:  None,
            message: Some(message.into()),
         },
      )
   }

   /// 400 Validation Error
   pub fn validation_error(errors: FieldErrors) -> Self {
      Self::field_errors(400, "Validation Error", errors)
   }

   /// 400 Bad Request
   pub fn bad_request(message: impl Into<String>) -> Self {
      Self::with_message(400, "Bad Request", message)
   }

   /// 401 Unauthorized
   pub fn unauthorized(message: impl Into<String>) -> Self {
      Self::with_message(401, "Unauthorized", message)
   }

   /// 404 Not Found
   pub fn not_found(message: impl Into<String>) -> Self {
      Self::with_message(404, "Not Found", message)
   }

   /// 500 Internal Server Error
   ///
   /// 内部情報を漏らさないため、メッセージは固定値。
   pub fn internal_error() -> Self {
      Self::with_message(500, "Internal Server Error", "伺服器發生錯誤，請稍後再試")
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;

   use super::*;

   #[test]
   fn test_欄位エラーはdata_errorsに入りmessageはstatus_messageになる() {
      let mut errors = FieldErrors::default();
      FieldErrors::push(&mut errors.email, "Email 為必填欄位");

      let json = serde_json::to_value(ErrorResponse::validation_error(errors)).unwrap();

      assert_eq!(
         json,
         serde_json::json!({
            "statusCode": 400,
            "statusMessage": "Validation Error",
            "message": "Validation Error",
            "data": { "errors": { "email": ["Email 為必填欄位"] } }
         })
      );
   }

   #[test]
   fn test_全体メッセージはトップレベルのmessageにも反映される() {
      let error = ErrorResponse::unauthorized("未提供認證 token");

      assert_eq!(error.status_code, 401);
      assert_eq!(error.status_message, "Unauthorized");
      assert_eq!(error.message, "未提供認證 token");
      assert_eq!(error.data.message.as_deref(), Some("未提供認證 token"));
   }

   #[test]
   fn test_dataが空のときはシリアライズしない() {
      let error = ErrorResponse::new(502, "Bad Gateway", ErrorData::default());
      let json = serde_json::to_value(&error).unwrap();

      assert!(json.get("data").is_none());
      assert_eq!(json["message"], "Bad Gateway");
   }

   #[test]
   fn test_外部バックエンドのエラーボディをデシリアライズできる() {
      let json = r#"{ "errors": { "email": ["已被使用"], "firstName": ["必填"] } }"#;
      let data: ErrorData = serde_json::from_str(json).unwrap();

      let errors = data.errors.unwrap();
      assert_eq!(errors.email, Some(vec!["已被使用".to_string()]));
      assert_eq!(errors.first_name, Some(vec!["必填".to_string()]));
      assert_eq!(errors.password, None);
   }

   #[test]
   fn test_未知のキーはotherに保持されそのまま返る() {
      let json = r#"{ "Email": ["格式錯誤"] }"#;
      let errors: FieldErrors = serde_json::from_str(json).unwrap();

      assert_eq!(errors.email, None);
      assert_eq!(errors.other["Email"], vec!["格式錯誤".to_string()]);
      assert_eq!(
         serde_json::to_value(&errors).unwrap(),
         serde_json::json!({ "Email": ["格式錯誤"] })
      );
   }

   #[test]
   fn test_field_errors_is_empty() {
      assert!(FieldErrors::default().is_empty());
      assert!(
         FieldErrors {
            email: Some(vec![]),
            ..FieldErrors::default()
         }
         .is_empty()
      );
      assert!(!FieldErrors::message("帳號或密碼錯誤").is_empty());
   }
}
