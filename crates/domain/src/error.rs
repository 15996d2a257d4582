//! # ドメイン層エラー定義
//!
//! 入力値の検証失敗や、参照先が存在しない状態を表現するエラー型。
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | 入力値の検証失敗 |
//! | `NotFound` | 404 Not Found | 救援請求などが存在しない |
//!
//! ## 使用例
//!
//! ```rust
//! use lazypeople_domain::DomainError;
//!
//! fn find_rescue(id: &str) -> Result<(), DomainError> {
//!     Err(DomainError::NotFound {
//!         entity_type: "RescueRequest",
//!         id:          id.to_string(),
//!     })
//! }
//!
//! assert!(find_rescue("rescue-unknown").is_err());
//! ```

use thiserror::Error;

/// ドメイン層で発生するエラー
///
/// BFF 層でこのエラーを受け取り、共通のエラーレスポンスに変換する。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// バリデーションエラー
    #[error("バリデーションエラー: {0}")]
    Validation(String),

    /// エンティティが見つからない
    #[error("{entity_type} が見つかりません: {id}")]
    NotFound {
        /// エンティティの種類（"RescueRequest" など）
        entity_type: &'static str,
        id:          String,
    },
}
