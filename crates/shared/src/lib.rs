//! # LazyPeople 共有ユーティリティ
//!
//! BFF とドメイン層の双方から使われる共通ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - 他のすべてのクレート（domain, bff）から依存される
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - axum などの Web フレームワークには依存しない

pub mod error_response;
pub mod event_log;
pub mod health;
pub mod observability;

pub use error_response::{ErrorData, ErrorResponse, FieldErrors};
pub use health::HealthResponse;
