//! # ミドルウェア
//!
//! BFF 用のミドルウェアを提供する。
//!
//! - [`no_cache`]: API レスポンスのキャッシュ抑止
//! - [`page_guard`]: ページ遷移の認証ガード
//! - [`request_id`]: 外部バックエンドへの Request ID 伝播

mod cache_control;
mod page_guard;
pub mod request_id;

pub use cache_control::no_cache;
pub use page_guard::{PageGuardState, is_asset_path, page_guard};
