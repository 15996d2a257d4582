//! # LazyPeople ドメイン層
//!
//! BFF が扱う純粋なロジックとデータ契約を定義する。
//!
//! ## 設計方針
//!
//! - I/O を一切行わない。時刻は [`clock::Clock`] 経由で注入する
//! - 認証状態や実行モードなどの環境は引数として受け取り、グローバル状態を読まない
//! - Web フレームワークに依存しない（axum への変換は BFF の責務）
//!
//! ## 依存関係の方向
//!
//! ```text
//! bff → domain → shared
//! ```
//!
//! ## モジュール構成
//!
//! - [`route_guard`] - ナビゲーション可否の決定関数
//! - [`page_route`] - ページルート表とパスの解決
//! - [`password`] - パスワード強度の判定
//! - [`relative_time`] - 相対時刻の表示文字列
//! - [`auth`] - ログイン・会員登録フォームの検証
//! - [`user`] - ログインユーザー情報と Email 値オブジェクト
//! - [`dashboard`] / [`map`] / [`rescue`] - フロントエンドとのデータ契約
//!
//! ## 使用例
//!
//! ```rust
//! use lazypeople_domain::route_guard::{AuthAction, AuthEnvironment, RouteAccessMetadata, decide};
//!
//! let env = AuthEnvironment {
//!     is_authenticated:    false,
//!     is_development_mode: false,
//! };
//! let action = decide(&RouteAccessMetadata::default(), "/dashboard", 1, &env);
//! assert_eq!(action, AuthAction::RedirectHome);
//! ```

pub mod auth;
pub mod clock;
pub mod dashboard;
pub mod error;
pub mod map;
pub mod page_route;
pub mod password;
pub mod relative_time;
pub mod rescue;
pub mod route_guard;
pub mod user;

pub use error::DomainError;
