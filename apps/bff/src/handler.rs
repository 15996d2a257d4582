//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュールで re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、検証や判定はドメイン層に委譲
//!
//! ## ハンドラ一覧
//!
//! - `health`: ヘルスチェック
//! - `auth`: 認証プロキシ（ログイン、会員登録、ログアウト、セッション）
//! - `navigation`: ページ遷移の可否判定
//! - `mock`: フロントエンド開発用のモック API

pub mod auth;
pub mod health;
pub mod mock;
pub mod navigation;

pub use auth::{AuthState, login, logout, register, session};
pub use health::health_check;
pub use mock::{
    MockState,
    create_rescue,
    get_dashboard,
    get_map_helpers,
    get_map_hotspots,
    get_map_layers,
    get_map_rescue_requests,
    get_rescue,
};
pub use navigation::navigation_guard;
