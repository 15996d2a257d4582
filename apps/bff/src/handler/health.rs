//! # ヘルスチェックハンドラ
//!
//! BFF の稼働状態を確認するためのエンドポイント。
//!
//! - `/health`: Liveness Check（常に `"healthy"` を返す）
//!
//! 外部バックエンドの状態は確認しない。外部バックエンドが落ちていても
//! ページ配信とモック API は動き続けるため。

use axum::Json;
use lazypeople_shared::HealthResponse;

/// BFF のヘルスチェックエンドポイント
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}
