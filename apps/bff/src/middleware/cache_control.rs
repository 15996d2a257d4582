//! # キャッシュ制御ミドルウェア
//!
//! 認証状態によって内容が変わる API レスポンスがブラウザに残らないよう、
//! `Cache-Control: no-store` を設定する。静的ファイルには適用しない。

use axum::{
    extract::Request,
    http::{HeaderValue, header},
    middleware::Next,
    response::Response,
};

/// API レスポンスに `Cache-Control: no-store` を付与する
pub async fn no_cache(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    response
}
