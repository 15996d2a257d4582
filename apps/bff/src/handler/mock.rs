//! # モック API
//!
//! バックエンドが未実装の画面向けに、固定データを返すエンドポイント。
//! フロントエンドが期待するデータ構造のリファレンスも兼ねる。
//!
//! ## エンドポイント
//!
//! | メソッド | パス | 遅延 | 認証 |
//! |----------|------|------|------|
//! | GET | `/api/mock/dashboard` | 300 ms | 不要 |
//! | POST | `/api/mock/rescue` | 300 ms | 不要 |
//! | GET | `/api/mock/rescue/{id}` | 200 ms | 不要 |
//! | GET | `/api/mock/map/layers` | 200 ms | 不要（公開範囲で絞り込み） |
//! | GET | `/api/mock/map/hotspots` | 300 ms | 不要 |
//! | GET | `/api/mock/map/rescue-requests` | 250 ms | 必要 |
//! | GET | `/api/mock/map/helpers` | 200 ms | 必要 |
//!
//! 遅延は `MOCK_LATENCY=false` で無効化できる。タイムスタンプは注入した [`Clock`] から取る。
//! 作成した救援請求はプロセス内のメモリにのみ保持する。

mod dashboard;
mod fixtures;
mod map;
mod rescue;

use std::{collections::HashMap, sync::Arc, time::Duration};

pub use dashboard::*;
use lazypeople_domain::{clock::Clock, rescue::RescueRequest};
pub use map::*;
pub use rescue::*;
use tokio::sync::RwLock;

use crate::{error::ProxyError, session::AuthSession};

/// モック API の共有状態
pub struct MockState {
    pub clock:            Arc<dyn Clock>,
    /// ネットワーク遅延を再現するか
    pub simulate_latency: bool,
    rescue_store:         RwLock<HashMap<String, RescueRequest>>,
}

impl MockState {
    /// 救援請求ストアをデモデータで初期化して作成する
    pub fn new(clock: Arc<dyn Clock>, simulate_latency: bool) -> Self {
        let rescue_store = fixtures::seed_rescue_requests()
            .into_iter()
            .map(|request| (request.id.clone(), request))
            .collect();

        Self {
            clock,
            simulate_latency,
            rescue_store: RwLock::new(rescue_store),
        }
    }

    async fn delay(&self, millis: u64) {
        if self.simulate_latency {
            tokio::time::sleep(Duration::from_millis(millis)).await;
        }
    }
}

/// 認証済みでなければ 401 を返す
fn require_authenticated(session: &AuthSession) -> Result<(), ProxyError> {
    if session.is_authenticated() {
        Ok(())
    } else {
        Err(ProxyError::Unauthorized("請先登入".to_string()))
    }
}
