//! # 救援請求
//!
//! 救援請求（「家族の集まりを乗り切るための助っ人依頼」）のデータ契約。
//!
//! 作成直後は [`RescueRequestStatus::Draft`] で、Helper とのマッチングを経て
//! `pending → confirmed → completed` と進む。

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use crate::DomainError;

/// 救援請求のステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RescueRequestStatus {
    /// 下書き（未送信）
    Draft,
    /// 送信済み、Helper の確認待ち
    Pending,
    /// Helper が確認済み
    Confirmed,
    Completed,
    Cancelled,
}

/// ストレスレベル（1 = 少し気まずい 〜 5 = 耐えがたい）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct StressLevel(u8);

impl StressLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self, DomainError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(DomainError::Validation(format!(
                "壓力等級必須介於 {} 到 {}: {value}",
                Self::MIN,
                Self::MAX
            )));
        }
        Ok(Self(value))
    }

    /// 範囲外の値を最寄りの境界に丸めて生成する
    pub const fn saturating(value: u8) -> Self {
        if value < Self::MIN {
            Self(Self::MIN)
        } else if value > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(value)
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for StressLevel {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StressLevel> for u8 {
    fn from(level: StressLevel) -> Self {
        level.0
    }
}

/// 予想される困った質問
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnoyingQuestion {
    pub content:            String,
    /// Helper が参考にする回答例
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_response: Option<String>,
}

/// 場面の説明
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RescueScenario {
    pub description:           String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_participants: Option<String>,
}

/// 救援請求（詳細・編集画面で使う完全版）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RescueRequest {
    pub id:                 String,
    pub status:             RescueRequestStatus,
    /// 予約日時（クライアントのタイムゾーンを保持する）
    pub scheduled_date:     DateTime<FixedOffset>,
    /// 予定時間（時間単位）
    pub duration:           f64,
    pub stress_level:       StressLevel,
    pub location:           String,
    pub help_needed:        String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scenario:           Option<RescueScenario>,
    #[serde(default)]
    pub questions:          Vec<AnnoyingQuestion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes:              Option<String>,
    /// 手動マッチング後に設定される
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_helper_id: Option<String>,
    pub created_at:         DateTime<Utc>,
    pub updated_at:         DateTime<Utc>,
}

impl RescueRequest {
    /// [`DomainError::NotFound`] に載せるエンティティ種別
    pub const ENTITY_TYPE: &'static str = "RescueRequest";

    /// 作成リクエストから下書きを組み立てる
    pub fn draft(id: impl Into<String>, request: CreateRescueRequest, now: DateTime<Utc>) -> Self {
        Self {
            id:                 id.into(),
            status:             RescueRequestStatus::Draft,
            scheduled_date:     request.scheduled_date,
            duration:           request.duration,
            stress_level:       request.stress_level,
            location:           request.location,
            help_needed:        request.help_needed,
            scenario:           request.scenario,
            questions:          request.questions,
            notes:              request.notes,
            assigned_helper_id: None,
            created_at:         now,
            updated_at:         now,
        }
    }
}

/// POST /rescue のリクエスト
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRescueRequest {
    pub scheduled_date: DateTime<FixedOffset>,
    pub duration:       f64,
    pub stress_level:   StressLevel,
    pub location:       String,
    pub help_needed:    String,
    #[serde(default)]
    pub scenario:       Option<RescueScenario>,
    #[serde(default)]
    pub questions:      Vec<AnnoyingQuestion>,
    #[serde(default)]
    pub notes:          Option<String>,
}

/// POST /rescue のレスポンス
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateRescueResponse {
    pub success: bool,
    pub request: RescueRequest,
}

/// GET /rescue/{id} のレスポンス
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetRescueResponse {
    pub request: RescueRequest,
}
