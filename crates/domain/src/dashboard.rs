//! # ダッシュボード
//!
//! ダッシュボード画面が 1 回のリクエストで受け取る集約データの契約。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rescue::StressLevel;

/// ユーザーの役割
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum UserRole {
    /// 助けを求める側
    Escapee,
    Helper,
    WokeElder,
    SilentBuffer,
    UrbanLoner,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum UserStatus {
    Online,
    Offline,
    Busy,
}

/// ダッシュボード表示用の最小限のユーザー情報
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserMinimal {
    pub id:         String,
    pub nickname:   String,
    pub role:       UserRole,
    pub status:     UserStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RescueRequestType {
    Emergency,
    Scheduled,
    Consultation,
}

/// 一覧表示時のステータス
///
/// 詳細画面の [`RescueRequestStatus`](crate::rescue::RescueRequestStatus) とは別の語彙。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreviewStatus {
    Pending,
    Matched,
    InProgress,
    Completed,
    Cancelled,
}

/// 最小限の Helper 情報
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HelperMinimal {
    pub id:         String,
    pub nickname:   String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// 評価（0〜5）
    pub rating:     f64,
}

/// 救援請求の一覧表示用プレビュー
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RescueRequestPreview {
    pub id:             String,
    #[serde(rename = "type")]
    pub request_type:   RescueRequestType,
    pub stress_level:   StressLevel,
    pub status:         PreviewStatus,
    pub created_at:     DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_helper: Option<HelperMinimal>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    RescueMatch,
    SurvivalCheck,
    GatheringInvite,
    HelperRequest,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPreview {
    pub id:                String,
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    pub title:             String,
    pub is_read:           bool,
    pub created_at:        DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSummary {
    pub unread_count: u32,
    pub recent:       Vec<NotificationPreview>,
}

/// GET /dashboard のレスポンス
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetDashboardResponse {
    pub user:            UserMinimal,
    pub rescue_requests: Vec<RescueRequestPreview>,
    pub notifications:   NotificationSummary,
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_プレビューのシリアライズ形式() {
        let preview = RescueRequestPreview {
            id:             "rescue-002".to_string(),
            request_type:   RescueRequestType::Scheduled,
            stress_level:   StressLevel::new(2).unwrap(),
            status:         PreviewStatus::InProgress,
            created_at:     Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap(),
            matched_helper: None,
        };

        let json = serde_json::to_value(&preview).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": "rescue-002",
                "type": "scheduled",
                "stressLevel": 2,
                "status": "in_progress",
                "createdAt": "2026-02-01T00:00:00Z",
            })
        );
    }

    #[test]
    fn test_役割はスネークケースで表す() {
        assert_eq!(
            serde_json::to_value(UserRole::WokeElder).unwrap(),
            serde_json::json!("woke_elder")
        );
        assert_eq!(UserRole::UrbanLoner.to_string(), "urban_loner");
    }
}
