//! モック API の固定データ

use chrono::{DateTime, Duration, FixedOffset, TimeZone, Utc};
use lazypeople_domain::{
    dashboard::{
        HelperMinimal,
        NotificationPreview,
        NotificationSummary,
        NotificationType,
        PreviewStatus,
        RescueRequestPreview,
        RescueRequestType,
        UserMinimal,
        UserRole,
        UserStatus,
    },
    map::{
        GeoPoint,
        HelperLocation,
        HotspotAggregate,
        Layer,
        LayerAccessLevel,
        LayerDataSource,
        LayerType,
        LayerVisibility,
    },
    rescue::{AnnoyingQuestion, RescueRequest, RescueRequestStatus, RescueScenario, StressLevel},
};

pub(super) fn current_user() -> UserMinimal {
    UserMinimal {
        id:         "user-mock-001".to_string(),
        nickname:   "焦慮小明".to_string(),
        role:       UserRole::Escapee,
        status:     UserStatus::Online,
        avatar_url: None,
    }
}

fn helper(id: &str, nickname: &str, rating: f64) -> HelperMinimal {
    HelperMinimal {
        id: id.to_string(),
        nickname: nickname.to_string(),
        avatar_url: None,
        rating,
    }
}

/// ダッシュボードと地図で共有する救援請求（新しい順）
pub(super) fn rescue_previews(now: DateTime<Utc>) -> Vec<RescueRequestPreview> {
    vec![
        RescueRequestPreview {
            id:             "rescue-001".to_string(),
            request_type:   RescueRequestType::Emergency,
            stress_level:   StressLevel::saturating(4),
            status:         PreviewStatus::Pending,
            created_at:     now,
            matched_helper: None,
        },
        RescueRequestPreview {
            id:             "rescue-002".to_string(),
            request_type:   RescueRequestType::Scheduled,
            stress_level:   StressLevel::saturating(2),
            status:         PreviewStatus::Matched,
            created_at:     now - Duration::days(1),
            matched_helper: Some(helper("helper-001", "專業閒人阿華", 4.8)),
        },
    ]
}

/// 救援請求ごとの位置と地区
pub(super) const RESCUE_LOCATIONS: [(GeoPoint, &str); 2] = [
    (GeoPoint::new(25.0330, 121.5654), "taipei-xinyi"),
    (GeoPoint::new(25.0264, 121.5435), "taipei-daan"),
];

pub(super) fn notifications(now: DateTime<Utc>) -> NotificationSummary {
    NotificationSummary {
        unread_count: 3,
        recent:       vec![
            NotificationPreview {
                id:                "notif-001".to_string(),
                notification_type: NotificationType::RescueMatch,
                title:             "已為您匹配到 Helper！".to_string(),
                is_read:           false,
                created_at:        now,
            },
            NotificationPreview {
                id:                "notif-002".to_string(),
                notification_type: NotificationType::SurvivalCheck,
                title:             "生存確認：今天還好嗎？".to_string(),
                is_read:           true,
                created_at:        now - Duration::hours(1),
            },
        ],
    }
}

pub(super) fn layers() -> Vec<Layer> {
    let layer = |id: &str, name: &str, layer_type, data_source, order, access_level| Layer {
        id: id.to_string(),
        name: name.to_string(),
        layer_type,
        data_source,
        visibility: LayerVisibility::Visible,
        order,
        access_level,
    };

    vec![
        layer(
            "layer-hotspot",
            "熱點分佈",
            LayerType::Public,
            LayerDataSource::Hotspot,
            1,
            LayerAccessLevel::Anonymous,
        ),
        layer(
            "layer-my-requests",
            "我的救援請求",
            LayerType::Personal,
            LayerDataSource::RescueRequest,
            2,
            LayerAccessLevel::Authenticated,
        ),
        layer(
            "layer-helpers",
            "附近 Helper",
            LayerType::Personal,
            LayerDataSource::Helper,
            3,
            LayerAccessLevel::Authenticated,
        ),
    ]
}

/// 台北市の地区別集計
pub(super) fn hotspots() -> Vec<HotspotAggregate> {
    [
        ("taipei-daan", "大安區", 25.0264, 121.5435, 12, 3.2),
        ("taipei-xinyi", "信義區", 25.0330, 121.5654, 8, 2.8),
        ("taipei-zhongshan", "中山區", 25.0685, 121.5266, 15, 3.5),
        ("taipei-songshan", "松山區", 25.0608, 121.5576, 6, 2.3),
        ("taipei-neihu", "內湖區", 25.0830, 121.5888, 4, 1.9),
    ]
    .into_iter()
    .map(
        |(district_id, district_name, latitude, longitude, count, avg_stress_level)| {
            HotspotAggregate {
                district_id: district_id.to_string(),
                district_name: district_name.to_string(),
                center: GeoPoint::new(latitude, longitude),
                count,
                avg_stress_level,
            }
        },
    )
    .collect()
}

pub(super) fn helper_locations() -> Vec<HelperLocation> {
    vec![
        HelperLocation {
            helper:             helper("helper-001", "專業閒人阿華", 4.8),
            location:           Some(GeoPoint::new(25.0421, 121.5520)),
            is_location_public: true,
        },
        HelperLocation {
            helper:             helper("helper-002", "傾聽者小美", 4.5),
            location:           Some(GeoPoint::new(25.0580, 121.5380)),
            is_location_public: true,
        },
        HelperLocation {
            helper:             helper("helper-003", "溫暖大叔老王", 4.9),
            location:           Some(GeoPoint::new(25.0720, 121.5190)),
            is_location_public: true,
        },
    ]
}

/// 救援請求ストアの初期データ
pub(super) fn seed_rescue_requests() -> Vec<RescueRequest> {
    demo_rescue_request().into_iter().collect()
}

fn demo_rescue_request() -> Option<RescueRequest> {
    let taipei = FixedOffset::east_opt(8 * 3600)?;
    let scheduled_date = taipei.with_ymd_and_hms(2026, 2, 10, 18, 0, 0).single()?;
    let created_at = taipei
        .with_ymd_and_hms(2026, 2, 1, 10, 0, 0)
        .single()?
        .with_timezone(&Utc);

    let question = |content: &str, suggested_response: &str| AnnoyingQuestion {
        content:            content.to_string(),
        suggested_response: Some(suggested_response.to_string()),
    };

    Some(RescueRequest {
        id: "rescue-demo-001".to_string(),
        status: RescueRequestStatus::Pending,
        scheduled_date,
        duration: 3.0,
        stress_level: StressLevel::saturating(4),
        location: "台北市大安區某餐廳".to_string(),
        help_needed: "幫我擋住親戚的連環問題，特別是關於感情和工作的".to_string(),
        scenario: Some(RescueScenario {
            description:           "除夕夜家族聚餐，預計有 15 人以上".to_string(),
            expected_participants: Some("爸媽、叔叔阿姨、表哥表姐".to_string()),
        }),
        questions: vec![
            question("怎麼還沒交男/女朋友？", "緣分還沒到，不急"),
            question("薪水多少？", "夠用就好，公司規定不能說"),
            question("什麼時候結婚？", "順其自然"),
        ],
        notes: Some("希望 Helper 可以幫我轉移話題".to_string()),
        assigned_helper_id: None,
        created_at,
        updated_at: created_at,
    })
}
