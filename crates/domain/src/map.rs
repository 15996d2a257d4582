//! # 実況マップ
//!
//! 地図画面のレイヤー、熱点集計、救援請求と Helper の位置情報の契約。
//!
//! レイヤーは [`LayerAccessLevel`] で公開範囲を持つ。未ログインの利用者には
//! `anonymous` のレイヤーのみを見せる（[`Layer::is_visible_to`]）。

use serde::{Deserialize, Serialize};

use crate::dashboard::{HelperMinimal, RescueRequestPreview};

/// WGS84 座標
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// 緯度（-90〜90）
    pub latitude:  f64,
    /// 経度（-180〜180）
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerType {
    Public,
    Personal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerDataSource {
    RescueRequest,
    Helper,
    Hotspot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerVisibility {
    Visible,
    Hidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerAccessLevel {
    Anonymous,
    Authenticated,
}

/// 地図レイヤー
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
    pub id:           String,
    pub name:         String,
    #[serde(rename = "type")]
    pub layer_type:   LayerType,
    pub data_source:  LayerDataSource,
    pub visibility:   LayerVisibility,
    /// 重ね順（大きいほど上）
    pub order:        u32,
    pub access_level: LayerAccessLevel,
}

impl Layer {
    /// 認証状態に応じて、このレイヤーを見せてよいか
    pub fn is_visible_to(&self, is_authenticated: bool) -> bool {
        is_authenticated || self.access_level == LayerAccessLevel::Anonymous
    }
}

/// 地区ごとの救援請求の集計結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotspotAggregate {
    pub district_id:      String,
    pub district_name:    String,
    pub center:           GeoPoint,
    pub count:            u32,
    pub avg_stress_level: f64,
}

/// 位置情報付きの救援請求
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RescueRequestLocation {
    #[serde(flatten)]
    pub preview:     RescueRequestPreview,
    pub location:    GeoPoint,
    pub district_id: String,
}

/// 位置情報付きの Helper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HelperLocation {
    #[serde(flatten)]
    pub helper:             HelperMinimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location:           Option<GeoPoint>,
    /// 位置を公開するか（既定は公開）
    #[serde(default = "default_location_public")]
    pub is_location_public: bool,
}

fn default_location_public() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetMapLayersResponse {
    pub layers: Vec<Layer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetHotspotsResponse {
    pub hotspots:   Vec<HotspotAggregate>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetMapRescueRequestsResponse {
    pub requests: Vec<RescueRequestLocation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetMapHelpersResponse {
    pub helpers: Vec<HelperLocation>,
}
