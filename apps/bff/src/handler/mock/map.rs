//! 実況マップのモック

use std::sync::Arc;

use axum::{Json, extract::State};
use lazypeople_domain::map::{
    GetHotspotsResponse,
    GetMapHelpersResponse,
    GetMapLayersResponse,
    GetMapRescueRequestsResponse,
    RescueRequestLocation,
};

use super::{MockState, fixtures, require_authenticated};
use crate::{error::ProxyError, session::AuthSession};

/// GET /api/mock/map/layers
///
/// 未ログインの利用者には `anonymous` のレイヤーのみを返す。
pub async fn get_map_layers(
    State(state): State<Arc<MockState>>,
    session: AuthSession,
) -> Json<GetMapLayersResponse> {
    state.delay(200).await;

    let is_authenticated = session.is_authenticated();
    let layers = fixtures::layers()
        .into_iter()
        .filter(|layer| layer.is_visible_to(is_authenticated))
        .collect();

    Json(GetMapLayersResponse { layers })
}

/// GET /api/mock/map/hotspots
pub async fn get_map_hotspots(State(state): State<Arc<MockState>>) -> Json<GetHotspotsResponse> {
    state.delay(300).await;

    Json(GetHotspotsResponse {
        hotspots:   fixtures::hotspots(),
        updated_at: state.clock.now(),
    })
}

/// GET /api/mock/map/rescue-requests
///
/// 個人レイヤーのため認証必須。
pub async fn get_map_rescue_requests(
    State(state): State<Arc<MockState>>,
    session: AuthSession,
) -> Result<Json<GetMapRescueRequestsResponse>, ProxyError> {
    require_authenticated(&session)?;
    state.delay(250).await;

    let requests = fixtures::rescue_previews(state.clock.now())
        .into_iter()
        .zip(fixtures::RESCUE_LOCATIONS)
        .map(|(preview, (location, district_id))| RescueRequestLocation {
            preview,
            location,
            district_id: district_id.to_string(),
        })
        .collect();

    Ok(Json(GetMapRescueRequestsResponse { requests }))
}

/// GET /api/mock/map/helpers
///
/// 認証必須。位置を公開している Helper のみを返す。
pub async fn get_map_helpers(
    State(state): State<Arc<MockState>>,
    session: AuthSession,
) -> Result<Json<GetMapHelpersResponse>, ProxyError> {
    require_authenticated(&session)?;
    state.delay(200).await;

    let helpers = fixtures::helper_locations()
        .into_iter()
        .filter(|helper| helper.is_location_public)
        .collect();

    Ok(Json(GetMapHelpersResponse { helpers }))
}
