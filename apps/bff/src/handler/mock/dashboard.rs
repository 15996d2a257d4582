//! ダッシュボードのモック

use std::sync::Arc;

use axum::{Json, extract::State};
use lazypeople_domain::dashboard::GetDashboardResponse;

use super::{MockState, fixtures};

/// GET /api/mock/dashboard
pub async fn get_dashboard(State(state): State<Arc<MockState>>) -> Json<GetDashboardResponse> {
    state.delay(300).await;

    let now = state.clock.now();
    Json(GetDashboardResponse {
        user:            fixtures::current_user(),
        rescue_requests: fixtures::rescue_previews(now),
        notifications:   fixtures::notifications(now),
    })
}
