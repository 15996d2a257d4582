//! 救援請求のモック

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use lazypeople_domain::{
    DomainError,
    rescue::{CreateRescueRequest, CreateRescueResponse, GetRescueResponse, RescueRequest},
};
use lazypeople_shared::{event_log::event, log_business_event};
use uuid::Uuid;

use super::MockState;
use crate::error::ProxyError;

/// POST /api/mock/rescue
///
/// 下書き状態の救援請求を作成し、メモリ上のストアに保存する。
#[tracing::instrument(skip_all)]
pub async fn create_rescue(
    State(state): State<Arc<MockState>>,
    payload: Result<Json<CreateRescueRequest>, JsonRejection>,
) -> Result<Json<CreateRescueResponse>, ProxyError> {
    let Json(body) = payload?;
    state.delay(300).await;

    let id = format!("rescue-{}", Uuid::now_v7());
    let request = RescueRequest::draft(id.as_str(), body, state.clock.now());
    state
        .rescue_store
        .write()
        .await
        .insert(id.clone(), request.clone());

    log_business_event!(
        event.category = event::category::RESCUE,
        event.action = event::action::RESCUE_CREATED,
        event.entity_type = event::entity_type::RESCUE_REQUEST,
        event.entity_id = %id,
        event.result = event::result::SUCCESS,
        stress_level = request.stress_level.value(),
        "救援請求を作成"
    );

    Ok(Json(CreateRescueResponse {
        success: true,
        request,
    }))
}

/// GET /api/mock/rescue/{id}
pub async fn get_rescue(
    State(state): State<Arc<MockState>>,
    Path(id): Path<String>,
) -> Result<Json<GetRescueResponse>, ProxyError> {
    state.delay(200).await;

    let request = state
        .rescue_store
        .read()
        .await
        .get(&id)
        .cloned()
        .ok_or(DomainError::NotFound {
            entity_type: RescueRequest::ENTITY_TYPE,
            id,
        })?;

    Ok(Json(GetRescueResponse { request }))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode, header},
    };
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;

    use super::super::test_utils::*;

    fn create_request(body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/api/mock/rescue")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn new_rescue() -> serde_json::Value {
        serde_json::json!({
            "scheduledDate": "2026-02-16T19:00:00+08:00",
            "duration": 2.5,
            "stressLevel": 5,
            "location": "台中市西屯區",
            "helpNeeded": "幫我應付阿姨的相親攻勢"
        })
    }

    #[tokio::test]
    async fn test_デモの救援請求を取得できる() {
        let sut = create_test_app();

        let response = sut
            .oneshot(get_request("/api/mock/rescue/rescue-demo-001", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["request"]["status"], "pending");
        assert_eq!(json["request"]["scheduledDate"], "2026-02-10T18:00:00+08:00");
        assert_eq!(json["request"]["questions"][1]["content"], "薪水多少？");
    }

    #[tokio::test]
    async fn test_存在しない救援請求は404() {
        let sut = create_test_app();

        let response = sut
            .oneshot(get_request("/api/mock/rescue/rescue-unknown", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["message"], "找不到此救援請求");
    }

    #[tokio::test]
    async fn test_作成した救援請求は下書きとして取得できる() {
        let sut = create_test_app();

        let response = sut
            .clone()
            .oneshot(create_request(new_rescue()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let created = body_json(response).await;
        assert_eq!(created["success"], true);
        assert_eq!(created["request"]["status"], "draft");
        assert_eq!(created["request"]["questions"], serde_json::json!([]));
        assert_eq!(created["request"]["createdAt"], "2026-02-01T02:00:00Z");
        let id = created["request"]["id"].as_str().unwrap().to_string();
        assert!(id.starts_with("rescue-"));

        let response = sut
            .oneshot(get_request(&format!("/api/mock/rescue/{id}"), None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let fetched = body_json(response).await;
        assert_eq!(fetched["request"], created["request"]);
    }

    #[tokio::test]
    async fn test_範囲外のストレスレベルは400() {
        let sut = create_test_app();
        let mut body = new_rescue();
        body["stressLevel"] = serde_json::json!(6);

        let response = sut.oneshot(create_request(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["statusMessage"], "Bad Request");
    }
}
