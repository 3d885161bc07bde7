//! End-to-end flows through the REST surface.

#![cfg(feature = "api")]

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::util::ServiceExt;

use outlet_sim::api::{AppState, router};

async fn get_json(app: &axum::Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

async fn post(app: &axum::Router, uri: &str) -> StatusCode {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(req).await.unwrap().status()
}

#[tokio::test]
async fn toggling_everything_off_zeroes_the_bill() {
    let app = router(AppState::new(common::baseline_model()));

    let (status, billing) = get_json(&app, "/billing").await;
    assert_eq!(status, StatusCode::OK);
    assert!(billing["house_kwh"].as_f64().unwrap_or(0.0) > 0.0);

    for index in 0..5 {
        let status = post(&app, &format!("/outlets/{index}/toggle")).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, billing) = get_json(&app, "/billing").await;
    assert_eq!(billing["house_kwh"], 0.0);
    assert_eq!(billing["house_cost"], 0.0);
}

#[tokio::test]
async fn series_gates_on_the_toggled_state() {
    let app = router(AppState::new(common::baseline_model()));

    assert_eq!(post(&app, "/outlets/0/toggle").await, StatusCode::OK);

    let (status, series) = get_json(&app, "/series").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(series["outlets"][0]["is_on"], false);
    let values = series["outlets"][0]["values"].as_array().cloned().unwrap_or_default();
    assert_eq!(values.len(), 30);
    assert!(values.iter().all(|v| v == 0.0));

    // the other outlets keep their drawn history
    let values = series["outlets"][1]["values"].as_array().cloned().unwrap_or_default();
    assert!(values.iter().any(|v| v.as_f64().unwrap_or(0.0) > 0.0));
}

#[tokio::test]
async fn rename_flow_shows_up_in_the_table_and_the_bill() {
    let app = router(AppState::new(common::baseline_model()));

    let req = Request::builder()
        .method("PUT")
        .uri("/outlets/2/name")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"label":"Kitchen","device":"Kettle"}"#))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let (_, outlets) = get_json(&app, "/outlets").await;
    assert_eq!(outlets[2]["label"], "Kitchen");
    assert_eq!(outlets[2]["device"], "Kettle");
    assert_eq!(outlets[1]["label"], "Outlet 2");

    let (_, billing) = get_json(&app, "/billing").await;
    assert_eq!(billing["lines"][2]["label"], "Kitchen");
}

#[tokio::test]
async fn simulate_refreshes_history_without_touching_state() {
    let app = router(AppState::new(common::baseline_model()));

    assert_eq!(post(&app, "/outlets/3/toggle").await, StatusCode::OK);

    let (_, before) = get_json(&app, "/series").await;
    assert_eq!(post(&app, "/simulate").await, StatusCode::OK);
    let (_, after) = get_json(&app, "/series").await;

    assert_eq!(after["outlets"][3]["is_on"], false);
    assert_eq!(after["days"].as_array().map(Vec::len), Some(30));
    assert_ne!(
        before["outlets"][0]["values"],
        after["outlets"][0]["values"],
        "history should be redrawn"
    );
}

#[tokio::test]
async fn out_of_range_index_is_a_clean_404() {
    let app = router(AppState::new(common::baseline_model()));

    let req = Request::builder()
        .method("POST")
        .uri("/outlets/99/toggle")
        .body(Body::empty())
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert!(
        json["error"]
            .as_str()
            .unwrap_or_default()
            .contains("out of range")
    );
}
