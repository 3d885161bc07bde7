//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use chrono::Local;

use crate::model::{ConsumptionModel, IndexError};

use super::AppState;
use super::types::{
    BillingResponse, ErrorResponse, OutletRow, OutletSeries, RenameRequest, SeriesResponse,
};

type NotFound = (StatusCode, Json<ErrorResponse>);

/// Returns the live table rows.
///
/// `GET /outlets` → 200 + `Vec<OutletRow>` JSON
pub async fn get_outlets(State(state): State<Arc<AppState>>) -> Json<Vec<OutletRow>> {
    let model = state.model.lock().await;
    Json(model.readings().iter().map(OutletRow::from).collect())
}

/// Returns the chart payload: day labels, per-outlet series, house totals.
///
/// `GET /series` → 200 + `SeriesResponse` JSON
pub async fn get_series(State(state): State<Arc<AppState>>) -> Json<SeriesResponse> {
    let model = state.model.lock().await;
    Json(series_response(&model))
}

/// Returns the billing summary.
///
/// `GET /billing` → 200 + `BillingResponse` JSON
pub async fn get_billing(State(state): State<Arc<AppState>>) -> Json<BillingResponse> {
    let model = state.model.lock().await;
    Json(BillingResponse::from(&model.billing_summary()))
}

/// Regenerates the simulated history ending at the current local date and
/// returns the fresh chart payload.
///
/// `POST /simulate` → 200 + `SeriesResponse` JSON
pub async fn simulate(State(state): State<Arc<AppState>>) -> Json<SeriesResponse> {
    let mut model = state.model.lock().await;
    model.simulate(Local::now().date_naive());
    Json(series_response(&model))
}

/// Flips one outlet and returns its updated table row.
///
/// `POST /outlets/{index}/toggle` → 200 + `OutletRow` JSON
/// `POST /outlets/99/toggle` → 404 + `ErrorResponse`
pub async fn toggle_outlet(
    State(state): State<Arc<AppState>>,
    Path(index): Path<usize>,
) -> Result<Json<OutletRow>, NotFound> {
    let mut model = state.model.lock().await;
    model.toggle(index).map_err(not_found)?;
    Ok(Json(row(&model, index)))
}

/// Renames one outlet and returns its updated table row.
///
/// `PUT /outlets/{index}/name` → 200 + `OutletRow` JSON
/// `PUT /outlets/99/name` → 404 + `ErrorResponse`
pub async fn rename_outlet(
    State(state): State<Arc<AppState>>,
    Path(index): Path<usize>,
    Json(req): Json<RenameRequest>,
) -> Result<Json<OutletRow>, NotFound> {
    let mut model = state.model.lock().await;
    model.rename(index, req.label, req.device).map_err(not_found)?;
    Ok(Json(row(&model, index)))
}

fn not_found(e: IndexError) -> NotFound {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
}

/// Builds one table row for an index already checked by the caller.
fn row(model: &ConsumptionModel, index: usize) -> OutletRow {
    let outlet = &model.outlets()[index];
    OutletRow {
        index,
        label: outlet.label.clone(),
        device: outlet.device_name.clone(),
        is_on: outlet.is_on,
        current_draw_kwh: model.current_draw(index).unwrap_or(0.0),
    }
}

fn series_response(model: &ConsumptionModel) -> SeriesResponse {
    let outlets = model
        .outlets()
        .iter()
        .enumerate()
        .map(|(index, outlet)| OutletSeries {
            index,
            label: outlet.label.clone(),
            is_on: outlet.is_on,
            values: model.displayed_series(index).unwrap_or_default(),
        })
        .collect();
    SeriesResponse {
        days: model.day_labels().to_vec(),
        outlets,
        house_daily_total: model.daily_totals(),
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::Request;
    use chrono::NaiveDate;
    use tower::util::ServiceExt;

    use super::*;
    use crate::api::router;
    use crate::config::DashboardConfig;

    fn make_test_state() -> Arc<AppState> {
        let today = NaiveDate::from_ymd_opt(2025, 3, 15).expect("valid test date");
        let model =
            ConsumptionModel::new(&DashboardConfig::baseline(), today).expect("baseline builds");
        AppState::new(model)
    }

    #[tokio::test]
    async fn outlets_returns_all_rows() {
        let state = make_test_state();
        let app = router(state);

        let req = Request::builder()
            .uri("/outlets")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Vec<serde_json::Value> = serde_json::from_slice(&body).unwrap();
        assert_eq!(json.len(), 5);
        assert_eq!(json[0]["label"], "Outlet 1");
        assert_eq!(json[0]["is_on"], true);
    }

    #[tokio::test]
    async fn series_has_window_shape() {
        let state = make_test_state();
        let app = router(state);

        let req = Request::builder()
            .uri("/series")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["days"].as_array().map(Vec::len), Some(30));
        assert_eq!(json["outlets"].as_array().map(Vec::len), Some(5));
        assert_eq!(json["house_daily_total"].as_array().map(Vec::len), Some(30));
        assert_eq!(json["days"][29], "15-Mar");
    }

    #[tokio::test]
    async fn toggle_flips_state() {
        let state = make_test_state();
        let app = router(state);

        let req = Request::builder()
            .method("POST")
            .uri("/outlets/0/toggle")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["is_on"], false);
        assert_eq!(json["current_draw_kwh"], 0.0);
    }

    #[tokio::test]
    async fn toggle_out_of_range_returns_404() {
        let state = make_test_state();
        let app = router(state);

        let req = Request::builder()
            .method("POST")
            .uri("/outlets/99/toggle")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(json.get("error").is_some());
    }

    #[tokio::test]
    async fn rename_updates_names() {
        let state = make_test_state();
        let app = router(state);

        let req = Request::builder()
            .method("PUT")
            .uri("/outlets/2/name")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"label":"Kitchen","device":"Toaster"}"#))
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["label"], "Kitchen");
        assert_eq!(json["device"], "Toaster");
    }

    #[tokio::test]
    async fn simulate_returns_fresh_payload() {
        let state = make_test_state();
        let app = router(state);

        let req = Request::builder()
            .method("POST")
            .uri("/simulate")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["days"].as_array().map(Vec::len), Some(30));
    }

    #[tokio::test]
    async fn billing_reads_zero_when_everything_is_off() {
        let state = make_test_state();

        {
            let mut model = state.model.lock().await;
            for index in 0..model.outlet_count() {
                model.toggle(index).expect("index in range");
            }
        }

        let app = router(state);
        let req = Request::builder()
            .uri("/billing")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["house_kwh"], 0.0);
        assert_eq!(json["house_cost"], 0.0);
    }
}
