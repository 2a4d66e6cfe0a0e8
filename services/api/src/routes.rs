use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use carfacts::datasets;
use carfacts::error::AppError;
use carfacts::vehicle::{build_report, VehicleQuery, VehicleReport};
use serde::Serialize;
use serde_json::json;

#[derive(Debug, Serialize)]
pub(crate) struct VehicleReportResponse {
    pub(crate) make: String,
    pub(crate) model: String,
    #[serde(flatten)]
    pub(crate) report: VehicleReport,
}

pub(crate) fn router() -> axum::Router {
    axum::Router::new()
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/vehicle/report",
            axum::routing::post(vehicle_report_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn vehicle_report_endpoint(
    Json(query): Json<VehicleQuery>,
) -> Result<Json<VehicleReportResponse>, AppError> {
    datasets::init()?;

    let report = build_report(&query);
    Ok(Json(VehicleReportResponse {
        make: query.make,
        model: query.model,
        report,
    }))
}
