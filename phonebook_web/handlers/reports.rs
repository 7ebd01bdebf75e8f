use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

use phonebook_types::reports::Report;

use super::ApiError;
use crate::http::AppState;

#[derive(Deserialize)]
pub struct CreateReportRequest {
    pub location: String,
}

pub async fn list_reports(State(state): State<AppState>) -> Result<Json<Vec<Report>>, ApiError> {
    Ok(Json(state.reports.list_reports().await?))
}

pub async fn get_report(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Report>, ApiError> {
    Ok(Json(state.reports.get_report(id).await?))
}

/// Acknowledges with the `Preparing` report immediately; completion happens
/// asynchronously on the worker.
pub async fn request_report(
    State(state): State<AppState>,
    Json(body): Json<CreateReportRequest>,
) -> Result<(StatusCode, Json<Report>), ApiError> {
    let report = state.reports.request_report(&body.location).await?;
    Ok((StatusCode::CREATED, Json(report)))
}
