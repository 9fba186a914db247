use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Router;
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use serde_json::json;
use std::io::Cursor;

use super::loader::{WorkforceCsvLoader, WorkforceImportError};
use super::settings::AnalysisSettings;
use super::run_analysis;

/// Router builder exposing the analysis endpoint for service crates to mount.
pub fn productivity_router() -> Router {
    Router::new().route("/api/v1/productivity/analyze", post(analyze_handler))
}

/// Analysis request carrying the three uploaded tables as CSV text.
#[derive(Debug, Deserialize)]
pub struct AnalysisRequest {
    pub roster_csv: String,
    pub activities_csv: String,
    pub skills_csv: String,
    /// Evaluation date for tenure; defaults to today.
    #[serde(default)]
    pub today: Option<NaiveDate>,
    /// Full threshold override. Absent means the standard deployment values;
    /// a partial object is rejected.
    #[serde(default)]
    pub settings: Option<AnalysisSettings>,
}

pub(crate) async fn analyze_handler(
    axum::Json(request): axum::Json<AnalysisRequest>,
) -> Response {
    let AnalysisRequest {
        roster_csv,
        activities_csv,
        skills_csv,
        today,
        settings,
    } = request;

    let settings = settings.unwrap_or_default();
    let model = match WorkforceCsvLoader::from_readers(
        Cursor::new(roster_csv.into_bytes()),
        Cursor::new(activities_csv.into_bytes()),
        Cursor::new(skills_csv.into_bytes()),
        settings,
    ) {
        Ok(model) => model,
        Err(error) => {
            let status = match error {
                WorkforceImportError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
                WorkforceImportError::Csv(_) | WorkforceImportError::Validation(_) => {
                    StatusCode::UNPROCESSABLE_ENTITY
                }
            };
            let payload = json!({ "error": error.to_string() });
            return (status, axum::Json(payload)).into_response();
        }
    };

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    match run_analysis(&model, today) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}
