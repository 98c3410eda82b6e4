//! Request handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisResult;
use crate::server::{ApiError, AppState};

const MISSING_JSON: &str = "Missing JSON in request";
const MISSING_TRANSCRIPT: &str = "Missing 'transcript' in request body";

/// Body of `POST /api/analyze`
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub transcript: Option<String>,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// POST /api/analyze
pub async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let request = match payload {
        Ok(Json(request)) => request,
        // Well-formed JSON of the wrong shape, e.g. a non-string transcript.
        Err(JsonRejection::JsonDataError(_)) => {
            return Err(ApiError::BadRequest(MISSING_TRANSCRIPT.to_string()))
        }
        Err(_) => return Err(ApiError::BadRequest(MISSING_JSON.to_string())),
    };

    let transcript = request
        .transcript
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest(MISSING_TRANSCRIPT.to_string()))?;

    let result = state.analyzer.analyze(&transcript).await?;
    Ok(Json(result))
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: crate::VERSION,
    })
}
