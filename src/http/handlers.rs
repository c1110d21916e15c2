//! Request handlers for the JSON API.
//!
//! # Responsibilities
//! - Deserialize /evaluate bodies into EvalRequest
//! - Convert every evaluation failure into the response envelope
//! - Answer the liveness probe
//!
//! # Design Decisions
//! - /evaluate always answers 200; failure is data in the `error` field,
//!   an explicit contract callers rely on
//! - An undeserializable body gets the same envelope instead of a 4xx,
//!   so /evaluate has a single response shape

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::http::server::AppState;
use crate::observability::metrics;

/// Body of a POST /evaluate request.
#[derive(Debug, Deserialize)]
pub struct EvalRequest {
    pub expression: String,
    /// Arbitrary JSON value: object, array, scalar, or null.
    pub context: Value,
}

/// Response envelope for /evaluate. Both keys are always present;
/// exactly one is meaningfully populated.
#[derive(Debug, Serialize)]
pub struct EvalResponse {
    pub result: Option<Value>,
    pub error: Option<String>,
}

impl EvalResponse {
    fn ok(result: Value) -> Self {
        Self {
            result: Some(result),
            error: None,
        }
    }

    fn err(message: impl Into<String>) -> Self {
        Self {
            result: None,
            error: Some(message.into()),
        }
    }
}

/// Liveness payload.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub message: &'static str,
}

/// POST /evaluate.
pub async fn evaluate(
    State(state): State<AppState>,
    payload: Result<Json<EvalRequest>, JsonRejection>,
) -> Json<EvalResponse> {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Invalid request body");
            metrics::record_evaluation("bad_request");
            return Json(EvalResponse::err(format!("Invalid request body: {rejection}")));
        }
    };

    match state.engine.evaluate(&request.expression, &request.context) {
        Ok(result) => {
            tracing::debug!(expression = %request.expression, "Expression evaluated");
            metrics::record_evaluation("success");
            Json(EvalResponse::ok(result))
        }
        Err(e) => {
            tracing::debug!(expression = %request.expression, error = %e, "Evaluation failed");
            metrics::record_evaluation("failure");
            Json(EvalResponse::err(e.to_string()))
        }
    }
}

/// GET /healthz (and GET / in API-only mode).
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        message: "jexl-playground API running",
    })
}
