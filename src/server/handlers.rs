//! HTTP request handlers for the prediction service.

use super::pages;
use super::AppState;
use crate::observability;
use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Prediction request body. `features` is optional so that absence,
/// null, and emptiness can be told apart from a parse failure.
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub features: Option<Vec<f64>>,
}

/// Successful prediction response.
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    /// String rendering of the predicted label.
    pub prediction: String,
}

/// Error response body shared by all failure modes.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

fn json_error(status: StatusCode, message: &str) -> Response {
    observability::record_predict_request(status.as_u16());
    (
        status,
        Json(ErrorBody {
            error: message.to_string(),
        }),
    )
        .into_response()
}

// Page routes

pub async fn home() -> Html<String> {
    debug!("Home");
    Html(pages::home_page())
}

/// Query parameters for the profession page.
#[derive(Debug, Deserialize)]
pub struct ProfessionQuery {
    pub profession: Option<String>,
}

pub async fn profession(Query(query): Query<ProfessionQuery>) -> Html<String> {
    debug!(profession = ?query.profession, "Profession page");
    Html(pages::profession_page(query.profession.as_deref()))
}

// API routes

/// Handle `POST /predict`.
///
/// The body is parsed explicitly rather than through the `Json` extractor
/// so every failure mode maps to the documented status and body.
pub async fn predict(State(state): State<AppState>, body: Bytes) -> Response {
    let request: PredictRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            debug!(error = %e, "Rejected malformed prediction request");
            return json_error(StatusCode::BAD_REQUEST, "malformed JSON body");
        }
    };

    let features = match request.features {
        Some(features) if !features.is_empty() => features,
        _ => return json_error(StatusCode::BAD_REQUEST, "No features provided"),
    };

    match state.host.predict(&features) {
        Ok(label) => {
            observability::record_predict_request(StatusCode::OK.as_u16());
            observability::record_prediction(label);
            Json(PredictResponse {
                prediction: label.to_string(),
            })
            .into_response()
        }
        Err(e) => {
            // The cause (a feature-dimension mismatch) stays in the log;
            // the client gets a generic server error.
            warn!(error = %e, "Prediction request failed");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "prediction failed")
        }
    }
}

/// Health summary for the serving process.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub model: String,
    pub classes: usize,
    pub features: usize,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        model: state.host.model_name().to_string(),
        classes: state.host.num_classes(),
        features: state.host.num_features(),
    })
}
