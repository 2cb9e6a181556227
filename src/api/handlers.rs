use axum::{
    extract::rejection::JsonRejection,
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::error;

use crate::api::types::*;
use crate::config::QueryLimits;
use crate::error::UnscrambleError;
use crate::query;

use super::router::AppState;

/// Error wrapper for API handlers
pub enum ApiError {
    BadRequest(String),
    Internal(UnscrambleError),
}

impl From<UnscrambleError> for ApiError {
    fn from(e: UnscrambleError) -> Self {
        ApiError::Internal(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Internal(e) => {
                // Log the error; do not expose internals to the caller
                error!(error = %e, "internal error while handling request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred. Please try again later.".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

/// Validate the letters parameter: ASCII-alphabetic only, bounded length.
fn validate_letters(letters: &str, limits: &QueryLimits) -> Result<(), ApiError> {
    if letters.is_empty() || !letters.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ApiError::BadRequest(
            "Invalid input. Only alphabetic letters are allowed.".to_string(),
        ));
    }
    if letters.len() > limits.max_letters {
        return Err(ApiError::BadRequest(format!(
            "Input too large. Maximum length is {} letters.",
            limits.max_letters
        )));
    }
    Ok(())
}

fn run_lookup(state: &AppState, letters: &str) -> Result<Json<UnscrambleResponse>, ApiError> {
    if let Err(e) = validate_letters(letters, &state.limits) {
        state.metrics.record_rejected();
        return Err(e);
    }

    let start = Instant::now();
    let results = query::lookup(&state.index, letters);
    let outcome = if results.is_empty() { "miss" } else { "hit" };
    state
        .metrics
        .record_lookup(outcome, start.elapsed().as_secs_f64());

    Ok(Json(UnscrambleResponse::ok(results.to_vec())))
}

/// GET /unscramble?letters=abcxyz
pub async fn unscramble_get(
    State(state): State<Arc<AppState>>,
    Query(params): Query<UnscrambleParams>,
) -> Result<impl IntoResponse, ApiError> {
    let letters = params.letters.unwrap_or_default();
    let letters = letters.trim();
    if letters.is_empty() {
        state.metrics.record_rejected();
        return Err(ApiError::BadRequest(
            "Missing 'letters' query parameter.".to_string(),
        ));
    }

    run_lookup(&state, letters)
}

/// POST /unscramble with body `{"letters": "abcxyz"}`
pub async fn unscramble_post(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<UnscrambleBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let letters = match payload {
        Ok(Json(UnscrambleBody {
            letters: Some(letters),
        })) => letters,
        _ => {
            state.metrics.record_rejected();
            return Err(ApiError::BadRequest(
                "Missing or invalid 'letters' parameter.".to_string(),
            ));
        }
    };

    run_lookup(&state, &letters)
}

/// Health check endpoint
pub async fn ping() -> impl IntoResponse {
    Json(PingResponse {
        status: "ok".to_string(),
        message: "Pong!".to_string(),
    })
}

/// Root endpoint
pub async fn home() -> impl IntoResponse {
    Json(HomeResponse {
        status: "ok".to_string(),
    })
}

/// Prometheus metrics endpoint
pub async fn metrics(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, ApiError> {
    use prometheus::Encoder;
    let encoder = prometheus::TextEncoder::new();
    let metric_families = state.metrics.registry().gather();
    let mut buffer = vec![];
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| ApiError::Internal(UnscrambleError::Internal(e.to_string())))?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        buffer,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits() -> QueryLimits {
        QueryLimits::default()
    }

    #[test]
    fn test_validate_accepts_plain_letters() {
        assert!(validate_letters("cat", &limits()).is_ok());
        assert!(validate_letters("LiStEn", &limits()).is_ok());
    }

    #[test]
    fn test_validate_rejects_non_alphabetic() {
        assert!(validate_letters("c4t", &limits()).is_err());
        assert!(validate_letters("cat!", &limits()).is_err());
        assert!(validate_letters("c a t", &limits()).is_err());
        assert!(validate_letters("", &limits()).is_err());
    }

    #[test]
    fn test_validate_rejects_over_length() {
        let long = "a".repeat(51);
        assert!(validate_letters(&long, &limits()).is_err());

        let at_limit = "a".repeat(50);
        assert!(validate_letters(&at_limit, &limits()).is_ok());
    }
}
