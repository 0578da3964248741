//! Router and handlers for the words API

use crate::error::QueryError;
use crate::service::QueryService;
use axum::{
    Json, Router,
    extract::{RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use tower_http::trace::TraceLayer;

/// One matched word as returned to HTTP callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordRecord {
    pub text: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    words: usize,
}

/// Query string of `GET /words`
///
/// `letters` repeats once per letter (`letters=a&letters=g`, not `letters=a,g`),
/// which serde's urlencoded deserializer cannot express, so the raw query is
/// parsed by hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordsParams {
    pub letters: Vec<String>,
    pub limit: Option<usize>,
}

impl WordsParams {
    /// Parse a raw query string
    ///
    /// Unknown keys are ignored. An empty `limit=` counts as absent.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::InvalidLimit` if `limit` is not a non-negative integer.
    pub fn parse(query: &str) -> Result<Self, QueryError> {
        let mut params = Self::default();
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            match &*key {
                "letters" => params.letters.push(value.into_owned()),
                "limit" if value.is_empty() => {}
                "limit" => {
                    let limit = value
                        .parse::<usize>()
                        .map_err(|_| QueryError::InvalidLimit(value.to_string()))?;
                    params.limit = Some(limit);
                }
                _ => {}
            }
        }
        Ok(params)
    }
}

impl IntoResponse for QueryError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}

/// Build the API router over a shared query service
pub fn build_router(service: QueryService) -> Router {
    Router::new()
        .route("/words", get(list_words))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

/// Matching fans out over rayon's pool, so it runs on the blocking pool
/// instead of holding an async worker for the whole query.
async fn list_words(
    State(service): State<QueryService>,
    RawQuery(query): RawQuery,
) -> Result<Json<Vec<WordRecord>>, Response> {
    let params = WordsParams::parse(query.as_deref().unwrap_or_default())
        .map_err(reject)?;

    let records = tokio::task::spawn_blocking(move || {
        service
            .find_raw(&params.letters, params.limit)
            .map(|words| {
                words
                    .into_iter()
                    .map(|word| WordRecord {
                        text: word.text().to_string(),
                    })
                    .collect::<Vec<_>>()
            })
    })
    .await
    .map_err(|e| {
        tracing::error!(error = %e, "word matching task failed");
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    })?
    .map_err(reject)?;

    Ok(Json(records))
}

fn reject(error: QueryError) -> Response {
    tracing::debug!(error = %error, "rejected words query");
    error.into_response()
}

async fn health(State(service): State<QueryService>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        words: service.index().len(),
    })
}
