use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;

use super::domain::UserId;
use super::repository::SnapshotRepository;
use super::service::{SuggestionService, SuggestionServiceError};

/// Router builder exposing the suggestion read endpoints.
pub fn suggestion_router<R>(service: Arc<SuggestionService<R>>) -> Router
where
    R: SnapshotRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/users/:user_id/suggestions",
            get(suggestions_handler::<R>),
        )
        .route(
            "/api/v1/users/:user_id/suggestions/analysis",
            get(analysis_handler::<R>),
        )
        .with_state(service)
}

/// Optional evaluation instant, defaulting to wall-clock time. Pinning `now`
/// keeps demo responses reproducible.
#[derive(Debug, Deserialize)]
pub(crate) struct EvaluationQuery {
    now: Option<DateTime<Utc>>,
}

impl EvaluationQuery {
    fn instant(&self) -> DateTime<Utc> {
        self.now.unwrap_or_else(Utc::now)
    }
}

pub(crate) async fn suggestions_handler<R>(
    State(service): State<Arc<SuggestionService<R>>>,
    Path(user_id): Path<u32>,
    Query(query): Query<EvaluationQuery>,
) -> Response
where
    R: SnapshotRepository + 'static,
{
    let user = UserId(user_id);
    match service.suggestions_for(user, query.instant()) {
        Ok(suggestions) => (StatusCode::OK, axum::Json(suggestions)).into_response(),
        Err(error) => error_response(user, error),
    }
}

pub(crate) async fn analysis_handler<R>(
    State(service): State<Arc<SuggestionService<R>>>,
    Path(user_id): Path<u32>,
    Query(query): Query<EvaluationQuery>,
) -> Response
where
    R: SnapshotRepository + 'static,
{
    let user = UserId(user_id);
    match service.report_for(user, query.instant()) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => error_response(user, error),
    }
}

fn error_response(user: UserId, error: SuggestionServiceError) -> Response {
    match error {
        SuggestionServiceError::UnknownUser(_) => {
            let payload = json!({
                "error": "User not found",
                "message": format!("No user found with ID: {user}"),
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        other => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
