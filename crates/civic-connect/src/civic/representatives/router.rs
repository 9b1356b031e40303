use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use super::directory::CivicDirectory;
use super::domain::{LocationQuery, ResolutionError};
use super::resolver::RepresentativeResolver;
use crate::civic::QueryParams;

/// Router exposing `GET /civic/representatives`.
pub fn representatives_router<D>(resolver: Arc<RepresentativeResolver<D>>) -> Router
where
    D: CivicDirectory + 'static,
{
    Router::new()
        .route("/civic/representatives", get(representatives_handler::<D>))
        .with_state(resolver)
}

/// Degraded tiers still answer 200; only bad input and upstream rejections change the status.
pub(crate) async fn representatives_handler<D>(
    State(resolver): State<Arc<RepresentativeResolver<D>>>,
    Query(params): Query<QueryParams>,
) -> Response
where
    D: CivicDirectory + 'static,
{
    let query = LocationQuery::from_params(&params);
    let error = match resolver.resolve(&query).await {
        Ok(result) => return (StatusCode::OK, Json(result)).into_response(),
        Err(error) => error,
    };

    let message = error.to_string();
    match error {
        ResolutionError::InvalidInput => {
            (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
        }
        ResolutionError::UpstreamRejected { status, detail } => {
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            let payload = json!({
                "error": message,
                "detail": detail,
            });
            (status, Json(payload)).into_response()
        }
    }
}
