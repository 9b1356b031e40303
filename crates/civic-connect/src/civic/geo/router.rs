use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use super::{resolve, GeoError};
use crate::civic::{first_param, QueryParams};

/// Router exposing `GET /geo/resolve`.
pub fn geo_router() -> Router {
    Router::new().route("/geo/resolve", get(resolve_handler))
}

pub(crate) async fn resolve_handler(Query(params): Query<QueryParams>) -> Response {
    let zip = first_param(&params, "zip").unwrap_or_default();
    match resolve(&zip) {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(error @ GeoError::MissingZip) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
    }
}
