use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;

use super::domain::{ItemSubmission, ResourceQuery};
use super::repository::ItemRepository;
use super::service::{CatalogError, CatalogService};
use crate::civic::QueryParams;

/// Router exposing the item catalog and resource search.
pub fn catalog_router<R>(service: Arc<CatalogService<R>>) -> Router
where
    R: ItemRepository + 'static,
{
    Router::new()
        .route("/items", post(create_handler::<R>))
        .route("/items/:id", get(item_handler::<R>))
        .route("/resources", get(resources_handler::<R>))
        .with_state(service)
}

pub(crate) async fn create_handler<R>(
    State(service): State<Arc<CatalogService<R>>>,
    Json(submission): Json<ItemSubmission>,
) -> Response
where
    R: ItemRepository + 'static,
{
    match service.create(submission) {
        Ok(item) => (StatusCode::CREATED, Json(json!({ "id": item.id }))).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn item_handler<R>(
    State(service): State<Arc<CatalogService<R>>>,
    Path(id): Path<String>,
) -> Response
where
    R: ItemRepository + 'static,
{
    match service.get(&id) {
        Ok(item) => (StatusCode::OK, Json(item)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn resources_handler<R>(
    State(service): State<Arc<CatalogService<R>>>,
    Query(params): Query<QueryParams>,
) -> Response
where
    R: ItemRepository + 'static,
{
    match service.search(&ResourceQuery::from_params(&params)) {
        Ok(search) => (StatusCode::OK, Json(search)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: CatalogError) -> Response {
    let status = match error {
        CatalogError::MissingFields(_) => StatusCode::BAD_REQUEST,
        CatalogError::NotFound => StatusCode::NOT_FOUND,
        CatalogError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(json!({ "error": error.to_string() }))).into_response()
}
