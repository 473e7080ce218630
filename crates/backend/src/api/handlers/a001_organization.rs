use axum::extract::{Path, Query};
use axum::Json;
use serde::Deserialize;

use crate::domain::a001_organization;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub name: Option<String>,
}

/// GET /api/organizations?name=...
pub async fn list_all(
    Query(query): Query<ListQuery>,
) -> Result<
    Json<Vec<contracts::domain::a001_organization::aggregate::Organization>>,
    axum::http::StatusCode,
> {
    match a001_organization::service::list_all(query.name.as_deref()).await {
        Ok(v) => Ok(Json(v)),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// GET /api/organizations/:id
pub async fn get_by_id(
    Path(id): Path<String>,
) -> Result<
    Json<contracts::domain::a001_organization::aggregate::Organization>,
    axum::http::StatusCode,
> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match a001_organization::service::get_by_id(uuid).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /api/organizations/testdata
pub async fn insert_test_data() -> Result<(), axum::http::StatusCode> {
    match a001_organization::service::insert_test_data().await {
        Ok(()) => Ok(()),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}
