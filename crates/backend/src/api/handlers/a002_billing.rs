use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a002_billing::aggregate::{Billing, BillingDto};

use crate::domain::a002_billing;

fn save_error(e: anyhow::Error) -> (StatusCode, String) {
    let message = e.to_string();
    if message.starts_with("Validation failed") {
        (StatusCode::BAD_REQUEST, message)
    } else {
        tracing::error!("Billing save failed: {}", message);
        (StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

/// GET /api/billings
pub async fn list_all() -> Result<Json<Vec<Billing>>, StatusCode> {
    match a002_billing::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list billings: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/billings/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Billing>, StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(StatusCode::BAD_REQUEST),
    };
    match a002_billing::service::get_by_id(uuid).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to load billing {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/billings
pub async fn create(Json(dto): Json<BillingDto>) -> Result<Json<Billing>, (StatusCode, String)> {
    match a002_billing::service::create(dto).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => Err(save_error(e)),
    }
}

/// PUT /api/billings/:id
///
/// Возвращает полную обновленную запись для обновления кеша на клиенте.
pub async fn update_by_id(
    Path(id): Path<String>,
    Json(dto): Json<BillingDto>,
) -> Result<Json<Billing>, (StatusCode, String)> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err((StatusCode::BAD_REQUEST, "Invalid id".to_string())),
    };
    match a002_billing::service::update(uuid, dto).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            if e.to_string() == "Not found" {
                return Err((StatusCode::NOT_FOUND, "Not found".to_string()));
            }
            Err(save_error(e))
        }
    }
}

/// DELETE /api/billings/:id
pub async fn delete_by_id(Path(id): Path<String>) -> Result<StatusCode, StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(StatusCode::BAD_REQUEST),
    };
    match a002_billing::service::delete(uuid).await {
        Ok(true) => Ok(StatusCode::OK),
        Ok(false) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to delete billing {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
