use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a001_category::aggregate::{Category, CategoryDto};

use crate::domain::a001_category::service;
use crate::shared::error::{parse_id, ServiceResult};

/// GET /api/category
pub async fn list_all() -> Result<Json<Vec<Category>>, StatusCode> {
    match service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list category: {:#}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/category/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Category>, StatusCode> {
    let uuid = uuid::Uuid::parse_str(&id).map_err(|_| StatusCode::BAD_REQUEST)?;
    match service::get_by_id(uuid).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to load category {}: {:#}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/category
pub async fn upsert(Json(dto): Json<CategoryDto>) -> ServiceResult<Json<Category>> {
    service::save(dto).await.map(Json)
}

/// DELETE /api/category/:id
///
/// 409 while products are still filed under the category
pub async fn delete(Path(id): Path<String>) -> ServiceResult<StatusCode> {
    service::delete(parse_id(&id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}
