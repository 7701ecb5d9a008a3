use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a003_supplier::aggregate::{Supplier, SupplierDto};

use crate::domain::a003_supplier::service;
use crate::shared::error::{parse_id, ServiceResult};

/// GET /api/supplier
pub async fn list_all() -> Result<Json<Vec<Supplier>>, StatusCode> {
    match service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list supplier: {:#}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/supplier/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Supplier>, StatusCode> {
    let uuid = uuid::Uuid::parse_str(&id).map_err(|_| StatusCode::BAD_REQUEST)?;
    match service::get_by_id(uuid).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to load supplier {}: {:#}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/supplier
pub async fn upsert(Json(dto): Json<SupplierDto>) -> ServiceResult<Json<Supplier>> {
    service::save(dto).await.map(Json)
}

/// DELETE /api/supplier/:id
pub async fn delete(Path(id): Path<String>) -> ServiceResult<StatusCode> {
    service::delete(parse_id(&id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}
