use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a005_sale::aggregate::{Sale, SaleDto};

use crate::domain::a005_sale::service;
use crate::shared::error::{parse_id, ServiceResult};

/// GET /api/sale
pub async fn list_all() -> Result<Json<Vec<Sale>>, StatusCode> {
    match service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list sale: {:#}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/sale/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Sale>, StatusCode> {
    let uuid = uuid::Uuid::parse_str(&id).map_err(|_| StatusCode::BAD_REQUEST)?;
    match service::get_by_id(uuid).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to load sale {}: {:#}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/sale
pub async fn upsert(Json(dto): Json<SaleDto>) -> ServiceResult<Json<Sale>> {
    service::save(dto).await.map(Json)
}

/// DELETE /api/sale/:id
pub async fn delete(Path(id): Path<String>) -> ServiceResult<StatusCode> {
    service::delete(parse_id(&id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}
