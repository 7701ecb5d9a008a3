use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a002_client::aggregate::{Client, ClientDto};

use crate::domain::a002_client::service;
use crate::shared::error::{parse_id, ServiceResult};

/// GET /api/client
pub async fn list_all() -> Result<Json<Vec<Client>>, StatusCode> {
    match service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list client: {:#}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/client/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Client>, StatusCode> {
    let uuid = uuid::Uuid::parse_str(&id).map_err(|_| StatusCode::BAD_REQUEST)?;
    match service::get_by_id(uuid).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to load client {}: {:#}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/client
pub async fn upsert(Json(dto): Json<ClientDto>) -> ServiceResult<Json<Client>> {
    service::save(dto).await.map(Json)
}

/// DELETE /api/client/:id
pub async fn delete(Path(id): Path<String>) -> ServiceResult<StatusCode> {
    service::delete(parse_id(&id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}
