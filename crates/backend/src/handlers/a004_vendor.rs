use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a004_vendor::aggregate::{Vendor, VendorDto};

use crate::domain::a004_vendor::service;
use crate::shared::error::{parse_id, ServiceError, ServiceResult};
use crate::system::auth::extractor::CurrentUser;

/// GET /api/vendor
///
/// Readable by every signed-in user, the sales form lists vendors.
pub async fn list_all() -> Result<Json<Vec<Vendor>>, StatusCode> {
    match service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list vendor: {:#}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/vendor/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Vendor>, StatusCode> {
    let uuid = uuid::Uuid::parse_str(&id).map_err(|_| StatusCode::BAD_REQUEST)?;
    match service::get_by_id(uuid).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to load vendor {}: {:#}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/vendor (administrators only)
pub async fn upsert(
    CurrentUser(claims): CurrentUser,
    Json(dto): Json<VendorDto>,
) -> ServiceResult<Json<Vendor>> {
    if !claims.is_admin {
        return Err(ServiceError::Forbidden);
    }
    service::save(dto).await.map(Json)
}

/// DELETE /api/vendor/:id (administrators only)
pub async fn delete(
    CurrentUser(claims): CurrentUser,
    Path(id): Path<String>,
) -> ServiceResult<StatusCode> {
    if !claims.is_admin {
        return Err(ServiceError::Forbidden);
    }
    service::delete(parse_id(&id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}
