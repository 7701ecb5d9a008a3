use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a006_expense::aggregate::{Expense, ExpenseDto};

use crate::domain::a006_expense::service;
use crate::shared::error::{parse_id, ServiceResult};

/// GET /api/expense
pub async fn list_all() -> Result<Json<Vec<Expense>>, StatusCode> {
    match service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list expense: {:#}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/expense/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Expense>, StatusCode> {
    let uuid = uuid::Uuid::parse_str(&id).map_err(|_| StatusCode::BAD_REQUEST)?;
    match service::get_by_id(uuid).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to load expense {}: {:#}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/expense
pub async fn upsert(Json(dto): Json<ExpenseDto>) -> ServiceResult<Json<Expense>> {
    service::save(dto).await.map(Json)
}

/// DELETE /api/expense/:id
pub async fn delete(Path(id): Path<String>) -> ServiceResult<StatusCode> {
    service::delete(parse_id(&id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}
