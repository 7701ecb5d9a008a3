use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Failures of the write operations of the domain services.
///
/// Messages are user facing (Spanish) and end up in the error toast.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("Registro no encontrado ({0})")]
    NotFound(&'static str),
    /// The record exists but the operation is refused by a business rule
    #[error("{0}")]
    Conflict(String),
    #[error("No tiene permisos para esta operación")]
    Forbidden,
    #[error("error interno: {0}")]
    Internal(#[from] anyhow::Error),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self {
        ServiceError::Internal(e.into())
    }
}

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Conflict(_) => StatusCode::CONFLICT,
            ServiceError::Forbidden => StatusCode::FORBIDDEN,
            ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            ServiceError::Internal(e) => {
                tracing::error!("{:#}", e);
                "Error interno del servidor".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// A business code already held by another record, deleted ones included
pub fn code_taken(code: &str) -> ServiceError {
    ServiceError::Conflict(format!("El código {} ya está en uso", code))
}

/// Parse a path/DTO id, mapping garbage to a 400
pub fn parse_id(id: &str) -> ServiceResult<uuid::Uuid> {
    uuid::Uuid::parse_str(id.trim())
        .map_err(|_| ServiceError::Validation(format!("Identificador inválido: {}", id)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ServiceError::Validation("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServiceError::NotFound("Cliente").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ServiceError::Conflict("x".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(ServiceError::Forbidden.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            ServiceError::from(anyhow::anyhow!("boom")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ServiceError::NotFound("Cliente").to_string(),
            "Registro no encontrado (Cliente)"
        );
        assert_eq!(
            code_taken("CAT-0001").to_string(),
            "El código CAT-0001 ya está en uso"
        );
        assert!(parse_id("nope").is_err());
        assert!(parse_id(&uuid::Uuid::new_v4().to_string()).is_ok());
    }
}
