use axum::{extract::Query, http::StatusCode, Json};
use contracts::projections::p900_sales_report::dto::{SalesReportRequest, SalesReportResponse};

use crate::projections::p900_sales_report::service;

/// GET /api/reports/sales?date_from&date_to&vendor_name&client_name&status
pub async fn report(
    Query(request): Query<SalesReportRequest>,
) -> Result<Json<SalesReportResponse>, StatusCode> {
    match service::build_report(&request).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            tracing::error!("Failed to build sales report: {:#}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
