use axum::{extract::Query, http::StatusCode, Json};
use contracts::projections::p901_expense_report::dto::{
    ExpenseReportRequest, ExpenseReportResponse,
};

use crate::projections::p901_expense_report::service;

/// GET /api/reports/expenses?date_from&date_to&category&concept
pub async fn report(
    Query(request): Query<ExpenseReportRequest>,
) -> Result<Json<ExpenseReportResponse>, StatusCode> {
    match service::build_report(&request).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            tracing::error!("Failed to build expense report: {:#}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
