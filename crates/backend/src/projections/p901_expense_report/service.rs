use crate::domain::a006_expense::repository as expense_repository;
use contracts::projections::p901_expense_report::dto::{
    ExpenseReportRequest, ExpenseReportResponse,
};

pub async fn build_report(
    request: &ExpenseReportRequest,
) -> anyhow::Result<ExpenseReportResponse> {
    let expenses = expense_repository::list_by_date_range(
        request.date_from.as_deref(),
        request.date_to.as_deref(),
    )
    .await?;

    Ok(ExpenseReportResponse::build(request, &expenses))
}
