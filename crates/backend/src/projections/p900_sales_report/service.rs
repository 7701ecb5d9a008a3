use crate::domain::a005_sale::repository as sale_repository;
use contracts::projections::p900_sales_report::dto::{SalesReportRequest, SalesReportResponse};

/// Sales report: the date range narrows the query, name and status filters
/// run over the loaded rows.
pub async fn build_report(request: &SalesReportRequest) -> anyhow::Result<SalesReportResponse> {
    let sales = sale_repository::list_by_date_range(
        request.date_from.as_deref(),
        request.date_to.as_deref(),
    )
    .await?;

    let response = SalesReportResponse::build(request, &sales);
    tracing::debug!(
        "Sales report: {} of {} rows, total {}",
        response.items.len(),
        sales.len(),
        response.summary.total_amount
    );
    Ok(response)
}
