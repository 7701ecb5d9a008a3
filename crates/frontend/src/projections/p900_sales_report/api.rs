use contracts::enums::SaleStatus;
use contracts::projections::p900_sales_report::dto::{SalesReportRequest, SalesReportResponse};

use crate::shared::api_utils::get_json;

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Request from the filter inputs; blank inputs are left out
pub fn build_request(
    date_from: String,
    date_to: String,
    vendor_name: String,
    client_name: String,
    status_code: &str,
) -> SalesReportRequest {
    SalesReportRequest {
        date_from: non_blank(date_from),
        date_to: non_blank(date_to),
        vendor_name: non_blank(vendor_name),
        client_name: non_blank(client_name),
        status: SaleStatus::from_code(status_code),
    }
}

pub fn report_query(request: &SalesReportRequest) -> Result<String, String> {
    serde_qs::to_string(request).map_err(|e| e.to_string())
}

pub async fn fetch_report(request: &SalesReportRequest) -> Result<SalesReportResponse, String> {
    let query = report_query(request)?;
    get_json(&format!("/api/reports/sales?{}", query)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_filters_are_left_out() {
        let request = build_request(
            "2024-03-01".into(),
            "  ".into(),
            String::new(),
            " maría ".into(),
            "",
        );
        assert_eq!(request.date_to, None);
        assert_eq!(request.client_name.as_deref(), Some("maría"));
        assert_eq!(request.status, None);
    }

    #[test]
    fn test_query_uses_codes() {
        let request = build_request(
            "2024-03-01".into(),
            "2024-03-05".into(),
            String::new(),
            String::new(),
            "completada",
        );
        let query = report_query(&request).unwrap();
        assert!(query.contains("date_from=2024-03-01"));
        assert!(query.contains("date_to=2024-03-05"));
        assert!(query.contains("status=completada"));
        assert!(!query.contains("vendor_name=x"));
    }
}
