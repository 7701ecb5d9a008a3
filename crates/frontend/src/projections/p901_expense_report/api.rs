use contracts::enums::ExpenseCategory;
use contracts::projections::p901_expense_report::dto::{
    ExpenseReportRequest, ExpenseReportResponse,
};

use crate::shared::api_utils::get_json;

fn non_blank(value: String) -> Option<String> {
    Some(value.trim().to_string()).filter(|v| !v.is_empty())
}

pub fn build_request(
    date_from: String,
    date_to: String,
    category_code: &str,
    concept: String,
) -> ExpenseReportRequest {
    ExpenseReportRequest {
        date_from: non_blank(date_from),
        date_to: non_blank(date_to),
        category: ExpenseCategory::from_code(category_code),
        concept: non_blank(concept),
    }
}

pub async fn fetch_report(request: &ExpenseReportRequest) -> Result<ExpenseReportResponse, String> {
    let query = serde_qs::to_string(request).map_err(|e| e.to_string())?;
    get_json(&format!("/api/reports/expenses?{}", query)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_request() {
        let request = build_request(String::new(), "2024-03-31".into(), "servicios", " ".into());
        assert_eq!(request.date_from, None);
        assert_eq!(request.date_to.as_deref(), Some("2024-03-31"));
        assert_eq!(request.category, Some(ExpenseCategory::Services));
        assert_eq!(request.concept, None);

        let query = serde_qs::to_string(&request).unwrap();
        assert!(query.contains("category=servicios"));
    }
}
