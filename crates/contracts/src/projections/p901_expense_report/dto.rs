use crate::domain::a006_expense::aggregate::Expense;
use crate::enums::ExpenseCategory;
use crate::projections::{contains_ci, date_in_range};
use serde::{Deserialize, Serialize};

/// Filters of the expense report (query string of `GET /api/reports/expenses`)
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ExpenseReportRequest {
    #[serde(default)]
    pub date_from: Option<String>,
    #[serde(default)]
    pub date_to: Option<String>,
    #[serde(default)]
    pub category: Option<ExpenseCategory>,
    #[serde(default)]
    pub concept: Option<String>,
}

impl ExpenseReportRequest {
    pub fn matches(&self, expense: &Expense) -> bool {
        !expense.base.metadata.is_deleted
            && date_in_range(
                &expense.expense_date,
                self.date_from.as_deref(),
                self.date_to.as_deref(),
            )
            && self.category.map_or(true, |c| expense.category == c)
            && contains_ci(&expense.base.description, self.concept.as_deref())
    }

    pub fn apply<'a>(&self, expenses: &'a [Expense]) -> Vec<&'a Expense> {
        expenses.iter().filter(|e| self.matches(e)).collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryTotal {
    pub category: ExpenseCategory,
    pub expense_count: i32,
    pub total_amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ExpenseReportSummary {
    pub expense_count: i32,
    pub total_amount: f64,
    /// Every category, zero rows included
    pub by_category: Vec<CategoryTotal>,
}

impl ExpenseReportSummary {
    pub fn build<'a>(expenses: impl IntoIterator<Item = &'a Expense>) -> Self {
        let mut by_category: Vec<CategoryTotal> = ExpenseCategory::all()
            .into_iter()
            .map(|category| CategoryTotal {
                category,
                expense_count: 0,
                total_amount: 0.0,
            })
            .collect();
        let mut expense_count = 0;
        let mut total_amount = 0.0;

        for e in expenses {
            expense_count += 1;
            total_amount += e.amount;
            if let Some(row) = by_category.iter_mut().find(|r| r.category == e.category) {
                row.expense_count += 1;
                row.total_amount += e.amount;
            }
        }

        Self {
            expense_count,
            total_amount,
            by_category,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseReportResponse {
    pub items: Vec<Expense>,
    pub summary: ExpenseReportSummary,
}

impl ExpenseReportResponse {
    pub fn build(request: &ExpenseReportRequest, expenses: &[Expense]) -> Self {
        let items: Vec<Expense> = request.apply(expenses).into_iter().cloned().collect();
        let summary = ExpenseReportSummary::build(&items);
        Self { items, summary }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a006_expense::aggregate::ExpenseDto;

    fn expense(date: &str, concept: &str, category: ExpenseCategory, amount: f64) -> Expense {
        Expense::new_for_insert(
            "SAL-0000".into(),
            &ExpenseDto {
                expense_date: date.into(),
                concept: concept.into(),
                category,
                amount,
                responsible: "Caja".into(),
                ..Default::default()
            },
        )
    }

    fn sample() -> Vec<Expense> {
        vec![
            expense("2024-03-01", "Pago de energía", ExpenseCategory::Services, 120.0),
            expense("2024-03-05", "Compra de bolsas", ExpenseCategory::Purchases, 40.0),
            expense("2024-03-05", "Pago de agua", ExpenseCategory::Services, 60.0),
            expense("2024-03-31", "Arriendo local", ExpenseCategory::Rent, 900.0),
        ]
    }

    #[test]
    fn test_filter_by_category_and_concept() {
        let items = sample();
        let req = ExpenseReportRequest {
            category: Some(ExpenseCategory::Services),
            ..Default::default()
        };
        assert_eq!(req.apply(&items).len(), 2);

        let req = ExpenseReportRequest {
            concept: Some("PAGO".into()),
            date_to: Some("2024-03-04".into()),
            ..Default::default()
        };
        let found = req.apply(&items);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].base.description, "Pago de energía");
    }

    #[test]
    fn test_deleted_rows_are_skipped() {
        let mut items = sample();
        items[3].base.metadata.is_deleted = true;
        assert_eq!(ExpenseReportRequest::default().apply(&items).len(), 3);
    }

    #[test]
    fn test_summary_per_category() {
        let items = sample();
        let s = ExpenseReportSummary::build(&items);
        assert_eq!(s.expense_count, 4);
        assert_eq!(s.total_amount, 1120.0);
        let services = s
            .by_category
            .iter()
            .find(|r| r.category == ExpenseCategory::Services)
            .unwrap();
        assert_eq!(services.expense_count, 2);
        assert_eq!(services.total_amount, 180.0);
        let sum: f64 = s.by_category.iter().map(|r| r.total_amount).sum();
        assert_eq!(sum, s.total_amount);
    }
}
