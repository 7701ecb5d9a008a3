pub mod p900_sales_report;
pub mod p901_expense_report;
