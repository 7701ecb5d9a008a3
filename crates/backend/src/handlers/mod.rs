pub mod a001_category;
pub mod a002_client;
pub mod a003_supplier;
pub mod a004_vendor;
pub mod a005_sale;
pub mod a006_expense;
pub mod p900_sales_report;
pub mod p901_expense_report;
