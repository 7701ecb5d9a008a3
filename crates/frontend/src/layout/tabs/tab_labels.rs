use contracts::domain::a001_category::aggregate::Category;
use contracts::domain::a002_client::aggregate::Client;
use contracts::domain::a003_supplier::aggregate::Supplier;
use contracts::domain::a004_vendor::aggregate::Vendor;
use contracts::domain::common::AggregateRoot;

/// Title of the tab for a page key. Aggregate pages take the list name from
/// contracts. Unknown keys fall back to the key itself.
pub fn tab_label_for_key(key: &str) -> &str {
    match key {
        "a001_category" => Category::list_name(),
        "a002_client" => Client::list_name(),
        "a003_supplier" => Supplier::list_name(),
        "a004_vendor" => Vendor::list_name(),
        "a005_sale" => "Gestión de ventas",
        "p900_sales_report" => "Reporte de ventas",
        "p901_expense_report" => "Reporte de salidas",
        _ => key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(tab_label_for_key("a001_category"), "Categorías");
        assert_eq!(tab_label_for_key("p901_expense_report"), "Reporte de salidas");
        assert_eq!(tab_label_for_key("zzz"), "zzz");
    }
}
