//! Tab key → page

use crate::domain::a001_category::ui::list::CategoryList;
use crate::domain::a002_client::ui::list::ClientList;
use crate::domain::a003_supplier::ui::list::SupplierList;
use crate::domain::a004_vendor::ui::list::VendorList;
use crate::domain::a005_sale::ui::list::SaleList;
use crate::projections::p900_sales_report::ui::list::SalesReportList;
use crate::projections::p901_expense_report::ui::list::ExpenseReportList;
use crate::system::auth::guard::RequireAdmin;
use leptos::prelude::*;

pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        "a001_category" => view! { <CategoryList /> }.into_any(),
        "a002_client" => view! { <ClientList /> }.into_any(),
        "a003_supplier" => view! { <SupplierList /> }.into_any(),
        "a004_vendor" => view! {
            <RequireAdmin>
                <VendorList />
            </RequireAdmin>
        }
        .into_any(),
        "a005_sale" => view! { <SaleList /> }.into_any(),
        "p900_sales_report" => view! { <SalesReportList /> }.into_any(),
        "p901_expense_report" => view! { <ExpenseReportList /> }.into_any(),
        unknown => {
            log::warn!("Unknown tab key: {}", unknown);
            let key = unknown.to_string();
            view! {
                <div class="empty-state">
                    <h2>"Página no encontrada"</h2>
                    <p>{format!("No existe la sección \"{}\".", key)}</p>
                </div>
            }
            .into_any()
        }
    }
}
