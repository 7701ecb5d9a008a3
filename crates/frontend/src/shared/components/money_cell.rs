use contracts::shared::money::format_money;
use leptos::prelude::*;
use thaw::*;

/// Right-aligned amount cell: `$ 1.234,50`
#[component]
pub fn TableCellMoney(
    value: f64,
    #[prop(optional)]
    bold: bool,
) -> impl IntoView {
    let style = if bold {
        "text-align: right; font-weight: 600;"
    } else {
        "text-align: right;"
    };

    view! {
        <TableCell>
            <TableCellLayout truncate=true>
                <div style=style>{format!("$ {}", format_money(value))}</div>
            </TableCellLayout>
        </TableCell>
    }
}
