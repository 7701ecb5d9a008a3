pub mod form_field;
pub mod money_cell;
pub mod page_header;
pub mod stat_card;
pub mod status_badge;

pub use form_field::{SelectField, TextAreaField, TextField};
pub use money_cell::TableCellMoney;
pub use page_header::PageHeader;
pub use stat_card::StatCard;
pub use status_badge::StatusBadge;
