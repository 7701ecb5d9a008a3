//! Sale form. Client and vendor are typed by name with suggestions from
//! the current master data.

pub mod model;
mod view;
mod view_model;

pub use view::SaleDetails;
pub use view_model::SaleDetailsViewModel;
