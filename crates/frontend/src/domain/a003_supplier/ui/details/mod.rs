pub mod model;
mod view;
mod view_model;

pub use view::SupplierDetails;
pub use view_model::SupplierDetailsViewModel;
