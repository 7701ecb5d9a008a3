pub mod model;
mod view;
mod view_model;

pub use view::VendorDetails;
pub use view_model::VendorDetailsViewModel;
