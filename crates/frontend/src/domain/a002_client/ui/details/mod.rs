pub mod model;
mod view;
mod view_model;

pub use view::ClientDetails;
pub use view_model::ClientDetailsViewModel;
