pub mod model;
mod view;
mod view_model;

pub use view::ExpenseDetails;
pub use view_model::ExpenseDetailsViewModel;
