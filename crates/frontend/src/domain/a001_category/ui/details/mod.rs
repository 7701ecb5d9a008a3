//! Category create/edit form
//!
//! - model.rs: API calls
//! - view_model.rs: form state and the save command
//! - view.rs: Leptos component

pub mod model;
mod view;
mod view_model;

pub use view::CategoryDetails;
pub use view_model::CategoryDetailsViewModel;
