//! Expenses are listed by the expense report page; this module only has the form.

pub mod details;
