//! Shared types between the dashboard frontend and the REST backend.
//!
//! Everything here compiles both natively and for `wasm32-unknown-unknown`,
//! so validation rules live in one place and run on both sides.

pub mod domain;
pub mod enums;
pub mod projections;
pub mod shared;
pub mod system;
