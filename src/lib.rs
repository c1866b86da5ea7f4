//! Circulation decision engine: due-date calculation, renewal validation
//! with aggregated failures, and item status resolution for a library
//! circulation system. Persistence and transport live outside this crate.

pub mod core;
pub mod items;
pub mod loans;
pub mod policy;
pub mod requests;
pub mod scheduler;
pub mod utils;
