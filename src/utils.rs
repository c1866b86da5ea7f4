pub mod date;
pub mod log;
