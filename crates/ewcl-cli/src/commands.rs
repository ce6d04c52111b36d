pub mod analyze;
pub mod compare;
