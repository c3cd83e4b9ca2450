pub mod schedule;
pub mod json;
