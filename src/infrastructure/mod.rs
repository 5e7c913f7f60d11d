pub mod persistence;
pub mod query;
