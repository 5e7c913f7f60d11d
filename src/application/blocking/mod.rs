//! Blocking execution: each function assembles one statement, runs it on a
//! [`Cursor`](crate::application::ports::Cursor) and shapes the result.

pub mod gene;
pub mod geneset;
pub mod geneset_value;
pub mod monitor;
pub mod ontology;
pub mod project;
pub mod publication;
pub mod search;
pub mod species;
pub mod threshold;
pub mod user;
