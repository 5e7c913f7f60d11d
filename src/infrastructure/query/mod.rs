//! SQL statement assembly.
//!
//! Every assembler is a pure function from typed inputs to a [`Statement`]:
//! parameterized SQL text plus the named values it references. Nothing here
//! touches a connection.

pub mod error;
pub mod fields;
pub mod filters;
pub mod pagination;
pub mod restrict;
pub mod search;
pub mod select;
pub mod statement;

pub mod gene;
pub mod geneset;
pub mod geneset_search;
pub mod geneset_value;
pub mod monitor;
pub mod ontology;
pub mod project;
pub mod publication;
pub mod species;
pub mod threshold;
pub mod user;

pub use error::QueryError;
pub use filters::{FilterSpec, Operator, Predicates, RangeFilters};
pub use search::{QueryType, SearchConfig};
pub use select::{Join, JoinKind, SelectQuery};
pub use statement::{Identifier, Params, SqlValue, Statement};
