//! # geneweaver_db - GeneWeaver database access
//!
//! Parameterized SQL assembly for the GeneWeaver gene-set database, with thin
//! execution wrappers over blocking and async cursors.
//!
//! ## Architecture Layers
//!
//! - **Domain**: Wire-coded enums, score thresholds, domain errors
//! - **Infrastructure**: Statement assembly (`query`) and the sqlx adapters (`persistence`)
//! - **Application**: Cursor ports and the `blocking` / `aio` execution wrappers
//!
//! Assemblers never touch a connection: each returns a [`Statement`] holding SQL
//! with `%(name)s` placeholders and exactly the parameters those placeholders name.
//!
//! ## Example Usage
//!
//! ```no_run
//! use geneweaver_db::application::aio;
//! use geneweaver_db::infrastructure::persistence::{connect, PgCursor};
//! use geneweaver_db::infrastructure::query::geneset_search::GenesetSearch;
//! use geneweaver_db::Config;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = connect(&Config::from_env()).await?;
//! let mut cursor = PgCursor::new(pool);
//! let search = GenesetSearch {
//!     search_text: Some("alcohol preference".into()),
//!     ..GenesetSearch::default()
//! };
//! let rows = aio::search::genesets(&mut cursor, &search).await?;
//! println!("{} genesets", rows.len());
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

// Re-export key types explicitly to avoid ambiguity
pub use application::ports::{AsyncCursor, Cursor, CursorError, Record};
pub use application::{aio, blocking, dto};
pub use config::Config;
pub use domain::errors as domain_errors;
pub use domain::value_objects;
pub use infrastructure::query::{QueryError, SqlValue, Statement};
