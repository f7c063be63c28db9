//! `sql-ingest-prep` is a small library of data-ingestion conveniences for
//! pipelines that load tabular data into a SQL analytic store.
//!
//! Two independent, stateless utilities:
//!
//! - [`columns::enforce_sql_column_names`]: rewrite the column labels of a
//!   tabular frame into SQL-safe identifiers (lowercase, underscore-separated,
//!   alphanumeric)
//! - [`ddl::create_table_schema_pairs`]: render the `name sql_type` column
//!   list of a `CREATE TABLE` statement from a frame's column names and
//!   element types, via a built-in type-mapping table plus caller overrides
//!
//! Both operate on the in-memory [`types::DataSet`], or on any host tabular
//! type implementing [`types::Tabular`] (enable the `polars` Cargo feature for
//! a `polars::prelude::DataFrame` adapter).
//!
//! ## Quick example
//!
//! ```rust
//! use sql_ingest_prep::columns::{enforce_sql_column_names, NormalizeOptions};
//! use sql_ingest_prep::ddl::{create_table_schema_pairs, SchemaPairOptions};
//! use sql_ingest_prep::types::{DataSet, DataType, Field, Schema, Value};
//!
//! # fn main() -> Result<(), sql_ingest_prep::SchemaError> {
//! let ds = DataSet::new(
//!     Schema::new(vec![
//!         Field::new("First Name", DataType::Utf8),
//!         Field::new("Age In Years", DataType::Int64),
//!     ]),
//!     vec![vec![Value::Utf8("Ada".to_string()), Value::Int64(36)]],
//! );
//!
//! let ds = enforce_sql_column_names(&ds, &NormalizeOptions::default())?;
//! let pairs = create_table_schema_pairs(&ds, &SchemaPairOptions::default())?;
//! assert_eq!(pairs, "    first_name varchar,\n    age_in_years bigint");
//!
//! // Ready to splice into DDL:
//! let ddl = format!("CREATE TABLE people (\n{pairs}\n)");
//! # assert!(ddl.contains("first_name varchar"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Overriding type mappings
//!
//! The generator resolves each column's SQL type from the built-in defaults
//! unless a caller override says otherwise; a tag with no mapping at all is an
//! error rather than a silent `varchar`:
//!
//! ```rust
//! use std::collections::HashMap;
//!
//! use sql_ingest_prep::ddl::{create_table_schema_pairs, SchemaPairOptions};
//! use sql_ingest_prep::types::{DataSet, DataType, Field, Schema};
//!
//! # fn main() -> Result<(), sql_ingest_prep::SchemaError> {
//! let ds = DataSet::new(
//!     Schema::new(vec![Field::new("name", DataType::Utf8)]),
//!     vec![],
//! );
//!
//! let opts = SchemaPairOptions {
//!     typemap: HashMap::from([("string".to_string(), "varchar(128)".to_string())]),
//!     ..Default::default()
//! };
//! assert_eq!(create_table_schema_pairs(&ds, &opts)?, "    name varchar(128)");
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`columns`]: column label normalization and partition column reordering
//! - [`ddl`]: schema-pair generation for `CREATE TABLE`
//! - [`types`]: the abstract tabular data model and the [`types::Tabular`]
//!   adapter boundary
//! - [`adapters`]: host dataframe adapters (feature-gated)
//! - [`error`]: error types
//!
//! ## What this crate does not do
//!
//! It never connects to a database, executes SQL, validates row values, or
//! infers nullability and keys. It also does not deduplicate column names:
//! distinct labels can normalize to the same identifier, and the result is
//! passed through for the caller to resolve.

pub mod adapters;
pub mod columns;
pub mod ddl;
pub mod error;
pub mod types;

pub use error::{SchemaError, SchemaResult};
