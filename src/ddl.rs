//! Schema-pair generation for `CREATE TABLE` statements.
//!
//! Maps a frame's column element types to SQL type names through a
//! lookup-table: built-in defaults (Trino-flavored), optionally overlaid by
//! caller overrides per element-type tag ([`SchemaPairOptions::typemap`]) or
//! per column name ([`SchemaPairOptions::colmap`]).

use std::collections::HashMap;

use crate::error::{SchemaError, SchemaResult};
use crate::types::Tabular;

/// Built-in mapping from element-type tag to SQL type name.
///
/// Returns `None` for unrecognized tags; [`create_table_schema_pairs`] treats
/// that as an error rather than guessing a storage type.
///
/// ```
/// use sql_ingest_prep::ddl::default_sql_type;
///
/// assert_eq!(default_sql_type("int64"), Some("bigint"));
/// assert_eq!(default_sql_type("string"), Some("varchar"));
/// assert_eq!(default_sql_type("geometry"), None);
/// ```
pub fn default_sql_type(tag: &str) -> Option<&'static str> {
    match tag {
        "int8" | "int16" | "uint8" => Some("smallint"),
        "int32" | "uint16" => Some("integer"),
        "int64" | "uint32" | "uint64" => Some("bigint"),
        "float32" => Some("real"),
        "float64" => Some("double"),
        "bool" | "boolean" => Some("boolean"),
        "string" | "object" | "category" => Some("varchar"),
        "decimal" => Some("decimal(38,18)"),
        "date" => Some("date"),
        "time" => Some("time"),
        "timestamp" => Some("timestamp"),
        "timestamptz" => Some("timestamp with time zone"),
        _ => None,
    }
}

/// Options controlling schema-pair generation.
///
/// Use [`Default`] for common cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaPairOptions {
    /// Overrides from element-type tag to SQL type name. An entry takes
    /// precedence over the built-in default for the same tag; tags without an
    /// entry keep their default mapping.
    pub typemap: HashMap<String, String>,
    /// Per-column SQL type overrides by column name. A colmap entry wins over
    /// both `typemap` and the defaults, and does not require the column's tag
    /// to be mappable at all.
    pub colmap: HashMap<String, String>,
    /// Spaces of indent before each column line.
    pub indent: usize,
}

impl Default for SchemaPairOptions {
    fn default() -> Self {
        Self {
            typemap: HashMap::new(),
            colmap: HashMap::new(),
            indent: 4,
        }
    }
}

/// Render the column/type pairs of a `CREATE TABLE` statement body.
///
/// For each column of `frame`, in column order, the SQL type is resolved as:
/// the [`SchemaPairOptions::colmap`] entry for the column name, else the
/// [`SchemaPairOptions::typemap`] entry for the column's element-type tag, else
/// the built-in default for the tag. A tag with no mapping fails with
/// [`SchemaError::UnmappedType`] and no partial output is returned; silently
/// mismapping a storage type would corrupt downstream DDL.
///
/// Lines are rendered as `"{indent}{name} {sql_type}"`, joined by `",\n"` with
/// no trailing comma, ready to splice into `CREATE TABLE (...)`:
///
/// ```
/// use sql_ingest_prep::ddl::{create_table_schema_pairs, SchemaPairOptions};
/// use sql_ingest_prep::types::{DataSet, DataType, Field, Schema};
///
/// # fn main() -> Result<(), sql_ingest_prep::SchemaError> {
/// let ds = DataSet::new(
///     Schema::new(vec![
///         Field::new("first_name", DataType::Utf8),
///         Field::new("age_in_years", DataType::Int64),
///     ]),
///     vec![],
/// );
///
/// let pairs = create_table_schema_pairs(&ds, &SchemaPairOptions::default())?;
/// assert_eq!(pairs, "    first_name varchar,\n    age_in_years bigint");
///
/// let ddl = format!("CREATE TABLE people (\n{pairs}\n)");
/// # assert!(ddl.ends_with("age_in_years bigint\n)"));
/// # Ok(())
/// # }
/// ```
///
/// Column labels are spliced as-is; run
/// [`enforce_sql_column_names`](crate::columns::enforce_sql_column_names)
/// first if they may not be SQL-safe. The frame is never mutated.
pub fn create_table_schema_pairs<T: Tabular>(
    frame: &T,
    opts: &SchemaPairOptions,
) -> SchemaResult<String> {
    let names = frame.column_names();
    let tags = frame.column_type_tags();
    let indent = " ".repeat(opts.indent);

    let mut lines = Vec::with_capacity(names.len());
    for (name, tag) in names.iter().zip(&tags) {
        let sql_type = match opts.colmap.get(name) {
            Some(mapped) => mapped.as_str(),
            None => opts
                .typemap
                .get(tag)
                .map(String::as_str)
                .or_else(|| default_sql_type(tag))
                .ok_or_else(|| SchemaError::UnmappedType {
                    column: name.clone(),
                    tag: tag.clone(),
                })?,
        };
        lines.push(format!("{indent}{name} {sql_type}"));
    }
    Ok(lines.join(",\n"))
}
