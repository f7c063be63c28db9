use thiserror::Error;

/// Convenience result type for schema-preparation operations.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Error type returned by schema-preparation functions.
///
/// Errors propagate directly to the caller; nothing is caught or retried
/// internally, and a failing operation returns no partial output.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A column's element-type tag has no entry in the effective type-mapping
    /// table (built-in defaults plus caller overrides).
    #[error("no SQL type mapping for element type tag '{tag}' (column '{column}')")]
    UnmappedType { column: String, tag: String },

    /// A named column does not exist in the frame.
    #[error("unknown column '{column}'")]
    UnknownColumn { column: String },

    #[cfg(feature = "polars")]
    /// Error surfaced by the polars dataframe adapter (feature-gated behind
    /// `polars`).
    #[error("polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),
}
