//! Column label normalization for SQL identifiers.
//!
//! Arbitrary column labels (mixed case, accents, whitespace, punctuation) are
//! reduced to SQL-safe identifiers: lowercase ASCII letters, digits, and
//! underscores, with no leading or trailing underscore. The transformation is
//! pure, deterministic, and idempotent.
//!
//! - [`normalize_label`]: transform a single label
//! - [`enforce_sql_column_names`]: transform every label of a frame (copying)
//! - [`enforce_sql_column_names_in_place`]: same, mutating the frame directly
//! - [`enforce_partition_column_order`]: move partition columns to the end of
//!   the column order

use unicode_normalization::UnicodeNormalization;

use crate::error::{SchemaError, SchemaResult};
use crate::types::Tabular;

/// Word substitutions applied when [`NormalizeOptions::abbreviate`] is set.
const ABBREVIATIONS: &[(&str, &str)] = &[
    ("average", "avg"),
    ("maximum", "max"),
    ("minimum", "min"),
    ("absolute", "abs"),
    ("source", "src"),
    ("distribution", "dist"),
];

/// Options controlling label normalization.
///
/// [`Default`] applies the base transformation only. Use
/// [`NormalizeOptions::compliant`] for warehouse-friendly output with
/// abbreviation and length capping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Abbreviate common long words (`average` -> `avg`, `source` -> `src`,
    /// ...) after normalization.
    pub abbreviate: bool,
    /// Truncate normalized labels to at most this many bytes. Truncation never
    /// leaves a trailing underscore.
    pub max_len: Option<usize>,
}

impl NormalizeOptions {
    /// Options matching common warehouse limits: abbreviation on and labels
    /// capped at 63 bytes (a widespread maximum column name length).
    pub fn compliant() -> Self {
        Self {
            abbreviate: true,
            max_len: Some(63),
        }
    }
}

/// Normalize a single column label into a SQL-safe identifier.
///
/// The transformation trims surrounding whitespace, folds Unicode to its
/// closest ASCII equivalent (characters with none are dropped), lowercases,
/// and collapses every run of non-alphanumeric characters into a single
/// underscore, leaving no leading or trailing underscore. It is total over all
/// textual input and idempotent.
///
/// A label with no alphanumeric content normalizes to an empty string, and
/// distinct labels may normalize to the same identifier; guarding against
/// empty or duplicate results is the caller's responsibility.
///
/// ```
/// use sql_ingest_prep::columns::{normalize_label, NormalizeOptions};
///
/// let opts = NormalizeOptions::default();
/// assert_eq!(normalize_label("First Name", &opts), "first_name");
/// assert_eq!(normalize_label("  Prix (€) ", &opts), "prix");
/// assert_eq!(normalize_label("Café", &opts), "cafe");
/// ```
pub fn normalize_label(label: &str, opts: &NormalizeOptions) -> String {
    let mut out = String::with_capacity(label.len());
    let mut pending_sep = false;
    for ch in label.trim().nfkd() {
        if !ch.is_ascii() {
            // Combining marks, symbols, CJK: no ASCII equivalent, dropped.
            continue;
        }
        let ch = ch.to_ascii_lowercase();
        if ch.is_ascii_alphanumeric() {
            if pending_sep && !out.is_empty() {
                out.push('_');
            }
            pending_sep = false;
            out.push(ch);
        } else {
            pending_sep = true;
        }
    }

    if opts.abbreviate {
        for (word, abbrev) in ABBREVIATIONS {
            if out.contains(word) {
                out = out.replace(word, abbrev);
            }
        }
    }

    if let Some(max_len) = opts.max_len {
        if out.len() > max_len {
            // All chars are ASCII at this point, so byte truncation is safe.
            out.truncate(max_len);
            while out.ends_with('_') {
                out.pop();
            }
        }
    }

    out
}

/// Return a copy of `frame` with every column label normalized via
/// [`normalize_label`]. The input frame's labels are left unmodified, and
/// column count and order are preserved.
///
/// Duplicate normalized names are passed through as-is. Note that some host
/// adapters (e.g. polars) reject duplicate column names on rename; the core
/// [`crate::types::DataSet`] path cannot fail.
pub fn enforce_sql_column_names<T>(frame: &T, opts: &NormalizeOptions) -> SchemaResult<T>
where
    T: Tabular + Clone,
{
    let mut out = frame.clone();
    enforce_sql_column_names_in_place(&mut out, opts)?;
    Ok(out)
}

/// Normalize every column label of `frame` in place via [`normalize_label`].
pub fn enforce_sql_column_names_in_place<T: Tabular>(
    frame: &mut T,
    opts: &NormalizeOptions,
) -> SchemaResult<()> {
    let names: Vec<String> = frame
        .column_names()
        .iter()
        .map(|name| normalize_label(name, opts))
        .collect();
    frame.rename_columns(&names)
}

/// Return a copy of `frame` with the named partition columns moved to the end
/// of the column order, in the order given. Row values move with their column;
/// all other columns keep their relative order.
///
/// Fails with [`SchemaError::UnknownColumn`] if any name in
/// `partition_columns` is not a column of `frame`.
pub fn enforce_partition_column_order<T>(frame: &T, partition_columns: &[&str]) -> SchemaResult<T>
where
    T: Tabular + Clone,
{
    let mut out = frame.clone();
    enforce_partition_column_order_in_place(&mut out, partition_columns)?;
    Ok(out)
}

/// Move the named partition columns of `frame` to the end of the column order,
/// in place. See [`enforce_partition_column_order`].
pub fn enforce_partition_column_order_in_place<T: Tabular>(
    frame: &mut T,
    partition_columns: &[&str],
) -> SchemaResult<()> {
    let names = frame.column_names();
    let mut order: Vec<usize> = (0..names.len()).collect();
    for column in partition_columns {
        let pos = order
            .iter()
            .position(|&i| names[i] == *column)
            .ok_or_else(|| SchemaError::UnknownColumn {
                column: (*column).to_owned(),
            })?;
        let idx = order.remove(pos);
        order.push(idx);
    }
    frame.reorder_columns(&order)
}
