//! Core data model types.
//!
//! The crate operates on an in-memory [`DataSet`] (an ordered list of named,
//! typed columns plus row values), or on any host tabular type adapted through
//! the [`Tabular`] trait.

use serde::{Deserialize, Serialize};

use crate::error::SchemaResult;

/// Logical element type of a column.
///
/// Each variant has a canonical lowercase tag string (see [`DataType::tag`]),
/// which is the key looked up in the SQL type-mapping table. Host element types
/// outside the closed set can be carried as [`DataType::Other`]; their tag is
/// the contained string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    /// 32-bit signed integer.
    Int32,
    /// 64-bit signed integer.
    Int64,
    /// 32-bit unsigned integer.
    UInt32,
    /// 64-bit unsigned integer.
    UInt64,
    /// 32-bit floating point number.
    Float32,
    /// 64-bit floating point number.
    Float64,
    /// Boolean.
    Bool,
    /// UTF-8 string.
    Utf8,
    /// Fixed-point decimal.
    Decimal,
    /// Calendar date.
    Date,
    /// Timestamp.
    Timestamp,
    /// Any element type outside the closed set, identified by its tag.
    Other(String),
}

impl DataType {
    /// Canonical tag string used as the type-mapping key.
    pub fn tag(&self) -> &str {
        match self {
            DataType::Int32 => "int32",
            DataType::Int64 => "int64",
            DataType::UInt32 => "uint32",
            DataType::UInt64 => "uint64",
            DataType::Float32 => "float32",
            DataType::Float64 => "float64",
            DataType::Bool => "bool",
            DataType::Utf8 => "string",
            DataType::Decimal => "decimal",
            DataType::Date => "date",
            DataType::Timestamp => "timestamp",
            DataType::Other(tag) => tag.as_str(),
        }
    }
}

/// A single named, typed column in a [`Schema`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Field/column name.
    pub name: String,
    /// Field element type.
    pub data_type: DataType,
}

impl Field {
    /// Create a new field.
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

/// An ordered list of fields describing the columns of a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// Ordered list of fields.
    pub fields: Vec<Field>,
}

impl Schema {
    /// Create a new schema from fields.
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Iterate field names in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Returns the index of a field by name, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }
}

/// A single value in a [`DataSet`] row.
///
/// This crate never interprets row values; it only moves them along with their
/// column when columns are reordered. Richer logical types (decimal, temporal)
/// are conventionally carried as their textual or integer representation.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Missing/empty value.
    Null,
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit float.
    Float64(f64),
    /// Boolean.
    Bool(bool),
    /// UTF-8 string.
    Utf8(String),
}

/// In-memory tabular dataset.
///
/// Rows are stored as `Vec<Vec<Value>>` in the same order as the [`Schema`]
/// fields. The dataset is owned by the caller; operations in this crate either
/// return a transformed copy or mutate the labels/column order they are
/// explicitly handed.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSet {
    /// Schema describing row shape.
    pub schema: Schema,
    /// Row-major value storage.
    pub rows: Vec<Vec<Value>>,
}

impl DataSet {
    /// Create a dataset from schema and rows.
    pub fn new(schema: Schema, rows: Vec<Vec<Value>>) -> Self {
        Self { schema, rows }
    }

    /// Number of rows in the dataset.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Capability interface adapting a host tabular type into the abstract dataset
/// model used by this crate.
///
/// Implementations expose column labels and element-type tags in column order,
/// and apply label renames / column reorders back onto the host representation.
/// [`DataSet`] implements it natively; the `polars` Cargo feature adds an
/// implementation for `polars::prelude::DataFrame`.
pub trait Tabular {
    /// Column labels, in column order.
    fn column_names(&self) -> Vec<String>;

    /// Element-type tags, in the same order as [`Tabular::column_names`].
    fn column_type_tags(&self) -> Vec<String>;

    /// Replace all column labels. `names` carries one entry per existing
    /// column, in column order.
    fn rename_columns(&mut self, names: &[String]) -> SchemaResult<()>;

    /// Reorder columns to `order`, a permutation of `0..column_count` given as
    /// source indexes. Row values move with their column.
    fn reorder_columns(&mut self, order: &[usize]) -> SchemaResult<()>;
}

impl Tabular for DataSet {
    fn column_names(&self) -> Vec<String> {
        self.schema.fields.iter().map(|f| f.name.clone()).collect()
    }

    fn column_type_tags(&self) -> Vec<String> {
        self.schema
            .fields
            .iter()
            .map(|f| f.data_type.tag().to_owned())
            .collect()
    }

    fn rename_columns(&mut self, names: &[String]) -> SchemaResult<()> {
        assert!(
            names.len() == self.schema.fields.len(),
            "rename length {} does not match column count {}",
            names.len(),
            self.schema.fields.len()
        );
        for (field, name) in self.schema.fields.iter_mut().zip(names) {
            field.name = name.clone();
        }
        Ok(())
    }

    fn reorder_columns(&mut self, order: &[usize]) -> SchemaResult<()> {
        assert!(
            order.len() == self.schema.fields.len(),
            "reorder length {} does not match column count {}",
            order.len(),
            self.schema.fields.len()
        );
        self.schema.fields = order
            .iter()
            .map(|&i| self.schema.fields[i].clone())
            .collect();
        for row in &mut self.rows {
            *row = order.iter().map(|&i| row[i].clone()).collect();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{DataSet, DataType, Field, Schema, Tabular, Value};

    fn sample_dataset() -> DataSet {
        let schema = Schema::new(vec![
            Field::new("id", DataType::Int64),
            Field::new("name", DataType::Utf8),
            Field::new("balance", DataType::Decimal),
        ]);

        let rows = vec![
            vec![
                Value::Int64(1),
                Value::Utf8("a".to_string()),
                Value::Utf8("10.50".to_string()),
            ],
            vec![
                Value::Int64(2),
                Value::Utf8("b".to_string()),
                Value::Utf8("0.25".to_string()),
            ],
        ];

        DataSet::new(schema, rows)
    }

    #[test]
    fn tags_cover_closed_and_extensible_types() {
        assert_eq!(DataType::Int64.tag(), "int64");
        assert_eq!(DataType::Utf8.tag(), "string");
        assert_eq!(DataType::Other("geometry".to_string()).tag(), "geometry");
    }

    #[test]
    fn dataset_exposes_names_and_tags_in_column_order() {
        let ds = sample_dataset();
        assert_eq!(ds.column_names(), vec!["id", "name", "balance"]);
        assert_eq!(ds.column_type_tags(), vec!["int64", "string", "decimal"]);
    }

    #[test]
    fn reorder_columns_moves_rows_with_their_column() {
        let mut ds = sample_dataset();
        ds.reorder_columns(&[2, 0, 1]).unwrap();

        assert_eq!(ds.column_names(), vec!["balance", "id", "name"]);
        assert_eq!(
            ds.rows[0],
            vec![
                Value::Utf8("10.50".to_string()),
                Value::Int64(1),
                Value::Utf8("a".to_string()),
            ]
        );
    }

    #[test]
    fn schema_round_trips_through_json() {
        let schema = sample_dataset().schema;
        let encoded = serde_json::to_string(&schema).unwrap();
        let decoded: Schema = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, schema);
    }
}
