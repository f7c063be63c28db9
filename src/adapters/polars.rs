//! [`Tabular`] adapter for `polars::prelude::DataFrame` (feature-gated behind
//! `polars`).
//!
//! Element types are adapted to this crate's tag strings via
//! [`tag_for_dtype`]. Dtypes the tag set does not model keep their polars
//! display name as the tag, which surfaces as
//! [`crate::error::SchemaError::UnmappedType`] during schema-pair generation
//! unless a caller typemap covers them.
//!
//! Unlike the core [`crate::types::DataSet`] path, renames through this
//! adapter can fail: polars rejects duplicate column names, so normalizing two
//! labels down to the same identifier is reported as an error here instead of
//! passing through.

use polars::prelude::{DataFrame, DataType};

use crate::error::SchemaResult;
use crate::types::Tabular;

/// Map a polars dtype to this crate's element-type tag.
pub fn tag_for_dtype(dtype: &DataType) -> String {
    match dtype {
        DataType::Int8 => "int8".to_string(),
        DataType::Int16 => "int16".to_string(),
        DataType::Int32 => "int32".to_string(),
        DataType::Int64 => "int64".to_string(),
        DataType::UInt8 => "uint8".to_string(),
        DataType::UInt16 => "uint16".to_string(),
        DataType::UInt32 => "uint32".to_string(),
        DataType::UInt64 => "uint64".to_string(),
        DataType::Float32 => "float32".to_string(),
        DataType::Float64 => "float64".to_string(),
        DataType::Boolean => "bool".to_string(),
        DataType::String => "string".to_string(),
        DataType::Decimal(_, _) => "decimal".to_string(),
        DataType::Date => "date".to_string(),
        DataType::Time => "time".to_string(),
        DataType::Datetime(_, None) => "timestamp".to_string(),
        DataType::Datetime(_, Some(_)) => "timestamptz".to_string(),
        other => other.to_string(),
    }
}

impl Tabular for DataFrame {
    fn column_names(&self) -> Vec<String> {
        self.get_column_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect()
    }

    fn column_type_tags(&self) -> Vec<String> {
        self.columns()
            .iter()
            .map(|column| tag_for_dtype(column.dtype()))
            .collect()
    }

    fn rename_columns(&mut self, names: &[String]) -> SchemaResult<()> {
        self.set_column_names(names)?;
        Ok(())
    }

    fn reorder_columns(&mut self, order: &[usize]) -> SchemaResult<()> {
        let names: Vec<String> = self
            .get_column_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect();
        let reordered = self.select(order.iter().map(|&i| names[i].as_str()))?;
        *self = reordered;
        Ok(())
    }
}
