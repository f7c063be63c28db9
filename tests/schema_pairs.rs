use std::collections::HashMap;

use sql_ingest_prep::columns::{enforce_sql_column_names, NormalizeOptions};
use sql_ingest_prep::ddl::{create_table_schema_pairs, SchemaPairOptions};
use sql_ingest_prep::types::{DataSet, DataType, Field, Schema};

fn trades_dataset() -> DataSet {
    DataSet::new(
        Schema::new(vec![
            Field::new("trade_id", DataType::Int64),
            Field::new("symbol", DataType::Utf8),
            Field::new("quantity", DataType::Int32),
            Field::new("price", DataType::Decimal),
            Field::new("executed_at", DataType::Timestamp),
            Field::new("is_short", DataType::Bool),
        ]),
        vec![],
    )
}

#[test]
fn schema_pairs_cover_the_default_type_table() {
    let pairs = create_table_schema_pairs(&trades_dataset(), &SchemaPairOptions::default())
        .unwrap();
    let expected = [
        "    trade_id bigint",
        "    symbol varchar",
        "    quantity integer",
        "    price decimal(38,18)",
        "    executed_at timestamp",
        "    is_short boolean",
    ]
    .join(",\n");
    assert_eq!(pairs, expected);
}

#[test]
fn schema_pairs_splice_into_a_create_table_statement() {
    let pairs = create_table_schema_pairs(&trades_dataset(), &SchemaPairOptions::default())
        .unwrap();
    let ddl = format!("CREATE TABLE trades (\n{pairs}\n)");

    assert!(ddl.starts_with("CREATE TABLE trades (\n    trade_id bigint,\n"));
    assert!(ddl.ends_with("    is_short boolean\n)"));
    // One line per column, each but the last ending with a comma.
    assert_eq!(pairs.lines().count(), 6);
    assert_eq!(pairs.matches(",\n").count(), 5);
    assert!(!pairs.ends_with(','));
}

#[test]
fn typemap_overrides_apply_per_tag() {
    let opts = SchemaPairOptions {
        typemap: HashMap::from([
            ("decimal".to_string(), "decimal(18,4)".to_string()),
            ("timestamp".to_string(), "timestamp(6)".to_string()),
        ]),
        ..Default::default()
    };
    let pairs = create_table_schema_pairs(&trades_dataset(), &opts).unwrap();

    assert!(pairs.contains("    price decimal(18,4)"));
    assert!(pairs.contains("    executed_at timestamp(6)"));
    // Tags without an override keep their defaults.
    assert!(pairs.contains("    trade_id bigint"));
    assert!(pairs.contains("    symbol varchar"));
}

#[test]
fn unmapped_tags_abort_with_no_partial_schema() {
    let ds = DataSet::new(
        Schema::new(vec![
            Field::new("id", DataType::Int64),
            Field::new("location", DataType::Other("geometry".to_string())),
        ]),
        vec![],
    );

    let err = create_table_schema_pairs(&ds, &SchemaPairOptions::default()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "no SQL type mapping for element type tag 'geometry' (column 'location')"
    );
}

#[test]
fn normalize_then_generate_is_the_usual_pipeline() {
    let ds = DataSet::new(
        Schema::new(vec![
            Field::new("First Name", DataType::Utf8),
            Field::new("Age In Years", DataType::Int64),
        ]),
        vec![],
    );

    let ds = enforce_sql_column_names(&ds, &NormalizeOptions::default()).unwrap();
    let pairs = create_table_schema_pairs(&ds, &SchemaPairOptions::default()).unwrap();
    assert_eq!(pairs, "    first_name varchar,\n    age_in_years bigint");
}

#[test]
fn schemas_can_be_loaded_from_json_configuration() {
    let raw = r#"
    {
      "fields": [
        { "name": "id", "data_type": "int64" },
        { "name": "label", "data_type": "utf8" },
        { "name": "region", "data_type": { "other": "geometry" } }
      ]
    }
    "#;
    let schema: Schema = serde_json::from_str(raw).unwrap();
    let ds = DataSet::new(schema, vec![]);

    let opts = SchemaPairOptions {
        typemap: HashMap::from([("geometry".to_string(), "varbinary".to_string())]),
        ..Default::default()
    };
    let pairs = create_table_schema_pairs(&ds, &opts).unwrap();
    assert_eq!(
        pairs,
        "    id bigint,\n    label varchar,\n    region varbinary"
    );
}
