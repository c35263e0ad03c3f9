use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::scalar::Scalar;
use crate::storage::{ColumnStore, FrameOptions};

/// Parse JSON into a frame store
///
/// Accepts records (`[{"a": 1}, ..]`), a 2-D array (`[[1, 2], ..]`) or a
/// column map (`{"a": [1, 2], ..}`).
pub fn read_json(source: &str, options: &FrameOptions) -> Result<ColumnStore> {
    let value: Value = serde_json::from_str(source)?;
    match value {
        Value::Array(items) if items.iter().all(Value::is_object) => read_records(items, options),
        Value::Array(items) if items.iter().all(Value::is_array) => {
            let rows = items
                .iter()
                .map(|row| match row {
                    Value::Array(cells) => cells.iter().map(Scalar::from).collect(),
                    _ => Vec::new(),
                })
                .collect();
            ColumnStore::from_rows(rows, options)
        }
        Value::Object(map) => read_column_map(map, options),
        _ => Err(Error::InvalidValue(
            "json must be records, a 2-D array or a column map".to_string(),
        )),
    }
}

fn read_records(items: Vec<Value>, options: &FrameOptions) -> Result<ColumnStore> {
    let records = items
        .into_iter()
        .map(|item| match item {
            Value::Object(map) => map.iter().map(|(k, v)| (k.clone(), Scalar::from(v))).collect(),
            _ => Vec::new(),
        })
        .collect();
    ColumnStore::from_records(records, options)
}

fn read_column_map(map: Map<String, Value>, options: &FrameOptions) -> Result<ColumnStore> {
    let mut names = Vec::with_capacity(map.len());
    let mut columns = Vec::with_capacity(map.len());
    for (name, values) in map {
        match values {
            Value::Array(cells) => columns.push(cells.iter().map(Scalar::from).collect()),
            other => {
                return Err(Error::InvalidValue(format!(
                    "column '{}' must be an array, got {}",
                    name, other
                )))
            }
        }
        names.push(name);
    }
    ColumnStore::from_raw_columns(columns, names, options, false)
}

/// Render a store as a JSON records array; keys follow column order
pub fn write_json(store: &ColumnStore) -> Result<String> {
    let names = store.column_names();
    let records: Vec<Value> = store
        .values()
        .iter()
        .map(|row| {
            let record: Map<String, Value> = names
                .iter()
                .zip(row)
                .map(|(name, v)| (name.clone(), v.to_json()))
                .collect();
            Value::Object(record)
        })
        .collect();
    Ok(serde_json::to_string(&Value::Array(records))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtype::DType;

    #[test]
    fn test_three_layouts_agree() {
        let options = FrameOptions::new();
        let records = read_json(r#"[{"a": 1, "b": "x"}, {"a": 2, "b": "y"}]"#, &options).unwrap();
        let rows = read_json(r#"[[1, "x"], [2, "y"]]"#, &options).unwrap();
        let map = read_json(r#"{"a": [1, 2], "b": ["x", "y"]}"#, &options).unwrap();
        assert_eq!(records.values(), rows.values());
        assert_eq!(records, map);
        assert_eq!(records.dtypes(), vec![DType::Int32, DType::String]);
    }

    #[test]
    fn test_write_keeps_column_order_and_nulls() {
        let store = ColumnStore::from_rows(
            vec![vec![Scalar::Float(1.5), Scalar::Null, Scalar::from("z")]],
            &FrameOptions::new().columns(vec!["z", "a", "m"]),
        )
        .unwrap();
        assert_eq!(write_json(&store).unwrap(), r#"[{"z":1.5,"a":null,"m":"z"}]"#);
    }

    #[test]
    fn test_bad_shapes_rejected() {
        let options = FrameOptions::new();
        assert!(matches!(read_json("42", &options), Err(Error::InvalidValue(_))));
        assert!(matches!(read_json(r#"{"a": [1], "b": [1, 2]}"#, &options), Err(Error::ShapeMismatch { .. })));
        assert!(matches!(read_json("{", &options), Err(Error::Json(_))));
    }
}
