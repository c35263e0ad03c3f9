use std::io::Read;

use csv::{ReaderBuilder, Writer};
use log::debug;

use crate::error::{Error, Result};
use crate::scalar::Scalar;
use crate::storage::{ColumnStore, FrameOptions};

/// Parse one CSV field; empty fields are missing
fn parse_field(field: &str) -> Scalar {
    if field.is_empty() {
        return Scalar::Null;
    }
    if let Ok(v) = field.parse::<i64>() {
        return Scalar::Int(v);
    }
    if let Ok(v) = field.parse::<f64>() {
        return Scalar::Float(v);
    }
    match field {
        "true" | "True" | "TRUE" => Scalar::Bool(true),
        "false" | "False" | "FALSE" => Scalar::Bool(false),
        _ => Scalar::Str(field.to_string()),
    }
}

/// Read CSV with a header row into a frame store
///
/// Short rows are padded with missing values; a row wider than the header
/// is a shape error.
pub fn read_csv<R: Read>(reader: R, options: &FrameOptions) -> Result<ColumnStore> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.to_string()).collect();
    let mut columns: Vec<Vec<Scalar>> = vec![Vec::new(); headers.len()];
    for result in rdr.records() {
        let record = result?;
        if record.len() > headers.len() {
            return Err(Error::shape(headers.len(), record.len()));
        }
        for (i, column) in columns.iter_mut().enumerate() {
            column.push(record.get(i).map(parse_field).unwrap_or(Scalar::Null));
        }
    }
    debug!("read {} csv column(s)", headers.len());
    ColumnStore::from_raw_columns(columns, headers, options, false)
}

/// Render a store as CSV text: a header of column names, then every row in
/// index order with missing values left empty
pub fn write_csv(store: &ColumnStore) -> Result<String> {
    let mut wtr = Writer::from_writer(Vec::new());
    wtr.write_record(store.column_names())?;
    for row in store.values() {
        let fields: Vec<String> = row
            .iter()
            .map(|v| if v.is_missing() { String::new() } else { v.to_string() })
            .collect();
        wtr.write_record(&fields)?;
    }
    let bytes = wtr.into_inner().map_err(|e| Error::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| Error::InvalidValue(format!("csv output is not utf-8: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtype::DType;
    use crate::scalars;

    #[test]
    fn test_read_typed_columns() {
        let source = "a,b,c,d\n1,2.5,x,true\n2,,y,false\n";
        let store = read_csv(source.as_bytes(), &FrameOptions::new()).unwrap();
        assert_eq!(store.column_names(), &["a", "b", "c", "d"]);
        assert_eq!(store.dtypes(), vec![DType::Int32, DType::Float32, DType::String, DType::Boolean]);
        assert_eq!(store.values()[1][1], Scalar::Null);
    }

    #[test]
    fn test_short_rows_padded() {
        let store = read_csv("a,b\n1\n".as_bytes(), &FrameOptions::new()).unwrap();
        assert_eq!(store.values(), vec![vec![Scalar::Int(1), Scalar::Null]]);
        assert!(read_csv("a\n1,2\n".as_bytes(), &FrameOptions::new()).is_err());
    }

    #[test]
    fn test_write_leaves_missing_empty() {
        let store = ColumnStore::from_rows(
            vec![scalars![1, "x"], vec![Scalar::Null, Scalar::from("y")]],
            &FrameOptions::new(),
        )
        .unwrap();
        assert_eq!(write_csv(&store).unwrap(), "0,1\n1,x\n,y\n");
    }
}
