use ndframe::io::{read_csv, read_json, write_json};
use ndframe::{scalars, DType, DataFrame, Error, FrameOptions, NDFrame, Scalar};
use tempfile::tempdir;

fn mixed() -> DataFrame {
    DataFrame::from_columns(vec![
        ("id", scalars![1, 2, 3]),
        ("price", vec![Scalar::Float(1.5), Scalar::Null, Scalar::Float(0.25)]),
        ("label", scalars!["a", "b", "c"]),
        ("ok", scalars![true, false, true]),
    ])
    .unwrap()
}

#[test]
fn test_json_round_trip() {
    let df = mixed();
    let text = df.to_json().unwrap();
    let back = DataFrame::from_json(&text).unwrap();
    assert_eq!(back, df);
    assert_eq!(back.dtypes(), vec![DType::Int32, DType::Float32, DType::String, DType::Boolean]);
}

#[test]
fn test_json_integral_floats_stay_float() {
    let df = DataFrame::from_columns(vec![("x", scalars![1.0, 2.0])]).unwrap();
    let back = DataFrame::from_json(&df.to_json().unwrap()).unwrap();
    assert_eq!(back.dtypes(), vec![DType::Float32]);
}

#[test]
fn test_json_column_map_and_rows() {
    let map = DataFrame::from_json(r#"{"b": [1, 2], "a": ["x", null]}"#).unwrap();
    assert_eq!(map.column_names(), &["b", "a"]);
    assert_eq!(map.column("a").unwrap().values(), vec![Scalar::from("x"), Scalar::Null]);

    let rows = DataFrame::from_json(r#"[[1, "a", true], [2, "b", false]]"#).unwrap();
    assert_eq!(rows.shape(), vec![2, 3]);
    assert_eq!(rows.dtypes(), vec![DType::Int32, DType::String, DType::Boolean]);

    assert!(matches!(DataFrame::from_json("\"text\""), Err(Error::InvalidValue(_))));
}

#[test]
fn test_json_with_options() {
    let store = read_json(r#"[{"a": 1}, {"a": 2}]"#, &FrameOptions::new().index(vec!["x", "y"])).unwrap();
    assert_eq!(store.index().labels()[1].to_string(), "y");
    assert_eq!(write_json(&store).unwrap(), r#"[{"a":1},{"a":2}]"#);
}

#[test]
fn test_csv_text() {
    let df = mixed();
    let text = df.to_csv().unwrap();
    assert_eq!(text, "id,price,label,ok\n1,1.5,a,true\n2,,b,false\n3,0.25,c,true\n");

    let back = DataFrame::from_csv_str(&text).unwrap();
    assert_eq!(back.values(), df.values());
    assert_eq!(back.dtypes(), df.dtypes());
}

#[test]
fn test_csv_file_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("frame.csv");

    let df = mixed();
    df.to_csv_file(&path).unwrap();
    let back = DataFrame::from_csv_file(&path).unwrap();
    assert_eq!(back, df);
}

#[test]
fn test_csv_short_and_wide_rows() {
    let store = read_csv("a,b\n1\n2,3\n".as_bytes(), &FrameOptions::new()).unwrap();
    assert_eq!(store.values(), vec![vec![Scalar::Int(1), Scalar::Null], scalars![2, 3]]);

    let err = read_csv("a,b\n1,2,3\n".as_bytes(), &FrameOptions::new()).unwrap_err();
    assert!(matches!(err, Error::ShapeMismatch { .. }));
}

#[test]
fn test_csv_missing_file() {
    let dir = tempdir().unwrap();
    let err = DataFrame::from_csv_file(dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_series_output() {
    let s = DataFrame::from_rows(vec![scalars![1], scalars![2]]).unwrap().column("0").unwrap();
    assert_eq!(s.to_json().unwrap(), r#"[{"0":1},{"0":2}]"#);
    assert_eq!(s.to_csv().unwrap(), "0\n1\n2\n");
}
