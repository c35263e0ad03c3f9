use ndframe::{scalars, Axis, BinaryOp, DType, DataFrame, Error, FrameOptions, Label, NDFrame, Scalar, Series};

fn scores() -> DataFrame {
    DataFrame::from_columns_with(
        vec![
            ("name", scalars!["ann", "bob", "cid"]),
            ("age", scalars![31, 45, 25]),
            ("score", scalars![1.5, 2.5, 0.5]),
        ],
        FrameOptions::new().index(vec!["r1", "r2", "r3"]),
    )
    .unwrap()
}

#[test]
fn test_dataframe_creation() {
    let df = DataFrame::new();
    assert_eq!(df.ncols(), 0);
    assert_eq!(df.nrows(), 0);
    assert!(df.column_names().is_empty());
}

#[test]
fn test_dataframe_from_mixed_rows() {
    let df = DataFrame::from_rows(vec![scalars![1, "a", true], scalars![2, "b", false]]).unwrap();
    assert_eq!(df.shape(), vec![2, 3]);
    assert_eq!(df.ndim(), 2);
    assert_eq!(df.size(), 6);
    assert_eq!(df.column_names(), &["0", "1", "2"]);
    assert_eq!(df.dtypes(), vec![DType::Int32, DType::String, DType::Boolean]);
    assert_eq!(df.ctypes().unwrap().values(), scalars!["int32", "string", "boolean"]);
}

#[test]
fn test_dataframe_ragged_rows_rejected() {
    let err = DataFrame::from_rows(vec![scalars![1, 2], scalars![3]]).unwrap_err();
    assert!(matches!(err, Error::ShapeMismatch { .. }));
}

#[test]
fn test_dataframe_from_records_unions_keys() {
    let records = vec![
        vec![("a".to_string(), Scalar::Int(1))],
        vec![("a".to_string(), Scalar::Int(2)), ("b".to_string(), Scalar::from("x"))],
    ];
    let df = DataFrame::from_records(records).unwrap();
    assert_eq!(df.column_names(), &["a", "b"]);
    assert_eq!(df.column("b").unwrap().values(), vec![Scalar::Null, Scalar::from("x")]);
}

#[test]
fn test_dataframe_columns() {
    let df = scores();
    let age = df.column("age").unwrap();
    assert_eq!(age.name(), "age");
    assert_eq!(age.index(), df.index());
    assert!(matches!(df.column("height"), Err(Error::LabelNotFound(_))));

    let wider = df.add_column("passed", vec![true, false, true]).unwrap();
    assert_eq!(wider.ncols(), 4);
    assert_eq!(df.ncols(), 3);
    assert!(df.add_column("short", vec![1]).is_err());

    let doubled = df.column("age").unwrap().mul(2).unwrap();
    let replaced = df.add_series("age", &doubled).unwrap();
    assert_eq!(replaced.column("age").unwrap().values(), scalars![62, 90, 50]);
    assert_eq!(replaced.column_names(), df.column_names());
}

#[test]
fn test_dataframe_selection() {
    let df = scores();
    let picked = df.select(&["score", "name"]).unwrap();
    assert_eq!(picked.column_names(), &["score", "name"]);

    let rows = df.loc(&["r3", "r1"]).unwrap();
    assert_eq!(rows.column("name").unwrap().values(), scalars!["cid", "ann"]);
    assert_eq!(df.iloc(&[1]).unwrap().index(), &[Label::from("r2")]);
    assert_eq!(df.head(2).unwrap().nrows(), 2);
    assert_eq!(df.tail(1).unwrap().index(), &[Label::from("r3")]);
    assert_eq!(df.sample(2, Some(3)).unwrap(), df.sample(2, Some(3)).unwrap());
}

#[test]
fn test_dataframe_copy_is_deep() {
    let df = scores();
    let mut copy = df.copy();
    copy.drop_columns_inplace(&["name"]).unwrap();
    copy.mul_inplace(10, Axis::Columns).unwrap();
    assert_eq!(df.ncols(), 3);
    assert_eq!(df.column("age").unwrap().values(), scalars![31, 45, 25]);
}

#[test]
fn test_dataframe_index_round_trip() {
    let df = scores();
    let labels = df.index().to_vec();
    assert_eq!(df.reset_index().set_index(labels).unwrap(), df);

    let by_name = df.set_index_from("name").unwrap();
    assert_eq!(by_name.index()[1], Label::from("bob"));
    assert_eq!(by_name.ncols(), 3);
}

#[test]
fn test_dataframe_reductions() {
    let df = scores();
    let sums = df.sum(Axis::Columns).unwrap();
    assert_eq!(sums.index(), &[Label::from("age"), Label::from("score")]);
    assert_eq!(sums.values(), vec![Scalar::Float(101.0), Scalar::Float(4.5)]);

    let per_row = df.max(Axis::Rows).unwrap();
    assert_eq!(per_row.index(), df.index());
    assert_eq!(per_row.values(), vec![Scalar::Float(31.0), Scalar::Float(45.0), Scalar::Float(25.0)]);

    let counts = df.count(Axis::Columns).unwrap();
    assert_eq!(counts.values(), scalars![3, 3, 3]);

    let described = df.describe().unwrap();
    assert_eq!(described.column_names(), &["age", "score"]);
    assert_eq!(described.index()[0], Label::from("count"));

    let words = df.select(&["name"]).unwrap();
    assert!(matches!(words.mean(Axis::Columns), Err(Error::TypeMismatch(_))));
}

#[test]
fn test_dataframe_query_and_sort() {
    let df = scores();
    let older = df.query("age", BinaryOp::Ge, 31).unwrap();
    assert_eq!(older.index(), &[Label::from("r1"), Label::from("r2")]);

    let mut sorted = df.clone();
    sorted.sort_values_inplace("score", false).unwrap();
    assert_eq!(sorted.column("name").unwrap().values(), scalars!["bob", "ann", "cid"]);
    assert_eq!(sorted.sort_index(true).unwrap(), df);
}

#[test]
fn test_dataframe_transpose() {
    let df = DataFrame::from_rows(vec![scalars![1, 2], scalars![3, 4], scalars![5, 6]]).unwrap();
    let t = df.transpose().unwrap();
    assert_eq!(t.shape(), vec![2, 3]);
    assert_eq!(t.values(), vec![scalars![1, 3, 5], scalars![2, 4, 6]]);
    assert_eq!(t.transpose().unwrap().values(), df.values());
}

#[test]
fn test_dataframe_transpose_without_rows() {
    let df = DataFrame::from_rows_with(vec![], FrameOptions::new().columns(vec!["a", "b", "c"])).unwrap();
    assert_eq!(df.shape(), vec![0, 3]);

    let t = df.transpose().unwrap();
    assert_eq!(t.shape(), vec![3, 0]);
    assert_eq!(t.index(), &[Label::from("a"), Label::from("b"), Label::from("c")]);

    let back = t.transpose().unwrap();
    assert_eq!(back.shape(), vec![0, 3]);
    assert_eq!(back.column_names(), &["a", "b", "c"]);
}

#[test]
fn test_dataframe_rename_and_drop() {
    let df = scores();
    let renamed = df.rename(&[("age", "years"), ("missing", "x")], Axis::Columns).unwrap();
    assert_eq!(renamed.column_names(), &["name", "years", "score"]);

    let relabeled = df.rename(&[("r2", "second")], Axis::Rows).unwrap();
    assert_eq!(relabeled.index()[1], Label::from("second"));

    let fewer = df.drop_index(&["r1"]).unwrap();
    assert_eq!(fewer.nrows(), 2);
    assert!(matches!(df.drop_columns(&["nope"]), Err(Error::LabelNotFound(_))));
}

#[test]
fn test_dataframe_append() {
    let mut df = scores();
    df.append_inplace(vec![scalars!["dee", 52, 3.0]], vec!["r4"]).unwrap();
    assert_eq!(df.nrows(), 4);
    assert_eq!(df.index()[3], Label::from("r4"));
    assert_eq!(df.dtypes(), vec![DType::String, DType::Int32, DType::Float32]);

    let before = df.clone();
    assert!(df.append_inplace(vec![scalars!["too", "short"]], vec!["r5"]).is_err());
    assert_eq!(df, before);
}

#[test]
fn test_dataframe_apply() {
    let df = DataFrame::from_rows(vec![scalars![1, 2], scalars![3, 4]]).unwrap();
    let row_sums = df
        .apply(Axis::Rows, |row| row.iter().filter_map(Scalar::as_f64).sum::<f64>())
        .unwrap();
    assert_eq!(row_sums.values(), vec![Scalar::Float(3.0), Scalar::Float(7.0)]);

    let squared = df.apply_map(|v| v.as_f64().map(|x| x * x)).unwrap();
    assert_eq!(squared.values(), vec![vec![Scalar::Float(1.0), Scalar::Float(4.0)], vec![Scalar::Float(9.0), Scalar::Float(16.0)]]);
}

#[test]
fn test_dataframe_from_series_store() {
    let s = Series::new(vec![1, 2]).unwrap();
    let df = DataFrame::from_store(s.store().clone()).unwrap();
    assert_eq!(df.shape(), vec![2, 1]);
}

#[test]
fn test_dataframe_tensor_view() {
    let df = DataFrame::from_rows(vec![scalars![1, true], vec![Scalar::Null, Scalar::Bool(false)]]).unwrap();
    let tensor = df.tensor().unwrap();
    assert_eq!(tensor.shape(), &[2, 2]);
    let grid = tensor.view().into_dimensionality::<ndarray::Ix2>().unwrap();
    assert_eq!(grid[[0, 1]], 1.0);
    assert!(grid[[1, 0]].is_nan());
}
