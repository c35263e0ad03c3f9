use std::collections::HashSet;

use super::DataFrame;
use crate::error::{Error, Result};
use crate::index::Label;
use crate::ndframe::NDFrame;
use crate::ops::Axis;
use crate::scalar::Scalar;
use crate::series::Series;
use crate::stats::{self, Reduction, DESCRIBE_ROWS};
use crate::storage::FrameOptions;

impl DataFrame {
    fn numeric_positions(&self, what: &str) -> Result<Vec<usize>> {
        let positions: Vec<usize> = self
            .dtypes()
            .iter()
            .enumerate()
            .filter(|(_, d)| d.is_numeric())
            .map(|(i, _)| i)
            .collect();
        if positions.is_empty() {
            return Err(Error::TypeMismatch(format!("{} requires at least one numeric column", what)));
        }
        Ok(positions)
    }

    /// Series labeled by `labels`, carrying this frame's config
    fn labeled_series<T: Into<Scalar>>(&self, values: Vec<T>, labels: Vec<Label>) -> Result<Series> {
        let options = FrameOptions::new().index(labels).config(self.config().clone());
        Series::with_options(values, options)
    }

    /// Present values of every numeric column (`Axis::Columns`) or of every
    /// row restricted to the numeric columns (`Axis::Rows`), with labels
    fn numeric_lanes(&self, what: &str, axis: Axis) -> Result<(Vec<Vec<f64>>, Vec<Label>)> {
        let positions = self.numeric_positions(what)?;
        let columns = self.store.columns();
        match axis {
            Axis::Columns => {
                let lanes = positions
                    .iter()
                    .map(|&p| columns[p].present_f64().unwrap_or_default())
                    .collect();
                let labels = positions
                    .iter()
                    .map(|&p| Label::from(self.column_names()[p].clone()))
                    .collect();
                Ok((lanes, labels))
            }
            Axis::Rows => {
                let arrays: Vec<_> = positions
                    .iter()
                    .filter_map(|&p| columns[p].to_f64_array())
                    .collect();
                let lanes = (0..self.nrows())
                    .map(|r| arrays.iter().map(|a| a[r]).filter(|v| !v.is_nan()).collect())
                    .collect();
                Ok((lanes, self.index().to_vec()))
            }
        }
    }

    fn reduce(&self, reduction: Reduction, axis: Axis) -> Result<Series> {
        let (lanes, labels) = self.numeric_lanes(reduction.name(), axis)?;
        let values: Vec<f64> = lanes.iter().map(|lane| reduction.apply(lane)).collect();
        self.labeled_series(values, labels)
    }

    /// Sum per column (`Axis::Columns`) or per row, numeric columns only
    pub fn sum(&self, axis: Axis) -> Result<Series> {
        self.reduce(Reduction::Sum, axis)
    }

    pub fn mean(&self, axis: Axis) -> Result<Series> {
        self.reduce(Reduction::Mean, axis)
    }

    pub fn median(&self, axis: Axis) -> Result<Series> {
        self.reduce(Reduction::Median, axis)
    }

    pub fn min(&self, axis: Axis) -> Result<Series> {
        self.reduce(Reduction::Min, axis)
    }

    pub fn max(&self, axis: Axis) -> Result<Series> {
        self.reduce(Reduction::Max, axis)
    }

    /// Sample standard deviation (n - 1)
    pub fn std(&self, axis: Axis) -> Result<Series> {
        self.reduce(Reduction::Std, axis)
    }

    /// Sample variance (n - 1)
    pub fn var(&self, axis: Axis) -> Result<Series> {
        self.reduce(Reduction::Var, axis)
    }

    /// The `keep`-th smallest mode of each lane; missing when there are fewer
    pub fn mode(&self, axis: Axis, keep: usize) -> Result<Series> {
        let (lanes, labels) = self.numeric_lanes("mode", axis)?;
        let values: Vec<f64> = lanes
            .iter()
            .map(|lane| stats::modes(lane).get(keep).copied().unwrap_or(f64::NAN))
            .collect();
        self.labeled_series(values, labels)
    }

    /// Non-missing cells per column or per row, every dtype included
    pub fn count(&self, axis: Axis) -> Result<Series> {
        let columns = self.store.columns();
        match axis {
            Axis::Columns => {
                let counts: Vec<usize> = columns.iter().map(|c| c.count()).collect();
                let labels = self.column_names().iter().cloned().map(Label::from).collect();
                self.labeled_series(counts, labels)
            }
            Axis::Rows => {
                let masks: Vec<Vec<bool>> = columns.iter().map(|c| c.missing_mask()).collect();
                let counts: Vec<usize> = (0..self.nrows())
                    .map(|r| masks.iter().filter(|m| !m[r]).count())
                    .collect();
                self.labeled_series(counts, self.index().to_vec())
            }
        }
    }

    /// Summary statistics of every numeric column
    pub fn describe(&self) -> Result<DataFrame> {
        let positions = self.numeric_positions("describe")?;
        let columns: Vec<(String, Vec<Scalar>)> = positions
            .iter()
            .map(|&p| {
                let present = self.store.columns()[p].present_f64().unwrap_or_default();
                let summary = stats::describe(&present).into_iter().map(Scalar::Float).collect();
                (self.column_names()[p].clone(), summary)
            })
            .collect();
        let options = FrameOptions::new()
            .index(DESCRIBE_ROWS.to_vec())
            .config(self.config().clone());
        DataFrame::from_columns_with(columns, options)
    }

    /// Distinct values of column `name`
    pub fn unique(&self, name: &str) -> Result<Series> {
        self.column(name)?.unique()
    }

    /// Distinct non-missing values per column or per row
    pub fn n_unique(&self, axis: Axis) -> Result<Series> {
        match axis {
            Axis::Columns => {
                let counts = self
                    .column_names()
                    .iter()
                    .map(|n| self.column(n).map(|s| s.n_unique()))
                    .collect::<Result<Vec<usize>>>()?;
                let labels = self.column_names().iter().cloned().map(Label::from).collect();
                self.labeled_series(counts, labels)
            }
            Axis::Rows => {
                let counts: Vec<usize> = self
                    .values()
                    .iter()
                    .map(|row| {
                        row.iter()
                            .filter(|v| !v.is_missing())
                            .map(Scalar::hash_key)
                            .collect::<HashSet<_>>()
                            .len()
                    })
                    .collect();
                self.labeled_series(counts, self.index().to_vec())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtype::DType;
    use crate::scalars;

    fn frame() -> DataFrame {
        DataFrame::from_rows_with(
            vec![
                scalars![1, 4.0, "a"],
                vec![Scalar::Int(3), Scalar::Null, Scalar::from("b")],
                scalars![5, 6.0, "a"],
            ],
            FrameOptions::new().columns(vec!["x", "y", "z"]),
        )
        .unwrap()
    }

    #[test]
    fn test_reduce_per_column() {
        let df = frame();
        let mean = df.mean(Axis::Columns).unwrap();
        assert_eq!(mean.index(), &[Label::from("x"), Label::from("y")]);
        assert_eq!(mean.values(), scalars![3.0, 5.0]);
        let sum = df.sum(Axis::Columns).unwrap();
        assert_eq!(sum.values(), scalars![9.0, 10.0]);
    }

    #[test]
    fn test_reduce_per_row() {
        let df = frame();
        let sum = df.sum(Axis::Rows).unwrap();
        assert_eq!(sum.values(), scalars![5.0, 3.0, 11.0]);
        assert_eq!(sum.index(), &[Label::Int(0), Label::Int(1), Label::Int(2)]);
    }

    #[test]
    fn test_count_every_dtype() {
        let df = frame();
        assert_eq!(df.count(Axis::Columns).unwrap().values(), scalars![3, 2, 3]);
        assert_eq!(df.count(Axis::Rows).unwrap().values(), scalars![3, 2, 3]);
    }

    #[test]
    fn test_non_numeric_frame_rejected() {
        let df = DataFrame::from_rows(vec![scalars!["a"]]).unwrap();
        assert!(matches!(df.mean(Axis::Columns), Err(Error::TypeMismatch(_))));
    }

    #[test]
    fn test_describe_and_mode() {
        let df = frame();
        let d = df.describe().unwrap();
        assert_eq!(d.shape(), vec![7, 2]);
        assert_eq!(d.dtypes(), vec![DType::Float32, DType::Float32]);
        assert_eq!(d.loc(&["count"]).unwrap().values(), vec![scalars![3.0, 2.0]]);
        let mode = df.mode(Axis::Columns, 0).unwrap();
        assert_eq!(mode.values(), scalars![1.0, 4.0]);
    }

    #[test]
    fn test_unique_counts() {
        let df = frame();
        assert_eq!(df.n_unique(Axis::Columns).unwrap().values(), scalars![3, 2, 2]);
        assert_eq!(df.unique("z").unwrap().values(), scalars!["a", "b"]);
    }
}
