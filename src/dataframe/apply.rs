use super::DataFrame;
use crate::column::Column;
use crate::dtype::infer_dtype;
use crate::error::Result;
use crate::index::Label;
use crate::ndframe::NDFrame;
use crate::ops::Axis;
use crate::scalar::Scalar;
use crate::series::Series;
use crate::storage::FrameOptions;

impl DataFrame {
    /// Reduce every column (`Axis::Columns`) or every row to one value
    ///
    /// `f` receives the lane's values, missing ones as `Scalar::Null`. The
    /// result is labeled by column name or by row label.
    pub fn apply<F, U>(&self, axis: Axis, f: F) -> Result<Series>
    where
        F: Fn(&[Scalar]) -> U,
        U: Into<Scalar>,
    {
        let (values, labels): (Vec<Scalar>, Vec<Label>) = match axis {
            Axis::Columns => {
                let values = self
                    .store
                    .columns()
                    .iter()
                    .map(|c| f(c.to_scalars().as_slice()).into())
                    .collect();
                let labels = self.column_names().iter().cloned().map(Label::from).collect();
                (values, labels)
            }
            Axis::Rows => {
                let values = self.values().iter().map(|row| f(row.as_slice()).into()).collect();
                (values, self.index().to_vec())
            }
        };
        let options = FrameOptions::new().index(labels).config(self.config().clone());
        Series::with_options(values, options)
    }

    /// `f` applied to every cell; each column's dtype is re-inferred
    pub fn apply_map<F, U>(&self, f: F) -> Result<DataFrame>
    where
        F: Fn(&Scalar) -> U,
        U: Into<Scalar>,
    {
        let limit = self.config().dtype_test_lim;
        let columns = self
            .store
            .columns()
            .iter()
            .map(|c| {
                let values: Vec<Scalar> = c.to_scalars().iter().map(|v| f(v).into()).collect();
                Column::from_scalars(&values, infer_dtype(&values, limit))
            })
            .collect();
        Ok(DataFrame {
            store: self.store.with_columns(columns)?,
        })
    }
}
