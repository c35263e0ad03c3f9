//! Row filtering, ordering and column selection by dtype.

use super::DataFrame;
use crate::dtype::DType;
use crate::error::{Error, Result};
use crate::ndframe::NDFrame;
use crate::ops::BinaryOp;
use crate::scalar::Scalar;
use crate::series::sorted_positions;

impl DataFrame {
    /// Rows whose `column` compares true against `value`
    ///
    /// `op` must be a comparison; missing cells never match except under
    /// `BinaryOp::Ne`.
    pub fn query<T: Into<Scalar>>(&self, column: &str, op: BinaryOp, value: T) -> Result<DataFrame> {
        if !op.is_comparison() {
            return Err(Error::InvalidValue(format!("query needs a comparison, got {}", op.name())));
        }
        let mask = self.column(column)?.binary_mask(value.into(), op)?;
        let positions: Vec<usize> = mask
            .iter()
            .enumerate()
            .filter(|(_, hit)| **hit)
            .map(|(i, _)| i)
            .collect();
        self.iloc(&positions)
    }

    /// Rows in the order of column `by`; stable, missing last
    pub fn sort_values(&self, by: &str, ascending: bool) -> Result<DataFrame> {
        let values = self.column(by)?.values();
        self.iloc(&sorted_positions(&values, ascending))
    }

    /// Rows in label order; stable
    pub fn sort_index(&self, ascending: bool) -> Result<DataFrame> {
        let labels = self.index();
        let mut positions: Vec<usize> = (0..labels.len()).collect();
        if ascending {
            positions.sort_by(|&a, &b| labels[a].cmp(&labels[b]));
        } else {
            positions.sort_by(|&a, &b| labels[b].cmp(&labels[a]));
        }
        self.iloc(&positions)
    }

    /// Columns whose dtype is one of `dtypes`
    pub fn select_dtypes(&self, dtypes: &[DType]) -> Result<DataFrame> {
        let positions: Vec<usize> = self
            .dtypes()
            .iter()
            .enumerate()
            .filter(|(_, d)| dtypes.contains(d))
            .map(|(i, _)| i)
            .collect();
        Ok(DataFrame {
            store: self.store.take_columns(&positions)?,
        })
    }
}

inplace_variants! {
    DataFrame {
        sort_values => sort_values_inplace(by: &str, ascending: bool);
        sort_index => sort_index_inplace(ascending: bool);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::Label;
    use crate::scalars;
    use crate::storage::FrameOptions;

    fn people() -> DataFrame {
        DataFrame::from_rows_with(
            vec![
                scalars!["ann", 31, 1.5],
                vec![Scalar::from("bob"), Scalar::Null, Scalar::Float(2.5)],
                scalars!["cid", 25, 0.5],
            ],
            FrameOptions::new().columns(vec!["name", "age", "score"]).index(vec!["r1", "r2", "r3"]),
        )
        .unwrap()
    }

    #[test]
    fn test_query() {
        let df = people();
        let older = df.query("age", BinaryOp::Gt, 26).unwrap();
        assert_eq!(older.index(), &[Label::from("r1")]);
        let not_ann = df.query("name", BinaryOp::Ne, "ann").unwrap();
        assert_eq!(not_ann.nrows(), 2);
        assert!(matches!(df.query("age", BinaryOp::Add, 1), Err(Error::InvalidValue(_))));
        assert!(matches!(df.query("height", BinaryOp::Gt, 1), Err(Error::LabelNotFound(_))));
    }

    #[test]
    fn test_sorting() {
        let df = people();
        let by_age = df.sort_values("age", true).unwrap();
        assert_eq!(by_age.index(), &[Label::from("r3"), Label::from("r1"), Label::from("r2")]);
        let back = by_age.sort_index(true).unwrap();
        assert_eq!(back, df);
        let desc = df.sort_index(false).unwrap();
        assert_eq!(desc.index()[0], Label::from("r3"));
    }

    #[test]
    fn test_select_dtypes() {
        let df = people();
        let numeric = df.select_dtypes(&[DType::Int32, DType::Float32]).unwrap();
        assert_eq!(numeric.column_names(), &["age", "score"]);
    }
}
