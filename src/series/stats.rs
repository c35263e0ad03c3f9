use std::collections::HashMap;

use super::Series;
use crate::column::Column;
use crate::error::{Error, Result};
use crate::index::Label;
use crate::na::NA;
use crate::ndframe::NDFrame;
use crate::scalar::Scalar;
use crate::stats::{self, Reduction, DESCRIBE_ROWS};
use crate::storage::FrameOptions;

impl Series {
    /// Present values of a numeric series
    fn numeric_values(&self, what: &str) -> Result<Vec<f64>> {
        self.column().present_f64().ok_or_else(|| {
            Error::TypeMismatch(format!("{} requires a numeric series, got {}", what, self.dtype()))
        })
    }

    fn reduce(&self, reduction: Reduction) -> Result<f64> {
        let values = self.numeric_values(reduction.name())?;
        Ok(reduction.apply(&values))
    }

    pub fn sum(&self) -> Result<f64> {
        self.reduce(Reduction::Sum)
    }

    pub fn mean(&self) -> Result<f64> {
        self.reduce(Reduction::Mean)
    }

    pub fn median(&self) -> Result<f64> {
        self.reduce(Reduction::Median)
    }

    pub fn min(&self) -> Result<f64> {
        self.reduce(Reduction::Min)
    }

    pub fn max(&self) -> Result<f64> {
        self.reduce(Reduction::Max)
    }

    /// Sample standard deviation (n - 1)
    pub fn std(&self) -> Result<f64> {
        self.reduce(Reduction::Std)
    }

    /// Sample variance (n - 1)
    pub fn var(&self) -> Result<f64> {
        self.reduce(Reduction::Var)
    }

    /// Most frequent values, ascending; several when tied
    pub fn mode(&self) -> Result<Vec<f64>> {
        let values = self.numeric_values("mode")?;
        Ok(stats::modes(&values))
    }

    /// Number of non-missing values, any dtype
    pub fn count(&self) -> usize {
        self.column().count()
    }

    /// Summary statistics indexed by statistic name
    pub fn describe(&self) -> Result<Series> {
        let values = self.numeric_values("describe")?;
        let options = FrameOptions::new()
            .index(DESCRIBE_ROWS.to_vec())
            .columns(vec![self.name()])
            .config(self.config().clone());
        Series::with_options(stats::describe(&values), options)
    }

    fn arg_extreme(&self, reduction: Reduction) -> Result<usize> {
        let values = self.column().to_f64_array().ok_or_else(|| {
            Error::TypeMismatch(format!("{} requires a numeric series", reduction.name()))
        })?;
        let target = reduction.apply(&values.iter().copied().filter(|v| !v.is_nan()).collect::<Vec<_>>());
        values
            .iter()
            .position(|v| *v == target)
            .ok_or_else(|| Error::InvalidValue(format!("{} of a series without values", reduction.name())))
    }

    /// Position of the first largest value
    pub fn arg_max(&self) -> Result<usize> {
        self.arg_extreme(Reduction::Max)
    }

    /// Position of the first smallest value
    pub fn arg_min(&self) -> Result<usize> {
        self.arg_extreme(Reduction::Min)
    }

    /// Distinct values in first-seen order; missing appears at most once
    pub fn unique(&self) -> Result<Series> {
        let mut seen = HashMap::new();
        let mut positions = Vec::new();
        for (pos, value) in self.values().iter().enumerate() {
            if seen.insert(value.hash_key(), pos).is_none() {
                positions.push(pos);
            }
        }
        Ok(self.iloc(&positions)?.reset_index())
    }

    /// Number of distinct non-missing values
    pub fn n_unique(&self) -> usize {
        let mut keys: Vec<String> = self
            .values()
            .iter()
            .filter(|v| !v.is_missing())
            .map(Scalar::hash_key)
            .collect();
        keys.sort();
        keys.dedup();
        keys.len()
    }

    /// Occurrences of each distinct non-missing value, first-seen order
    pub fn value_counts(&self) -> Result<Series> {
        let mut order: Vec<Scalar> = Vec::new();
        let mut counts: HashMap<String, usize> = HashMap::new();
        for value in self.values().into_iter().filter(|v| !v.is_missing()) {
            let key = value.hash_key();
            let count = counts.entry(key).or_insert(0);
            if *count == 0 {
                order.push(value);
            }
            *count += 1;
        }
        let labels: Vec<Label> = order
            .iter()
            .map(|v| Label::try_from(v).unwrap_or_else(|_| Label::Str(v.to_string())))
            .collect();
        let column = Column::Int32(
            order
                .iter()
                .map(|v| NA::Value(counts.get(&v.hash_key()).copied().unwrap_or(0) as i32))
                .collect(),
        );
        let index = crate::index::Index::new(labels);
        let store = self
            .store
            .with_parts(vec![column], self.store.column_names().to_vec(), index)?;
        Ok(Series { store })
    }
}
