//! One-dimensional labeled array.

mod arith;
mod datetime_accessor;
mod stats;
mod string_accessor;
mod transform;

use std::fmt::{self, Display};

use crate::column::Column;
use crate::dtype::DType;
use crate::error::{Error, Result};
use crate::index::Label;
use crate::ndframe::NDFrame;
use crate::ops::Operand;
use crate::scalar::Scalar;
use crate::storage::{ColumnStore, FrameOptions};

pub use datetime_accessor::DateTimeAccessor;
pub use string_accessor::StringAccessor;
pub use transform::Keep;
pub(crate) use transform::sorted_positions;

/// A labeled, typed, one-dimensional array
///
/// Backed by a single-column [`ColumnStore`]; the column name is the series
/// name. Cloning is deep.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub(crate) store: ColumnStore,
}

impl Series {
    /// Series with an inferred dtype, a `0..n` index and the name `"0"`
    pub fn new<T: Into<Scalar>>(values: Vec<T>) -> Result<Self> {
        Self::with_options(values, FrameOptions::new())
    }

    /// Series with explicit index, name (`columns`), dtype or config
    pub fn with_options<T: Into<Scalar>>(values: Vec<T>, options: FrameOptions) -> Result<Self> {
        let values = values.into_iter().map(Into::into).collect();
        let store = ColumnStore::from_values(values, &options)?;
        Ok(Series { store })
    }

    /// Wrap a store; it must hold exactly one column
    pub fn from_store(store: ColumnStore) -> Result<Self> {
        if store.ncols() != 1 {
            return Err(Error::shape(1, store.ncols()));
        }
        if store.is_series() {
            return Ok(Series { store });
        }
        let column = store.column(0)?.clone();
        let store = ColumnStore::from_parts(
            vec![column],
            store.column_names().to_vec(),
            store.index().clone(),
            store.config().clone(),
            true,
        )?;
        Ok(Series { store })
    }

    /// New series sharing this one's name, index and config
    pub(crate) fn with_column(&self, column: Column) -> Result<Series> {
        Ok(Series {
            store: self.store.with_columns(vec![column])?,
        })
    }

    pub(crate) fn column(&self) -> &Column {
        &self.store.columns()[0]
    }

    pub fn with_name<S: Into<String>>(mut self, name: S) -> Result<Self> {
        self.set_name(name)?;
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.store.column_names()[0]
    }

    pub fn set_name<S: Into<String>>(&mut self, name: S) -> Result<()> {
        self.store.set_column_names(vec![name.into()])
    }

    pub fn dtype(&self) -> DType {
        self.column().dtype()
    }

    pub fn len(&self) -> usize {
        self.store.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Values in positional order; missing values are `Scalar::Null`
    pub fn values(&self) -> Vec<Scalar> {
        self.column().to_scalars()
    }

    /// Element at position `pos`
    pub fn get(&self, pos: usize) -> Result<Scalar> {
        self.column().get(pos)
    }

    /// Deep copy
    pub fn copy(&self) -> Series {
        self.clone()
    }

    /// Elements at `positions`, labels included
    pub fn iloc(&self, positions: &[usize]) -> Result<Series> {
        Ok(Series {
            store: self.store.take_rows(positions)?,
        })
    }

    /// Elements carrying `labels`; a repeated label selects every match
    pub fn loc<L: Into<Label> + Clone>(&self, labels: &[L]) -> Result<Series> {
        let labels: Vec<Label> = labels.iter().cloned().map(Into::into).collect();
        let positions = self.store.index().locate(&labels)?;
        self.iloc(&positions)
    }

    pub fn head(&self, n: usize) -> Result<Series> {
        Ok(Series {
            store: self.store.head(n)?,
        })
    }

    pub fn tail(&self, n: usize) -> Result<Series> {
        Ok(Series {
            store: self.store.tail(n)?,
        })
    }

    /// `n` random elements; a `seed` makes the draw reproducible
    pub fn sample(&self, n: usize, seed: Option<u64>) -> Result<Series> {
        Ok(Series {
            store: self.store.sample_rows(n, seed)?,
        })
    }

    /// Copy with its index replaced by `labels`
    pub fn set_index<L: Into<Label>>(&self, labels: Vec<L>) -> Result<Series> {
        let mut out = self.clone();
        out.set_index_inplace(labels)?;
        Ok(out)
    }

    pub fn set_index_inplace<L: Into<Label>>(&mut self, labels: Vec<L>) -> Result<()> {
        self.store
            .set_index(labels.into_iter().map(Into::into).collect())
    }

    /// Copy with a `0..n` index
    pub fn reset_index(&self) -> Series {
        let mut out = self.clone();
        out.reset_index_inplace();
        out
    }

    pub fn reset_index_inplace(&mut self) {
        self.store.reset_index();
    }

    /// Copy converted to `dtype`; values that cannot convert become missing
    pub fn as_type(&self, dtype: DType) -> Result<Series> {
        self.with_column(self.column().cast(dtype))
    }

    /// Copy extended with `values` labeled by `labels`
    pub fn append<T, L>(&self, values: Vec<T>, labels: Vec<L>) -> Result<Series>
    where
        T: Into<Scalar>,
        L: Into<Label>,
    {
        if values.len() != labels.len() {
            return Err(Error::shape(values.len(), labels.len()));
        }
        let values: Vec<Scalar> = values.into_iter().map(Into::into).collect();
        let dtype = crate::dtype::infer_dtype(&values, self.config().dtype_test_lim);
        let column = self.column().concat(&Column::from_scalars(&values, dtype));
        let labels: Vec<Label> = labels.into_iter().map(Into::into).collect();
        let index = self.store.index().concat(&labels);
        Ok(Series {
            store: self
                .store
                .with_parts(vec![column], self.store.column_names().to_vec(), index)?,
        })
    }

    pub fn append_inplace<T, L>(&mut self, values: Vec<T>, labels: Vec<L>) -> Result<()>
    where
        T: Into<Scalar>,
        L: Into<Label>,
    {
        let out = self.append(values, labels)?;
        self.store.replace_with(out.store);
        Ok(())
    }

    /// String methods; the series must have the `string` dtype
    pub fn str(&self) -> Result<StringAccessor<'_>> {
        StringAccessor::new(self)
    }

    /// Calendar methods over date strings
    pub fn dt(&self) -> Result<DateTimeAccessor<'_>> {
        DateTimeAccessor::new(self)
    }
}

inplace_variants! {
    Series {
        as_type => as_type_inplace(dtype: DType);
    }
}

impl NDFrame for Series {
    fn store(&self) -> &ColumnStore {
        &self.store
    }
}

impl<'a> From<&'a Series> for Operand<'a> {
    fn from(series: &'a Series) -> Self {
        Operand::Store(&series.store)
    }
}

impl Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_table())
    }
}
