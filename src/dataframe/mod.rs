//! Two-dimensional labeled table.

mod apply;
mod arith;
mod query;
mod stats;
mod transform;

use std::fmt::{self, Display};
use std::path::Path;

use crate::column::Column;
use crate::dtype::{infer_dtype, DType};
use crate::error::{Error, Result};
use crate::index::Label;
use crate::io;
use crate::ndframe::NDFrame;
use crate::ops::Operand;
use crate::scalar::Scalar;
use crate::series::Series;
use crate::storage::{ColumnStore, FrameOptions};

/// A labeled table of equal-length typed columns
///
/// Cloning is deep. Copying verbs return a new frame; their `*_inplace`
/// twins mutate the receiver only when the whole result was built.
#[derive(Debug, Clone, PartialEq)]
pub struct DataFrame {
    pub(crate) store: ColumnStore,
}

impl DataFrame {
    /// Empty frame
    pub fn new() -> Self {
        DataFrame {
            store: ColumnStore::empty(),
        }
    }

    /// Frame from row-major values; every row must have the same width
    pub fn from_rows(rows: Vec<Vec<Scalar>>) -> Result<Self> {
        Self::from_rows_with(rows, FrameOptions::new())
    }

    pub fn from_rows_with(rows: Vec<Vec<Scalar>>, options: FrameOptions) -> Result<Self> {
        Ok(DataFrame {
            store: ColumnStore::from_rows(rows, &options)?,
        })
    }

    /// Frame from key/value records; see [`ColumnStore::from_records`]
    pub fn from_records(records: Vec<Vec<(String, Scalar)>>) -> Result<Self> {
        Self::from_records_with(records, FrameOptions::new())
    }

    pub fn from_records_with(records: Vec<Vec<(String, Scalar)>>, options: FrameOptions) -> Result<Self> {
        Ok(DataFrame {
            store: ColumnStore::from_records(records, &options)?,
        })
    }

    /// Frame from named columns of equal length
    pub fn from_columns<S: Into<String>>(columns: Vec<(S, Vec<Scalar>)>) -> Result<Self> {
        Self::from_columns_with(columns, FrameOptions::new())
    }

    pub fn from_columns_with<S: Into<String>>(columns: Vec<(S, Vec<Scalar>)>, options: FrameOptions) -> Result<Self> {
        let (names, raw): (Vec<String>, Vec<Vec<Scalar>>) =
            columns.into_iter().map(|(n, v)| (n.into(), v)).unzip();
        Ok(DataFrame {
            store: ColumnStore::from_raw_columns(raw, names, &options, false)?,
        })
    }

    /// Frame from JSON records, a 2-D array or a column map
    pub fn from_json(source: &str) -> Result<Self> {
        Ok(DataFrame {
            store: io::json::read_json(source, &FrameOptions::new())?,
        })
    }

    /// Frame from CSV text with a header row
    pub fn from_csv_str(source: &str) -> Result<Self> {
        Ok(DataFrame {
            store: io::csv::read_csv(source.as_bytes(), &FrameOptions::new())?,
        })
    }

    pub fn from_csv_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Ok(DataFrame {
            store: io::csv::read_csv(file, &FrameOptions::new())?,
        })
    }

    /// Wrap any store as a frame
    pub fn from_store(store: ColumnStore) -> Result<Self> {
        if !store.is_series() {
            return Ok(DataFrame { store });
        }
        let store = ColumnStore::from_parts(
            store.columns().to_vec(),
            store.column_names().to_vec(),
            store.index().clone(),
            store.config().clone(),
            false,
        )?;
        Ok(DataFrame { store })
    }

    pub fn nrows(&self) -> usize {
        self.store.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.store.ncols()
    }

    /// Row-major values; missing values are `Scalar::Null`
    pub fn values(&self) -> Vec<Vec<Scalar>> {
        self.store.values()
    }

    /// Deep copy
    pub fn copy(&self) -> DataFrame {
        self.clone()
    }

    /// Column `name` as a series sharing the frame's index
    pub fn column(&self, name: &str) -> Result<Series> {
        let pos = self.store.column_position(name)?;
        Series::from_store(self.store.take_columns(&[pos])?)
    }

    /// Copy with column `name` set to `values`, replacing any existing one
    pub fn add_column<T: Into<Scalar>>(&self, name: &str, values: Vec<T>) -> Result<DataFrame> {
        let values: Vec<Scalar> = values.into_iter().map(Into::into).collect();
        let dtype = infer_dtype(&values, self.config().dtype_test_lim);
        self.put_column(name, Column::from_scalars(&values, dtype))
    }

    pub fn add_column_inplace<T: Into<Scalar>>(&mut self, name: &str, values: Vec<T>) -> Result<()> {
        let out = self.add_column(name, values)?;
        self.store.replace_with(out.store);
        Ok(())
    }

    /// Copy with column `name` taken from `series`; lengths must match
    pub fn add_series(&self, name: &str, series: &Series) -> Result<DataFrame> {
        self.put_column(name, series.column().clone())
    }

    fn put_column(&self, name: &str, column: Column) -> Result<DataFrame> {
        let mut store = self.store.clone();
        store.put_column(name, column)?;
        Ok(DataFrame { store })
    }

    /// Rows at `positions`
    pub fn iloc(&self, positions: &[usize]) -> Result<DataFrame> {
        Ok(DataFrame {
            store: self.store.take_rows(positions)?,
        })
    }

    /// Rows carrying `labels`; a repeated label selects every match
    pub fn loc<L: Into<Label> + Clone>(&self, labels: &[L]) -> Result<DataFrame> {
        let labels: Vec<Label> = labels.iter().cloned().map(Into::into).collect();
        let positions = self.store.index().locate(&labels)?;
        self.iloc(&positions)
    }

    /// Columns called `names`, in that order
    pub fn select(&self, names: &[&str]) -> Result<DataFrame> {
        let positions = names
            .iter()
            .map(|n| self.store.column_position(n))
            .collect::<Result<Vec<_>>>()?;
        Ok(DataFrame {
            store: self.store.take_columns(&positions)?,
        })
    }

    pub fn head(&self, n: usize) -> Result<DataFrame> {
        Ok(DataFrame {
            store: self.store.head(n)?,
        })
    }

    pub fn tail(&self, n: usize) -> Result<DataFrame> {
        Ok(DataFrame {
            store: self.store.tail(n)?,
        })
    }

    /// `n` random rows; a `seed` makes the draw reproducible
    pub fn sample(&self, n: usize, seed: Option<u64>) -> Result<DataFrame> {
        Ok(DataFrame {
            store: self.store.sample_rows(n, seed)?,
        })
    }

    /// Copy with its row index replaced by `labels`
    pub fn set_index<L: Into<Label>>(&self, labels: Vec<L>) -> Result<DataFrame> {
        let mut out = self.clone();
        out.set_index_inplace(labels)?;
        Ok(out)
    }

    pub fn set_index_inplace<L: Into<Label>>(&mut self, labels: Vec<L>) -> Result<()> {
        self.store
            .set_index(labels.into_iter().map(Into::into).collect())
    }

    /// Copy whose index is the values of column `name`; the column is kept
    pub fn set_index_from(&self, name: &str) -> Result<DataFrame> {
        let labels = self
            .column(name)?
            .values()
            .iter()
            .map(Label::try_from)
            .collect::<Result<Vec<_>>>()?;
        self.set_index(labels)
    }

    /// Copy with a `0..n` row index
    pub fn reset_index(&self) -> DataFrame {
        let mut out = self.clone();
        out.reset_index_inplace();
        out
    }

    pub fn reset_index_inplace(&mut self) {
        self.store.reset_index();
    }

    /// Copy with new column names
    pub fn set_column_names<S: Into<String>>(&self, names: Vec<S>) -> Result<DataFrame> {
        let mut store = self.store.clone();
        store.set_column_names(names.into_iter().map(Into::into).collect())?;
        Ok(DataFrame { store })
    }

    /// Dtype name of every column, indexed by column name
    pub fn ctypes(&self) -> Result<Series> {
        let names: Vec<&str> = self.dtypes().iter().map(DType::as_str).collect();
        let options = FrameOptions::new()
            .index(self.column_names().to_vec())
            .config(self.config().clone());
        Series::with_options(names, options)
    }
}

impl Default for DataFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl NDFrame for DataFrame {
    fn store(&self) -> &ColumnStore {
        &self.store
    }
}

impl<'a> From<&'a DataFrame> for Operand<'a> {
    fn from(frame: &'a DataFrame) -> Self {
        Operand::Store(&frame.store)
    }
}

impl Display for DataFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_table())
    }
}

impl TryFrom<ColumnStore> for DataFrame {
    type Error = Error;

    fn try_from(store: ColumnStore) -> Result<Self> {
        DataFrame::from_store(store)
    }
}
