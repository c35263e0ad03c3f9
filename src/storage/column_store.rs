use std::borrow::Cow;
use std::cell::OnceCell;

use log::debug;
use ndarray::{Array2, ArrayD};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::column::Column;
use crate::config::Config;
use crate::dtype::{infer_dtype, DType};
use crate::error::{Error, Result};
use crate::index::{Index, Label};
use crate::scalar::Scalar;

/// Optional labels, dtypes and configuration supplied at construction
#[derive(Debug, Clone, Default)]
pub struct FrameOptions {
    pub index: Option<Vec<Label>>,
    pub column_names: Option<Vec<String>>,
    /// Explicit dtypes; inference is skipped when present
    pub dtypes: Option<Vec<DType>>,
    pub config: Option<Config>,
}

impl FrameOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index<L: Into<Label>>(mut self, labels: Vec<L>) -> Self {
        self.index = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    pub fn columns<S: Into<String>>(mut self, names: Vec<S>) -> Self {
        self.column_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn dtypes(mut self, dtypes: Vec<DType>) -> Self {
        self.dtypes = Some(dtypes);
        self
    }

    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }
}

/// Columnar storage shared by `Series` and `DataFrame`
///
/// Holds equal-length typed columns, the row [`Index`], the column names and
/// a lazily materialized tensor view. Every mutating method clears the tensor
/// cache.
#[derive(Debug, Clone)]
pub struct ColumnStore {
    columns: Vec<Column>,
    index: Index,
    column_names: Vec<String>,
    config: Config,
    is_series: bool,
    tensor: OnceCell<ArrayD<f64>>,
}

impl PartialEq for ColumnStore {
    fn eq(&self, other: &Self) -> bool {
        self.columns == other.columns
            && self.index == other.index
            && self.column_names == other.column_names
            && self.is_series == other.is_series
    }
}

fn default_names(count: usize) -> Vec<String> {
    (0..count).map(|i| i.to_string()).collect()
}

impl ColumnStore {
    /// Build a store from column-major raw values
    ///
    /// Explicit dtypes in `options` are applied as given; otherwise each
    /// column's dtype is inferred from its leading values.
    pub fn from_raw_columns(
        raw: Vec<Vec<Scalar>>,
        names: Vec<String>,
        options: &FrameOptions,
        is_series: bool,
    ) -> Result<Self> {
        let config = options.config.clone().unwrap_or_else(|| Config::global().clone());
        config.validate()?;

        // with no columns the row count comes from the explicit index
        let rows = match raw.first() {
            Some(column) => column.len(),
            None => options.index.as_ref().map_or(0, Vec::len),
        };
        if let Some(bad) = raw.iter().find(|c| c.len() != rows) {
            return Err(Error::shape(rows, bad.len()));
        }

        let names = match &options.column_names {
            Some(explicit) => {
                if explicit.len() != raw.len() {
                    return Err(Error::shape(raw.len(), explicit.len()));
                }
                explicit.clone()
            }
            None => names,
        };

        let dtypes = match &options.dtypes {
            Some(explicit) => {
                if explicit.len() != raw.len() {
                    return Err(Error::shape(raw.len(), explicit.len()));
                }
                explicit.clone()
            }
            None => raw
                .iter()
                .map(|c| infer_dtype(c, config.dtype_test_lim))
                .collect(),
        };
        debug!("building store with {} row(s), dtypes {:?}", rows, dtypes);

        let columns: Vec<Column> = raw
            .iter()
            .zip(&dtypes)
            .map(|(values, dtype)| Column::from_scalars(values, *dtype))
            .collect();

        let index = match &options.index {
            Some(labels) => {
                if labels.len() != rows {
                    return Err(Error::shape(rows, labels.len()));
                }
                Index::new(labels.clone())
            }
            None => Index::range(rows),
        };

        Self::from_parts(columns, names, index, config, is_series)
    }

    /// Build a store from row-major values; every row must have the same width
    pub fn from_rows(rows: Vec<Vec<Scalar>>, options: &FrameOptions) -> Result<Self> {
        let width = match rows.first() {
            Some(first) => first.len(),
            None => options.column_names.as_ref().map(|n| n.len()).unwrap_or(0),
        };
        if let Some(bad) = rows.iter().find(|r| r.len() != width) {
            return Err(Error::shape(width, bad.len()));
        }

        let mut raw: Vec<Vec<Scalar>> = (0..width).map(|_| Vec::with_capacity(rows.len())).collect();
        for row in rows {
            for (col, value) in raw.iter_mut().zip(row) {
                col.push(value);
            }
        }
        Self::from_raw_columns(raw, default_names(width), options, false)
    }

    /// Build a store from key/value records
    ///
    /// Column order follows first-seen key order; a record lacking a key
    /// contributes a missing value.
    pub fn from_records(records: Vec<Vec<(String, Scalar)>>, options: &FrameOptions) -> Result<Self> {
        let mut names: Vec<String> = Vec::new();
        for record in &records {
            for (key, _) in record {
                if !names.contains(key) {
                    names.push(key.clone());
                }
            }
        }

        let mut raw: Vec<Vec<Scalar>> = vec![Vec::with_capacity(records.len()); names.len()];
        for record in records {
            let mut row = vec![Scalar::Null; names.len()];
            for (key, value) in record {
                if let Some(pos) = names.iter().position(|n| *n == key) {
                    row[pos] = value;
                }
            }
            for (col, value) in raw.iter_mut().zip(row) {
                col.push(value);
            }
        }
        Self::from_raw_columns(raw, names, options, false)
    }

    /// Frame store with no rows and no columns
    pub fn empty() -> Self {
        ColumnStore {
            columns: Vec::new(),
            index: Index::range(0),
            column_names: Vec::new(),
            config: Config::global().clone(),
            is_series: false,
            tensor: OnceCell::new(),
        }
    }

    /// Single-column store backing a `Series`
    pub fn from_values(values: Vec<Scalar>, options: &FrameOptions) -> Result<Self> {
        Self::from_raw_columns(vec![values], default_names(1), options, true)
    }

    /// Assemble a store from already typed parts, checking every invariant
    pub fn from_parts(
        columns: Vec<Column>,
        column_names: Vec<String>,
        index: Index,
        config: Config,
        is_series: bool,
    ) -> Result<Self> {
        if columns.len() != column_names.len() {
            return Err(Error::shape(columns.len(), column_names.len()));
        }
        if is_series && columns.len() != 1 {
            return Err(Error::shape(1, columns.len()));
        }
        if let Some(bad) = columns.iter().find(|c| c.len() != index.len()) {
            return Err(Error::shape(index.len(), bad.len()));
        }
        Ok(ColumnStore {
            columns,
            index,
            column_names,
            config,
            is_series,
            tensor: OnceCell::new(),
        })
    }

    /// New store with the same configuration and kind but different parts
    pub(crate) fn with_parts(&self, columns: Vec<Column>, column_names: Vec<String>, index: Index) -> Result<Self> {
        Self::from_parts(columns, column_names, index, self.config.clone(), self.is_series)
    }

    /// New store replacing only the column buffers
    pub(crate) fn with_columns(&self, columns: Vec<Column>) -> Result<Self> {
        self.with_parts(columns, self.column_names.clone(), self.index.clone())
    }

    pub fn is_series(&self) -> bool {
        self.is_series
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn nrows(&self) -> usize {
        self.index.len()
    }

    pub fn ncols(&self) -> usize {
        self.columns.len()
    }

    /// `(rows, columns)`
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }

    pub fn size(&self) -> usize {
        self.nrows() * self.ncols()
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, pos: usize) -> Result<&Column> {
        self.columns.get(pos).ok_or(Error::IndexOutOfBounds {
            index: pos,
            size: self.columns.len(),
        })
    }

    /// Position of the first column called `name`
    pub fn column_position(&self, name: &str) -> Result<usize> {
        self.column_names
            .iter()
            .position(|n| n == name)
            .ok_or_else(|| Error::LabelNotFound(name.to_string()))
    }

    pub fn dtypes(&self) -> Vec<DType> {
        self.columns.iter().map(Column::dtype).collect()
    }

    /// Row-major dense values
    pub fn values(&self) -> Vec<Vec<Scalar>> {
        let columns: Vec<Vec<Scalar>> = self.columns.iter().map(Column::to_scalars).collect();
        (0..self.nrows())
            .map(|r| columns.iter().map(|c| c[r].clone()).collect())
            .collect()
    }

    /// Dense tensor view of the numeric and boolean columns
    ///
    /// Missing values read as NaN. A `Series` yields a 1-D tensor, a
    /// `DataFrame` a `(rows, columns)` tensor. The view is cached until the
    /// next mutation unless `low_memory_mode` is set.
    pub fn tensor(&self) -> Result<Cow<'_, ArrayD<f64>>> {
        if let Some(cached) = self.tensor.get() {
            return Ok(Cow::Borrowed(cached));
        }
        let built = self.build_tensor()?;
        if self.config.low_memory_mode {
            return Ok(Cow::Owned(built));
        }
        debug!("materialized {:?} tensor view", built.shape());
        Ok(Cow::Borrowed(self.tensor.get_or_init(|| built)))
    }

    pub fn is_tensor_cached(&self) -> bool {
        self.tensor.get().is_some()
    }

    fn build_tensor(&self) -> Result<ArrayD<f64>> {
        let mut arrays = Vec::with_capacity(self.columns.len());
        for (name, column) in self.column_names.iter().zip(&self.columns) {
            let array = column.to_f64_array().ok_or_else(|| {
                Error::TypeMismatch(format!(
                    "column '{}' of dtype {} has no numeric tensor form",
                    name,
                    column.dtype()
                ))
            })?;
            arrays.push(array);
        }
        if self.is_series {
            return Ok(arrays.swap_remove(0).into_dyn());
        }
        Ok(Array2::from_shape_fn(self.shape(), |(r, c)| arrays[c][r]).into_dyn())
    }

    fn invalidate(&mut self) {
        self.tensor.take();
    }

    /// Replace the row index; the label count must equal the row count
    pub fn set_index(&mut self, labels: Vec<Label>) -> Result<()> {
        if labels.len() != self.nrows() {
            return Err(Error::shape(self.nrows(), labels.len()));
        }
        self.index = Index::new(labels).with_name(self.index.name().map(str::to_string));
        self.invalidate();
        Ok(())
    }

    /// Replace the row index with `0..rows`
    pub fn reset_index(&mut self) {
        self.index = Index::range(self.nrows());
        self.invalidate();
    }

    pub fn set_column_names(&mut self, names: Vec<String>) -> Result<()> {
        if names.len() != self.ncols() {
            return Err(Error::shape(self.ncols(), names.len()));
        }
        self.column_names = names;
        self.invalidate();
        Ok(())
    }

    /// Assign column dtypes
    ///
    /// With `infer` the dtypes are re-derived from the stored values and
    /// `dtypes` is ignored; otherwise `dtypes` must name one dtype per column
    /// and the buffers are coerced to them.
    pub fn set_dtypes(&mut self, dtypes: Option<&[DType]>, infer: bool) -> Result<()> {
        let targets: Vec<DType> = if infer {
            self.columns
                .iter()
                .map(|c| infer_dtype(&c.to_scalars(), self.config.dtype_test_lim))
                .collect()
        } else {
            let dtypes = dtypes.ok_or_else(|| {
                Error::InvalidValue("dtypes are required when inference is disabled".to_string())
            })?;
            if dtypes.len() != self.ncols() {
                return Err(Error::shape(self.ncols(), dtypes.len()));
            }
            dtypes.to_vec()
        };
        self.columns = self
            .columns
            .iter()
            .zip(&targets)
            .map(|(c, dtype)| c.cast(*dtype))
            .collect();
        self.invalidate();
        Ok(())
    }

    /// Swap in another store's contents, keeping this store's configuration
    pub(crate) fn replace_with(&mut self, other: ColumnStore) {
        self.columns = other.columns;
        self.index = other.index;
        self.column_names = other.column_names;
        self.invalidate();
    }

    /// Rows at `positions`, in that order
    pub fn take_rows(&self, positions: &[usize]) -> Result<ColumnStore> {
        let columns = self
            .columns
            .iter()
            .map(|c| c.take(positions))
            .collect::<Result<Vec<_>>>()?;
        let index = self.index.take(positions)?;
        self.with_parts(columns, self.column_names.clone(), index)
    }

    /// Columns at `positions`, in that order
    pub fn take_columns(&self, positions: &[usize]) -> Result<ColumnStore> {
        let mut columns = Vec::with_capacity(positions.len());
        let mut names = Vec::with_capacity(positions.len());
        for &pos in positions {
            columns.push(self.column(pos)?.clone());
            names.push(self.column_names[pos].clone());
        }
        Self::from_parts(columns, names, self.index.clone(), self.config.clone(), false)
    }

    /// Insert or replace the column called `name`
    pub(crate) fn put_column(&mut self, name: &str, column: Column) -> Result<()> {
        if column.len() != self.nrows() && !(self.ncols() == 0 && self.nrows() == 0) {
            return Err(Error::shape(self.nrows(), column.len()));
        }
        if self.ncols() == 0 && self.nrows() != column.len() {
            self.index = Index::range(column.len());
        }
        match self.column_names.iter().position(|n| n == name) {
            Some(pos) => self.columns[pos] = column,
            None => {
                self.columns.push(column);
                self.column_names.push(name.to_string());
            }
        }
        self.invalidate();
        Ok(())
    }

    /// First `n` rows, or every row when there are fewer
    pub fn head(&self, n: usize) -> Result<ColumnStore> {
        let positions: Vec<usize> = (0..n.min(self.nrows())).collect();
        self.take_rows(&positions)
    }

    /// Last `n` rows, or every row when there are fewer
    pub fn tail(&self, n: usize) -> Result<ColumnStore> {
        let rows = self.nrows();
        let positions: Vec<usize> = (rows - n.min(rows)..rows).collect();
        self.take_rows(&positions)
    }

    /// `n` distinct rows drawn at random
    ///
    /// A fixed `seed` makes the draw reproducible.
    pub fn sample_rows(&self, n: usize, seed: Option<u64>) -> Result<ColumnStore> {
        let rows = self.nrows();
        if n > rows {
            return Err(Error::InvalidValue(format!(
                "cannot sample {} row(s) from {}",
                n, rows
            )));
        }
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let positions = rand::seq::index::sample(&mut rng, rows, n).into_vec();
        self.take_rows(&positions)
    }
}
