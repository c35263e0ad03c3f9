use std::borrow::Cow;
use std::path::Path;

use ndarray::ArrayD;

use crate::config::Config;
use crate::dtype::DType;
use crate::error::Result;
use crate::index::Label;
use crate::io;
use crate::storage::ColumnStore;
use crate::vis;

/// Snapshot of both axes' labels
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabels {
    pub index: Vec<Label>,
    pub columns: Vec<String>,
}

/// Behavior shared by `Series` and `DataFrame`
///
/// Implementors only expose their [`ColumnStore`]; everything else is
/// derived from it.
pub trait NDFrame {
    fn store(&self) -> &ColumnStore;

    fn config(&self) -> &Config {
        self.store().config()
    }

    fn dtypes(&self) -> Vec<DType> {
        self.store().dtypes()
    }

    /// 1 for a `Series`, 2 for a `DataFrame`
    fn ndim(&self) -> usize {
        if self.store().is_series() {
            1
        } else {
            2
        }
    }

    fn axis(&self) -> AxisLabels {
        AxisLabels {
            index: self.index().to_vec(),
            columns: self.column_names().to_vec(),
        }
    }

    fn index(&self) -> &[Label] {
        self.store().index().labels()
    }

    fn column_names(&self) -> &[String] {
        self.store().column_names()
    }

    /// `[rows]` for a `Series`, `[rows, columns]` for a `DataFrame`
    fn shape(&self) -> Vec<usize> {
        let (rows, cols) = self.store().shape();
        if self.store().is_series() {
            vec![rows]
        } else {
            vec![rows, cols]
        }
    }

    fn size(&self) -> usize {
        self.store().size()
    }

    /// Dense numeric view; see [`ColumnStore::tensor`]
    fn tensor(&self) -> Result<Cow<'_, ArrayD<f64>>> {
        self.store().tensor()
    }

    fn to_csv(&self) -> Result<String> {
        io::csv::write_csv(self.store())
    }

    fn to_csv_file<P: AsRef<Path>>(&self, path: P) -> Result<()>
    where
        Self: Sized,
    {
        std::fs::write(path, self.to_csv()?)?;
        Ok(())
    }

    /// Records array, one object per row, keys in column order
    fn to_json(&self) -> Result<String> {
        io::json::write_json(self.store())
    }

    /// Console table bounded by the configured row and column limits
    fn to_table(&self) -> String {
        vis::table::render(self.store())
    }

    fn print(&self) {
        println!("{}", self.to_table());
    }
}
