//! Labeled one- and two-dimensional data frames over a typed columnar store.
//!
//! A [`Series`] and a [`DataFrame`] both wrap a [`ColumnStore`]: equal-length
//! typed columns, a row [`Index`] and column names. Column dtypes are inferred
//! from the raw values, missing values share one sentinel ([`NA`]), and
//! binary operators broadcast scalars, arrays, series and frames along an
//! [`Axis`]. The numeric view of a store is an `ndarray` tensor.
//!
//! ```
//! use ndframe::{scalars, Axis, DataFrame, NDFrame};
//!
//! let df = DataFrame::from_rows(vec![scalars![1, 2], scalars![3, 4]]).unwrap();
//! let doubled = df.mul(2, Axis::Columns).unwrap();
//! assert_eq!(doubled.values(), vec![scalars![2, 4], scalars![6, 8]]);
//! assert_eq!(doubled.shape(), vec![2, 2]);
//! ```

#[macro_use]
mod macros;

pub mod column;
pub mod config;
pub mod dataframe;
pub mod dtype;
pub mod error;
pub mod index;
pub mod io;
pub mod na;
pub mod ndframe;
pub mod ops;
pub mod scalar;
pub mod series;
pub mod stats;
pub mod storage;
pub mod vis;

// Re-export commonly used types
pub use column::Column;
pub use config::Config;
pub use dataframe::DataFrame;
pub use dtype::{infer_dtype, DType};
pub use error::{Error, Result};
pub use index::{Index, Label};
pub use na::NA;
pub use ndframe::{AxisLabels, NDFrame};
pub use ops::{Axis, BinaryOp, Operand};
pub use scalar::Scalar;
pub use series::{DateTimeAccessor, Keep, Series, StringAccessor};
pub use storage::{ColumnStore, FrameOptions};

// Export version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
