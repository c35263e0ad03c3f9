//! Typed column buffers.
//!
//! Each variant owns one dense buffer of [`NA`] cells; the variant is the
//! column's dtype. Columns are plain values: cloning one deep-copies it.

mod cast;

use ndarray::Array1;
use num_traits::ToPrimitive;

use crate::dtype::DType;
use crate::error::{Error, Result};
use crate::na::NA;
use crate::scalar::{widen_f32, Scalar};

/// A single typed column
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Float32(Vec<NA<f32>>),
    Int32(Vec<NA<i32>>),
    String(Vec<NA<String>>),
    Boolean(Vec<NA<bool>>),
    /// All-missing column of the given length
    Undefined(usize),
}

impl Column {
    pub fn len(&self) -> usize {
        match self {
            Column::Float32(v) => v.len(),
            Column::Int32(v) => v.len(),
            Column::String(v) => v.len(),
            Column::Boolean(v) => v.len(),
            Column::Undefined(len) => *len,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn dtype(&self) -> DType {
        match self {
            Column::Float32(_) => DType::Float32,
            Column::Int32(_) => DType::Int32,
            Column::String(_) => DType::String,
            Column::Boolean(_) => DType::Boolean,
            Column::Undefined(_) => DType::Undefined,
        }
    }

    /// Element at `pos` as a [`Scalar`]; missing cells are `Scalar::Null`
    pub fn get(&self, pos: usize) -> Result<Scalar> {
        if pos >= self.len() {
            return Err(Error::IndexOutOfBounds {
                index: pos,
                size: self.len(),
            });
        }
        Ok(self.scalar_at(pos))
    }

    pub(crate) fn scalar_at(&self, pos: usize) -> Scalar {
        match self {
            Column::Float32(v) => v[pos].map(|x| Scalar::Float(widen_f32(*x))).into_option().unwrap_or(Scalar::Null),
            Column::Int32(v) => v[pos].map(|x| Scalar::Int(*x as i64)).into_option().unwrap_or(Scalar::Null),
            Column::String(v) => v[pos].map(|x| Scalar::Str(x.clone())).into_option().unwrap_or(Scalar::Null),
            Column::Boolean(v) => v[pos].map(|x| Scalar::Bool(*x)).into_option().unwrap_or(Scalar::Null),
            Column::Undefined(_) => Scalar::Null,
        }
    }

    pub fn is_missing(&self, pos: usize) -> bool {
        match self {
            Column::Float32(v) => v.get(pos).map_or(true, NA::is_na),
            Column::Int32(v) => v.get(pos).map_or(true, NA::is_na),
            Column::String(v) => v.get(pos).map_or(true, NA::is_na),
            Column::Boolean(v) => v.get(pos).map_or(true, NA::is_na),
            Column::Undefined(_) => true,
        }
    }

    pub fn to_scalars(&self) -> Vec<Scalar> {
        (0..self.len()).map(|pos| self.scalar_at(pos)).collect()
    }

    /// Per-element missing flags
    pub fn missing_mask(&self) -> Vec<bool> {
        (0..self.len()).map(|pos| self.is_missing(pos)).collect()
    }

    /// Number of present values
    pub fn count(&self) -> usize {
        (0..self.len()).filter(|&pos| !self.is_missing(pos)).count()
    }

    /// Gather the cells at `positions` into a new column
    pub fn take(&self, positions: &[usize]) -> Result<Column> {
        let len = self.len();
        if let Some(&bad) = positions.iter().find(|&&p| p >= len) {
            return Err(Error::IndexOutOfBounds {
                index: bad,
                size: len,
            });
        }
        Ok(match self {
            Column::Float32(v) => Column::Float32(positions.iter().map(|&p| v[p]).collect()),
            Column::Int32(v) => Column::Int32(positions.iter().map(|&p| v[p]).collect()),
            Column::String(v) => Column::String(positions.iter().map(|&p| v[p].clone()).collect()),
            Column::Boolean(v) => Column::Boolean(positions.iter().map(|&p| v[p]).collect()),
            Column::Undefined(_) => Column::Undefined(positions.len()),
        })
    }

    /// Dense `f64` view for the tensor backend: missing cells are NaN,
    /// booleans are 0/1. String columns have no numeric view.
    pub fn to_f64_array(&self) -> Option<Array1<f64>> {
        let values: Vec<f64> = match self {
            Column::Float32(v) => v.iter().map(|x| x.map(|f| *f as f64).into_option().unwrap_or(f64::NAN)).collect(),
            Column::Int32(v) => v.iter().map(|x| x.map(|i| *i as f64).into_option().unwrap_or(f64::NAN)).collect(),
            Column::Boolean(v) => v
                .iter()
                .map(|x| x.map(|b| if *b { 1.0 } else { 0.0 }).into_option().unwrap_or(f64::NAN))
                .collect(),
            Column::String(_) | Column::Undefined(_) => return None,
        };
        Some(Array1::from(values))
    }

    /// Present values of a numeric column, in order
    pub fn present_f64(&self) -> Option<Vec<f64>> {
        if !self.dtype().is_numeric() {
            return None;
        }
        self.to_f64_array()
            .map(|arr| arr.iter().copied().filter(|v| !v.is_nan()).collect())
    }

    /// Build a numeric column from backend output
    ///
    /// NaN becomes missing. With `prefer_int` the result is `Int32` when every
    /// present value is an integer within i32 range, `Float32` otherwise.
    pub fn from_f64(values: &Array1<f64>, prefer_int: bool) -> Column {
        let fits_int = prefer_int
            && values
                .iter()
                .all(|v| v.is_nan() || (v.fract() == 0.0 && v.to_i32().is_some()));
        if fits_int {
            Column::Int32(
                values
                    .iter()
                    .map(|v| if v.is_nan() { NA::NA } else { NA::Value(*v as i32) })
                    .collect(),
            )
        } else {
            Column::Float32(values.iter().map(|v| NA::from_float(*v as f32)).collect())
        }
    }

    /// Same dtype with missing cells replaced by `value`
    ///
    /// A column without missing cells is returned unchanged whatever the fill.
    pub fn fill_missing(&self, value: &Scalar) -> Result<Column> {
        if value.is_missing() || self.count() == self.len() {
            return Ok(self.clone());
        }
        let filled = match self {
            Column::Undefined(len) => vec![value.clone(); *len],
            other => other
                .to_scalars()
                .into_iter()
                .map(|s| if s.is_missing() { value.clone() } else { s })
                .collect(),
        };
        let target = match self.dtype() {
            DType::Undefined => crate::dtype::infer_dtype(std::slice::from_ref(value), 1),
            // an integer column filled with a fraction widens to float
            DType::Int32 if matches!(value, Scalar::Float(f) if f.fract() != 0.0) => DType::Float32,
            dtype => dtype,
        };
        if target.is_numeric() && value.as_f64().is_none() {
            return Err(Error::TypeMismatch(format!(
                "cannot fill a {} column with '{}'",
                target, value
            )));
        }
        Ok(Column::from_scalars(&filled, target))
    }

    /// Column holding `self` followed by `other`
    ///
    /// Differing dtypes are reconciled by re-inferring over the joined values.
    pub fn concat(&self, other: &Column) -> Column {
        match (self, other) {
            (Column::Float32(a), Column::Float32(b)) => Column::Float32(a.iter().chain(b).copied().collect()),
            (Column::Int32(a), Column::Int32(b)) => Column::Int32(a.iter().chain(b).copied().collect()),
            (Column::String(a), Column::String(b)) => Column::String(a.iter().chain(b).cloned().collect()),
            (Column::Boolean(a), Column::Boolean(b)) => Column::Boolean(a.iter().chain(b).copied().collect()),
            _ => {
                let mut values = self.to_scalars();
                values.extend(other.to_scalars());
                let dtype = crate::dtype::infer_dtype(&values, values.len());
                Column::from_scalars(&values, dtype)
            }
        }
    }
}
