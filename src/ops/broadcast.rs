use ndarray::{Array1, Zip};

use super::{Axis, BinaryOp, Operand};
use crate::column::Column;
use crate::dtype::DType;
use crate::error::{Error, Result};
use crate::na::NA;
use crate::scalar::Scalar;
use crate::storage::ColumnStore;

/// Right-hand side resolved for a single left column
#[derive(Debug, Clone)]
enum Rhs {
    Scalar(Scalar),
    Vector(Vec<Scalar>),
}

/// Resolve `other` into one right-hand side per column of `lhs`
fn resolve(lhs: &ColumnStore, other: &Operand<'_>, axis: Axis) -> Result<Vec<Rhs>> {
    let cols = lhs.ncols();
    match other {
        Operand::Scalar(k) => Ok(vec![Rhs::Scalar(k.clone()); cols]),
        Operand::Array(values) => vector_rhs(lhs, values.clone(), axis),
        Operand::Store(store) if store.is_series() => vector_rhs(lhs, store.column(0)?.to_scalars(), axis),
        Operand::Store(store) => {
            if lhs.is_series() {
                return Err(Error::TypeMismatch(
                    "a Series cannot be combined with a DataFrame".to_string(),
                ));
            }
            if store.shape() != lhs.shape() {
                return Err(Error::shape2(lhs.shape(), store.shape()));
            }
            Ok(store
                .columns()
                .iter()
                .map(|c| Rhs::Vector(c.to_scalars()))
                .collect())
        }
    }
}

fn vector_rhs(lhs: &ColumnStore, values: Vec<Scalar>, axis: Axis) -> Result<Vec<Rhs>> {
    let (rows, cols) = lhs.shape();
    if lhs.is_series() || axis == Axis::Rows {
        if values.len() != rows {
            return Err(Error::shape(rows, values.len()));
        }
        Ok(vec![Rhs::Vector(values); cols])
    } else {
        if values.len() != cols {
            return Err(Error::shape(cols, values.len()));
        }
        Ok(values.into_iter().map(Rhs::Scalar).collect())
    }
}

fn is_int(value: &Scalar) -> bool {
    matches!(value, Scalar::Int(i) if i32::try_from(*i).is_ok())
}

fn numeric_operand(value: &Scalar, op: BinaryOp) -> Result<f64> {
    if value.is_missing() {
        return Ok(f64::NAN);
    }
    value.as_f64().ok_or_else(|| {
        Error::TypeMismatch(format!("cannot {} a numeric column and '{}'", op.name(), value))
    })
}

fn arithmetic(lhs: &Column, rhs: &Rhs, op: BinaryOp) -> Result<Column> {
    let left = lhs
        .to_f64_array()
        .ok_or_else(|| Error::TypeMismatch(format!("{} on a {} column", op.name(), lhs.dtype())))?;
    let (out, rhs_int) = match rhs {
        Rhs::Scalar(k) => {
            let b = numeric_operand(k, op)?;
            (left.mapv(|a| op.apply(a, b)), is_int(k))
        }
        Rhs::Vector(values) => {
            let right = values
                .iter()
                .map(|v| numeric_operand(v, op))
                .collect::<Result<Vec<f64>>>()?;
            let right = Array1::from(right);
            let out = Zip::from(&left)
                .and(&right)
                .map_collect(|&a, &b| op.apply(a, b));
            (out, values.iter().all(|v| v.is_missing() || is_int(v)))
        }
    };
    let prefer_int = lhs.dtype() == DType::Int32 && rhs_int && op != BinaryOp::Div;
    Ok(Column::from_f64(&out, prefer_int))
}

fn comparison(lhs: &Column, rhs: &Rhs, op: BinaryOp) -> Column {
    let left = lhs.to_scalars();
    let out = match rhs {
        Rhs::Scalar(k) => left
            .iter()
            .map(|a| NA::Value(op.test(a.compare(k))))
            .collect(),
        Rhs::Vector(values) => left
            .iter()
            .zip(values)
            .map(|(a, b)| NA::Value(op.test(a.compare(b))))
            .collect(),
    };
    Column::Boolean(out)
}

/// Combine `lhs` with `other` elementwise
///
/// Comparisons produce a boolean column for every input column. Arithmetic
/// touches numeric columns only and carries the others through unchanged;
/// it fails when `lhs` has no numeric column at all. The receiver is never
/// modified.
pub fn binary_op(lhs: &ColumnStore, other: &Operand<'_>, op: BinaryOp, axis: Axis) -> Result<ColumnStore> {
    let rhs = resolve(lhs, other, axis)?;
    let columns = if op.is_comparison() {
        lhs.columns()
            .iter()
            .zip(&rhs)
            .map(|(c, r)| comparison(c, r, op))
            .collect()
    } else {
        if !lhs.dtypes().iter().any(DType::is_numeric) {
            return Err(Error::TypeMismatch(format!(
                "{} requires at least one numeric column",
                op.name()
            )));
        }
        lhs.columns()
            .iter()
            .zip(&rhs)
            .map(|(c, r)| {
                if c.dtype().is_numeric() {
                    arithmetic(c, r, op)
                } else {
                    Ok(c.clone())
                }
            })
            .collect::<Result<Vec<_>>>()?
    };
    lhs.with_columns(columns)
}

/// Map every numeric column through the backend kernel `f`
///
/// Integer columns stay integer when `keep_int` is set and the output allows
/// it. Non-numeric columns are carried through unchanged.
pub fn unary_numeric<F>(lhs: &ColumnStore, keep_int: bool, f: F) -> Result<ColumnStore>
where
    F: Fn(&Array1<f64>) -> Array1<f64>,
{
    if !lhs.dtypes().iter().any(DType::is_numeric) {
        return Err(Error::TypeMismatch(
            "operation requires at least one numeric column".to_string(),
        ));
    }
    let columns = lhs
        .columns()
        .iter()
        .map(|c| match c.to_f64_array() {
            Some(values) if c.dtype().is_numeric() => {
                Column::from_f64(&f(&values), keep_int && c.dtype() == DType::Int32)
            }
            _ => c.clone(),
        })
        .collect();
    lhs.with_columns(columns)
}
