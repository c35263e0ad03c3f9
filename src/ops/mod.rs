//! Elementwise binary operators and the operand forms they accept.

mod broadcast;

use std::cmp::Ordering;

pub use broadcast::{binary_op, unary_numeric};

use crate::scalar::Scalar;
use crate::storage::ColumnStore;

/// Direction used by broadcasting and reductions
///
/// `Columns` (1) lines a vector up with the columns: value *j* applies to
/// column *j*, and reductions yield one value per column. `Rows` (0) lines a
/// vector up with the rows and reduces each row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    Rows = 0,
    #[default]
    Columns = 1,
}

impl TryFrom<usize> for Axis {
    type Error = crate::error::Error;

    fn try_from(value: usize) -> crate::error::Result<Self> {
        match value {
            0 => Ok(Axis::Rows),
            1 => Ok(Axis::Columns),
            other => Err(crate::error::Error::InvalidValue(format!("axis must be 0 or 1, got {}", other))),
        }
    }
}

/// Elementwise binary operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Mod,
    Maximum,
    Minimum,
    Lt,
    Gt,
    Le,
    Ge,
    Ne,
    Eq,
}

impl BinaryOp {
    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            BinaryOp::Lt | BinaryOp::Gt | BinaryOp::Le | BinaryOp::Ge | BinaryOp::Ne | BinaryOp::Eq
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            BinaryOp::Add => "add",
            BinaryOp::Sub => "sub",
            BinaryOp::Mul => "mul",
            BinaryOp::Div => "div",
            BinaryOp::Pow => "pow",
            BinaryOp::Mod => "mod",
            BinaryOp::Maximum => "maximum",
            BinaryOp::Minimum => "minimum",
            BinaryOp::Lt => "lt",
            BinaryOp::Gt => "gt",
            BinaryOp::Le => "le",
            BinaryOp::Ge => "ge",
            BinaryOp::Ne => "ne",
            BinaryOp::Eq => "eq",
        }
    }

    /// Arithmetic kernel; NaN in either operand stays NaN
    fn apply(&self, a: f64, b: f64) -> f64 {
        if a.is_nan() || b.is_nan() {
            return f64::NAN;
        }
        match self {
            BinaryOp::Add => a + b,
            BinaryOp::Sub => a - b,
            BinaryOp::Mul => a * b,
            BinaryOp::Div => a / b,
            BinaryOp::Pow => a.powf(b),
            BinaryOp::Mod => a % b,
            BinaryOp::Maximum => a.max(b),
            BinaryOp::Minimum => a.min(b),
            _ => f64::NAN,
        }
    }

    /// Comparison kernel; incomparable pairs are unequal
    fn test(&self, ordering: Option<Ordering>) -> bool {
        match (self, ordering) {
            (BinaryOp::Ne, None) => true,
            (_, None) => false,
            (BinaryOp::Lt, Some(o)) => o == Ordering::Less,
            (BinaryOp::Gt, Some(o)) => o == Ordering::Greater,
            (BinaryOp::Le, Some(o)) => o != Ordering::Greater,
            (BinaryOp::Ge, Some(o)) => o != Ordering::Less,
            (BinaryOp::Ne, Some(o)) => o != Ordering::Equal,
            (BinaryOp::Eq, Some(o)) => o == Ordering::Equal,
            _ => false,
        }
    }
}

/// Right-hand side of a binary operation
#[derive(Debug, Clone)]
pub enum Operand<'a> {
    /// Broadcast to every element
    Scalar(Scalar),
    /// Positional vector
    Array(Vec<Scalar>),
    /// Another Series' or DataFrame's store
    Store(&'a ColumnStore),
}

macro_rules! impl_scalar_operand {
    ($($t:ty),*) => {
        $(
            impl<'a> From<$t> for Operand<'a> {
                fn from(value: $t) -> Self {
                    Operand::Scalar(Scalar::from(value))
                }
            }
        )*
    };
}

impl_scalar_operand!(i32, i64, f32, f64, bool, &str, String);

impl<'a> From<Scalar> for Operand<'a> {
    fn from(value: Scalar) -> Self {
        Operand::Scalar(value)
    }
}

impl<'a> From<Vec<Scalar>> for Operand<'a> {
    fn from(values: Vec<Scalar>) -> Self {
        Operand::Array(values)
    }
}

impl<'a> From<Vec<f64>> for Operand<'a> {
    fn from(values: Vec<f64>) -> Self {
        Operand::Array(values.into_iter().map(Scalar::Float).collect())
    }
}

impl<'a> From<Vec<i32>> for Operand<'a> {
    fn from(values: Vec<i32>) -> Self {
        Operand::Array(values.into_iter().map(Scalar::from).collect())
    }
}

impl<'a> From<&'a ColumnStore> for Operand<'a> {
    fn from(store: &'a ColumnStore) -> Self {
        Operand::Store(store)
    }
}
