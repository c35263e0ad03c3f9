use ndarray::{Array1, Array2, Axis as NdAxis};

use super::DataFrame;
use crate::column::Column;
use crate::dtype::DType;
use crate::error::{Error, Result};
use crate::ndframe::NDFrame;
use crate::ops::{binary_op, unary_numeric, Axis, BinaryOp, Operand};
use crate::stats::Cumulative;

macro_rules! binary_verbs {
    ($( $(#[$doc:meta])* $verb:ident, $inplace:ident => $op:ident; )*) => {
        impl DataFrame {
            $(
                $(#[$doc])*
                pub fn $verb<'a, O: Into<Operand<'a>>>(&self, other: O, axis: Axis) -> Result<DataFrame> {
                    Ok(DataFrame {
                        store: binary_op(&self.store, &other.into(), BinaryOp::$op, axis)?,
                    })
                }

                #[doc = concat!("In-place form of [`DataFrame::", stringify!($verb), "`]")]
                pub fn $inplace<'a, O: Into<Operand<'a>>>(&mut self, other: O, axis: Axis) -> Result<()> {
                    let out = Self::$verb(self, other, axis)?;
                    self.store.replace_with(out.store);
                    Ok(())
                }
            )*
        }
    };
}

binary_verbs! {
    /// Elementwise sum
    ///
    /// `other` may be a scalar, an array or series (lined up along `axis`)
    /// or a frame of identical shape. Non-numeric columns pass through.
    add, add_inplace => Add;
    sub, sub_inplace => Sub;
    mul, mul_inplace => Mul;
    /// Elementwise division; numeric results are always `float32`
    div, div_inplace => Div;
    pow, pow_inplace => Pow;
    modulo, modulo_inplace => Mod;
    maximum, maximum_inplace => Maximum;
    minimum, minimum_inplace => Minimum;
    /// Elementwise `<` over every column; the result is all boolean
    lt, lt_inplace => Lt;
    gt, gt_inplace => Gt;
    le, le_inplace => Le;
    ge, ge_inplace => Ge;
    ne, ne_inplace => Ne;
    eq, eq_inplace => Eq;
}

impl DataFrame {
    fn unary<F>(&self, f: F) -> Result<DataFrame>
    where
        F: Fn(&Array1<f64>) -> Array1<f64>,
    {
        Ok(DataFrame {
            store: unary_numeric(&self.store, true, f)?,
        })
    }

    /// Numeric values rounded to `dp` decimal places
    pub fn round(&self, dp: u32) -> Result<DataFrame> {
        let scale = 10f64.powi(dp as i32);
        self.unary(|a| a.mapv(|x| (x * scale).round() / scale))
    }

    pub fn abs(&self) -> Result<DataFrame> {
        self.unary(|a| a.mapv(f64::abs))
    }

    fn cumulative(&self, kind: Cumulative, axis: Axis) -> Result<DataFrame> {
        match axis {
            Axis::Columns => self.unary(|a| kind.apply(a)),
            Axis::Rows => self.cumulative_across_rows(kind),
        }
    }

    /// Accumulate along each row over the numeric columns only
    fn cumulative_across_rows(&self, kind: Cumulative) -> Result<DataFrame> {
        let numeric: Vec<usize> = self
            .dtypes()
            .iter()
            .enumerate()
            .filter(|(_, d)| d.is_numeric())
            .map(|(i, _)| i)
            .collect();
        if numeric.is_empty() {
            return Err(Error::TypeMismatch(
                "cumulative operation requires at least one numeric column".to_string(),
            ));
        }
        let columns = self.store.columns();
        let mut grid = Array2::<f64>::from_elem((self.nrows(), numeric.len()), f64::NAN);
        for (j, &pos) in numeric.iter().enumerate() {
            if let Some(values) = columns[pos].to_f64_array() {
                grid.column_mut(j).assign(&values);
            }
        }
        for mut row in grid.axis_iter_mut(NdAxis(0)) {
            let out = kind.apply(&row.to_owned());
            row.assign(&out);
        }
        let mut out = columns.to_vec();
        for (j, &pos) in numeric.iter().enumerate() {
            let keep_int = columns[pos].dtype() == DType::Int32;
            out[pos] = Column::from_f64(&grid.column(j).to_owned(), keep_int);
        }
        Ok(DataFrame {
            store: self.store.with_columns(out)?,
        })
    }

    /// Running sum down each column (`Axis::Columns`) or along each row
    pub fn cum_sum(&self, axis: Axis) -> Result<DataFrame> {
        self.cumulative(Cumulative::Sum, axis)
    }

    pub fn cum_prod(&self, axis: Axis) -> Result<DataFrame> {
        self.cumulative(Cumulative::Prod, axis)
    }

    pub fn cum_min(&self, axis: Axis) -> Result<DataFrame> {
        self.cumulative(Cumulative::Min, axis)
    }

    pub fn cum_max(&self, axis: Axis) -> Result<DataFrame> {
        self.cumulative(Cumulative::Max, axis)
    }
}

inplace_variants! {
    DataFrame {
        round => round_inplace(dp: u32);
        abs => abs_inplace();
        cum_sum => cum_sum_inplace(axis: Axis);
        cum_prod => cum_prod_inplace(axis: Axis);
        cum_min => cum_min_inplace(axis: Axis);
        cum_max => cum_max_inplace(axis: Axis);
    }
}
