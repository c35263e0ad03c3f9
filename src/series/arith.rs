use super::Series;
use crate::error::Result;
use crate::ops::{binary_op, unary_numeric, Axis, BinaryOp, Operand};
use crate::scalar::Scalar;
use crate::stats::Cumulative;

macro_rules! binary_verbs {
    ($( $(#[$doc:meta])* $verb:ident, $inplace:ident => $op:ident; )*) => {
        impl Series {
            $(
                $(#[$doc])*
                pub fn $verb<'a, O: Into<Operand<'a>>>(&self, other: O) -> Result<Series> {
                    self.binary(other.into(), BinaryOp::$op)
                }

                #[doc = concat!("In-place form of [`Series::", stringify!($verb), "`]")]
                pub fn $inplace<'a, O: Into<Operand<'a>>>(&mut self, other: O) -> Result<()> {
                    let out = Self::$verb(self, other)?;
                    self.store.replace_with(out.store);
                    Ok(())
                }
            )*
        }
    };
}

binary_verbs! {
    /// Elementwise sum with a scalar, array or equal-length series
    add, add_inplace => Add;
    sub, sub_inplace => Sub;
    mul, mul_inplace => Mul;
    /// Elementwise division; the result is always `float32`
    div, div_inplace => Div;
    pow, pow_inplace => Pow;
    /// Elementwise remainder, sign following the dividend
    modulo, modulo_inplace => Mod;
    maximum, maximum_inplace => Maximum;
    minimum, minimum_inplace => Minimum;
    lt, lt_inplace => Lt;
    gt, gt_inplace => Gt;
    le, le_inplace => Le;
    ge, ge_inplace => Ge;
    /// Elementwise inequality; missing pairs are unequal
    ne, ne_inplace => Ne;
    eq, eq_inplace => Eq;
}

impl Series {
    fn binary(&self, other: Operand<'_>, op: BinaryOp) -> Result<Series> {
        Ok(Series {
            store: binary_op(&self.store, &other, op, Axis::Columns)?,
        })
    }

    /// Outcome of comparing every element with `value`; missing reads false
    pub(crate) fn binary_mask(&self, value: Scalar, op: BinaryOp) -> Result<Vec<bool>> {
        let out = self.binary(Operand::Scalar(value), op)?;
        Ok(out.values().iter().map(|v| v.as_bool().unwrap_or(false)).collect())
    }

    fn unary<F>(&self, keep_int: bool, f: F) -> Result<Series>
    where
        F: Fn(&ndarray::Array1<f64>) -> ndarray::Array1<f64>,
    {
        Ok(Series {
            store: unary_numeric(&self.store, keep_int, f)?,
        })
    }

    /// Values rounded to `dp` decimal places
    pub fn round(&self, dp: u32) -> Result<Series> {
        let scale = 10f64.powi(dp as i32);
        self.unary(true, |a| a.mapv(|x| (x * scale).round() / scale))
    }

    pub fn abs(&self) -> Result<Series> {
        self.unary(true, |a| a.mapv(f64::abs))
    }

    /// Running sum; missing positions stay missing and are skipped
    pub fn cum_sum(&self) -> Result<Series> {
        self.unary(true, |a| Cumulative::Sum.apply(a))
    }

    pub fn cum_prod(&self) -> Result<Series> {
        self.unary(true, |a| Cumulative::Prod.apply(a))
    }

    pub fn cum_min(&self) -> Result<Series> {
        self.unary(true, |a| Cumulative::Min.apply(a))
    }

    pub fn cum_max(&self) -> Result<Series> {
        self.unary(true, |a| Cumulative::Max.apply(a))
    }
}

inplace_variants! {
    Series {
        round => round_inplace(dp: u32);
        abs => abs_inplace();
        cum_sum => cum_sum_inplace();
        cum_prod => cum_prod_inplace();
        cum_min => cum_min_inplace();
        cum_max => cum_max_inplace();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtype::DType;
    use crate::error::Error;
    use crate::scalars;

    #[test]
    fn test_series_with_series() {
        let a = Series::new(vec![1, 2, 3]).unwrap();
        let b = Series::new(vec![10, 20, 30]).unwrap();
        assert_eq!(a.add(&b).unwrap().values(), scalars![11, 22, 33]);
        let short = Series::new(vec![1, 2]).unwrap();
        assert!(matches!(a.add(&short), Err(Error::ShapeMismatch { .. })));
    }

    #[test]
    fn test_inplace_failure_leaves_receiver() {
        let mut a = Series::new(vec![1, 2, 3]).unwrap();
        let before = a.clone();
        assert!(a.add_inplace(vec![1, 2]).is_err());
        assert_eq!(a, before);
        a.mul_inplace(2).unwrap();
        assert_eq!(a.values(), scalars![2, 4, 6]);
    }

    #[test]
    fn test_string_series_rejects_arithmetic() {
        let s = Series::new(vec!["a", "b"]).unwrap();
        assert!(matches!(s.add(1), Err(Error::TypeMismatch(_))));
        assert_eq!(s.eq("a").unwrap().values(), scalars![true, false]);
    }

    #[test]
    fn test_round_abs_cumulative() {
        let s = Series::new(vec![Scalar::Float(-1.256), Scalar::Null, Scalar::Float(2.5)]).unwrap();
        let rounded = s.round(1).unwrap().values();
        assert!((rounded[0].as_f64().unwrap() + 1.3).abs() < 1e-6);
        assert_eq!(s.abs().unwrap().dtype(), DType::Float32);

        let ints = Series::new(vec![Scalar::Int(3), Scalar::Null, Scalar::Int(1), Scalar::Int(2)]).unwrap();
        assert_eq!(ints.cum_sum().unwrap().values(), vec![Scalar::Int(3), Scalar::Null, Scalar::Int(4), Scalar::Int(6)]);
        assert_eq!(ints.cum_min().unwrap().values(), vec![Scalar::Int(3), Scalar::Null, Scalar::Int(1), Scalar::Int(1)]);
        assert_eq!(ints.cum_sum().unwrap().dtype(), DType::Int32);
    }
}
