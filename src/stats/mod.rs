//! Numeric reduction kernels shared by `Series` and `DataFrame`.
//!
//! Every kernel receives only the present (non-missing) values of one column
//! or row. Empty input yields `NaN`, except `sum` which yields `0`.

use std::cmp::Ordering;
use std::collections::HashMap;

use ndarray::Array1;

/// Numeric reduction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reduction {
    Sum,
    Mean,
    Median,
    Min,
    Max,
    Std,
    Var,
}

impl Reduction {
    pub fn name(&self) -> &'static str {
        match self {
            Reduction::Sum => "sum",
            Reduction::Mean => "mean",
            Reduction::Median => "median",
            Reduction::Min => "min",
            Reduction::Max => "max",
            Reduction::Std => "std",
            Reduction::Var => "var",
        }
    }

    /// Apply the reduction to present values
    pub fn apply(&self, values: &[f64]) -> f64 {
        let data = Array1::from(values.to_vec());
        match self {
            Reduction::Sum => data.sum(),
            Reduction::Mean => data.mean().unwrap_or(f64::NAN),
            Reduction::Median => median(values),
            Reduction::Min => {
                if data.is_empty() {
                    f64::NAN
                } else {
                    data.fold(f64::INFINITY, |m, &x| m.min(x))
                }
            }
            Reduction::Max => {
                if data.is_empty() {
                    f64::NAN
                } else {
                    data.fold(f64::NEG_INFINITY, |m, &x| m.max(x))
                }
            }
            // Sample statistics need at least two observations
            Reduction::Std if data.len() > 1 => data.std(1.0),
            Reduction::Var if data.len() > 1 => data.var(1.0),
            Reduction::Std | Reduction::Var => f64::NAN,
        }
    }
}

fn total_cmp(a: &f64, b: &f64) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

/// Median of present values
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Every most frequent value, ascending
pub fn modes(values: &[f64]) -> Vec<f64> {
    let mut counts: HashMap<u64, (f64, usize)> = HashMap::new();
    for &v in values {
        // -0.0 and 0.0 count as the same value
        let key = if v == 0.0 { 0.0f64.to_bits() } else { v.to_bits() };
        counts.entry(key).or_insert((v, 0)).1 += 1;
    }
    let best = counts.values().map(|(_, n)| *n).max().unwrap_or(0);
    let mut out: Vec<f64> = counts
        .into_values()
        .filter(|(_, n)| *n == best)
        .map(|(v, _)| v)
        .collect();
    out.sort_by(total_cmp);
    out
}

/// Running accumulation that skips missing (NaN) positions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cumulative {
    Sum,
    Prod,
    Min,
    Max,
}

impl Cumulative {
    pub fn apply(&self, values: &Array1<f64>) -> Array1<f64> {
        let mut acc: Option<f64> = None;
        values.mapv(|x| {
            if x.is_nan() {
                return f64::NAN;
            }
            let next = match (acc, self) {
                (None, _) => x,
                (Some(a), Cumulative::Sum) => a + x,
                (Some(a), Cumulative::Prod) => a * x,
                (Some(a), Cumulative::Min) => a.min(x),
                (Some(a), Cumulative::Max) => a.max(x),
            };
            acc = Some(next);
            next
        })
    }
}

/// Summary rows produced by `describe`, in order
pub const DESCRIBE_ROWS: [&str; 7] = ["count", "mean", "std", "min", "median", "max", "variance"];

/// Summary statistics over present values, in [`DESCRIBE_ROWS`] order
pub fn describe(values: &[f64]) -> Vec<f64> {
    vec![
        values.len() as f64,
        Reduction::Mean.apply(values),
        Reduction::Std.apply(values),
        Reduction::Min.apply(values),
        Reduction::Median.apply(values),
        Reduction::Max.apply(values),
        Reduction::Var.apply(values),
    ]
}
