use std::cmp::Ordering;
use std::collections::HashSet;

use super::Series;
use crate::column::Column;
use crate::dtype::infer_dtype;
use crate::error::Result;
use crate::na::NA;
use crate::scalar::Scalar;

/// Which occurrence of a duplicated value survives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Keep {
    #[default]
    First,
    Last,
}

/// Stable ordering of `values`, missing last in either direction
pub(crate) fn sorted_positions(values: &[Scalar], ascending: bool) -> Vec<usize> {
    let mut positions: Vec<usize> = (0..values.len()).collect();
    positions.sort_by(|&a, &b| {
        let (x, y) = (&values[a], &values[b]);
        match (x.is_missing(), y.is_missing()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) if ascending => x.sort_cmp(y),
            (false, false) => y.sort_cmp(x),
        }
    });
    positions
}

/// Positions kept when dropping duplicates, in original order
fn distinct_positions(keys: &[String], keep: Keep) -> Vec<usize> {
    let mut seen = HashSet::new();
    let mut kept: Vec<usize> = match keep {
        Keep::First => (0..keys.len()).filter(|&i| seen.insert(&keys[i])).collect(),
        Keep::Last => (0..keys.len()).rev().filter(|&i| seen.insert(&keys[i])).collect(),
    };
    kept.sort_unstable();
    kept
}

impl Series {
    fn rebuilt(&self, values: Vec<Scalar>) -> Result<Series> {
        let dtype = infer_dtype(&values, values.len().max(1));
        self.with_column(Column::from_scalars(&values, dtype))
    }

    /// Boolean series, true where the value is missing
    pub fn is_na(&self) -> Result<Series> {
        let mask = self.column().missing_mask();
        self.with_column(Column::Boolean(mask.into_iter().map(NA::Value).collect()))
    }

    /// Missing values replaced by `value`
    pub fn fill_na<T: Into<Scalar>>(&self, value: T) -> Result<Series> {
        self.with_column(self.column().fill_missing(&value.into())?)
    }

    pub fn fill_na_inplace<T: Into<Scalar>>(&mut self, value: T) -> Result<()> {
        let out = self.fill_na(value)?;
        self.store.replace_with(out.store);
        Ok(())
    }

    /// Missing values removed; surviving labels are kept
    pub fn drop_na(&self) -> Result<Series> {
        let positions: Vec<usize> = self
            .column()
            .missing_mask()
            .iter()
            .enumerate()
            .filter(|(_, missing)| !**missing)
            .map(|(i, _)| i)
            .collect();
        self.iloc(&positions)
    }

    /// Stable sort by value; labels travel with their values
    pub fn sort_values(&self, ascending: bool) -> Result<Series> {
        self.iloc(&sorted_positions(&self.values(), ascending))
    }

    /// Positions that would sort the series ascending
    pub fn arg_sort(&self) -> Result<Series> {
        let positions = sorted_positions(&self.values(), true);
        let column = Column::Int32(positions.into_iter().map(|p| NA::Value(p as i32)).collect());
        self.with_column(column)
    }

    /// Every value equal to `old` replaced by `new`
    pub fn replace<A: Into<Scalar>, B: Into<Scalar>>(&self, old: A, new: B) -> Result<Series> {
        let (old, new) = (old.into(), new.into());
        let key = old.hash_key();
        let values = self
            .values()
            .into_iter()
            .map(|v| if v.hash_key() == key { new.clone() } else { v })
            .collect();
        self.rebuilt(values)
    }

    pub fn replace_inplace<A: Into<Scalar>, B: Into<Scalar>>(&mut self, old: A, new: B) -> Result<()> {
        let out = self.replace(old, new)?;
        self.store.replace_with(out.store);
        Ok(())
    }

    /// Series without repeated values
    pub fn drop_duplicates(&self, keep: Keep) -> Result<Series> {
        let keys: Vec<String> = self.values().iter().map(Scalar::hash_key).collect();
        self.iloc(&distinct_positions(&keys, keep))
    }

    /// `f` applied to every element, missing ones included
    ///
    /// The result dtype is inferred from the produced values.
    pub fn map<F, U>(&self, f: F) -> Result<Series>
    where
        F: Fn(&Scalar) -> U,
        U: Into<Scalar>,
    {
        self.rebuilt(self.values().iter().map(|v| f(v).into()).collect())
    }

    /// `f` applied to present elements; missing ones stay missing
    pub fn apply<F, U>(&self, f: F) -> Result<Series>
    where
        F: Fn(&Scalar) -> U,
        U: Into<Scalar>,
    {
        let values = self
            .values()
            .iter()
            .map(|v| if v.is_missing() { Scalar::Null } else { f(v).into() })
            .collect();
        self.rebuilt(values)
    }
}

inplace_variants! {
    Series {
        drop_na => drop_na_inplace();
        sort_values => sort_values_inplace(ascending: bool);
        drop_duplicates => drop_duplicates_inplace(keep: Keep);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtype::DType;
    use crate::index::Label;
    use crate::ndframe::NDFrame;
    use crate::scalars;

    #[test]
    fn test_fill_and_drop() {
        let s = Series::new(vec![Scalar::Float(1.0), Scalar::Float(f64::NAN), Scalar::Float(4.0)]).unwrap();
        assert_eq!(s.is_na().unwrap().values(), scalars![false, true, false]);
        assert_eq!(s.fill_na(0.0).unwrap().values(), scalars![1.0, 0.0, 4.0]);
        let dropped = s.drop_na().unwrap();
        assert_eq!(dropped.index(), &[Label::Int(0), Label::Int(2)]);
    }

    #[test]
    fn test_sort_is_stable_with_missing_last() {
        let s = Series::new(vec![Scalar::Int(2), Scalar::Null, Scalar::Int(1), Scalar::Int(2)]).unwrap();
        let asc = s.sort_values(true).unwrap();
        assert_eq!(asc.index(), &[Label::Int(2), Label::Int(0), Label::Int(3), Label::Int(1)]);
        let desc = s.sort_values(false).unwrap();
        assert_eq!(desc.index(), &[Label::Int(0), Label::Int(3), Label::Int(2), Label::Int(1)]);
        assert_eq!(s.arg_sort().unwrap().values(), scalars![2, 0, 3, 1]);
    }

    #[test]
    fn test_replace_reinfers() {
        let s = Series::new(vec![1, 2, 1]).unwrap();
        assert_eq!(s.replace(1, 10).unwrap().values(), scalars![10, 2, 10]);
        let mixed = s.replace(2, "two").unwrap();
        assert_eq!(mixed.dtype(), DType::String);
    }

    #[test]
    fn test_drop_duplicates_keep() {
        let s = Series::new(vec!["a", "b", "a"]).unwrap();
        assert_eq!(s.drop_duplicates(Keep::First).unwrap().index(), &[Label::Int(0), Label::Int(1)]);
        assert_eq!(s.drop_duplicates(Keep::Last).unwrap().index(), &[Label::Int(1), Label::Int(2)]);
    }

    #[test]
    fn test_map_and_apply() {
        let s = Series::new(vec![Scalar::Int(1), Scalar::Null]).unwrap();
        let mapped = s.map(|v| v.is_missing()).unwrap();
        assert_eq!(mapped.values(), scalars![false, true]);
        let applied = s.apply(|v| v.as_f64().unwrap_or(0.0) * 1.5).unwrap();
        assert_eq!(applied.values(), vec![Scalar::Float(1.5), Scalar::Null]);
    }
}
