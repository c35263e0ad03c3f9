use std::collections::HashSet;

use log::debug;

use super::DataFrame;
use crate::column::Column;
use crate::dtype::{infer_dtype, DType};
use crate::error::{Error, Result};
use crate::index::{Index, Label};
use crate::na::NA;
use crate::ndframe::NDFrame;
use crate::ops::Axis;
use crate::scalar::Scalar;
use crate::storage::FrameOptions;

impl DataFrame {
    /// Boolean frame, true where a cell is missing
    pub fn is_na(&self) -> Result<DataFrame> {
        let columns = self
            .store
            .columns()
            .iter()
            .map(|c| Column::Boolean(c.missing_mask().into_iter().map(NA::Value).collect()))
            .collect();
        Ok(DataFrame {
            store: self.store.with_columns(columns)?,
        })
    }

    /// Positions of rows holding at least one missing cell
    pub fn nan_index(&self) -> Vec<usize> {
        let masks: Vec<Vec<bool>> = self.store.columns().iter().map(Column::missing_mask).collect();
        (0..self.nrows())
            .filter(|&r| masks.iter().any(|m| m[r]))
            .collect()
    }

    /// Missing cells of every column replaced by `value`
    ///
    /// Numeric columns cannot be filled with a non-numeric value.
    pub fn fill_na<T: Into<Scalar>>(&self, value: T) -> Result<DataFrame> {
        let value = value.into();
        let columns = self
            .store
            .columns()
            .iter()
            .map(|c| c.fill_missing(&value))
            .collect::<Result<Vec<_>>>()?;
        Ok(DataFrame {
            store: self.store.with_columns(columns)?,
        })
    }

    pub fn fill_na_inplace<T: Into<Scalar>>(&mut self, value: T) -> Result<()> {
        let out = self.fill_na(value)?;
        self.store.replace_with(out.store);
        Ok(())
    }

    /// Missing cells of column `columns[i]` replaced by `values[i]`
    pub fn fill_na_columns(&self, columns: &[&str], values: Vec<Scalar>) -> Result<DataFrame> {
        if columns.len() != values.len() {
            return Err(Error::shape(columns.len(), values.len()));
        }
        let mut out = self.store.columns().to_vec();
        for (name, value) in columns.iter().zip(&values) {
            let pos = self.store.column_position(name)?;
            out[pos] = out[pos].fill_missing(value)?;
        }
        Ok(DataFrame {
            store: self.store.with_columns(out)?,
        })
    }

    /// Rows (`Axis::Rows`) or columns (`Axis::Columns`) holding a missing
    /// cell removed
    pub fn drop_na(&self, axis: Axis) -> Result<DataFrame> {
        match axis {
            Axis::Rows => {
                let missing: HashSet<usize> = self.nan_index().into_iter().collect();
                let keep: Vec<usize> = (0..self.nrows()).filter(|r| !missing.contains(r)).collect();
                self.iloc(&keep)
            }
            Axis::Columns => {
                let keep: Vec<usize> = self
                    .store
                    .columns()
                    .iter()
                    .enumerate()
                    .filter(|(_, c)| c.count() == c.len())
                    .map(|(i, _)| i)
                    .collect();
                Ok(DataFrame {
                    store: self.store.take_columns(&keep)?,
                })
            }
        }
    }

    /// Cells equal to `old` replaced by `new`, in `columns` or everywhere
    ///
    /// Touched columns have their dtype re-inferred.
    pub fn replace<A, B>(&self, old: A, new: B, columns: Option<&[&str]>) -> Result<DataFrame>
    where
        A: Into<Scalar>,
        B: Into<Scalar>,
    {
        let (old, new) = (old.into(), new.into());
        let key = old.hash_key();
        let targets: Vec<usize> = match columns {
            Some(names) => names
                .iter()
                .map(|n| self.store.column_position(n))
                .collect::<Result<Vec<_>>>()?,
            None => (0..self.ncols()).collect(),
        };
        let mut out = self.store.columns().to_vec();
        for pos in targets {
            let values: Vec<Scalar> = out[pos]
                .to_scalars()
                .into_iter()
                .map(|v| if v.hash_key() == key { new.clone() } else { v })
                .collect();
            let dtype = infer_dtype(&values, values.len().max(1));
            out[pos] = Column::from_scalars(&values, dtype);
        }
        Ok(DataFrame {
            store: self.store.with_columns(out)?,
        })
    }

    /// Copy with column `name` converted to `dtype`
    pub fn as_type(&self, name: &str, dtype: DType) -> Result<DataFrame> {
        let pos = self.store.column_position(name)?;
        let mut out = self.store.columns().to_vec();
        out[pos] = out[pos].cast(dtype);
        Ok(DataFrame {
            store: self.store.with_columns(out)?,
        })
    }

    /// Rows become columns; dtypes are re-inferred
    pub fn transpose(&self) -> Result<DataFrame> {
        let raw = self.values();
        let names: Vec<String> = self.index().iter().map(Label::to_string).collect();
        let labels: Vec<Label> = self.column_names().iter().cloned().map(Label::from).collect();
        let options = FrameOptions::new().index(labels).config(self.config().clone());
        debug!("transposing {}x{} frame", self.nrows(), self.ncols());
        Ok(DataFrame {
            store: crate::storage::ColumnStore::from_raw_columns(raw, names, &options, false)?,
        })
    }

    /// Labels renamed through `mapper`
    ///
    /// `Axis::Columns` renames columns; `Axis::Rows` renames row labels whose
    /// text matches. Names absent from the axis are ignored.
    pub fn rename(&self, mapper: &[(&str, &str)], axis: Axis) -> Result<DataFrame> {
        let lookup = |name: &str| mapper.iter().find(|(from, _)| *from == name).map(|(_, to)| *to);
        let mut store = self.store.clone();
        match axis {
            Axis::Columns => {
                let names = self
                    .column_names()
                    .iter()
                    .map(|n| lookup(n.as_str()).map(str::to_string).unwrap_or_else(|| n.clone()))
                    .collect();
                store.set_column_names(names)?;
            }
            Axis::Rows => {
                let labels = self
                    .index()
                    .iter()
                    .map(|l| match lookup(l.to_string().as_str()) {
                        Some(to) => Label::from(to),
                        None => l.clone(),
                    })
                    .collect();
                store.set_index(labels)?;
            }
        }
        Ok(DataFrame { store })
    }

    /// Copy extended with `rows` labeled by `labels`
    ///
    /// Each row must have one value per column.
    pub fn append<L: Into<Label>>(&self, rows: Vec<Vec<Scalar>>, labels: Vec<L>) -> Result<DataFrame> {
        if rows.len() != labels.len() {
            return Err(Error::shape(rows.len(), labels.len()));
        }
        let tail = crate::storage::ColumnStore::from_rows(
            rows,
            &FrameOptions::new()
                .columns(self.column_names().to_vec())
                .config(self.config().clone()),
        )?;
        let columns: Vec<Column> = self
            .store
            .columns()
            .iter()
            .zip(tail.columns())
            .map(|(head, tail)| head.concat(tail))
            .collect();
        let labels: Vec<Label> = labels.into_iter().map(Into::into).collect();
        let index: Index = self.store.index().concat(&labels);
        Ok(DataFrame {
            store: self
                .store
                .with_parts(columns, self.column_names().to_vec(), index)?,
        })
    }

    pub fn append_inplace<L: Into<Label>>(&mut self, rows: Vec<Vec<Scalar>>, labels: Vec<L>) -> Result<()> {
        let out = self.append(rows, labels)?;
        self.store.replace_with(out.store);
        Ok(())
    }

    /// Copy without the columns called `names`
    pub fn drop_columns(&self, names: &[&str]) -> Result<DataFrame> {
        let drop = names
            .iter()
            .map(|n| self.store.column_position(n))
            .collect::<Result<HashSet<_>>>()?;
        let keep: Vec<usize> = (0..self.ncols()).filter(|p| !drop.contains(p)).collect();
        Ok(DataFrame {
            store: self.store.take_columns(&keep)?,
        })
    }

    /// Copy without the rows carrying `labels`
    pub fn drop_index<L: Into<Label> + Clone>(&self, labels: &[L]) -> Result<DataFrame> {
        let labels: Vec<Label> = labels.iter().cloned().map(Into::into).collect();
        let drop: HashSet<usize> = self.store.index().locate(&labels)?.into_iter().collect();
        let keep: Vec<usize> = (0..self.nrows()).filter(|p| !drop.contains(p)).collect();
        self.iloc(&keep)
    }
}

inplace_variants! {
    DataFrame {
        is_na => is_na_inplace();
        fill_na_columns => fill_na_columns_inplace(columns: &[&str], values: Vec<Scalar>);
        drop_na => drop_na_inplace(axis: Axis);
        as_type => as_type_inplace(name: &str, dtype: DType);
        rename => rename_inplace(mapper: &[(&str, &str)], axis: Axis);
        drop_columns => drop_columns_inplace(names: &[&str]);
    }
}

impl DataFrame {
    pub fn replace_inplace<A, B>(&mut self, old: A, new: B, columns: Option<&[&str]>) -> Result<()>
    where
        A: Into<Scalar>,
        B: Into<Scalar>,
    {
        let out = self.replace(old, new, columns)?;
        self.store.replace_with(out.store);
        Ok(())
    }

    pub fn drop_index_inplace<L: Into<Label> + Clone>(&mut self, labels: &[L]) -> Result<()> {
        let out = self.drop_index(labels)?;
        self.store.replace_with(out.store);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalars;

    fn holes() -> DataFrame {
        DataFrame::from_rows_with(
            vec![
                vec![Scalar::Int(1), Scalar::Null, Scalar::from("a")],
                vec![Scalar::Int(2), Scalar::Float(3.5), Scalar::Null],
                vec![Scalar::Int(3), Scalar::Float(4.5), Scalar::from("c")],
            ],
            FrameOptions::new().columns(vec!["a", "b", "c"]),
        )
        .unwrap()
    }

    #[test]
    fn test_missing_helpers() {
        let df = holes();
        assert_eq!(df.nan_index(), vec![0, 1]);
        assert_eq!(df.is_na().unwrap().values()[0], scalars![false, true, false]);
        assert_eq!(df.drop_na(Axis::Rows).unwrap().index(), &[Label::Int(2)]);
        assert_eq!(df.drop_na(Axis::Columns).unwrap().column_names(), &["a"]);
    }

    #[test]
    fn test_fill_na_columns() {
        let df = holes();
        let filled = df.fill_na_columns(&["b", "c"], scalars![0.5, "z"]).unwrap();
        assert!(filled.nan_index().is_empty());
        assert!(matches!(df.fill_na("x"), Err(Error::TypeMismatch(_))));
        assert!(df.fill_na_columns(&["nope"], scalars![1]).is_err());
    }

    #[test]
    fn test_transpose_and_rename() {
        let df = DataFrame::from_rows_with(
            vec![scalars![1, 2], scalars![3, 4]],
            FrameOptions::new().columns(vec!["x", "y"]),
        )
        .unwrap();
        let t = df.transpose().unwrap();
        assert_eq!(t.values(), vec![scalars![1, 3], scalars![2, 4]]);
        assert_eq!(t.index(), &[Label::from("x"), Label::from("y")]);
        assert_eq!(t.column_names(), &["0", "1"]);

        let renamed = df.rename(&[("x", "left")], Axis::Columns).unwrap();
        assert_eq!(renamed.column_names(), &["left", "y"]);
        let rows = df.rename(&[("1", "second")], Axis::Rows).unwrap();
        assert_eq!(rows.index(), &[Label::Int(0), Label::from("second")]);
    }

    #[test]
    fn test_append_and_drop() {
        let mut df = holes();
        df.append_inplace(vec![scalars![4, 5.5, "d"]], vec!["n"]).unwrap();
        assert_eq!(df.shape(), vec![4, 3]);
        assert!(df.append(vec![scalars![1]], vec![9]).is_err());

        let fewer = df.drop_index(&["n"]).unwrap();
        assert_eq!(fewer.nrows(), 3);
        let narrow = df.drop_columns(&["b"]).unwrap();
        assert_eq!(narrow.column_names(), &["a", "c"]);
        assert!(matches!(df.drop_columns(&["zz"]), Err(Error::LabelNotFound(_))));
    }

    #[test]
    fn test_replace_and_as_type() {
        let df = holes();
        let out = df.replace("a", "A", Some(&["c"])).unwrap();
        assert_eq!(out.values()[0][2], Scalar::from("A"));
        let cast = df.as_type("a", DType::String).unwrap();
        assert_eq!(cast.dtypes()[0], DType::String);
    }
}
