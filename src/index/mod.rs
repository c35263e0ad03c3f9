use std::collections::HashMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::scalar::Scalar;

/// A row or column label
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Int(i64),
    Str(String),
}

impl Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Int(v) => write!(f, "{}", v),
            Label::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for Label {
    fn from(v: i64) -> Self {
        Label::Int(v)
    }
}

impl From<i32> for Label {
    fn from(v: i32) -> Self {
        Label::Int(v as i64)
    }
}

impl From<usize> for Label {
    fn from(v: usize) -> Self {
        Label::Int(v as i64)
    }
}

impl From<&str> for Label {
    fn from(v: &str) -> Self {
        Label::Str(v.to_string())
    }
}

impl From<String> for Label {
    fn from(v: String) -> Self {
        Label::Str(v)
    }
}

impl TryFrom<&Scalar> for Label {
    type Error = Error;

    fn try_from(value: &Scalar) -> Result<Self> {
        match value {
            Scalar::Int(v) => Ok(Label::Int(*v)),
            Scalar::Float(v) if v.fract() == 0.0 && v.is_finite() => Ok(Label::Int(*v as i64)),
            Scalar::Str(s) => Ok(Label::Str(s.clone())),
            other => Err(Error::InvalidValue(format!("'{}' cannot be used as a label", other))),
        }
    }
}

/// Ordered label sequence addressing one axis
///
/// Labels need not be unique. The label→positions map is derived from the
/// labels at construction and an `Index` is never edited in place, so the two
/// always agree.
#[derive(Debug, Clone, PartialEq)]
pub struct Index {
    /// Labels in positional order
    labels: Vec<Label>,

    /// Label to every position holding it
    map: HashMap<Label, Vec<usize>>,

    name: Option<String>,
}

impl Index {
    pub fn new<L: Into<Label>>(labels: Vec<L>) -> Self {
        let labels: Vec<Label> = labels.into_iter().map(Into::into).collect();
        let mut map: HashMap<Label, Vec<usize>> = HashMap::with_capacity(labels.len());
        for (pos, label) in labels.iter().enumerate() {
            map.entry(label.clone()).or_default().push(pos);
        }
        Index {
            labels,
            map,
            name: None,
        }
    }

    /// Default `0..len` integer index
    pub fn range(len: usize) -> Self {
        Index::new((0..len).collect::<Vec<usize>>())
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Label at a position
    pub fn get(&self, pos: usize) -> Option<&Label> {
        self.labels.get(pos)
    }

    /// Every position holding `label`, in order
    pub fn positions(&self, label: &Label) -> Option<&[usize]> {
        self.map.get(label).map(|p| p.as_slice())
    }

    /// First position holding `label`
    pub fn get_loc(&self, label: &Label) -> Option<usize> {
        self.positions(label).and_then(|p| p.first().copied())
    }

    /// Resolve labels to positions, failing on the first unknown label
    pub fn locate(&self, labels: &[Label]) -> Result<Vec<usize>> {
        let mut out = Vec::with_capacity(labels.len());
        for label in labels {
            let positions = self
                .positions(label)
                .ok_or_else(|| Error::LabelNotFound(label.to_string()))?;
            out.extend_from_slice(positions);
        }
        Ok(out)
    }

    pub fn contains(&self, label: &Label) -> bool {
        self.map.contains_key(label)
    }

    /// Whether this is exactly the default `0..len` index
    pub fn is_range(&self) -> bool {
        self.labels
            .iter()
            .enumerate()
            .all(|(i, l)| *l == Label::Int(i as i64))
    }

    /// New index from the labels at `positions`
    pub fn take(&self, positions: &[usize]) -> Result<Index> {
        let mut labels = Vec::with_capacity(positions.len());
        for &pos in positions {
            let label = self.labels.get(pos).ok_or(Error::IndexOutOfBounds {
                index: pos,
                size: self.len(),
            })?;
            labels.push(label.clone());
        }
        Ok(Index::new(labels).with_name(self.name.clone()))
    }

    /// New index with `other`'s labels appended
    pub fn concat(&self, other: &[Label]) -> Index {
        let mut labels = self.labels.clone();
        labels.extend_from_slice(other);
        Index::new(labels).with_name(self.name.clone())
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }
}

impl Default for Index {
    fn default() -> Self {
        Index::range(0)
    }
}

impl<L: Into<Label>> FromIterator<L> for Index {
    fn from_iter<I: IntoIterator<Item = L>>(iter: I) -> Self {
        Index::new(iter.into_iter().collect::<Vec<L>>())
    }
}
