//! Element types and the sampling dtype inferencer.

use std::fmt::{self, Display};
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::scalar::Scalar;

/// Element type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DType {
    Float32,
    Int32,
    String,
    Boolean,
    /// Unknown type of an all-missing column
    Undefined,
}

impl DType {
    pub fn is_numeric(&self) -> bool {
        matches!(self, DType::Float32 | DType::Int32)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DType::Float32 => "float32",
            DType::Int32 => "int32",
            DType::String => "string",
            DType::Boolean => "boolean",
            DType::Undefined => "undefined",
        }
    }
}

impl Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "float32" => Ok(DType::Float32),
            "int32" => Ok(DType::Int32),
            "string" => Ok(DType::String),
            "boolean" => Ok(DType::Boolean),
            "undefined" => Ok(DType::Undefined),
            other => Err(Error::InvalidValue(format!("unknown dtype '{}'", other))),
        }
    }
}

#[derive(Debug, Default)]
struct KindTally {
    ints: usize,
    floats: usize,
    strings: usize,
    bools: usize,
}

/// Infer the dtype of one column from at most `limit` leading values
///
/// All-missing samples are `Undefined`; all-integer samples fitting i32 are
/// `Int32`; any other all-numeric sample is `Float32`; all-boolean samples
/// are `Boolean`; everything else degrades to `String`.
pub fn infer_dtype(values: &[Scalar], limit: usize) -> DType {
    let mut tally = KindTally::default();
    for value in values.iter().take(limit) {
        match value {
            v if v.is_missing() => {}
            Scalar::Int(i) if i32::try_from(*i).is_ok() => tally.ints += 1,
            Scalar::Int(_) | Scalar::Float(_) => tally.floats += 1,
            Scalar::Bool(_) => tally.bools += 1,
            Scalar::Str(_) => tally.strings += 1,
            Scalar::Null => {}
        }
    }

    let numeric = tally.ints + tally.floats;
    if numeric + tally.bools + tally.strings == 0 {
        DType::Undefined
    } else if tally.strings == 0 && tally.bools == 0 {
        if tally.floats == 0 {
            DType::Int32
        } else {
            DType::Float32
        }
    } else if tally.strings == 0 && numeric == 0 {
        DType::Boolean
    } else {
        if numeric > 0 || (tally.bools > 0 && tally.strings > 0) {
            debug!(
                "mixed column ({} numeric, {} boolean, {} string) degraded to string",
                numeric, tally.bools, tally.strings
            );
        }
        DType::String
    }
}

/// Infer one dtype per column
pub fn infer_dtypes(columns: &[Vec<Scalar>], limit: usize) -> Vec<DType> {
    columns.iter().map(|col| infer_dtype(col, limit)).collect()
}
