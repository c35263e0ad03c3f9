use std::cmp::Ordering;
use std::fmt::{self, Display};

use serde_json::{Number, Value};

use crate::index::Label;

/// A single cell value, used for construction input and element output
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
    /// Missing value
    Null,
}

/// Build a `Vec<Scalar>` from heterogeneous literals
///
/// ```
/// use ndframe::{scalars, Scalar};
///
/// let row = scalars![1, "a", true];
/// assert_eq!(row, vec![Scalar::Int(1), Scalar::Str("a".into()), Scalar::Bool(true)]);
/// ```
#[macro_export]
macro_rules! scalars {
    ($($value:expr),* $(,)?) => {
        vec![$($crate::Scalar::from($value)),*]
    };
}

impl Scalar {
    /// `Null` and floating-point NaN are both treated as missing
    pub fn is_missing(&self) -> bool {
        match self {
            Scalar::Null => true,
            Scalar::Float(v) => v.is_nan(),
            _ => false,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Scalar::Int(_) | Scalar::Float(_)) && !self.is_missing()
    }

    /// Numeric view of the value; booleans and strings have none
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Int(v) => Some(*v as f64),
            Scalar::Float(v) if !v.is_nan() => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Scalar::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Natural ordering between two present values of comparable kinds
    ///
    /// Numbers compare numerically, strings lexicographically and booleans as
    /// `false < true`. Missing values and mixed kinds are incomparable.
    pub fn compare(&self, other: &Scalar) -> Option<Ordering> {
        match (self, other) {
            (Scalar::Str(a), Scalar::Str(b)) => Some(a.cmp(b)),
            (Scalar::Bool(a), Scalar::Bool(b)) => Some(a.cmp(b)),
            (Scalar::Int(a), Scalar::Int(b)) => Some(a.cmp(b)),
            _ => match (self.as_f64(), other.as_f64()) {
                (Some(a), Some(b)) => a.partial_cmp(&b),
                _ => None,
            },
        }
    }

    /// Ordering used by sorts: missing values last, then by kind
    pub(crate) fn sort_cmp(&self, other: &Scalar) -> Ordering {
        match (self.is_missing(), other.is_missing()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => self
                .compare(other)
                .unwrap_or_else(|| self.kind_rank().cmp(&other.kind_rank())),
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            Scalar::Bool(_) => 0,
            Scalar::Int(_) | Scalar::Float(_) => 1,
            Scalar::Str(_) => 2,
            Scalar::Null => 3,
        }
    }

    /// Key used for uniqueness checks (`unique`, `value_counts`, duplicates)
    pub(crate) fn hash_key(&self) -> String {
        match self {
            Scalar::Int(v) => format!("n:{}", *v as f64),
            Scalar::Float(v) if v.is_nan() => "null".to_string(),
            // -0.0 and 0.0 share a key
            Scalar::Float(v) if *v == 0.0 => "n:0".to_string(),
            Scalar::Float(v) => format!("n:{}", v),
            Scalar::Str(s) => format!("s:{}", s),
            Scalar::Bool(b) => format!("b:{}", b),
            Scalar::Null => "null".to_string(),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Scalar::Int(v) => Value::from(*v),
            Scalar::Float(v) => Number::from_f64(*v).map(Value::Number).unwrap_or(Value::Null),
            Scalar::Str(s) => Value::String(s.clone()),
            Scalar::Bool(b) => Value::Bool(*b),
            Scalar::Null => Value::Null,
        }
    }
}

impl Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(v) => write!(f, "{}", v),
            Scalar::Float(v) if v.is_nan() => write!(f, "NaN"),
            Scalar::Float(v) => write!(f, "{}", v),
            Scalar::Str(s) => write!(f, "{}", s),
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Null => write!(f, "NaN"),
        }
    }
}

/// Widen an `f32` through its shortest decimal form so `0.1f32` reads back as `0.1`
pub(crate) fn widen_f32(value: f32) -> f64 {
    value.to_string().parse::<f64>().unwrap_or(value as f64)
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Scalar::Int(v as i64)
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::Int(v)
    }
}

impl From<usize> for Scalar {
    fn from(v: usize) -> Self {
        Scalar::Int(v as i64)
    }
}

impl From<f32> for Scalar {
    fn from(v: f32) -> Self {
        Scalar::Float(widen_f32(v))
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Float(v)
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Scalar::Bool(v)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::Str(v.to_string())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Scalar::Str(v)
    }
}

impl<T: Into<Scalar>> From<Option<T>> for Scalar {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Scalar::Null)
    }
}

impl From<Label> for Scalar {
    fn from(label: Label) -> Self {
        match label {
            Label::Int(v) => Scalar::Int(v),
            Label::Str(s) => Scalar::Str(s),
        }
    }
}

impl From<&Value> for Scalar {
    /// Nested arrays and objects are kept as their JSON text
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Scalar::Null,
            Value::Bool(b) => Scalar::Bool(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Scalar::Int(i),
                None => n.as_f64().map(Scalar::Float).unwrap_or(Scalar::Null),
            },
            Value::String(s) => Scalar::Str(s.clone()),
            other => Scalar::Str(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_detection() {
        assert!(Scalar::Null.is_missing());
        assert!(Scalar::Float(f64::NAN).is_missing());
        assert!(!Scalar::Float(f64::INFINITY).is_missing());
        assert!(!Scalar::Str(String::new()).is_missing());
        assert!(!Scalar::Int(0).is_missing());
    }

    #[test]
    fn test_compare_kinds() {
        assert_eq!(Scalar::Int(2).compare(&Scalar::Float(2.5)), Some(Ordering::Less));
        assert_eq!(Scalar::from("b").compare(&Scalar::from("a")), Some(Ordering::Greater));
        assert_eq!(Scalar::Bool(false).compare(&Scalar::Bool(true)), Some(Ordering::Less));
        assert_eq!(Scalar::from("1").compare(&Scalar::Int(1)), None);
        assert_eq!(Scalar::Null.compare(&Scalar::Null), None);
    }

    #[test]
    fn test_hash_key_merges_signed_zero() {
        assert_eq!(Scalar::Float(-0.0).hash_key(), Scalar::Int(0).hash_key());
        assert_eq!(Scalar::Float(0.0).hash_key(), Scalar::Int(0).hash_key());
        assert_ne!(Scalar::Float(0.5).hash_key(), Scalar::Int(0).hash_key());
    }

    #[test]
    fn test_widen_keeps_short_decimal() {
        assert_eq!(Scalar::from(0.1f32), Scalar::Float(0.1));
        assert_eq!(widen_f32(2.5), 2.5);
    }

    #[test]
    fn test_json_conversion() {
        let value: Value = serde_json::json!([1, 2.5, "x", true, null, [1, 2]]);
        let scalars: Vec<Scalar> = value.as_array().unwrap().iter().map(Scalar::from).collect();
        assert_eq!(
            scalars,
            vec![
                Scalar::Int(1),
                Scalar::Float(2.5),
                Scalar::from("x"),
                Scalar::Bool(true),
                Scalar::Null,
                Scalar::from("[1,2]"),
            ]
        );
        assert_eq!(Scalar::Float(f64::NAN).to_json(), Value::Null);
    }
}
