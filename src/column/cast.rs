use log::warn;
use num_traits::ToPrimitive;

use super::Column;
use crate::dtype::DType;
use crate::na::NA;
use crate::scalar::Scalar;

fn to_f32(value: &Scalar) -> Option<f32> {
    match value {
        Scalar::Int(v) => Some(*v as f32),
        Scalar::Float(v) if !v.is_nan() => Some(*v as f32),
        Scalar::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Scalar::Str(s) => s.trim().parse::<f64>().ok().map(|v| v as f32),
        _ => None,
    }
}

fn to_i32(value: &Scalar) -> Option<i32> {
    match value {
        Scalar::Int(v) => v.to_i32(),
        Scalar::Float(v) if v.is_finite() => v.trunc().to_i32(),
        Scalar::Bool(b) => Some(*b as i32),
        Scalar::Str(s) => {
            let s = s.trim();
            s.parse::<i32>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().filter(|v| v.is_finite()).and_then(|v| v.trunc().to_i32()))
        }
        _ => None,
    }
}

fn to_bool(value: &Scalar) -> Option<bool> {
    match value {
        Scalar::Bool(b) => Some(*b),
        Scalar::Int(v) => Some(*v != 0),
        Scalar::Float(v) if !v.is_nan() => Some(*v != 0.0),
        Scalar::Str(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

fn coerce<T, F>(values: &[Scalar], dtype: DType, convert: F) -> Vec<NA<T>>
where
    F: Fn(&Scalar) -> Option<T>,
{
    let mut lossy = 0usize;
    let out = values
        .iter()
        .map(|v| {
            if v.is_missing() {
                return NA::NA;
            }
            match convert(v) {
                Some(x) => NA::Value(x),
                None => {
                    lossy += 1;
                    NA::NA
                }
            }
        })
        .collect();
    if lossy > 0 {
        warn!("{} value(s) could not be represented as {} and became missing", lossy, dtype);
    }
    out
}

impl Column {
    /// Build a column of `dtype` from raw values, coercing each one
    ///
    /// Values that cannot be represented in `dtype` become missing.
    pub fn from_scalars(values: &[Scalar], dtype: DType) -> Column {
        match dtype {
            DType::Float32 => Column::Float32(coerce(values, dtype, to_f32)),
            DType::Int32 => Column::Int32(coerce(values, dtype, to_i32)),
            DType::Boolean => Column::Boolean(coerce(values, dtype, to_bool)),
            DType::String => Column::String(coerce(values, dtype, |v| Some(v.to_string()))),
            DType::Undefined => {
                if values.iter().any(|v| !v.is_missing()) {
                    warn!("present values dropped while building an undefined column");
                }
                Column::Undefined(values.len())
            }
        }
    }

    /// Re-type the column, coercing every value
    pub fn cast(&self, dtype: DType) -> Column {
        if self.dtype() == dtype {
            return self.clone();
        }
        Column::from_scalars(&self.to_scalars(), dtype)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalars;

    #[test]
    fn test_numeric_strings_parse() {
        let col = Column::from_scalars(&scalars!["1", " 2.5 ", "x"], DType::Float32);
        assert_eq!(col.to_scalars(), vec![Scalar::Float(1.0), Scalar::Float(2.5), Scalar::Null]);
        let col = Column::from_scalars(&scalars!["7", "2.9"], DType::Int32);
        assert_eq!(col.to_scalars(), scalars![7, 2]);
    }

    #[test]
    fn test_cast_to_string_and_bool() {
        let col = Column::from_scalars(&scalars![1, 0], DType::Int32);
        assert_eq!(col.cast(DType::Boolean).to_scalars(), scalars![true, false]);
        assert_eq!(col.cast(DType::String).to_scalars(), scalars!["1", "0"]);
        let col = Column::from_scalars(&[Scalar::Null, Scalar::from("TRUE")], DType::Boolean);
        assert_eq!(col.to_scalars(), vec![Scalar::Null, Scalar::Bool(true)]);
    }

    #[test]
    fn test_out_of_range_int_is_missing() {
        let col = Column::from_scalars(&[Scalar::Int(i64::MAX)], DType::Int32);
        assert_eq!(col.to_scalars(), vec![Scalar::Null]);
    }
}
