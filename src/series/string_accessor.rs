use regex::Regex;

use super::Series;
use crate::column::Column;
use crate::dtype::DType;
use crate::error::{Error, Result};
use crate::na::NA;

/// String accessor for a `string` series
///
/// Every method works element by element and returns a new series with the
/// same name and index. Missing elements stay missing.
#[derive(Debug, Clone, Copy)]
pub struct StringAccessor<'a> {
    series: &'a Series,
}

impl<'a> StringAccessor<'a> {
    pub fn new(series: &'a Series) -> Result<Self> {
        if series.dtype() != DType::String {
            return Err(Error::TypeMismatch(format!(
                "str accessor requires a string series, got {}",
                series.dtype()
            )));
        }
        Ok(StringAccessor { series })
    }

    fn cells(&self) -> &[NA<String>] {
        match self.series.column() {
            Column::String(values) => values,
            _ => &[],
        }
    }

    fn map_str<F: Fn(&str) -> String>(&self, f: F) -> Result<Series> {
        let values = self.cells().iter().map(|v| v.map(|s| f(s))).collect();
        self.series.with_column(Column::String(values))
    }

    fn map_bool<F: Fn(&str) -> bool>(&self, f: F) -> Result<Series> {
        let values = self.cells().iter().map(|v| v.map(|s| f(s))).collect();
        self.series.with_column(Column::Boolean(values))
    }

    pub fn to_lower_case(&self) -> Result<Series> {
        self.map_str(str::to_lowercase)
    }

    pub fn to_upper_case(&self) -> Result<Series> {
        self.map_str(str::to_uppercase)
    }

    /// First character upper case, the rest lower case
    pub fn capitalize(&self) -> Result<Series> {
        self.map_str(capitalize_string)
    }

    /// Length in characters
    pub fn len(&self) -> Result<Series> {
        let values = self
            .cells()
            .iter()
            .map(|v| v.map(|s| s.chars().count() as i32))
            .collect();
        self.series.with_column(Column::Int32(values))
    }

    /// Leading and trailing whitespace removed
    pub fn trim(&self) -> Result<Series> {
        self.map_str(|s| s.trim().to_string())
    }

    /// Whether each element contains `pattern`, as a regex when `regex` is set
    pub fn contains(&self, pattern: &str, regex: bool) -> Result<Series> {
        if regex {
            let re = Regex::new(pattern)?;
            self.map_bool(|s| re.is_match(s))
        } else {
            self.map_bool(|s| s.contains(pattern))
        }
    }

    pub fn starts_with(&self, prefix: &str) -> Result<Series> {
        self.map_bool(|s| s.starts_with(prefix))
    }

    pub fn ends_with(&self, suffix: &str) -> Result<Series> {
        self.map_bool(|s| s.ends_with(suffix))
    }

    /// Every occurrence of `pattern` replaced by `replacement`
    pub fn replace(&self, pattern: &str, replacement: &str) -> Result<Series> {
        self.map_str(|s| s.replace(pattern, replacement))
    }

    /// Part `nth` after splitting on `separator`; missing when absent
    pub fn split(&self, separator: &str, nth: usize) -> Result<Series> {
        let values = self
            .cells()
            .iter()
            .map(|v| match v.value() {
                Some(s) => s.split(separator).nth(nth).map(str::to_string).into(),
                None => NA::NA,
            })
            .collect();
        self.series.with_column(Column::String(values))
    }

    /// `suffix` appended to every element
    pub fn concat(&self, suffix: &str) -> Result<Series> {
        self.map_str(|s| format!("{}{}", s, suffix))
    }
}

/// Capitalize first character of a string
fn capitalize_string(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
    }
}
