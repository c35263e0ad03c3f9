use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike};

use super::Series;
use crate::column::Column;
use crate::error::{Error, Result};
use crate::na::NA;

const DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%m/%d/%Y %H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
];

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Parse a date or datetime string in one of the common layouts
///
/// RFC 3339 strings keep their wall-clock time; the offset is dropped.
pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Calendar accessor over a `string` series of dates
///
/// Values are parsed once when the accessor is created.
#[derive(Debug, Clone)]
pub struct DateTimeAccessor<'a> {
    series: &'a Series,
    parsed: Vec<NA<NaiveDateTime>>,
}

impl<'a> DateTimeAccessor<'a> {
    pub fn new(series: &'a Series) -> Result<Self> {
        let cells = match series.column() {
            Column::String(values) => values,
            other => {
                return Err(Error::TypeMismatch(format!(
                    "dt accessor requires a string series of dates, got {}",
                    other.dtype()
                )))
            }
        };
        let mut parsed = Vec::with_capacity(cells.len());
        for cell in cells {
            parsed.push(match cell.value() {
                Some(s) => NA::Value(parse_datetime(s).ok_or_else(|| {
                    Error::TypeMismatch(format!("'{}' is not a date", s))
                })?),
                None => NA::NA,
            });
        }
        Ok(DateTimeAccessor { series, parsed })
    }

    fn ints<F: Fn(&NaiveDateTime) -> i32>(&self, f: F) -> Result<Series> {
        let values = self.parsed.iter().map(|v| v.map(|dt| f(dt))).collect();
        self.series.with_column(Column::Int32(values))
    }

    pub fn year(&self) -> Result<Series> {
        self.ints(|dt| dt.year())
    }

    /// Month, 1 to 12
    pub fn month(&self) -> Result<Series> {
        self.ints(|dt| dt.month() as i32)
    }

    pub fn month_name(&self) -> Result<Series> {
        let values = self
            .parsed
            .iter()
            .map(|v| v.map(|dt| MONTH_NAMES[dt.month0() as usize].to_string()))
            .collect();
        self.series.with_column(Column::String(values))
    }

    /// Day of the month, 1 to 31
    pub fn day(&self) -> Result<Series> {
        self.ints(|dt| dt.day() as i32)
    }

    /// Day of the week, Sunday = 0
    pub fn day_of_week(&self) -> Result<Series> {
        self.ints(|dt| dt.weekday().num_days_from_sunday() as i32)
    }

    pub fn hours(&self) -> Result<Series> {
        self.ints(|dt| dt.hour() as i32)
    }

    pub fn minutes(&self) -> Result<Series> {
        self.ints(|dt| dt.minute() as i32)
    }

    pub fn seconds(&self) -> Result<Series> {
        self.ints(|dt| dt.second() as i32)
    }
}
