//! Non-strict type coercion of BSON values
//!
//! Each function returns `None` for a value it cannot interpret instead of
//! failing; the cleaning step turns a `None` on a mandatory field into a
//! rejection.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use mongodb::bson::Bson;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Coerces a value to a calendar date
///
/// Accepts BSON datetimes and strings in `YYYY-MM-DD`, ISO 8601 datetime
/// (with `T` or space separator) or RFC 3339 form. String datetimes keep
/// the date as written, offset ignored; BSON datetimes use their UTC date.
pub fn coerce_date(value: &Bson) -> Option<NaiveDate> {
    match value {
        Bson::DateTime(dt) => {
            DateTime::from_timestamp_millis(dt.timestamp_millis()).map(|d| d.date_naive())
        }
        Bson::String(s) => parse_date_str(s.trim()),
        _ => None,
    }
}

fn parse_date_str(s: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(s, DATE_FORMAT) {
        return Some(date);
    }

    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(s, format) {
            return Some(datetime.date());
        }
    }

    DateTime::parse_from_rfc3339(s).ok().map(|d| d.date_naive())
}

/// Coerces a value to an integer
///
/// Doubles are truncated toward zero; strings must hold an integer.
/// Booleans, non-finite doubles and every other type give `None`.
pub fn coerce_int(value: &Bson) -> Option<i64> {
    match value {
        Bson::Int32(i) => Some(i64::from(*i)),
        Bson::Int64(i) => Some(*i),
        Bson::Double(f) if f.is_finite() => {
            let truncated = f.trunc();
            if truncated >= i64::MIN as f64 && truncated <= i64::MAX as f64 {
                Some(truncated as i64)
            } else {
                None
            }
        }
        Bson::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Coerces a value to text
///
/// Strings are kept verbatim, numbers and booleans are rendered.
pub fn coerce_string(value: &Bson) -> Option<String> {
    match value {
        Bson::String(s) => Some(s.clone()),
        Bson::Int32(i) => Some(i.to_string()),
        Bson::Int64(i) => Some(i.to_string()),
        Bson::Double(f) => Some(f.to_string()),
        Bson::Boolean(b) => Some(b.to_string()),
        _ => None,
    }
}
