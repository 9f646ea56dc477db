use std::ops::Index;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ISO_DATE_TIME_REGEX: Regex = Regex::new(
        r"^(\d{4})-(\d{2})-(\d{2})(?:[T ](\d{2}):(\d{2})(?::(\d{2})(?:\.\d{1,6})?)?)?$"
    ).unwrap();
}

fn to_int<T: std::str::FromStr>(num_str: &str, date_str: &str) -> Result<T, String> {
    match num_str.parse::<T>() {
        Ok(x) => Ok(x),
        Err(_) => Err(format!("Error parsing {} from the date {}", num_str, date_str)),
    }
}

/// Parses `YYYY-MM-DD`, optionally followed by `THH:MM[:SS[.fff]]` (a space works as separator too).
/// A missing time part means midnight.
pub fn parse_iso_date_time(buf: &str) -> Result<NaiveDateTime, String> {
    let Some(caps) = ISO_DATE_TIME_REGEX.captures(buf) else {
        return Err(format!("Unable to parse date time {}", buf));
    };

    let to_i32 = |num_str: &str| to_int::<i32>(num_str, buf);
    let to_u32 = |num_str: &str| to_int::<u32>(num_str, buf);

    let y: i32 = to_i32(caps.index(1))?;
    let m: u32 = to_u32(caps.index(2))?;
    let d: u32 = to_u32(caps.index(3))?;
    let h: u32 = caps.get(4).map_or(Ok(0), |x| to_u32(x.as_str()))?;
    let mn: u32 = caps.get(5).map_or(Ok(0), |x| to_u32(x.as_str()))?;
    let s: u32 = caps.get(6).map_or(Ok(0), |x| to_u32(x.as_str()))?;

    let Some(date) = NaiveDate::from_ymd_opt(y, m, d) else {
        return Err(format!("Invalid calendar date {}", buf));
    };
    let Some(time) = NaiveTime::from_hms_opt(h, mn, s) else {
        return Err(format!("Invalid time of day {}", buf));
    };

    Ok(NaiveDateTime::new(date, time))
}

/// Strict `YYYY-MM-DD` calendar date, no time part allowed
pub fn parse_calendar_date(buf: &str) -> Option<NaiveDate> {
    if buf.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(buf, "%Y-%m-%d").ok()
}

/// `2024-03-05` becomes `5 March 2024`. Anything unparseable is returned as is.
pub fn format_display_date(date_str: &str) -> String {
    match parse_iso_date_time(date_str) {
        Ok(date_time) => format!("{} {}", date_time.day(), date_time.format("%B %Y")),
        Err(_) => date_str.to_string(),
    }
}

pub fn escape_html(value: &str) -> String {
    htmlescape::encode_minimal(value)
}

/// Prefixes every line of a (pretty printed) JSON document so it lines up inside a `<script>` block
pub fn indent_json(json: &str, spaces: usize) -> String {
    let indent = " ".repeat(spaces);
    json.lines()
        .map(|line| format!("{}{}", indent, line))
        .collect::<Vec<_>>()
        .join("\n")
}
