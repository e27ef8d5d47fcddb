use time::{
    format_description::{well_known::Iso8601, BorrowedFormatItem},
    macros::format_description,
    Date, OffsetDateTime, PrimitiveDateTime,
};

use crate::error::InvalidDate;

pub const DEGREE_SYMBOL: &str = "°C";

const DAY_MONTH_YEAR: &[BorrowedFormatItem<'static>] =
    format_description!("[weekday] [day] [month repr:long] [year]");

/// Appends the Celsius symbol. Whole values keep a trailing `.0`.
pub fn format_temperature(temp: f64) -> String {
    if temp.is_finite() && temp.fract() == 0.0 {
        format!("{temp:.1}{DEGREE_SYMBOL}")
    } else {
        format!("{temp}{DEGREE_SYMBOL}")
    }
}

/// Formats an ISO 8601 date like `Tuesday 06 July 2021`.
///
/// Weekday and month names always come out in English, whatever the host
/// locale is.
pub fn convert_date(iso_string: &str) -> Result<String, InvalidDate> {
    let invalid = || InvalidDate {
        input: iso_string.to_string(),
    };
    let date = parse_iso_date(iso_string).ok_or_else(invalid)?;
    date.format(DAY_MONTH_YEAR).map_err(|_| invalid())
}

fn parse_iso_date(s: &str) -> Option<Date> {
    // Expanded years (`+002021`) and ordinal dates (`2021-187`) are refused.
    if s.starts_with(['+', '-']) || is_ordinal(s) {
        return None;
    }

    parse_any(s).or_else(|| {
        // The date-time separator may be any single character, the parser
        // only knows `T`. Dates are 10 chars extended, 8 chars basic.
        [10, 8].into_iter().find_map(|at| {
            let date = s.get(..at)?;
            let mut rest = s.get(at..)?.chars();
            match rest.next()? {
                'T' => None,
                _ => parse_any(&format!("{date}T{}", rest.as_str())),
            }
        })
    })
}

/// Calendar and week dates, with or without a time and offset. Offsets are
/// not applied, we keep the calendar date as written.
fn parse_any(s: &str) -> Option<Date> {
    Date::parse(s, &Iso8601::DEFAULT)
        .ok()
        .or_else(|| {
            PrimitiveDateTime::parse(s, &Iso8601::DEFAULT)
                .ok()
                .map(|datetime| datetime.date())
        })
        .or_else(|| {
            OffsetDateTime::parse(s, &Iso8601::DEFAULT)
                .ok()
                .map(|datetime| datetime.date())
        })
}

fn is_ordinal(s: &str) -> bool {
    let date = s
        .split(|c: char| !c.is_ascii_digit() && c != '-')
        .next()
        .unwrap_or_default();
    match date.split_once('-') {
        Some((year, day)) => year.len() == 4 && day.len() == 3 && !day.contains('-'),
        None => date.len() == 7,
    }
}
