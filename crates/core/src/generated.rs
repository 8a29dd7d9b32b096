//! Calendar scaffolding lanes that need no dataset file: calendar years,
//! decades, and "age years" anchored on a birth date.

use std::ops::Range;

use chrono::{Datelike, NaiveDate};

use crate::model::Event;
use crate::timefmt::date_ms;

/// One event per calendar year, labeled with the year.
pub fn years(range: Range<i32>) -> Vec<Event> {
    range
        .filter_map(|year| {
            let start = date_ms(year, 1, 1)?;
            let end = date_ms(year, 12, 31)?;
            Some(Event::new(year.to_string(), start, end))
        })
        .collect()
}

/// One event per decade ("1980s", "1990s", …). The range is rounded down to
/// decade starts.
pub fn decades(range: Range<i32>) -> Vec<Event> {
    let first = range.start - range.start.rem_euclid(10);
    (first..range.end)
        .step_by(10)
        .filter_map(|year| {
            let start = date_ms(year, 1, 1)?;
            let end = date_ms(year + 9, 12, 31)?;
            Some(Event::new(format!("{year}s"), start, end))
        })
        .collect()
}

/// One event per year of life, labeled with the age: `[birthday n,
/// birthday n+1)` with the end pulled back a day so consecutive ages do not
/// stack.
pub fn age_years(birth: NaiveDate, count: u32) -> Vec<Event> {
    (0..count)
        .filter_map(|age| {
            let start = anniversary(birth, age as i32)?;
            let end = anniversary(birth, age as i32 + 1)?.pred_opt()?;
            Some(Event::new(
                age.to_string(),
                date_ms(start.year(), start.month(), start.day())?,
                date_ms(end.year(), end.month(), end.day())?,
            ))
        })
        .collect()
}

/// The birthday `years` years after `birth`; Feb 29 birthdays land on
/// Feb 28 in common years.
fn anniversary(birth: NaiveDate, years: i32) -> Option<NaiveDate> {
    let year = birth.year() + years;
    NaiveDate::from_ymd_opt(year, birth.month(), birth.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
}
