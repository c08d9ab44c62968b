//! Parsing of `year-month-day` dates and the one-year lookback.

use chrono::NaiveDate;

use crate::error::Error;

/// Calendar years a date may fall in.
const YEARS: std::ops::RangeInclusive<i32> = 1..=9999;

/// Components above this value are taken to be the year and stepped back by one.
const ROLLOVER_THRESHOLD: i32 = 31;

/// Split `Y-M-D` into its integer components.
fn components(input: &str) -> Result<Vec<i32>, Error> {
    input
        .split('-')
        .map(|part| {
            part.trim()
                .parse::<i32>()
                .map_err(|_| Error::invalid_date(input, format!("'{part}' is not an integer")))
        })
        .collect()
}

fn make_date(input: &str, parts: &[i32]) -> Result<NaiveDate, Error> {
    let [year, month, day] = parts else {
        return Err(Error::invalid_date(
            input,
            format!("expected year-month-day, found {} components", parts.len()),
        ));
    };
    if !YEARS.contains(year) {
        return Err(Error::invalid_date(input, format!("year {year} is out of range")));
    }
    let month = u32::try_from(*month)
        .map_err(|_| Error::invalid_date(input, format!("month {month} is out of range")))?;
    let day = u32::try_from(*day)
        .map_err(|_| Error::invalid_date(input, format!("day {day} is out of range")))?;

    NaiveDate::from_ymd_opt(*year, month, day)
        .ok_or_else(|| Error::invalid_date(input, "not a calendar day"))
}

/// Parse a date given as three dash-separated integers.
///
/// `2017-1-5` is accepted and means 2017-01-05. Anything that is not exactly three
/// integers forming a real calendar day is an error.
pub fn parse_date(input: &str) -> Result<NaiveDate, Error> {
    make_date(input, &components(input)?)
}

/// The start of the twelve months leading up to `latest`.
///
/// Every component greater than 31 is decremented by one and the rest are kept, so in
/// practice the year steps back and the month and day stay. There is no calendar
/// correction: `2016-02-29` has no counterpart in 2015 and is an error.
pub fn one_year_prior(latest: &str) -> Result<NaiveDate, Error> {
    let parts: Vec<i32> = components(latest)?
        .into_iter()
        .map(|part| {
            if part > ROLLOVER_THRESHOLD {
                part - 1
            } else {
                part
            }
        })
        .collect();
    make_date(latest, &parts)
}

/// The form dates are stored and compared in.
pub fn to_sql_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
