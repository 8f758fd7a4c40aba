//! Calendar day filter

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::{Error, Result};

/// Accepted input format for day filters
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Half-open UTC interval `[start, end)` covering one local calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DayRange {
    /// Parse a `YYYY-MM-DD` string and resolve it against `tz`
    pub fn parse<Tz: TimeZone>(date: &str, tz: &Tz) -> Result<Self> {
        let day = NaiveDate::parse_from_str(date.trim(), DATE_FORMAT).map_err(|e| {
            Error::Validation(format!("invalid date '{date}' (expected YYYY-MM-DD): {e}"))
        })?;
        Self::for_day(day, tz)
    }

    /// The interval from the start of `day` to the start of the following day in `tz`
    pub fn for_day<Tz: TimeZone>(day: NaiveDate, tz: &Tz) -> Result<Self> {
        let next = day
            .succ_opt()
            .ok_or_else(|| Error::Validation(format!("date out of range: {day}")))?;
        Ok(Self {
            start: start_of_day(day, tz)?,
            end: start_of_day(next, tz)?,
        })
    }

    /// Whether `ts` falls inside the day; `end` belongs to the next day
    pub fn contains(&self, ts: &DateTime<Utc>) -> bool {
        self.start <= *ts && *ts < self.end
    }
}

/// First instant of `day` in `tz`.
///
/// Midnight can fall into a DST gap, so the first hour that exists is used.
fn start_of_day<Tz: TimeZone>(day: NaiveDate, tz: &Tz) -> Result<DateTime<Utc>> {
    (0..24)
        .filter_map(|hour| {
            let local = day.and_time(NaiveTime::MIN) + Duration::hours(hour);
            tz.from_local_datetime(&local).earliest()
        })
        .next()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| Error::Validation(format!("no local midnight for {day}")))
}
