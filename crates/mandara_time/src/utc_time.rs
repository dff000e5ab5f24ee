//! UTC calendar date/time.
//!
//! Provides `UtcTime`, the canonical UTC birth-instant representation used
//! throughout the engine, with conversion to Julian Date and ISO-8601
//! parsing for the CLI.

use crate::error::TimeError;
use crate::julian::{SECONDS_PER_DAY, calendar_to_jd};

/// UTC calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Convert to Julian Date on the UTC scale.
    pub fn to_jd_utc(&self) -> f64 {
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / SECONDS_PER_DAY;
        calendar_to_jd(self.year, self.month, day_frac)
    }

    /// Parse `YYYY-MM-DDThh:mm[:ss]` with an optional trailing `Z`.
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let s = s.strip_suffix('Z').unwrap_or(s);
        let (date, time) = s
            .split_once('T')
            .ok_or_else(|| TimeError::Parse(format!("missing 'T' separator in {s:?}")))?;

        let mut date_parts = date.split('-');
        let year: i32 = next_field(&mut date_parts, s, "year")?;
        let month: u32 = next_field(&mut date_parts, s, "month")?;
        let day: u32 = next_field(&mut date_parts, s, "day")?;
        if date_parts.next().is_some() {
            return Err(TimeError::Parse(format!("too many date fields in {s:?}")));
        }

        let mut time_parts = time.split(':');
        let hour: u32 = next_field(&mut time_parts, s, "hour")?;
        let minute: u32 = next_field(&mut time_parts, s, "minute")?;
        let second: f64 = match time_parts.next() {
            Some(sec) => sec
                .parse()
                .map_err(|_| TimeError::Parse(format!("bad second in {s:?}")))?,
            None => 0.0,
        };
        if time_parts.next().is_some() {
            return Err(TimeError::Parse(format!("too many time fields in {s:?}")));
        }

        Ok(Self::new(year, month, day, hour, minute, second))
    }
}

fn next_field<'a, I, F>(parts: &mut I, whole: &str, what: &str) -> Result<F, TimeError>
where
    I: Iterator<Item = &'a str>,
    F: std::str::FromStr,
{
    parts
        .next()
        .ok_or_else(|| TimeError::Parse(format!("missing {what} in {whole:?}")))?
        .parse()
        .map_err(|_| TimeError::Parse(format!("bad {what} in {whole:?}")))
}

impl std::fmt::Display for UtcTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            self.year, self.month, self.day, self.hour, self.minute, self.second as u32
        )
    }
}
