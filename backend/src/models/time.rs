use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub};
use std::str::FromStr;

use crate::error::{ScheduleError, ScheduleResult};

/// Wall-clock time of day in 24-hour format.
///
/// Values built through [`Time::new`] or [`Time::parse`] are always within
/// `00:00..=23:59`. The arithmetic operators are raw: they carry minutes into
/// hours but never clamp, so `Time::latest() + step` may exceed 23 hours and
/// `Time::earliest() - step` is negative. Raw results are meant for durations
/// and axis stepping, not for display as a time of day.
///
/// Serialized as an `"HH:MM"` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Time {
    hours: i32,
    minutes: i32,
}

impl Time {
    pub const MINUTES_PER_HOUR: i32 = 60;
    pub const MINUTES_PER_DAY: i32 = 24 * 60;

    /// Create a validated wall-clock time.
    pub fn new(hours: i32, minutes: i32) -> ScheduleResult<Self> {
        if !Self::is_valid_time(hours, minutes) {
            return Err(ScheduleError::invalid_time(
                format!("{}:{:02}", hours, minutes),
                "hours must be 0-23 and minutes 0-59",
            ));
        }
        Ok(Self { hours, minutes })
    }

    /// 00:00
    pub const fn earliest() -> Self {
        Self {
            hours: 0,
            minutes: 0,
        }
    }

    /// 23:59
    pub const fn latest() -> Self {
        Self {
            hours: 23,
            minutes: 59,
        }
    }

    pub fn is_valid_time(hours: i32, minutes: i32) -> bool {
        (0..=23).contains(&hours) && (0..Self::MINUTES_PER_HOUR).contains(&minutes)
    }

    /// Whether this value is a time of day rather than a raw arithmetic result.
    pub fn is_wall_clock(&self) -> bool {
        Self::is_valid_time(self.hours, self.minutes)
    }

    /// Parse `"H:MM"` or `"HH:MM"`.
    pub fn parse(description: &str) -> ScheduleResult<Self> {
        let (hour_str, minute_str) = description
            .split_once(':')
            .ok_or_else(|| ScheduleError::invalid_time(description, "missing ':' separator"))?;

        let hours = parse_component(description, hour_str.trim(), "hours")?;
        let minutes = parse_component(description, minute_str.trim(), "minutes")?;

        if !Self::is_valid_time(hours, minutes) {
            return Err(ScheduleError::invalid_time(
                description,
                "hours must be 0-23 and minutes 0-59",
            ));
        }
        Ok(Self { hours, minutes })
    }

    /// Build a raw value from a signed minute count.
    ///
    /// Both components carry the sign of `total`, so `to_minutes` recovers it
    /// exactly and ordering stays consistent with the minute count.
    pub const fn from_total_minutes(total: i32) -> Self {
        Self {
            hours: total / Self::MINUTES_PER_HOUR,
            minutes: total % Self::MINUTES_PER_HOUR,
        }
    }

    /// Fold a raw value back onto the 24-hour clock (`-00:30` becomes `23:30`).
    pub fn wrapped(&self) -> Self {
        Self::from_total_minutes(self.to_minutes().rem_euclid(Self::MINUTES_PER_DAY))
    }

    pub fn hours(&self) -> i32 {
        self.hours
    }

    pub fn minutes(&self) -> i32 {
        self.minutes
    }

    pub fn to_minutes(&self) -> i32 {
        Self::MINUTES_PER_HOUR * self.hours + self.minutes
    }

    /// Absolute distance between two times, in minutes.
    pub fn difference_in_minutes(&self, other: &Time) -> u32 {
        (*self - *other).to_minutes().unsigned_abs()
    }
}

fn parse_component(description: &str, part: &str, what: &str) -> ScheduleResult<i32> {
    if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ScheduleError::invalid_time(
            description,
            format!("{} must be one or two digits", what),
        ));
    }
    part.parse::<i32>()
        .map_err(|e| ScheduleError::invalid_time(description, e.to_string()))
}

impl Add for Time {
    type Output = Time;

    fn add(self, other: Time) -> Time {
        Time::from_total_minutes(self.to_minutes() + other.to_minutes())
    }
}

impl AddAssign for Time {
    fn add_assign(&mut self, other: Time) {
        *self = *self + other;
    }
}

impl Sub for Time {
    type Output = Time;

    fn sub(self, other: Time) -> Time {
        Time::from_total_minutes(self.to_minutes() - other.to_minutes())
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

impl FromStr for Time {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Time::parse(s)
    }
}

impl From<Time> for String {
    fn from(t: Time) -> Self {
        t.to_string()
    }
}

impl TryFrom<String> for Time {
    type Error = ScheduleError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Time::parse(&s)
    }
}
