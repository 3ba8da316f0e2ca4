use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ScheduleError;

/// Teaching days of the week, in calendar column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// Every weekday in display order.
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Single-letter code used in schedule files (`R` is Thursday).
    pub fn code(&self) -> char {
        match self {
            Weekday::Monday => 'M',
            Weekday::Tuesday => 'T',
            Weekday::Wednesday => 'W',
            Weekday::Thursday => 'R',
            Weekday::Friday => 'F',
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }

    /// 0-based position in [`Weekday::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Look up a weekday by its schedule-file code. Codes are case-sensitive.
    pub fn from_code(code: &str) -> Option<Weekday> {
        match code {
            "M" => Some(Weekday::Monday),
            "T" => Some(Weekday::Tuesday),
            "W" => Some(Weekday::Wednesday),
            "R" => Some(Weekday::Thursday),
            "F" => Some(Weekday::Friday),
            _ => None,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Weekday {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Weekday::from_code(s).ok_or_else(|| {
            ScheduleError::InvalidConfig(format!(
                "unknown weekday code '{}' (expected one of M, T, W, R, F)",
                s
            ))
        })
    }
}

impl TryFrom<String> for Weekday {
    type Error = ScheduleError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Weekday> for String {
    fn from(day: Weekday) -> Self {
        day.code().to_string()
    }
}
