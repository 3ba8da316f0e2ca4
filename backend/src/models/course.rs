//! Course entities and their weekly meeting times.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::time::Time;
use super::weekday::Weekday;
use crate::error::{ScheduleError, ScheduleResult};

/// How to treat weekday keys that are not one of M, T, W, R, F.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekdayPolicy {
    /// Unknown keys are dropped.
    #[default]
    Lenient,
    /// Unknown keys fail with [`ScheduleError::UnknownWeekday`].
    Strict,
}

/// One meeting on one day. `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingInterval {
    start: Time,
    end: Time,
}

impl MeetingInterval {
    pub fn new(start: Time, end: Time) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    pub fn start(&self) -> Time {
        self.start
    }

    pub fn end(&self) -> Time {
        self.end
    }

    pub fn duration_minutes(&self) -> u32 {
        self.start.difference_in_minutes(&self.end)
    }
}

/// Meeting times of one course, at most one interval per weekday.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyMeetingSet {
    blocks: BTreeMap<Weekday, MeetingInterval>,
}

impl DailyMeetingSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the raw `{"M": ["9:00", "10:30"], ...}` mapping of a course record.
    pub fn from_raw(
        course: &str,
        raw: &BTreeMap<String, Vec<String>>,
        policy: WeekdayPolicy,
    ) -> ScheduleResult<Self> {
        for key in raw.keys() {
            if Weekday::from_code(key).is_none() {
                match policy {
                    WeekdayPolicy::Strict => {
                        return Err(ScheduleError::UnknownWeekday {
                            course: course.to_string(),
                            key: key.clone(),
                        })
                    }
                    WeekdayPolicy::Lenient => {
                        debug!("Ignoring unknown weekday key '{}' in course {}", key, course)
                    }
                }
            }
        }

        let mut set = Self::new();
        for day in Weekday::ALL {
            let Some(pair) = raw.get(&day.code().to_string()) else {
                continue;
            };
            let [start, end] = pair.as_slice() else {
                return Err(ScheduleError::malformed(
                    course,
                    format!(
                        "times for {} must be a [start, end] pair, got {} values",
                        day,
                        pair.len()
                    ),
                ));
            };
            let start = Time::parse(start)?;
            let end = Time::parse(end)?;
            set.insert(course, day, start, end)?;
        }
        Ok(set)
    }

    /// Set the meeting for `day`, replacing any previous one.
    pub fn insert(
        &mut self,
        course: &str,
        day: Weekday,
        start: Time,
        end: Time,
    ) -> ScheduleResult<()> {
        let interval =
            MeetingInterval::new(start, end).ok_or_else(|| ScheduleError::InvalidInterval {
                course: course.to_string(),
                day: day.to_string(),
                start: start.to_string(),
                end: end.to_string(),
            })?;
        self.blocks.insert(day, interval);
        Ok(())
    }

    pub fn day_has_scheduled_block(&self, day: Weekday) -> bool {
        self.blocks.contains_key(&day)
    }

    pub fn times_on_day(&self, day: Weekday) -> Option<&MeetingInterval> {
        self.blocks.get(&day)
    }

    /// Meetings in weekday order.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &MeetingInterval)> + '_ {
        self.blocks.iter().map(|(day, interval)| (*day, interval))
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// A course as loaded from the schedule file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub code: String,
    pub name: String,
    pub location: String,
    pub meetings: DailyMeetingSet,
}

impl Course {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        location: impl Into<String>,
        meetings: DailyMeetingSet,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            location: location.into(),
            meetings,
        }
    }

    pub fn meets_on_this_day(&self, day: Weekday) -> bool {
        self.meetings.day_has_scheduled_block(day)
    }

    pub fn meeting_times_on_day(&self, day: Weekday) -> Option<&MeetingInterval> {
        self.meetings.times_on_day(day)
    }
}
