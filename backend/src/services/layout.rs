//! Calendar layout engine.
//!
//! Turns a course list into a shared time axis and a set of meeting blocks
//! positioned on a CSS grid:
//!
//! ```text
//!            col 1   col 2    col 3    col 4   ...
//!  row 1   [label] [gutter] [header] [header]
//!  row 2   [label] [gutter]
//!  row 3   [label] [gutter] [ CS 164 ]
//!  ...                      [ 09:00  ]
//! ```
//!
//! Two columns are reserved for row labels and a gutter, two rows for the
//! header and a gutter. Overlapping meetings on the same day are not
//! separated; they share the day's column.

use log::{debug, info};
use std::collections::HashMap;
use std::num::NonZeroU32;

use crate::error::{ScheduleError, ScheduleResult};
use crate::models::{Course, EventId, Time, Weekday};
use crate::routes::calendar::{CalendarLayout, PlacedBlock};
use crate::services::colors::{ColorGen, BASE_COLORS};

/// Columns before the first weekday column.
pub const RESERVED_COLUMNS: usize = 2;
/// Rows before the first time row.
pub const RESERVED_ROWS: usize = 2;
pub const DEFAULT_MINUTES_PER_ROW: u32 = 30;
/// Coarsest row granularity, half a day.
pub const MAX_MINUTES_PER_ROW: u32 = 12 * 60;

const DEFAULT_STEP: NonZeroU32 = match NonZeroU32::new(DEFAULT_MINUTES_PER_ROW) {
    Some(step) => step,
    None => panic!("default granularity must be positive"),
};

/// Tunables of a layout run, passed in explicitly so tests can vary them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutConfig {
    minutes_per_row: NonZeroU32,
    weekdays: Vec<Weekday>,
    palette: Vec<String>,
}

impl LayoutConfig {
    pub fn new(
        minutes_per_row: u32,
        weekdays: Vec<Weekday>,
        palette: Vec<String>,
    ) -> ScheduleResult<Self> {
        let Some(minutes_per_row) = NonZeroU32::new(minutes_per_row) else {
            return Err(ScheduleError::InvalidConfig(
                "minutes_per_row must be positive".to_string(),
            ));
        };
        if minutes_per_row.get() > MAX_MINUTES_PER_ROW {
            return Err(ScheduleError::InvalidConfig(format!(
                "minutes_per_row must be at most {}",
                MAX_MINUTES_PER_ROW
            )));
        }
        if weekdays.is_empty() {
            return Err(ScheduleError::InvalidConfig(
                "at least one weekday must be displayed".to_string(),
            ));
        }
        for (i, day) in weekdays.iter().enumerate() {
            if weekdays[..i].contains(day) {
                return Err(ScheduleError::InvalidConfig(format!(
                    "weekday {} listed twice",
                    day
                )));
            }
        }
        Ok(Self {
            minutes_per_row,
            weekdays,
            palette,
        })
    }

    pub fn minutes_per_row(&self) -> u32 {
        self.minutes_per_row.get()
    }

    pub fn weekdays(&self) -> &[Weekday] {
        &self.weekdays
    }

    pub fn palette(&self) -> &[String] {
        &self.palette
    }

    /// One row's duration in minutes.
    pub fn granularity(&self) -> NonZeroU32 {
        self.minutes_per_row
    }

    /// 1-based grid column for `day`, or `None` if the day is not displayed.
    pub fn grid_column(&self, day: Weekday) -> Option<usize> {
        self.weekdays
            .iter()
            .position(|d| *d == day)
            .map(|i| i + RESERVED_COLUMNS + 1)
    }

    pub fn num_columns(&self) -> usize {
        self.weekdays.len() + RESERVED_COLUMNS
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            minutes_per_row: DEFAULT_STEP,
            weekdays: Weekday::ALL.to_vec(),
            palette: BASE_COLORS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Ordered row-boundary labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeAxis {
    marks: Vec<Time>,
}

impl TimeAxis {
    /// Fence-post axis over `[first, last]`.
    ///
    /// Emits `first, first + step, ...` for every mark `<= last`, then one
    /// more mark past it. The result always has at least one entry, and the
    /// final entry is the first mark strictly after `last`.
    pub fn fence_posts(first: Time, last: Time, step: NonZeroU32) -> Self {
        let step = Time::from_total_minutes(step.get() as i32);
        let mut marks = Vec::new();
        let mut current = first;
        while current <= last {
            marks.push(current);
            current += step;
        }
        marks.push(current);
        Self { marks }
    }

    /// Axis covering every meeting in `courses`, starting one row before the earliest start.
    pub fn for_courses(courses: &[Course], step: NonZeroU32) -> Self {
        let (earliest, latest) = meeting_bounds(courses);
        let first = earliest - Time::from_total_minutes(step.get() as i32);
        Self::fence_posts(first, latest, step)
    }

    /// First mark, the reference point for row numbers.
    pub fn start_of_day(&self) -> Time {
        self.marks[0]
    }

    pub fn marks(&self) -> &[Time] {
        &self.marks
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Display labels; marks outside 00:00..24:00 wrap around the clock.
    ///
    /// Only [`TimeAxis::marks`] is strictly increasing. An axis reaching
    /// before midnight or past 24:00 repeats clock labels at its ends.
    pub fn labels(&self) -> Vec<String> {
        self.marks.iter().map(|t| t.wrapped().to_string()).collect()
    }
}

/// Earliest start and latest end over all meetings.
///
/// With no meetings this returns `(23:59, 00:00)`, the untouched scan seeds.
pub fn meeting_bounds(courses: &[Course]) -> (Time, Time) {
    let mut earliest = Time::latest();
    let mut latest = Time::earliest();
    for course in courses {
        for (_, interval) in course.meetings.iter() {
            earliest = earliest.min(interval.start());
            latest = latest.max(interval.end());
        }
    }
    (earliest, latest)
}

/// One weekday occurrence of a course.
#[derive(Debug, Clone, Copy)]
pub struct MeetingBlock<'a> {
    pub event_id: EventId,
    pub weekday: Weekday,
    pub start: Time,
    pub end: Time,
    pub course: &'a Course,
    grid_column: usize,
}

impl MeetingBlock<'_> {
    pub fn grid_column(&self) -> usize {
        self.grid_column
    }

    pub fn grid_row(&self, start_of_day: Time, minutes_per_row: NonZeroU32) -> usize {
        let time_into_day = self.start.difference_in_minutes(&start_of_day);
        time_into_day.div_ceil(minutes_per_row.get()) as usize + RESERVED_ROWS
    }

    pub fn row_span(&self, minutes_per_row: NonZeroU32) -> usize {
        let duration = self.start.difference_in_minutes(&self.end);
        duration.div_ceil(minutes_per_row.get()) as usize
    }
}

/// Stateless layout calculator; each call to [`LayoutEngine::compute`] is independent.
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn time_axis(&self, courses: &[Course]) -> TimeAxis {
        TimeAxis::for_courses(courses, self.config.granularity())
    }

    /// Meeting blocks in course order, then weekday order, numbered from 1.
    ///
    /// Meetings on days that are not displayed are skipped.
    pub fn meeting_blocks<'a>(&self, courses: &'a [Course]) -> Vec<MeetingBlock<'a>> {
        let mut blocks = Vec::new();
        for course in courses {
            for (day, interval) in course.meetings.iter() {
                let Some(grid_column) = self.config.grid_column(day) else {
                    debug!("Skipping {} meeting of {}: day not displayed", day, course.code);
                    continue;
                };
                blocks.push(MeetingBlock {
                    event_id: EventId::new(blocks.len() + 1),
                    weekday: day,
                    start: interval.start(),
                    end: interval.end(),
                    course,
                    grid_column,
                });
            }
        }
        blocks
    }

    pub fn compute(&self, courses: &[Course]) -> CalendarLayout {
        let axis = self.time_axis(courses);
        let start_of_day = axis.start_of_day();
        let minutes_per_row = self.config.granularity();

        let mut colors = ColorGen::new(self.config.palette.clone());
        let mut course_colors: HashMap<&str, String> = HashMap::new();

        let blocks: Vec<PlacedBlock> = self
            .meeting_blocks(courses)
            .into_iter()
            .map(|block| {
                let code = block.course.code.as_str();
                let color = course_colors
                    .entry(code)
                    .or_insert_with(|| colors.next_for(code))
                    .clone();
                PlacedBlock {
                    event_id: block.event_id,
                    weekday: block.weekday,
                    grid_column: block.grid_column(),
                    grid_row: block.grid_row(start_of_day, minutes_per_row),
                    row_span: block.row_span(minutes_per_row),
                    course_code: block.course.code.clone(),
                    course_name: block.course.name.clone(),
                    location: block.course.location.clone(),
                    start: block.start,
                    end: block.end,
                    color,
                }
            })
            .collect();

        info!(
            "Computed layout: {} time rows from {}, {} meeting blocks",
            axis.len(),
            start_of_day.wrapped(),
            blocks.len()
        );

        CalendarLayout {
            minutes_per_row: minutes_per_row.get(),
            time_axis: axis.labels(),
            weekdays: self
                .config
                .weekdays
                .iter()
                .map(|d| d.display_name().to_string())
                .collect(),
            num_rows: axis.len() + RESERVED_ROWS,
            num_columns: self.config.num_columns(),
            blocks,
        }
    }
}
