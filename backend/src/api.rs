//! Public API surface.
//!
//! Consolidates the types a caller needs to load a schedule, compute its
//! layout and render it.

pub use crate::config::ScheduleConfig;
pub use crate::error::{ScheduleError, ScheduleResult};
pub use crate::models::{
    parse_schedule_file, parse_schedule_json_str, Course, DailyMeetingSet, EventId,
    MeetingInterval, Schedule, Time, Weekday, WeekdayPolicy,
};
pub use crate::render::{render_html, render_stylesheet, HtmlOptions};
pub use crate::routes::calendar::{CalendarLayout, PlacedBlock};
pub use crate::services::{LayoutConfig, LayoutEngine, ScheduleMaker, Season, Term, TermPaths};
