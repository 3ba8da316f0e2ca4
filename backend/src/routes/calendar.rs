use serde::{Deserialize, Serialize};

use crate::models::{EventId, Time, Weekday};

// =========================================================
// Weekly calendar layout types
// =========================================================

/// One meeting resolved to grid coordinates (1-based CSS grid lines).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedBlock {
    pub event_id: EventId,
    pub weekday: Weekday,
    pub grid_column: usize,
    pub grid_row: usize,
    pub row_span: usize,
    pub course_code: String,
    pub course_name: String,
    pub location: String,
    pub start: Time,
    pub end: Time,
    pub color: String,
}

impl PlacedBlock {
    /// Label text such as `09:00 - 10:30`.
    pub fn time_range(&self) -> String {
        format!("{} - {}", self.start, self.end)
    }

    /// Grid rows covered, as a half-open range.
    pub fn rows(&self) -> std::ops::Range<usize> {
        self.grid_row..self.grid_row + self.row_span
    }
}

/// Everything the renderer needs to draw one week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarLayout {
    pub minutes_per_row: u32,
    /// Row labels, `HH:MM`.
    pub time_axis: Vec<String>,
    /// Column headers in display order.
    pub weekdays: Vec<String>,
    /// Axis length plus the two header/gutter rows.
    pub num_rows: usize,
    /// Weekday count plus the two label/gutter columns.
    pub num_columns: usize,
    pub blocks: Vec<PlacedBlock>,
}

impl CalendarLayout {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(row: usize, span: usize) -> PlacedBlock {
        PlacedBlock {
            event_id: EventId::new(1),
            weekday: Weekday::Monday,
            grid_column: 3,
            grid_row: row,
            row_span: span,
            course_code: "CS 164".to_string(),
            course_name: "Intro to CS".to_string(),
            location: "UCross 153".to_string(),
            start: Time::parse("9:00").unwrap(),
            end: Time::parse("10:30").unwrap(),
            color: "red".to_string(),
        }
    }

    #[test]
    fn test_time_range_label() {
        assert_eq!(block(3, 3).time_range(), "09:00 - 10:30");
    }

    #[test]
    fn test_rows_half_open() {
        assert_eq!(block(3, 3).rows(), 3..6);
    }

    #[test]
    fn test_layout_serializes_times_as_strings() {
        let layout = CalendarLayout {
            minutes_per_row: 30,
            time_axis: vec!["08:30".to_string()],
            weekdays: vec!["Monday".to_string()],
            num_rows: 3,
            num_columns: 3,
            blocks: vec![block(3, 3)],
        };
        let json = serde_json::to_value(&layout).unwrap();
        assert_eq!(json["blocks"][0]["start"], "09:00");
        assert_eq!(json["blocks"][0]["weekday"], "M");
        assert!(!layout.is_empty());
    }
}
