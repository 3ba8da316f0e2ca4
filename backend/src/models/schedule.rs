// ============================================================================
// JSON Parsing Functions
// ============================================================================
//
// Input is a mapping from course code to a record:
//
//   { "CS 164": { "name": "...", "location": "...",
//                 "times": { "M": ["9:00", "10:30"], "W": ["9:00", "10:30"] } } }
//
// Courses keep the order they appear in the file; event numbering and colour
// assignment depend on it.

use log::{debug, info};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use super::course::{Course, DailyMeetingSet, WeekdayPolicy};
use crate::error::{ScheduleError, ScheduleResult};

const REQUIRED_FIELDS: [&str; 3] = ["name", "location", "times"];

#[derive(serde::Deserialize)]
struct CourseRecord {
    name: String,
    location: String,
    times: BTreeMap<String, Vec<String>>,
}

/// Courses loaded from one schedule file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    pub courses: Vec<Course>,
    /// SHA-256 of the source text, hex encoded.
    pub checksum: String,
}

impl Schedule {
    pub fn meeting_count(&self) -> usize {
        self.courses.iter().map(|c| c.meetings.len()).sum()
    }
}

fn validate_course_record(code: &str, value: &serde_json::Value) -> ScheduleResult<()> {
    let obj = value
        .as_object()
        .ok_or_else(|| ScheduleError::malformed(code, "course record must be a JSON object"))?;
    for field in REQUIRED_FIELDS {
        if !obj.contains_key(field) {
            return Err(ScheduleError::missing_field(code, field));
        }
    }
    Ok(())
}

/// Parse a schedule from its JSON text.
pub fn parse_schedule_json_str(json: &str, policy: WeekdayPolicy) -> ScheduleResult<Schedule> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let entries = match value {
        serde_json::Value::Object(map) => map,
        _ => {
            return Err(ScheduleError::malformed(
                "<root>",
                "schedule must be an object keyed by course code",
            ))
        }
    };

    let mut courses = Vec::with_capacity(entries.len());
    for (code, record) in entries {
        validate_course_record(&code, &record)?;
        let record: CourseRecord = serde_json::from_value(record)
            .map_err(|e| ScheduleError::malformed(&code, e.to_string()))?;
        let meetings = DailyMeetingSet::from_raw(&code, &record.times, policy)?;
        debug!("Loaded course {} with {} meetings", code, meetings.len());
        courses.push(Course::new(code, record.name, record.location, meetings));
    }

    Ok(Schedule {
        courses,
        checksum: compute_schedule_checksum(json),
    })
}

/// Read and parse a schedule file.
pub fn parse_schedule_file<P: AsRef<Path>>(
    path: P,
    policy: WeekdayPolicy,
) -> ScheduleResult<Schedule> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| ScheduleError::io(path, e))?;
    let schedule = parse_schedule_json_str(&content, policy)?;
    info!(
        "Loaded {} courses ({} meetings) from {}",
        schedule.courses.len(),
        schedule.meeting_count(),
        path.display()
    );
    Ok(schedule)
}

/// Compute a checksum for the schedule JSON
pub fn compute_schedule_checksum(json_str: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(json_str.as_bytes());
    hex::encode(hasher.finalize())
}

// ============================================================================
// Tests
// ============================================================================
