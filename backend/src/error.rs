//! Error types for schedule loading, layout and rendering.
//!
//! Every variant is fatal: the pipeline stops at the first error and writes
//! nothing, so a run either produces a complete calendar or no output at all.

use std::path::PathBuf;

/// Result type for schedule operations
pub type ScheduleResult<T> = Result<T, ScheduleError>;

/// Error type for schedule operations
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    /// A time string is malformed or out of range.
    #[error("Invalid time format: '{input}' ({reason})")]
    InvalidTimeFormat { input: String, reason: String },

    /// A required course record field is absent.
    #[error("Missing field '{field}' in course '{course}'")]
    MissingField { course: String, field: String },

    /// A meeting ends before it starts.
    #[error("Invalid interval for course '{course}' on {day}: {start} is after {end}")]
    InvalidInterval {
        course: String,
        day: String,
        start: String,
        end: String,
    },

    /// A weekday key outside {M,T,W,R,F} (strict mode only).
    #[error("Unknown weekday key '{key}' in course '{course}'")]
    UnknownWeekday { course: String, key: String },

    /// A course record has the wrong shape.
    #[error("Malformed record for course '{course}': {message}")]
    MalformedRecord { course: String, message: String },

    /// Configuration values are out of range or inconsistent.
    #[error("Configuration error: {0}")]
    InvalidConfig(String),

    /// Season or year arguments do not name a term.
    #[error("Invalid term: {0}")]
    InvalidTerm(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScheduleError {
    /// Build an [`ScheduleError::InvalidTimeFormat`] from any displayable input.
    pub fn invalid_time(input: impl Into<String>, reason: impl Into<String>) -> Self {
        ScheduleError::InvalidTimeFormat {
            input: input.into(),
            reason: reason.into(),
        }
    }

    pub fn missing_field(course: impl Into<String>, field: impl Into<String>) -> Self {
        ScheduleError::MissingField {
            course: course.into(),
            field: field.into(),
        }
    }

    pub fn malformed(course: impl Into<String>, message: impl Into<String>) -> Self {
        ScheduleError::MalformedRecord {
            course: course.into(),
            message: message.into(),
        }
    }

    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScheduleError::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_time_display() {
        let err = ScheduleError::invalid_time("25:00", "hours out of range");
        assert_eq!(
            err.to_string(),
            "Invalid time format: '25:00' (hours out of range)"
        );
    }

    #[test]
    fn test_missing_field_display() {
        let err = ScheduleError::missing_field("CS 164", "location");
        assert!(err.to_string().contains("location"));
        assert!(err.to_string().contains("CS 164"));
    }

    #[test]
    fn test_io_error_mentions_path() {
        let err = ScheduleError::io(
            "/tmp/missing.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(err.to_string().contains("/tmp/missing.json"));
    }
}
