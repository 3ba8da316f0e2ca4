use serde::{Deserialize, Serialize};
use std::fmt;

/// 1-based position of a meeting block in layout order.
///
/// Serialized as the bare number.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(usize);

impl EventId {
    pub fn new(value: usize) -> Self {
        EventId(value)
    }

    pub fn value(&self) -> usize {
        self.0
    }

    /// CSS class naming this event, e.g. `event3`.
    pub fn class_name(&self) -> String {
        format!("event{}", self.0)
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
