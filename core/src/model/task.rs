use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

/// One to-do item. The serialized form is exactly what lands in the
/// backing file: `{"task": ..., "due_date": "YYYY-MM-DD",
/// "priority": "Low"|"Medium"|"High", "done": bool}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Task {
    // The field is called `task` in the file format; kept that way on
    // the wire so externally edited stores keep loading.
    #[serde(rename = "task")]
    pub text: String,

    pub due_date: NaiveDate,
    pub priority: Priority,
    pub done: bool,
}

impl Task {
    pub fn new(text: String, due_date: NaiveDate, priority: Priority) -> Self {
        Self {
            text,
            due_date,
            priority,
            done: false,
        }
    }

    /// Incomplete and due today or earlier.
    pub fn is_due_or_overdue(&self, today: NaiveDate) -> bool {
        !self.done && self.due_date <= today
    }

    /// Incomplete and due tomorrow at the latest. Overdue tasks count
    /// as due soon as well.
    pub fn is_due_soon(&self, today: NaiveDate) -> bool {
        !self.done && self.due_date <= today + Duration::days(1)
    }
}
