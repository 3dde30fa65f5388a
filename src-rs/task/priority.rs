use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Priority {
    High,
    Medium,
    Low,
}

const HIGH_WITHIN_MINUTES: f64 = 2.0;
const MEDIUM_WITHIN_MINUTES: f64 = 3.0;

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            other => Err(format!("unknown priority: {}", other)),
        }
    }
}

/// Priority of a task due at `due`, as seen at `now`. Overdue tasks are
/// High; an unknown due date is Low.
pub fn priority_at(due: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Priority {
    let due = match due {
        Some(due) => due,
        None => return Priority::Low,
    };
    let minutes = (due - now).num_milliseconds() as f64 / 60_000.0;
    if minutes <= HIGH_WITHIN_MINUTES {
        Priority::High
    } else if minutes <= MEDIUM_WITHIN_MINUTES {
        Priority::Medium
    } else {
        Priority::Low
    }
}
