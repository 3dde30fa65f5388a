use chrono::{DateTime, Utc};

use super::types::Task;

/// Status and priority constraints read from the filter form. `None` means
/// "any". Both values are compared exactly, so an unknown priority text
/// matches nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub status: Option<String>,
    pub priority: Option<String>,
}

impl TaskFilter {
    pub fn new(status: &str, priority: &str) -> Self {
        Self {
            status: non_empty(status),
            priority: non_empty(priority),
        }
    }

    pub fn matches(&self, task: &Task, now: DateTime<Utc>) -> bool {
        let status_ok = match &self.status {
            Some(status) => task.status == *status,
            None => true,
        };
        let priority_ok = match &self.priority {
            Some(priority) => task.priority_at(now).as_str() == priority,
            None => true,
        };
        status_ok && priority_ok
    }

    pub fn apply(&self, tasks: &[Task], now: DateTime<Utc>) -> Vec<Task> {
        tasks
            .iter()
            .filter(|task| self.matches(task, now))
            .cloned()
            .collect()
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskId;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn task(id: u64, status: &str, due_in_minutes: i64) -> Task {
        Task {
            id: TaskId::Number(id),
            title: format!("task {}", id),
            description: String::new(),
            due_date: (now() + Duration::minutes(due_in_minutes)).to_rfc3339(),
            status: status.to_string(),
        }
    }

    fn ids(tasks: &[Task]) -> Vec<TaskId> {
        tasks.iter().map(|t| t.id.clone()).collect()
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let tasks = vec![task(1, "done", 1), task(2, "pending", 30)];
        let filter = TaskFilter::new("", "");
        assert_eq!(filter, TaskFilter::default());
        assert_eq!(filter.apply(&tasks, now()), tasks);
    }

    #[test]
    fn status_only_leaves_priority_unconstrained() {
        let tasks = vec![
            task(1, "done", 1),
            task(2, "pending", 1),
            task(3, "done", 30),
            task(4, "in-progress", 30),
        ];
        let kept = TaskFilter::new("done", "").apply(&tasks, now());
        assert_eq!(ids(&kept), vec![TaskId::Number(1), TaskId::Number(3)]);
    }

    #[test]
    fn status_and_priority_are_conjunctive() {
        let tasks = vec![
            task(1, "done", 1),
            task(2, "pending", 1),
            task(3, "done", 30),
        ];
        let kept = TaskFilter::new("done", "High").apply(&tasks, now());
        assert_eq!(ids(&kept), vec![TaskId::Number(1)]);
    }

    #[test]
    fn status_match_is_exact() {
        let tasks = vec![task(1, "Done", 1), task(2, "done ", 1)];
        assert!(TaskFilter::new("done", "").apply(&tasks, now()).is_empty());
    }

    #[test]
    fn unknown_priority_text_matches_nothing() {
        let tasks = vec![task(1, "done", 1), task(2, "done", 30)];
        assert!(TaskFilter::new("", "Urgent").apply(&tasks, now()).is_empty());
    }
}
