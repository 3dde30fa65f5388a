use chrono::{DateTime, Utc};

use crate::task::{format_due_date, NewTask, Priority, Task, TaskId};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub status: String,
}

impl TaskForm {
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            due_date: task.due_date.clone(),
            status: task.status.clone(),
        }
    }

    pub fn to_new_task(&self) -> NewTask {
        NewTask {
            title: self.title.clone(),
            description: self.description.clone(),
            due_date: self.due_date.clone(),
            status: self.status.clone(),
        }
    }

    pub fn to_task(&self, id: TaskId) -> Task {
        Task {
            id,
            title: self.title.clone(),
            description: self.description.clone(),
            due_date: self.due_date.clone(),
            status: self.status.clone(),
        }
    }

    pub fn set(&mut self, field: &str, value: &str) -> bool {
        let slot = match field {
            "title" => &mut self.title,
            "description" => &mut self.description,
            "dueDate" | "due_date" | "due" => &mut self.due_date,
            "status" => &mut self.status,
            _ => return false,
        };
        *slot = value.to_string();
        true
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterForm {
    pub status: String,
    pub priority: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskCard {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub status: String,
    pub due_display: String,
    pub priority: Priority,
}

impl TaskCard {
    pub fn new(task: &Task, now: DateTime<Utc>) -> Self {
        let due = task.due_at();
        Self {
            id: task.id.clone(),
            title: task.title.clone(),
            description: task.description.clone(),
            status: task.status.clone(),
            due_display: format_due_date(due),
            priority: crate::task::priority_at(due, now),
        }
    }
}

pub trait TaskView {
    fn read_form(&self) -> TaskForm;
    fn fill_form(&mut self, form: &TaskForm);
    fn reset_form(&mut self);
    fn read_filter(&self) -> FilterForm;
    fn show_tasks(&mut self, cards: &[TaskCard]);
    fn show_pages(&mut self, total_pages: usize);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn form_round_trips_through_task() {
        let task = Task {
            id: TaskId::Number(2),
            title: "Write report".to_string(),
            description: "quarterly".to_string(),
            due_date: "2024-05-01T14:30".to_string(),
            status: "pending".to_string(),
        };
        let form = TaskForm::from_task(&task);
        assert_eq!(form.to_task(TaskId::Number(2)), task);
        assert_eq!(form.to_new_task().due_date, "2024-05-01T14:30");
    }

    #[test]
    fn set_accepts_form_field_names() {
        let mut form = TaskForm::default();
        assert!(form.set("title", "a"));
        assert!(form.set("dueDate", "2024-05-01"));
        assert!(form.set("status", "done"));
        assert!(!form.set("priority", "High"));
        assert_eq!(form.due_date, "2024-05-01");
    }

    #[test]
    fn card_derives_priority_and_display() {
        let now = Utc::now();
        let task = Task {
            id: TaskId::Number(1),
            title: "t".to_string(),
            description: String::new(),
            due_date: (now + Duration::minutes(1)).to_rfc3339(),
            status: "pending".to_string(),
        };
        let card = TaskCard::new(&task, now);
        assert_eq!(card.priority, Priority::High);
        assert_ne!(card.due_display, "Invalid Date");

        let broken = Task {
            due_date: "someday".to_string(),
            ..task
        };
        let card = TaskCard::new(&broken, now);
        assert_eq!(card.priority, Priority::Low);
        assert_eq!(card.due_display, "Invalid Date");
    }
}
