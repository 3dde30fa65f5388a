use chrono::Utc;

use crate::api::TaskApi;
use crate::pagination::{page_count, paginate, PAGE_SIZE};
use crate::task::{Task, TaskFilter, TaskId};
use crate::view::{TaskCard, TaskForm, TaskView};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormMode {
    Creating,
    Editing(TaskId),
}

pub struct TaskClient<A: TaskApi, V: TaskView> {
    api: A,
    view: V,
    page_size: usize,
    current_page: usize,
    tasks: Vec<Task>,
    displayed: Vec<Task>,
    mode: FormMode,
}

impl<A: TaskApi, V: TaskView> TaskClient<A, V> {
    pub fn new(api: A, view: V) -> Self {
        Self {
            api,
            view,
            page_size: PAGE_SIZE,
            current_page: 1,
            tasks: Vec::new(),
            displayed: Vec::new(),
            mode: FormMode::Creating,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn set_api(&mut self, api: A) {
        self.api = api;
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_count(&self) -> usize {
        page_count(self.displayed.len(), self.page_size)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn displayed_tasks(&self) -> &[Task] {
        &self.displayed
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn find(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == *id)
    }

    pub fn resolve_id(&self, raw: &str) -> TaskId {
        self.tasks
            .iter()
            .find(|task| task.id.matches(raw))
            .map(|task| task.id.clone())
            .unwrap_or_else(|| raw.parse().unwrap_or_else(|never| match never {}))
    }

    /// Fetches the full collection and redraws the current page. Any filter
    /// in effect is dropped.
    pub fn load(&mut self) {
        match self.api.list() {
            Ok(tasks) => {
                tracing::debug!(count = tasks.len(), "tasks loaded");
                self.tasks = tasks;
                self.displayed = self.tasks.clone();
                self.render_page();
                self.render_pagination();
            }
            Err(err) => {
                tracing::error!(error = %err, "fetch tasks failed");
            }
        }
    }

    pub fn go_to_page(&mut self, page: usize) {
        if page == 0 || page > self.page_count() {
            tracing::debug!(page, pages = self.page_count(), "no such page");
            return;
        }
        self.current_page = page;
        self.render_page();
    }

    pub fn submit(&mut self) {
        match self.mode.clone() {
            FormMode::Creating => self.create(),
            FormMode::Editing(id) => self.update(id),
        }
    }

    pub fn create(&mut self) {
        let task = self.view.read_form().to_new_task();
        match self.api.create(&task) {
            Ok(()) => {
                tracing::debug!(title = %task.title, "task created");
                self.load();
            }
            Err(err) => {
                tracing::error!(error = %err, "create task failed");
            }
        }
    }

    /// Fills the form with a cached task and points submit at it. Unknown
    /// ids are ignored. A pending edit is replaced.
    pub fn edit(&mut self, id: &TaskId) {
        let form = match self.find(id) {
            Some(task) => TaskForm::from_task(task),
            None => {
                tracing::debug!(id = %id, "edit ignored, task not cached");
                return;
            }
        };
        self.view.fill_form(&form);
        self.mode = FormMode::Editing(id.clone());
    }

    pub fn cancel_edit(&mut self) {
        if self.mode != FormMode::Creating {
            self.view.reset_form();
            self.mode = FormMode::Creating;
        }
    }

    fn update(&mut self, id: TaskId) {
        let task = self.view.read_form().to_task(id);
        match self.api.update(&task) {
            Ok(()) => {
                tracing::debug!(id = %task.id, "task updated");
                self.view.reset_form();
                self.mode = FormMode::Creating;
                self.load();
            }
            Err(err) => {
                tracing::error!(id = %task.id, error = %err, "update task failed");
            }
        }
    }

    pub fn delete(&mut self, id: &TaskId) {
        match self.api.delete(id) {
            Ok(()) => {
                tracing::debug!(id = %id, "task deleted");
                self.load();
            }
            Err(err) => {
                tracing::error!(id = %id, error = %err, "delete task failed");
            }
        }
    }

    /// Narrows the displayed sequence to the filter form's selection and
    /// returns to page 1.
    pub fn filter(&mut self) {
        let form = self.view.read_filter();
        let filter = TaskFilter::new(&form.status, &form.priority);
        self.displayed = filter.apply(&self.tasks, Utc::now());
        self.current_page = 1;
        self.render_page();
        self.render_pagination();
    }

    fn render_page(&mut self) {
        let now = Utc::now();
        let cards: Vec<TaskCard> = paginate(&self.displayed, self.current_page, self.page_size)
            .iter()
            .map(|task| TaskCard::new(task, now))
            .collect();
        self.view.show_tasks(&cards);
    }

    fn render_pagination(&mut self) {
        self.view.show_pages(self.page_count());
    }
}
