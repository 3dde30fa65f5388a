use taskboard_rs::{FilterForm, TaskCard, TaskForm, TaskView};

use crate::render;

/// Forms edited through REPL commands; containers printed to stdout.
#[derive(Debug, Default)]
pub struct TerminalView {
    pub form: TaskForm,
    pub filter: FilterForm,
}

impl TaskView for TerminalView {
    fn read_form(&self) -> TaskForm {
        self.form.clone()
    }

    fn fill_form(&mut self, form: &TaskForm) {
        self.form = form.clone();
    }

    fn reset_form(&mut self) {
        self.form = TaskForm::default();
    }

    fn read_filter(&self) -> FilterForm {
        self.filter.clone()
    }

    fn show_tasks(&mut self, cards: &[TaskCard]) {
        render::cards(cards);
    }

    fn show_pages(&mut self, total_pages: usize) {
        render::pages(total_pages);
    }
}
