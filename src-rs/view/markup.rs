use super::types::{FilterForm, TaskCard, TaskForm, TaskView};

#[derive(Debug, Default)]
pub struct MarkupView {
    pub form: TaskForm,
    pub filter: FilterForm,
    cards: Vec<TaskCard>,
    task_container: Vec<String>,
    pagination_container: Vec<String>,
}

impl MarkupView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cards(&self) -> &[TaskCard] {
        &self.cards
    }

    pub fn task_markup(&self) -> String {
        self.task_container.join("\n")
    }

    pub fn page_buttons(&self) -> &[String] {
        &self.pagination_container
    }
}

impl TaskView for MarkupView {
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
        self.cards = cards.to_vec();
        self.task_container = cards.iter().map(card_markup).collect();
    }

    fn show_pages(&mut self, total_pages: usize) {
        self.pagination_container = (1..=total_pages).map(page_button_markup).collect();
    }
}

pub fn card_markup(card: &TaskCard) -> String {
    let id = escape(&card.id.to_string());
    format!(
        concat!(
            "<div class=\"task-card {class}\" data-id=\"{id}\">\n",
            "  <h3>{title}</h3>\n",
            "  <p>{description}</p>\n",
            "  <p>Status: {status}</p>\n",
            "  <p>Due Date: {due}</p>\n",
            "  <p>Priority: {priority}</p>\n",
            "  <button data-action=\"edit\" data-id=\"{id}\">Edit</button>\n",
            "  <button data-action=\"delete\" data-id=\"{id}\">Delete</button>\n",
            "</div>"
        ),
        class = card.priority.css_class(),
        id = id,
        title = escape(&card.title),
        description = escape(&card.description),
        status = escape(&card.status),
        due = escape(&card.due_display),
        priority = card.priority.as_str(),
    )
}

pub fn page_button_markup(page: usize) -> String {
    format!("<button data-page=\"{0}\">{0}</button>", page)
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
