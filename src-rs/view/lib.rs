pub mod markup;
pub mod types;

pub use markup::{card_markup, page_button_markup, MarkupView};
pub use types::{FilterForm, TaskCard, TaskForm, TaskView};
