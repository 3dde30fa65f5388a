use std::io::{self, Write};

use taskboard_rs::{FilterForm, FormMode, TaskCard, TaskForm};

use crate::models::CLIConfig;

pub fn banner(cfg: &CLIConfig) {
    println!("Task Board");
    println!("Store: {}", cfg.base_url);
    println!("Type /help for commands.");
}

pub fn prompt(mode: &FormMode) {
    match mode {
        FormMode::Creating => print!("> "),
        FormMode::Editing(id) => print!("edit {}> ", id),
    }
    let _ = io::stdout().flush();
}

pub fn help() {
    println!("Commands:");
    println!("  /help                          Show commands");
    println!("  /exit | /quit                  Exit");
    println!("  /load                          Fetch all tasks");
    println!("  /page <n>                      Show page n");
    println!("  /set <field> <value>           Set title, description, dueDate or status");
    println!("  /form                          Show the task form");
    println!("  /submit                        Create, or save the task being edited");
    println!("  /edit <id>                     Load a task into the form");
    println!("  /cancel                        Stop editing and clear the form");
    println!("  /delete <id>                   Delete a task");
    println!("  /filter [status=..] [priority=..]  Filter loaded tasks");
    println!("  /clear-filter                  Show all loaded tasks");
    println!("  /config                        Show current config");
    println!("  /base <url>                    Update store URL");
}

pub fn cards(cards: &[TaskCard]) {
    if cards.is_empty() {
        println!("no tasks");
        return;
    }
    for card in cards {
        println!("{}", format_card(card));
    }
}

pub fn format_card(card: &TaskCard) -> String {
    let mut out = format!(
        "[{}] #{} {}\n    status: {}  due: {}  priority: {}",
        card.priority.css_class(),
        card.id,
        card.title,
        card.status,
        card.due_display,
        card.priority
    );
    if !card.description.is_empty() {
        out.push_str(&format!("\n    {}", card.description));
    }
    out
}

pub fn pages(total_pages: usize) {
    if total_pages == 0 {
        return;
    }
    let buttons: Vec<String> = (1..=total_pages).map(|page| format!("[{}]", page)).collect();
    println!("pages: {}", buttons.join(" "));
}

pub fn form(form: &TaskForm, mode: &FormMode) {
    match mode {
        FormMode::Creating => println!("form (new task):"),
        FormMode::Editing(id) => println!("form (editing #{}):", id),
    }
    println!("  title: {}", form.title);
    println!("  description: {}", form.description);
    println!("  dueDate: {}", form.due_date);
    println!("  status: {}", form.status);
}

pub fn filter(filter: &FilterForm) {
    let status = if filter.status.is_empty() { "any" } else { filter.status.as_str() };
    let priority = if filter.priority.is_empty() { "any" } else { filter.priority.as_str() };
    println!("filter: status={} priority={}", status, priority);
}

pub fn config(cfg: &CLIConfig) {
    println!("config:");
    println!("  base: {}", cfg.base_url);
    match cfg.timeout_secs {
        Some(secs) => println!("  timeout: {}s", secs),
        None => println!("  timeout: none"),
    }
}

pub fn info(msg: &str) {
    println!("{}", msg);
}

pub fn error(msg: &str) {
    eprintln!("error: {}", msg);
}
