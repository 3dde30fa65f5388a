use std::io;

use taskboard_rs::{FilterForm, HttpTaskApi, TaskClient};

use crate::models::CLIConfig;
use crate::render;
use crate::view::TerminalView;

pub struct REPL {
    pub config: CLIConfig,
    pub board: TaskClient<HttpTaskApi, TerminalView>,
}

impl REPL {
    pub fn new(config: CLIConfig, board: TaskClient<HttpTaskApi, TerminalView>) -> Self {
        Self { config, board }
    }

    pub fn run(&mut self) {
        render::banner(&self.config);
        self.board.load();
        loop {
            render::prompt(self.board.mode());
            let mut line = String::new();
            match io::stdin().read_line(&mut line) {
                Ok(0) | Err(_) => break,
                Ok(_) => {}
            }
            let line = line.trim().to_string();
            if line.is_empty() {
                continue;
            }
            if !line.starts_with('/') {
                render::info("unknown command, type /help");
                continue;
            }
            if self.handle_command(&line) {
                break;
            }
        }
    }

    fn handle_command(&mut self, line: &str) -> bool {
        let mut parts = line.splitn(2, ' ');
        let cmd = parts.next().unwrap_or("").trim_start_matches('/');
        let rest = parts.next().unwrap_or("").trim();
        match cmd {
            "exit" | "quit" => return true,
            "help" => render::help(),
            "load" => self.board.load(),
            "page" => match rest.parse::<usize>() {
                Ok(page) if page >= 1 && page <= self.board.page_count() => {
                    self.board.go_to_page(page)
                }
                _ => render::error(&format!("no page {:?}", rest)),
            },
            "set" => match split_field(rest) {
                Some((field, value)) => {
                    if self.board.view_mut().form.set(field, value) {
                        render::form(&self.board.view().form, self.board.mode());
                    } else {
                        render::error(&format!("unknown field: {}", field));
                    }
                }
                None => render::error("usage: /set <field> <value>"),
            },
            "form" => render::form(&self.board.view().form, self.board.mode()),
            "submit" => self.board.submit(),
            "edit" => {
                if rest.is_empty() {
                    render::error("usage: /edit <id>");
                } else {
                    let id = self.board.resolve_id(rest);
                    if self.board.find(&id).is_some() {
                        self.board.edit(&id);
                        render::form(&self.board.view().form, self.board.mode());
                    } else {
                        render::info(&format!("no loaded task {}", rest));
                    }
                }
            }
            "cancel" => {
                self.board.cancel_edit();
                render::info("form cleared");
            }
            "delete" => {
                if rest.is_empty() {
                    render::error("usage: /delete <id>");
                } else {
                    let id = self.board.resolve_id(rest);
                    self.board.delete(&id);
                }
            }
            "filter" => match apply_filter_args(&mut self.board.view_mut().filter, rest) {
                Ok(()) => {
                    render::filter(&self.board.view().filter);
                    self.board.filter();
                }
                Err(err) => render::error(&err),
            },
            "clear-filter" => {
                self.board.view_mut().filter = FilterForm::default();
                self.board.filter();
            }
            "config" => render::config(&self.config),
            "base" => {
                if rest.is_empty() {
                    render::info(&format!("base: {}", self.config.base_url));
                } else {
                    self.set_base(rest);
                }
            }
            _ => render::info("unknown command, type /help"),
        }
        false
    }

    fn set_base(&mut self, url: &str) {
        let mut config = self.config.clone();
        config.base_url = url.to_string();
        match HttpTaskApi::new(&config.client_config()) {
            Ok(api) => {
                self.config = config;
                self.board.set_api(api);
                render::info("base url updated");
                self.board.load();
            }
            Err(err) => render::error(&err.to_string()),
        }
    }
}

fn split_field(rest: &str) -> Option<(&str, &str)> {
    let mut parts = rest.splitn(2, ' ');
    let field = parts.next().filter(|f| !f.is_empty())?;
    let value = parts.next().unwrap_or("").trim();
    Some((field, value))
}

/// Applies `status=<s>` / `priority=<p>` pairs to the filter form. An empty
/// value clears that constraint; no pairs keeps the form as it is.
fn apply_filter_args(filter: &mut FilterForm, args: &str) -> Result<(), String> {
    let mut next = filter.clone();
    for pair in args.split_whitespace() {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| format!("expected key=value, got {}", pair))?;
        match key {
            "status" => next.status = value.to_string(),
            "priority" => next.priority = normalize_priority(value),
            _ => return Err(format!("unknown filter: {}", key)),
        }
    }
    *filter = next;
    Ok(())
}

// the board compares priority text exactly, so "high" becomes "High"
fn normalize_priority(value: &str) -> String {
    match value.parse::<taskboard_rs::Priority>() {
        Ok(priority) => priority.as_str().to_string(),
        Err(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_args_set_and_clear() {
        let mut filter = FilterForm::default();
        apply_filter_args(&mut filter, "status=done priority=high").unwrap();
        assert_eq!(filter.status, "done");
        assert_eq!(filter.priority, "High");

        apply_filter_args(&mut filter, "priority=").unwrap();
        assert_eq!(filter.status, "done");
        assert_eq!(filter.priority, "");
    }

    #[test]
    fn bad_filter_args_leave_form_untouched() {
        let mut filter = FilterForm {
            status: "pending".to_string(),
            priority: String::new(),
        };
        assert!(apply_filter_args(&mut filter, "status=done owner=me").is_err());
        assert!(apply_filter_args(&mut filter, "done").is_err());
        assert_eq!(filter.status, "pending");
    }

    #[test]
    fn set_splits_field_from_value() {
        assert_eq!(split_field("title Buy milk"), Some(("title", "Buy milk")));
        assert_eq!(split_field("status"), Some(("status", "")));
        assert_eq!(split_field(""), None);
    }
}
