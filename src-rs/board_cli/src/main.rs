mod cli;
mod models;
mod render;
mod repl;
mod view;

use taskboard_rs::{HttpTaskApi, TaskClient};

use repl::REPL;
use view::TerminalView;

fn main() {
    // stdout carries the board; diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let config = cli::parse_config();
    let api = match HttpTaskApi::new(&config.client_config()) {
        Ok(api) => api,
        Err(err) => {
            render::error(&err.to_string());
            std::process::exit(1);
        }
    };
    let board = TaskClient::new(api, TerminalView::default());
    let mut repl = REPL::new(config, board);
    repl.run();
}
