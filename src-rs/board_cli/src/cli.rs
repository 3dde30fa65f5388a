use std::env;

use taskboard_rs::config::DEFAULT_BASE_URL;

use crate::models::CLIConfig;

pub fn parse_config() -> CLIConfig {
    let args: Vec<String> = env::args().skip(1).collect();
    parse_args(
        CLIConfig {
            base_url: env_or("TASKBOARD_URL", DEFAULT_BASE_URL.to_string()),
            timeout_secs: env_u64("TASKBOARD_TIMEOUT"),
        },
        &args,
    )
}

/// Applies command-line flags over an env-derived config.
pub fn parse_args(mut cfg: CLIConfig, args: &[String]) -> CLIConfig {
    let mut idx = 0;
    while idx < args.len() {
        match args[idx].as_str() {
            "--base" => {
                if let Some(value) = args.get(idx + 1) {
                    cfg.base_url = value.clone();
                    idx += 1;
                }
            }
            "--timeout" => {
                if let Some(value) = args.get(idx + 1) {
                    cfg.timeout_secs = parse_timeout(value);
                    idx += 1;
                }
            }
            _ => {}
        }
        idx += 1;
    }
    cfg
}

fn env_or(key: &str, fallback: String) -> String {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => fallback,
    }
}

fn env_u64(key: &str) -> Option<u64> {
    env::var(key).ok().and_then(|value| parse_timeout(&value))
}

// 0 disables the timeout
fn parse_timeout(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok().filter(|secs| *secs > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> CLIConfig {
        CLIConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn flags_override_defaults() {
        let cfg = parse_args(base(), &args(&["--base", "http://tasks:4000", "--timeout", "15"]));
        assert_eq!(cfg.base_url, "http://tasks:4000");
        assert_eq!(cfg.timeout_secs, Some(15));
    }

    #[test]
    fn bad_or_zero_timeout_means_none() {
        assert_eq!(parse_args(base(), &args(&["--timeout", "soon"])).timeout_secs, None);
        assert_eq!(parse_args(base(), &args(&["--timeout", "0"])).timeout_secs, None);
    }

    #[test]
    fn unknown_and_dangling_flags_are_ignored() {
        let cfg = parse_args(base(), &args(&["--verbose", "--base"]));
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    }
}
