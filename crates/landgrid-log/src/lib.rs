//! Logging setup for the land model tools.
//!
//! Library crates log through the `log` facade; this crate installs a
//! `tracing` subscriber that picks those records up, prints them to the
//! console and optionally mirrors them as JSON lines into a log file.

use std::path::{Path, PathBuf};

use landgrid_config::Config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "info";
const LOG_FILE: &str = "landgrid.log";

/// Initialize the global subscriber.
///
/// `RUST_LOG` wins over `config.debug.log_level`, which wins over `info`.
/// When `log_dir` is given and `config.debug.log_to_file` is set, a JSON
/// file layer is added as well; the path of that file is returned.
///
/// # Examples
///
/// ```no_run
/// use landgrid_config::Config;
/// use landgrid_log::init_logging;
///
/// let config = Config::default();
/// init_logging(Some(std::path::Path::new("./logs")), &config);
/// ```
pub fn init_logging(log_dir: Option<&Path>, config: &Config) -> Option<PathBuf> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_for(config)));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_names(true)
        .with_level(true)
        .with_timer(fmt::time::uptime())
        .with_writer(std::io::stderr);

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if config.debug.log_to_file
        && let Some(log_dir) = log_dir
        && std::fs::create_dir_all(log_dir).is_ok()
        && let Ok(log_file) = std::fs::File::create(log_dir.join(LOG_FILE))
    {
        let file_layer = fmt::layer()
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json();

        subscriber.with(file_layer).init();
        return Some(log_dir.join(LOG_FILE));
    }

    subscriber.init();
    None
}

/// Filter string for `config`, falling back to `info` when unset.
pub fn filter_for(config: &Config) -> String {
    let level = config.debug.log_level.trim();
    if level.is_empty() {
        DEFAULT_FILTER.to_string()
    } else {
        level.to_string()
    }
}

pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_FILTER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_level() {
        assert!(default_env_filter().to_string().contains("info"));
    }

    #[test]
    fn test_filter_from_config() {
        let mut config = Config::default();
        assert_eq!(filter_for(&config), "info");

        config.debug.log_level = "warn,landgrid_server=debug".to_string();
        assert_eq!(filter_for(&config), "warn,landgrid_server=debug");

        config.debug.log_level = "  ".to_string();
        assert_eq!(filter_for(&config), "info");
    }

    #[test]
    fn test_env_filter_parsing() {
        let valid_filters = [
            "info",
            "debug,landgrid_registry=trace",
            "warn,landgrid_server=debug,landgrid_view=trace",
            "error",
        ];

        for filter_str in &valid_filters {
            let result = EnvFilter::try_new(*filter_str);
            assert!(result.is_ok(), "Failed to parse filter: {}", filter_str);
        }
    }

    #[test]
    fn test_log_file_location() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_file_path = temp_dir.path().join(LOG_FILE);
        assert_eq!(log_file_path.file_name().unwrap(), "landgrid.log");
    }
}
