//! Logger initialization.
//!
//! This module provides functions to initialize the logger with custom formatting.
//! Logs always go to stderr; stdout is reserved for the bullet line.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::LevelFilter;

/// Initializes the logger with the specified level and format.
///
/// Configures `env_logger` with custom formatting. Supports both plain text
/// (with colors and emojis) and JSON formats for structured logging.
///
/// The logger reads from the `RUST_LOG` environment variable by default. The
/// provided `level` replaces its default level; its per-module directives are
/// kept.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # See where the title came from
/// link_extractor --log-level debug
///
/// # Per-module filtering via RUST_LOG
/// RUST_LOG=link_extractor=debug,reqwest=info link_extractor
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    // Read from RUST_LOG environment variable first, then override with CLI arg
    let mut builder = env_logger::Builder::from_default_env();
    configure(&mut builder, level, format);

    // try_init() so a second initialization (tests) reports an error instead of panicking
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

/// Applies level, module filters, target and format to `builder`.
///
/// `level` replaces the default level only; per-module directives already
/// parsed from `RUST_LOG` (such as `link_extractor=debug`) stay in effect.
fn configure(builder: &mut env_logger::Builder, level: LevelFilter, format: LogFormat) {
    builder.filter_level(level);
    builder.filter_module("html5ever", LevelFilter::Error);
    builder.filter_module("selectors", LevelFilter::Warn);
    builder.filter_module("reqwest", LevelFilter::Info);
    builder.filter_module("hyper", LevelFilter::Info);
    builder.filter_module("hyper_util", LevelFilter::Info);
    builder.target(env_logger::Target::Stderr);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
                    chrono::Utc::now().timestamp_millis(),
                    record.level(),
                    record.target(),
                    serde_json::to_string(&record.args().to_string())
                        .unwrap_or_else(|_| "\"\"".into())
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let level = record.level();
                let colored_level = match level {
                    log::Level::Error => level.to_string().red(),
                    log::Level::Warn => level.to_string().yellow(),
                    log::Level::Info => level.to_string().green(),
                    log::Level::Debug => level.to_string().blue(),
                    log::Level::Trace => level.to_string().purple(),
                };

                let emoji = match level {
                    log::Level::Error => "❌",
                    log::Level::Warn => "⚠️",
                    log::Level::Info => "✔️",
                    log::Level::Debug => "🔍",
                    log::Level::Trace => "🔬",
                };

                writeln!(
                    buf,
                    "{} {} [{}] {}",
                    emoji,
                    record.target().cyan(),
                    colored_level,
                    record.args()
                )
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enabled(logger: &env_logger::Logger, target: &str, level: log::Level) -> bool {
        use log::Log;
        logger.enabled(&log::Metadata::builder().target(target).level(level).build())
    }

    #[test]
    fn test_cli_level_sets_default() {
        let mut builder = env_logger::Builder::new();
        configure(&mut builder, LevelFilter::Info, LogFormat::Plain);
        let logger = builder.build();

        assert!(enabled(&logger, "link_extractor::fetch", log::Level::Info));
        assert!(!enabled(&logger, "link_extractor::fetch", log::Level::Debug));
        assert!(!enabled(&logger, "html5ever::tree_builder", log::Level::Warn));
    }

    #[test]
    fn test_rust_log_module_directive_survives_cli_level() {
        let mut builder = env_logger::Builder::new();
        builder.parse_filters("link_extractor=debug");
        configure(&mut builder, LevelFilter::Warn, LogFormat::Json);
        let logger = builder.build();

        assert!(enabled(&logger, "link_extractor::session", log::Level::Debug));
        assert!(!enabled(&logger, "some_dependency", log::Level::Info));
    }

    #[test]
    fn test_init_logger_twice_reports_error() {
        // Only one logger can be installed per process; whichever call comes
        // second must fail without panicking.
        let _ = init_logger_with(LevelFilter::Info, LogFormat::Plain);
        let second = init_logger_with(LevelFilter::Debug, LogFormat::Json);
        assert!(matches!(second, Err(InitializationError::LoggerError(_))));
    }
}
