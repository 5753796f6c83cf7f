use crate::cli::Args;
use crate::config::Config;
use crate::constants::{DEFAULT_LOG_DIRECTIVE, LOG_FILE_NAME, env_vars};
use crate::error::AppError;
use std::io::stdout;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Log path from the environment or the config file, without prompting.
async fn configured_log_path() -> Option<String> {
    if let Ok(path) = std::env::var(env_vars::LOG_FILE) {
        return Some(path);
    }
    let config_path = Config::get_config_path();
    if !Path::new(&config_path).exists() {
        return None;
    }
    Config::load_from_path(&config_path)
        .await
        .ok()
        .and_then(|config| config.log_file_path)
}

/// Splits a log file path into directory and file name.
fn split_log_path(custom_path: Option<&str>) -> (String, String) {
    match custom_path {
        Some(custom_path) => {
            let path = Path::new(custom_path);
            let parent = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(LOG_FILE_NAME);
            (parent.to_string_lossy().to_string(), file_name.to_string())
        }
        None => (Config::get_log_dir_path(), LOG_FILE_NAME.to_string()),
    }
}

fn env_filter() -> Result<EnvFilter, AppError> {
    let directive = DEFAULT_LOG_DIRECTIVE
        .parse::<Directive>()
        .map_err(|e| AppError::log_setup_error(format!("Invalid log directive: {e}")))?;
    Ok(EnvFilter::from_default_env().add_directive(directive))
}

/// Sets up logging configuration for the application.
///
/// - Interactive mode: logs only to file
/// - Once mode without debug: logs only to file
/// - Other non-interactive modes: logs to both stdout and file
/// - Uses a daily rolling file appender
///
/// Returns the path to the log file and the guard that must be kept alive
/// for the duration of the program to ensure proper log flushing.
pub async fn setup_logging(args: &Args) -> Result<(String, WorkerGuard), AppError> {
    let config_log_path = configured_log_path().await;
    let custom_log_path = args.log_file.as_deref().or(config_log_path.as_deref());
    let (log_dir, log_file_name) = split_log_path(custom_log_path);

    if !Path::new(&log_dir).exists() {
        tokio::fs::create_dir_all(&log_dir).await.map_err(|e| {
            AppError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &log_file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let registry = tracing_subscriber::registry();
    let to_stdout = crate::cli::is_noninteractive_mode(args) && (!args.once || args.debug);

    let init_result = if to_stdout {
        registry
            .with(
                fmt::Layer::new()
                    .with_writer(stdout)
                    .with_ansi(true)
                    .with_filter(env_filter()?),
            )
            .with(
                fmt::Layer::new()
                    .with_writer(non_blocking)
                    .with_ansi(false)
                    .with_filter(env_filter()?),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::Layer::new()
                    .with_writer(non_blocking)
                    .with_ansi(false)
                    .with_filter(env_filter()?),
            )
            .try_init()
    };
    init_result.map_err(|e| AppError::log_setup_error(e.to_string()))?;

    let log_file_path = format!("{log_dir}/{log_file_name}");
    Ok((log_file_path, guard))
}
