use super::Config;
use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - API key cannot be empty or contain whitespace
/// - Base URL must be an http(s) URL with a host
/// - Country id cannot be empty
/// - HTTP timeout must be at least one second
/// - Log file path, when given, cannot be empty and its parent must be creatable
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    if config.api_key.is_empty() {
        return Err(AppError::config_error("API key cannot be empty"));
    }

    if config.api_key.chars().any(char::is_whitespace) {
        return Err(AppError::config_error("API key cannot contain whitespace"));
    }

    let host = config
        .api_base_url
        .strip_prefix("https://")
        .or_else(|| config.api_base_url.strip_prefix("http://"))
        .ok_or_else(|| {
            AppError::config_error("API base URL must start with http:// or https://")
        })?;
    if host.trim_matches('/').is_empty() {
        return Err(AppError::config_error("API base URL is missing a host"));
    }

    if config.country_id.trim().is_empty() {
        return Err(AppError::config_error("Country id cannot be empty"));
    }

    if config.http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be at least one second",
        ));
    }

    if let Some(log_path) = &config.log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

/// Strips trailing slashes and upgrades `http://` to `https://`.
///
/// Loopback hosts keep plain http so a local mock server still works.
pub fn normalize_base_url(base_url: &str) -> String {
    let trimmed = base_url.trim().trim_end_matches('/');
    match trimmed.strip_prefix("http://") {
        Some(rest) if !is_loopback(rest) => format!("https://{rest}"),
        Some(_) => trimmed.to_string(),
        None if trimmed.starts_with("https://") => trimmed.to_string(),
        None => format!("https://{trimmed}"),
    }
}

fn is_loopback(host_and_path: &str) -> bool {
    host_and_path.starts_with("localhost") || host_and_path.starts_with("127.0.0.1")
}
