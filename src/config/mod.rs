use crate::constants::{self, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod user_prompts;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use user_prompts::prompt_for_api_key;
use validation::{normalize_base_url, validate_config};

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// apifootball API key, appended to every request as `APIkey`.
    pub api_key: String,
    /// Base URL of the API. Defaults to the public apifootball v3 endpoint.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Country whose competitions are listed on start.
    #[serde(default = "default_country_id")]
    pub country_id: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
}

fn default_api_base_url() -> String {
    constants::DEFAULT_API_BASE_URL.to_string()
}

fn default_country_id() -> String {
    constants::DEFAULT_COUNTRY_ID.to_string()
}

fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_key: String::new(),
            api_base_url: default_api_base_url(),
            country_id: default_country_id(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
        }
    }
}

impl Config {
    /// Creates a configuration with defaults for everything but the key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Config {
            api_key: api_key.into(),
            ..Config::default()
        }
    }

    /// Loads configuration from the default config file location.
    /// If no config file exists and no key is in the environment, prompts for
    /// the API key and creates one.
    ///
    /// # Environment Variables
    /// - `FOOTBALL_API_KEY` - Override API key
    /// - `FOOTBALL_API_BASE_URL` - Override API base URL
    /// - `FOOTBALL_COUNTRY_ID` - Override listed country
    /// - `FOOTBALL_LOG_FILE` - Override log file path
    /// - `FOOTBALL_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else if std::env::var(env_vars::API_KEY).is_ok() {
            Config::default()
        } else {
            let config = Config::with_api_key(prompt_for_api_key().await?);
            config.save().await?;
            config
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Applies `FOOTBALL_*` environment variables on top of the loaded values.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(api_key) = std::env::var(env_vars::API_KEY) {
            self.api_key = api_key;
        }

        if let Ok(base_url) = std::env::var(env_vars::API_BASE_URL) {
            self.api_base_url = base_url;
        }

        if let Ok(country_id) = std::env::var(env_vars::COUNTRY_ID) {
            self.country_id = country_id;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// The API key is masked so the output can be pasted into bug reports.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if Path::new(&config_path).exists() {
            let config = Config::load().await?;
            println!("\nCurrent Configuration");
            println!("────────────────────────────────────");
            println!("Config Location:");
            println!("{config_path}");
            println!("────────────────────────────────────");
            println!("API Base URL:");
            println!("{}", config.api_base_url);
            println!("────────────────────────────────────");
            println!("API Key:");
            println!("{}", config.masked_api_key());
            println!("────────────────────────────────────");
            println!("Country:");
            println!("{}", config.country_id);
            println!("────────────────────────────────────");
            println!("HTTP Timeout:");
            println!("{} seconds", config.http_timeout_seconds);
            println!("────────────────────────────────────");
            println!("Log File Location:");
            if let Some(custom_path) = &config.log_file_path {
                println!("{custom_path}");
            } else {
                println!("{log_dir}/{}", constants::LOG_FILE_NAME);
                println!("(Default location)");
            }
        } else {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
        }

        Ok(())
    }

    /// Returns the API key with everything but the last four characters hidden.
    pub fn masked_api_key(&self) -> String {
        let chars: Vec<char> = self.api_key.chars().collect();
        if chars.len() <= 4 {
            return "*".repeat(chars.len());
        }
        let visible: String = chars[chars.len() - 4..].iter().collect();
        format!("{}{visible}", "*".repeat(chars.len() - 4))
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist and normalises the
    /// base URL before writing.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(&Config {
            api_base_url: normalize_base_url(&self.api_base_url),
            ..self.clone()
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without env overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
