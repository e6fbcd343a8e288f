//! Runtime configuration.
//!
//! Three layers, each overriding the last: built-in defaults, an optional
//! JSON config file under the platform config directory, and `ETALAGE_*`
//! environment variables. Loading never fails; unreadable or invalid input
//! is reported through [`Config::load_warnings`] once logging is up.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Default endpoint for the newsletter POST.
pub const DEFAULT_SUBSCRIBE_URL: &str = "https://api.etalage.app/v1/newsletter";

/// Resolved configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Endpoint for the newsletter form submission.
    pub newsletter_url: String,
    /// Enable mouse capture. Hover interactions need it.
    pub mouse: bool,
    /// Log file path. Logging is off when unset; stdout belongs to the UI.
    pub log_file: Option<PathBuf>,
    /// Problems encountered during loading, to report once logging is up.
    pub load_warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            newsletter_url: DEFAULT_SUBSCRIBE_URL.to_string(),
            mouse: true,
            log_file: None,
            load_warnings: Vec::new(),
        }
    }
}

/// The config file is partial: only the keys present override defaults.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    newsletter_url: Option<String>,
    mouse: Option<bool>,
    log_file: Option<PathBuf>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the newsletter endpoint.
    pub fn with_newsletter_url(mut self, url: impl Into<String>) -> Self {
        self.newsletter_url = url.into();
        self
    }

    /// Enable or disable mouse capture.
    pub fn with_mouse(mut self, mouse: bool) -> Self {
        self.mouse = mouse;
        self
    }

    /// Set the log file path.
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Default location of the config file.
    pub fn default_file_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("etalage").join("config.json"))
    }

    fn default_log_path() -> PathBuf {
        dirs::cache_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("etalage")
            .join("etalage.log")
    }

    /// Full load: defaults, then the default config file, then environment.
    pub fn load() -> Self {
        let mut config = Self::default();
        if let Some(path) = Self::default_file_path() {
            config.apply_file(&path);
        }
        config.apply_env();
        config
    }

    /// Merge the config file at `path` when it exists.
    pub fn apply_file(&mut self, path: &Path) {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return,
            Err(err) => {
                self.load_warnings
                    .push(format!("could not read {}: {}", path.display(), err));
                return;
            }
        };
        match serde_json::from_str::<ConfigFile>(&text) {
            Ok(file) => {
                if let Some(url) = file.newsletter_url {
                    self.newsletter_url = url;
                }
                if let Some(mouse) = file.mouse {
                    self.mouse = mouse;
                }
                if let Some(log_file) = file.log_file {
                    self.log_file = Some(log_file);
                }
            }
            Err(err) => {
                self.load_warnings
                    .push(format!("invalid config {}: {}", path.display(), err));
            }
        }
    }

    /// Apply `ETALAGE_*` environment overrides.
    pub fn apply_env(&mut self) {
        if let Ok(url) = std::env::var("ETALAGE_SUBSCRIBE_URL") {
            if url.is_empty() {
                self.load_warnings
                    .push("ETALAGE_SUBSCRIBE_URL is empty, keeping default".to_string());
            } else {
                self.newsletter_url = url;
            }
        }
        if std::env::var("ETALAGE_NO_MOUSE").is_ok() {
            self.mouse = false;
        }
        if let Ok(value) = std::env::var("ETALAGE_LOG") {
            self.log_file = Some(match value.as_str() {
                "" | "1" | "true" => Self::default_log_path(),
                path => PathBuf::from(path),
            });
        }
    }
}
