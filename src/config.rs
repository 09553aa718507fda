//! Configuration handling for the TUI

use crate::state::EMAIL_DEBOUNCE;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    /// Route to open on startup (`""`, `"home"` or `"form"`)
    pub start_route: Option<String>,
    /// Quiet period before the email message updates, in milliseconds
    pub email_debounce_ms: Option<u64>,
    /// Whether the customer form route may be entered
    pub allow_form_route: Option<bool>,
    /// Write logs to this file instead of stderr
    pub log_file: Option<PathBuf>,
}

impl FormConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "customer-form", "customer-form-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a file; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: FormConfig = serde_json::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    pub fn start_route(&self) -> &str {
        self.start_route.as_deref().unwrap_or("")
    }

    pub fn email_debounce(&self) -> Duration {
        self.email_debounce_ms
            .map(Duration::from_millis)
            .unwrap_or(EMAIL_DEBOUNCE)
    }

    pub fn allow_form_route(&self) -> bool {
        self.allow_form_route.unwrap_or(true)
    }
}
