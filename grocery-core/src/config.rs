//! Configuration management
//!
//! Settings live in `settings.json` inside the grocery directory:
//! ```json
//! { "app": { "demoMode": false } }
//! ```
//! Keys this crate does not manage are preserved when saving.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable overriding the demo mode setting
pub const DEMO_MODE_ENV: &str = "GROCERY_DEMO_MODE";

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    app: AppSettings,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppSettings {
    #[serde(default)]
    demo_mode: bool,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

/// Grocery configuration (simplified view of settings)
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub demo_mode: bool,
}

impl Config {
    /// Load config from the grocery directory
    ///
    /// A missing settings file or one holding malformed JSON yields
    /// defaults; a file that exists but cannot be read is an error. The
    /// GROCERY_DEMO_MODE environment variable wins over the file.
    pub fn load(grocery_dir: &Path) -> Result<Self> {
        let raw = read_settings(grocery_dir)?;
        let demo_mode = parse_flag(std::env::var(DEMO_MODE_ENV).ok().as_deref())
            .unwrap_or(raw.app.demo_mode);

        Ok(Self { demo_mode })
    }

    /// Save config to the grocery directory
    pub fn save(&self, grocery_dir: &Path) -> Result<()> {
        let mut settings = read_settings(grocery_dir)?;
        settings.app.demo_mode = self.demo_mode;

        let settings_path = grocery_dir.join("settings.json");
        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)
            .with_context(|| format!("Failed to write {}", settings_path.display()))?;
        Ok(())
    }

    /// Enable demo mode
    pub fn enable_demo_mode(&mut self) {
        self.demo_mode = true;
    }

    /// Disable demo mode
    pub fn disable_demo_mode(&mut self) {
        self.demo_mode = false;
    }
}

fn read_settings(grocery_dir: &Path) -> Result<SettingsFile> {
    let settings_path = grocery_dir.join("settings.json");
    if !settings_path.exists() {
        return Ok(SettingsFile::default());
    }

    let content = std::fs::read_to_string(&settings_path)
        .with_context(|| format!("Failed to read {}", settings_path.display()))?;
    Ok(serde_json::from_str(&content).unwrap_or_else(|e| {
        tracing::warn!(
            path = %settings_path.display(),
            error = %e,
            "ignoring malformed settings file"
        );
        SettingsFile::default()
    }))
}

fn parse_flag(value: Option<&str>) -> Option<bool> {
    match value {
        Some("true" | "1" | "yes" | "TRUE" | "YES") => Some(true),
        Some("false" | "0" | "no" | "FALSE" | "NO") => Some(false),
        _ => None,
    }
}
