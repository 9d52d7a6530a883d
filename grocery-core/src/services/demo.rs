//! Demo service - manage demo mode
//!
//! Demo mode serves the built-in sample data set from memory instead of the
//! DuckDB store, so nothing on disk is touched.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::config::Config;

/// Demo service for managing demo mode
pub struct DemoService {
    grocery_dir: PathBuf,
}

impl DemoService {
    pub fn new(grocery_dir: &Path) -> Self {
        Self {
            grocery_dir: grocery_dir.to_path_buf(),
        }
    }

    /// Check if demo mode is currently enabled
    pub fn is_enabled(&self) -> Result<bool> {
        let config = Config::load(&self.grocery_dir)?;
        Ok(config.demo_mode)
    }

    /// Enable demo mode
    pub fn enable(&self) -> Result<()> {
        let mut config = Config::load(&self.grocery_dir).unwrap_or_default();
        config.enable_demo_mode();
        config.save(&self.grocery_dir)
    }

    /// Disable demo mode
    pub fn disable(&self) -> Result<()> {
        let mut config = Config::load(&self.grocery_dir).unwrap_or_default();
        config.disable_demo_mode();
        config.save(&self.grocery_dir)
    }
}
