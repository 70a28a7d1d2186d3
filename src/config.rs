//! Configuration handling for the site

use crate::content;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Optional overrides for the built-in site content
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SiteConfig {
    /// Brand shown in the navbar, home page and copyright line
    pub brand_name: Option<String>,
    /// Contact email in the footer
    pub contact_email: Option<String>,
    /// Contact phone in the footer
    pub contact_phone: Option<String>,
}

impl SiteConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("com", "yourbrand", "storefront-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory for the log file
    pub fn log_dir() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_local_dir().join("logs"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: SiteConfig = serde_json::from_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn brand_name(&self) -> &str {
        non_empty(&self.brand_name).unwrap_or(content::BRAND_NAME)
    }

    pub fn contact_email(&self) -> &str {
        non_empty(&self.contact_email).unwrap_or(content::CONTACT_EMAIL)
    }

    pub fn contact_phone(&self) -> &str {
        non_empty(&self.contact_phone).unwrap_or(content::CONTACT_PHONE)
    }
}

/// Blank overrides fall back to the defaults
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
