use serde::{Deserialize, Serialize};
use sitebuilder_document::theme::DEFAULT_THEME_NAME;
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "sitebuilder.config.json";

/// Site builder configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Site file the commands read and write
    #[serde(default = "default_site_file")]
    pub site_file: String,

    /// Where saved templates are kept
    #[serde(default = "default_templates_file")]
    pub templates_file: String,

    /// Undo steps kept while applying scripts (0 = unlimited)
    #[serde(default)]
    pub history_limit: usize,

    /// Built-in theme for new sites
    #[serde(default = "default_theme")]
    pub default_theme: String,
}

fn default_site_file() -> String {
    "site.json".to_string()
}

fn default_templates_file() -> String {
    ".sitebuilder/templates.json".to_string()
}

fn default_theme() -> String {
    DEFAULT_THEME_NAME.to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    /// Get absolute path to the site file
    pub fn get_site_file(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.site_file)
    }

    /// Get absolute path to the saved templates file
    pub fn get_templates_file(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.templates_file)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site_file: default_site_file(),
            templates_file: default_templates_file(),
            history_limit: 0,
            default_theme: default_theme(),
        }
    }
}
