//! Scaffolder configuration (_scaffold.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File name looked up in the blog root
pub const CONFIG_FILE: &str = "_scaffold.yml";

/// Settings for new posts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    // Directory
    pub posts_dir: String,
    pub drafts_dir: String,
    pub til_dir: String,

    // Front matter
    pub layout: String,
    pub category: String,

    /// Editor command, takes precedence over $VISUAL and $EDITOR
    pub editor: Option<String>,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            posts_dir: "_posts".to_string(),
            drafts_dir: "_drafts".to_string(),
            til_dir: "_til".to_string(),

            layout: "post".to_string(),
            category: "random".to_string(),

            editor: None,
        }
    }
}

impl ScaffoldConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: ScaffoldConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("invalid configuration in {}", path.display()))?;
        Ok(config)
    }

    /// Load `_scaffold.yml` from the blog root, or fall back to defaults
    pub fn load_or_default<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let config_path = base_dir.as_ref().join(CONFIG_FILE);

        if config_path.exists() {
            tracing::debug!("Loading scaffold config from {:?}", config_path);
            Self::load(&config_path)
        } else {
            Ok(Self::default())
        }
    }
}
