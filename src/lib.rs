//! create-post: scaffold new blog posts
//!
//! Writes a Markdown file with a front-matter header into one of the blog's
//! content buckets (`_posts`, `_drafts`, `_til`) and opens it in an editor.

pub mod commands;
pub mod config;
pub mod content;
pub mod editor;

use anyhow::Result;
use std::path::Path;

/// A blog checkout to scaffold posts into
#[derive(Debug, Clone)]
pub struct Blog {
    /// Scaffolder configuration
    pub config: config::ScaffoldConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Bucket directories
    pub dirs: content::ContentDirs,
}

impl Blog {
    /// Open a blog rooted at `base_dir`, reading `_scaffold.yml` if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config = config::ScaffoldConfig::load_or_default(&base_dir)?;
        Ok(Self::with_config(base_dir, config))
    }

    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::ScaffoldConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let dirs = content::ContentDirs::new(&base_dir, &config);

        Self {
            config,
            base_dir,
            dirs,
        }
    }

    /// Scaffold a new post dated `today`
    pub fn new_post(
        &self,
        request: &commands::new::ScaffoldRequest,
        today: chrono::NaiveDate,
    ) -> Result<std::path::PathBuf> {
        commands::new::create_post(self, request, today)
    }
}
