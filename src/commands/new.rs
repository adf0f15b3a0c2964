//! Create a new post, draft, or TIL note

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

use crate::content::{Destination, FrontMatter, PostRecord};
use crate::Blog;

/// What the user asked for on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    pub destination: Destination,
    pub title: String,
}

impl ScaffoldRequest {
    /// Build a request from `[--draft|--til] <title...>`
    pub fn from_args(args: &[String]) -> Result<Self> {
        let (destination, words) = Destination::split_args(args);
        let title = words.join(" ");

        if title.trim().is_empty() {
            bail!("A title is required: create-post [--draft|--til] <title...>");
        }

        Ok(Self { destination, title })
    }
}

/// Write the front matter for a new post and return its path.
///
/// An existing file with the same name is overwritten.
pub fn create_post(blog: &Blog, request: &ScaffoldRequest, today: NaiveDate) -> Result<PathBuf> {
    let post = PostRecord::new(
        request.title.as_str(),
        request.destination,
        today,
        blog.config.category.as_str(),
    );
    let file_path = post.path_in(&blog.dirs);

    let content = FrontMatter::for_post(&post, &blog.config.layout).render()?;

    if file_path.exists() {
        tracing::debug!("Overwriting existing file {:?}", file_path);
    }

    fs::write(&file_path, content)
        .with_context(|| format!("failed to write {}", file_path.display()))?;

    tracing::debug!("Created {}: {}", post.destination, file_path.display());

    Ok(file_path)
}
