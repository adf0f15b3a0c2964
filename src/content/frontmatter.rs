//! Front-matter rendering

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::post::PostRecord;

/// Marker that opens and closes the header block
pub const DELIMITER: &str = "---";

/// Header written at the top of a new post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontMatter {
    pub layout: String,
    pub title: String,
    pub categories: String,
}

impl FrontMatter {
    pub fn for_post(post: &PostRecord, layout: &str) -> Self {
        Self {
            layout: layout.to_string(),
            title: post.display_title(),
            categories: post.category.clone(),
        }
    }

    /// Render the delimited YAML block
    pub fn render(&self) -> Result<String> {
        // serde_yaml quotes titles that would otherwise break the header
        let yaml = serde_yaml::to_string(self)?;
        Ok(format!("{DELIMITER}\n{yaml}{DELIMITER}\n"))
    }
}
