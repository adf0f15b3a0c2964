//! Post record

use chrono::NaiveDate;
use std::path::PathBuf;

use super::destination::{ContentDirs, Destination};

/// A post about to be scaffolded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRecord {
    /// Title as typed, words joined by single spaces
    pub title: String,

    /// Front-matter category
    pub category: String,

    /// Creation date
    pub date: NaiveDate,

    /// Bucket the file is written to
    pub destination: Destination,
}

impl PostRecord {
    pub fn new(
        title: impl Into<String>,
        destination: Destination,
        date: NaiveDate,
        category: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            date,
            destination,
        }
    }

    /// Date-prefixed filename stem, e.g. `2024-01-02-my-post`
    pub fn slug(&self) -> String {
        format!(
            "{}-{}",
            self.date.format("%Y-%m-%d"),
            self.title.replace(' ', "-").to_lowercase()
        )
    }

    pub fn filename(&self) -> String {
        format!("{}.md", self.slug())
    }

    /// Title with its first character uppercased
    pub fn display_title(&self) -> String {
        capitalize_first(&self.title)
    }

    /// Full path of the post inside its bucket
    pub fn path_in(&self, dirs: &ContentDirs) -> PathBuf {
        dirs.dir_for(self.destination).join(self.filename())
    }
}

/// Uppercase the first character, leaving the rest untouched
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
