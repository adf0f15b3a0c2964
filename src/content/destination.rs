//! Content buckets a new post can land in

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::ScaffoldConfig;

/// Which bucket a post is written to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Destination {
    /// Published posts
    #[default]
    Posts,
    /// Unpublished drafts
    Drafts,
    /// "Today I learned" notes
    Til,
}

impl Destination {
    /// Map a command-line flag to a destination
    pub fn from_flag(flag: &str) -> Option<Self> {
        match flag {
            "--draft" => Some(Destination::Drafts),
            "--til" => Some(Destination::Til),
            _ => None,
        }
    }

    /// Split the destination flag off the front of the arguments.
    ///
    /// Only the leading token is inspected; everything after it belongs to
    /// the title, even if it looks like another flag.
    pub fn split_args(args: &[String]) -> (Self, &[String]) {
        match args.split_first() {
            Some((first, rest)) => match Self::from_flag(first) {
                Some(destination) => (destination, rest),
                None => (Destination::Posts, args),
            },
            None => (Destination::Posts, args),
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Posts => write!(f, "post"),
            Destination::Drafts => write!(f, "draft"),
            Destination::Til => write!(f, "til"),
        }
    }
}

/// Resolved bucket directories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentDirs {
    pub posts: PathBuf,
    pub drafts: PathBuf,
    pub til: PathBuf,
}

impl ContentDirs {
    /// Resolve the configured bucket names against the blog root
    pub fn new(base_dir: &Path, config: &ScaffoldConfig) -> Self {
        Self {
            posts: base_dir.join(&config.posts_dir),
            drafts: base_dir.join(&config.drafts_dir),
            til: base_dir.join(&config.til_dir),
        }
    }

    pub fn dir_for(&self, destination: Destination) -> &Path {
        match destination {
            Destination::Posts => &self.posts,
            Destination::Drafts => &self.drafts,
            Destination::Til => &self.til,
        }
    }
}
