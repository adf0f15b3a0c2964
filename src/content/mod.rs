//! Content module - post records, buckets, and front matter

mod destination;
mod frontmatter;
mod post;

pub use destination::{ContentDirs, Destination};
pub use frontmatter::FrontMatter;
pub use post::{capitalize_first, PostRecord};
