//! Configuration module

mod scaffold;

pub use scaffold::ScaffoldConfig;
pub use scaffold::CONFIG_FILE;
