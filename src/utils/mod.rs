//! Utility modules shared by the pipeline and the CLI.
//!
//! - [`path`]: Filesystem path resolution (`resolve_from`, `is_empty_dir`)
//! - [`slug`]: Slug generation for plugin names (`slugify`)

pub mod path;
pub mod slug;

pub use path::{is_empty_dir, resolve_from};
pub use slug::slugify;
