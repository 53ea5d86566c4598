//! Path utilities.
//!
//! - [`fs`]: Filesystem path resolution (`resolve_from`, `normalize_path`, `is_empty_dir`)

pub mod fs;

pub use fs::{is_empty_dir, resolve_from};
