//! Command-line interface module.
//!
//! | Command    | Output                                              |
//! |------------|-----------------------------------------------------|
//! | `list`     | plugin list, or detailed asset listings             |
//! | `copy`     | copies plugin assets into the site for editing      |
//! | `payload`  | template payload as JSON                            |
//! | `manifest` | pages and files plugins contribute to the build     |
//! | `include`  | effective path of a plugin include                  |
//! | `copy-doc` | Markdown file rewritten as a doc page               |

mod args;
pub mod copy;
pub mod copy_doc;
pub mod include;
pub mod list;
pub mod manifest;
pub mod payload;

pub use args::{CategoryArgs, Cli, Commands};

use crate::plugin::CategoryRequest;
use crate::registry::PluginRegistry;

/// Version banner printed above plugin lists.
pub fn banner() -> String {
    format!("inkpot - v{}\n", env!("CARGO_PKG_VERSION"))
}

impl CategoryArgs {
    /// Category request built from the flags (no flag selects everything).
    pub fn request(&self) -> CategoryRequest {
        CategoryRequest::parse(self.requested())
    }
}

/// `Plugin '<name>' not found.` followed by the installed plugin names.
pub fn not_found_message(registry: &PluginRegistry, name: &str) -> String {
    let mut message = format!("Plugin '{name}' not found.\n\nCurrently installed plugins:\n");
    if registry.is_empty() {
        message.push_str("You have no plugins installed.\n");
    }
    for plugin in registry.plugins() {
        message.push_str(plugin.name());
        message.push('\n');
    }
    message
}

/// Report an unknown plugin and exit with status 1.
pub fn not_found(registry: &PluginRegistry, name: &str) -> ! {
    print!("{}", not_found_message(registry, name));
    std::process::exit(1);
}
