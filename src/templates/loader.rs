//! Template Loader
//!
//! Reads template files from a configured base directory as whole UTF-8
//! strings. A missing or unreadable template is fatal to the run.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::GenError;

/// File name of the round-robin arbiter core template
pub const TEMPLATE_FILE: &str = "tmpl.axicb_round_robin_core.sv";

/// Loads template text from a resource directory
pub struct TemplateLoader {
    /// Base directory holding the template resources
    base_dir: PathBuf,
}

impl TemplateLoader {
    /// Create a loader rooted at the given resource directory
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        debug!(?base_dir, "TemplateLoader::new: called");
        Self { base_dir }
    }

    /// Load the full text of `name` from the base directory
    ///
    /// Returns the complete file contents decoded as UTF-8 with no
    /// transformation and no partial reads.
    pub fn load(&self, name: &str) -> Result<String, GenError> {
        let path = self.base_dir.join(name);
        debug!(?path, "TemplateLoader::load: called");
        match std::fs::read_to_string(&path) {
            Ok(text) => {
                debug!(?path, len = text.len(), "TemplateLoader::load: read template");
                Ok(text)
            }
            Err(source) => {
                debug!(?path, error = %source, "TemplateLoader::load: read failed");
                Err(GenError::TemplateNotFound { path, source })
            }
        }
    }
}
