//! Generator error taxonomy
//!
//! Every failure here is fatal to the single-shot process: nothing is
//! retried and no partial output is cleaned up. A stale or half-written
//! output file may remain after a write failure.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from the generation pipeline
#[derive(Debug, Error)]
pub enum GenError {
    /// Template file missing or unreadable at the resolved path
    #[error("template not found: {}: {source}", path.display())]
    TemplateNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The template engine rejected the template or a substitution
    #[error("template render failed: {0}")]
    Render(#[from] handlebars::RenderError),

    /// Output file could not be opened or written
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_not_found_display() {
        let err = GenError::TemplateNotFound {
            path: PathBuf::from("templates/missing.sv"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        let msg = err.to_string();
        assert!(msg.contains("template not found"));
        assert!(msg.contains("templates/missing.sv"));
    }

    #[test]
    fn test_write_display() {
        let err = GenError::Write {
            path: PathBuf::from("axicb_round_robin_core.sv"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        let msg = err.to_string();
        assert!(msg.contains("failed to write"));
        assert!(msg.contains("axicb_round_robin_core.sv"));
    }
}
