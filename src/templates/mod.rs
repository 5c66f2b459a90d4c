//! RTL Template Resources
//!
//! Loads SystemVerilog templates from an explicitly configured resource
//! directory. The resource root is always passed in by the caller; nothing
//! is resolved from the location of the running executable.
//!
//! Templates use Handlebars syntax for variable substitution.

mod loader;

pub use loader::{TEMPLATE_FILE, TemplateLoader};
