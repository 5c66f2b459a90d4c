//! axicb-gen - Round-robin arbiter RTL generator
//!
//! Generates the AXI crossbar round-robin arbiter core by rendering a
//! Handlebars RTL template with the number of arbitration channels bound at
//! generation time.
//!
//! The pipeline is strictly linear: load the template text from the
//! configured resource directory, substitute the parameter mapping, write
//! the result into the invocation directory. No state survives a run.
//!
//! # Modules
//!
//! - [`templates`] - Template loading from an explicit resource root
//! - [`generate`] - Rendering and file emission
//! - [`cli`] - Command-line interface
//! - [`error`] - Generator error taxonomy

pub mod cli;
pub mod error;
pub mod generate;
pub mod templates;

// Re-export commonly used types
pub use cli::Cli;
pub use error::GenError;
pub use generate::{OUTPUT_FILE, Renderer, channel_params, run};
pub use templates::{TEMPLATE_FILE, TemplateLoader};
