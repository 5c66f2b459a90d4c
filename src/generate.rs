//! Renderer/Emitter
//!
//! Binds a parameter mapping into template text with Handlebars and writes
//! the rendered output into the current working directory.
//!
//! The path asymmetry is deliberate: templates are read relative to the
//! configured resource root, the generated file is written relative to
//! wherever the process is invoked.

use std::path::Path;

use handlebars::Handlebars;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::error::GenError;
use crate::templates::{TEMPLATE_FILE, TemplateLoader};

/// File name of the generated arbiter core, created in the invocation directory
pub const OUTPUT_FILE: &str = "axicb_round_robin_core.sv";

/// Renders template text with a bound parameter context
pub struct Renderer {
    /// Handlebars template engine
    hbs: Handlebars<'static>,
}

impl Renderer {
    /// Create a renderer with default (non-strict) substitution rules
    pub fn new() -> Self {
        debug!("Renderer::new: called");
        let mut hbs = Handlebars::new();
        // RTL text, not HTML
        hbs.register_escape_fn(handlebars::no_escape);
        Self { hbs }
    }

    /// Render `template` with the given context
    ///
    /// Found markers are substituted; unknown markers follow the engine's
    /// own default rules. No extra validation is added here.
    pub fn render<T: Serialize>(&self, template: &str, ctx: &T) -> Result<String, GenError> {
        debug!(template_len = template.len(), "Renderer::render: called");
        let rendered = self.hbs.render_template(template, ctx)?;
        debug!(rendered_len = rendered.len(), "Renderer::render: complete");
        Ok(rendered)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the render mapping for the arbiter template
///
/// The render step takes a name to value mapping rather than a single
/// hardcoded binding, so further parameters can be bound without touching
/// the renderer. The arbiter template defines one slot: `num`, the channel
/// count. No range validation: zero and negative values pass through
/// verbatim.
pub fn channel_params(num: i64) -> Map<String, Value> {
    debug!(num, "channel_params: called");
    let mut params = Map::new();
    params.insert("num".to_string(), Value::from(num));
    params
}

/// Write the rendered text to `path`, truncating any existing file
///
/// Any I/O failure is fatal; a partially written file is left as is.
fn emit(path: &Path, text: &str) -> Result<(), GenError> {
    debug!(?path, len = text.len(), "emit: called");
    std::fs::write(path, text).map_err(|source| {
        debug!(?path, error = %source, "emit: write failed");
        GenError::Write {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Run the full generation pipeline: load, render, write
///
/// On success the rendered arbiter core has been written to
/// [`OUTPUT_FILE`] in the current working directory, overwriting any
/// previous content. Ok(()) is the library-level success indicator; the
/// binary maps failures to a diagnostic and exit status 1.
pub fn run(templates_dir: impl AsRef<Path>, params: &Map<String, Value>) -> Result<(), GenError> {
    let templates_dir = templates_dir.as_ref();
    debug!(?templates_dir, param_count = params.len(), "run: called");

    let loader = TemplateLoader::new(templates_dir);
    let template = loader.load(TEMPLATE_FILE)?;
    info!("Loaded template {}", TEMPLATE_FILE);

    let renderer = Renderer::new();
    let rendered = renderer.render(&template, params)?;
    debug!(rendered_len = rendered.len(), "run: template rendered");

    emit(Path::new(OUTPUT_FILE), &rendered)?;
    info!("Wrote {}", OUTPUT_FILE);

    Ok(())
}
