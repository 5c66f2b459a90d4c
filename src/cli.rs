//! CLI argument definitions

use std::path::PathBuf;

use clap::Parser;

/// axicb-gen - round-robin arbiter RTL generator
#[derive(Debug, Parser)]
#[command(
    name = "axicb-gen",
    about = "Generates the round-robin arbiter core for the AXI crossbar",
    version
)]
pub struct Cli {
    /// Number of arbitration channels bound into the template
    #[arg(value_name = "NUM", allow_negative_numbers = true)]
    pub num: i64,

    /// Directory holding the RTL templates
    #[arg(long, value_name = "DIR", default_value = "templates")]
    pub templates: PathBuf,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(
        short = 'l',
        long = "log-level",
        value_name = "LEVEL",
        help = "Log level (TRACE, DEBUG, INFO, WARN, ERROR)"
    )]
    pub log_level: Option<String>,
}
