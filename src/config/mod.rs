pub mod display;

pub use display::DisplayConfig;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "neuro-atlas")]
#[command(about = "Explore neurotransmitter directionality across psychological disorders")]
pub struct CliConfig {
    /// Disorder to report on; defaults to the first table entry.
    pub disorder: Option<String>,

    #[arg(long, help = "List the available disorders and exit")]
    pub list: bool,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    #[arg(long, help = "Path to a TOML display configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "Disable ANSI colors in the text report")]
    pub no_color: bool,

    #[arg(long, help = "Print the report at once instead of animating the bars")]
    pub no_animation: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
