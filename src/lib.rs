pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{CliConfig, DisplayConfig, OutputFormat};
pub use core::dataset::{builtin, StaticDataset};
pub use domain::model::{Direction, Neurotransmitter, Row, SummaryStats};
pub use domain::ports::DatasetProvider;
pub use utils::error::{AtlasError, Result};
