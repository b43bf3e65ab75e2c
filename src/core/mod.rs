pub mod aggregate;
pub mod codec;
pub mod dataset;

pub use crate::domain::model::{Direction, Neurotransmitter, Row, SummaryStats};
pub use crate::domain::ports::DatasetProvider;
pub use crate::utils::error::Result;
