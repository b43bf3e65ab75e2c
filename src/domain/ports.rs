use crate::domain::model::Row;
use crate::utils::error::Result;

/// Read-only capability over a disorder table. The shipped implementation is
/// the compiled-in literal; an alternative loader could substitute here
/// without touching the codec or aggregator.
pub trait DatasetProvider: Send + Sync {
    /// Disorder names in declaration order, stable across calls.
    fn list_disorders(&self) -> Vec<&str>;

    /// The complete row for a disorder, or `DisorderNotFound`.
    fn get_row(&self, name: &str) -> Result<&Row>;

    /// One-line prose description of a disorder, or `DisorderNotFound`.
    fn description(&self, name: &str) -> Result<&str>;
}
