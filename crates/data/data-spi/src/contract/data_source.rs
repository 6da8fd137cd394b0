//! Data source trait definition.

use crate::error::Result;
use crate::model::ObservationTable;

/// Trait for sources that can produce the observation table.
///
/// The table is loaded once at process start and shared read-only afterwards,
/// so implementations are free to block.
pub trait DataSource: Send + Sync {
    /// Data source name, used in log lines.
    fn name(&self) -> &str;

    /// Load every observation the source knows about.
    fn load_observations(&self) -> Result<ObservationTable>;
}
