//! Orchestration of the two pipelines around the pure core.

/// Outgoing block production.
pub mod batch;
/// Received block conversion.
pub mod cabrillo;
/// Run settings.
pub mod config;

pub use batch::{open_store, run_batch, BatchReport};
pub use cabrillo::{append_lines, run_cabrillo, CabrilloReport};
pub use config::{BatchConfig, CabrilloConfig, StoreBackend};
