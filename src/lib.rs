//! Debt Clock Engine - Debt simulation and projection engine
//!
//! This library provides:
//! - Reconstruction of a dense annual debt series from sparse known data points
//! - What-if projections under organic growth and amortized repayment models
//! - Derived metrics (per-citizen debt, debt-to-GDP, USD conversion, milestones)
//! - A live counter advancing the displayed debt at wall-clock cadence
//! - CSV export and batch scenario runs

pub mod error;
pub mod series;
pub mod reconstruction;
pub mod projection;
pub mod metrics;
pub mod ticker;
pub mod export;
pub mod scenario;

// Re-export commonly used types
pub use error::{EngineError, EngineResult};
pub use series::{DebtRecord, Series, POPULATION};
pub use reconstruction::{reconstruct, ReconstructionConfig};
pub use projection::{project, ProjectionParams, RepaymentPlan};
pub use metrics::{debt_to_gdp, convert_to_usd, milestones_crossed, heatmap_bucket, GdpTable};
pub use ticker::{LiveCounterState, LiveTicker};
pub use scenario::ScenarioRunner;
