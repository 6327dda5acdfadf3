//! Scenario runner for batch what-if projections
//!
//! Reconstructs the base series once, then runs many projections with
//! different parameters against the same immutable base.

use rayon::prelude::*;

use crate::error::EngineResult;
use crate::projection::{project, ProjectionParams};
use crate::reconstruction::{reconstruct, ReconstructionConfig};
use crate::series::Series;

/// Pre-built base series for efficient batch projections
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::from_reconstruction(&sparse, &config)?;
///
/// for rate in [5.0, 10.0, 14.87] {
///     let params = ProjectionParams { growth_rate_percent: rate, ..Default::default() };
///     let projected = runner.run(&params)?;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    base_series: Series,
}

impl ScenarioRunner {
    /// Create a runner over an already-complete base series
    pub fn new(base_series: Series) -> Self {
        Self { base_series }
    }

    /// Create a runner by reconstructing the historical window from sparse
    /// known data points
    pub fn from_reconstruction(
        sparse: &Series,
        config: &ReconstructionConfig,
    ) -> EngineResult<Self> {
        Ok(Self {
            base_series: reconstruct(sparse, config)?,
        })
    }

    /// The shared base series
    pub fn base_series(&self) -> &Series {
        &self.base_series
    }

    /// Run a single projection against the base series
    pub fn run(&self, params: &ProjectionParams) -> EngineResult<Series> {
        project(&self.base_series, params)
    }

    /// Run many parameter sets in parallel; results are in input order
    ///
    /// Each projection reads the same immutable base and returns a fresh
    /// series, so the runs share no mutable state.
    pub fn run_scenarios(&self, params_set: &[ProjectionParams]) -> EngineResult<Vec<Series>> {
        params_set
            .par_iter()
            .map(|params| project(&self.base_series, params))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::DebtRecord;

    fn test_runner() -> ScenarioRunner {
        ScenarioRunner::new(
            Series::from_records(vec![DebtRecord::synthesized(2025, 11_000.0)]).unwrap(),
        )
    }

    #[test]
    fn test_run_scenarios_batch() {
        let runner = test_runner();

        let params_set: Vec<_> = [3.0, 4.0, 5.0]
            .iter()
            .map(|&rate| ProjectionParams {
                growth_rate_percent: rate,
                horizon_years: 10,
                repayment: None,
            })
            .collect();

        let results = runner.run_scenarios(&params_set).unwrap();
        assert_eq!(results.len(), 3);

        // Higher growth rate should end with higher final debt
        let final_debt = |s: &Series| s.last().unwrap().total_debt;
        assert!(final_debt(&results[2]) > final_debt(&results[0]));
    }

    #[test]
    fn test_base_series_shared_unchanged() {
        let runner = test_runner();
        let params = ProjectionParams::default();

        runner.run(&params).unwrap();
        runner.run(&params).unwrap();
        assert_eq!(runner.base_series().len(), 1);
    }

    #[test]
    fn test_from_reconstruction() {
        let runner = ScenarioRunner::from_reconstruction(
            &Series::new(),
            &ReconstructionConfig::default(),
        )
        .unwrap();
        assert_eq!(runner.base_series().len(), 26);
    }
}
