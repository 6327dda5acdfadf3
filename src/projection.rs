//! Projection engine: extend a series forward under an organic growth or
//! amortized repayment model

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::series::{DebtRecord, Series};

/// Default projection horizon (years)
pub const DEFAULT_HORIZON_YEARS: u32 = 5;

/// Fixed annual repayment with interest accrual
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RepaymentPlan {
    /// Repaid each year after interest accrues (B local)
    pub annual_repayment_billions: f64,

    /// Annual interest rate on the outstanding balance (%)
    pub interest_rate_percent: f64,
}

/// Parameters for a projection run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionParams {
    /// Annual compound growth rate for the organic model (%)
    pub growth_rate_percent: f64,

    /// Number of years to project past the end of the base series
    pub horizon_years: u32,

    /// When present, the repayment model replaces organic growth
    pub repayment: Option<RepaymentPlan>,
}

impl Default for ProjectionParams {
    fn default() -> Self {
        Self {
            growth_rate_percent: crate::reconstruction::DEFAULT_GROWTH_RATE_PERCENT,
            horizon_years: DEFAULT_HORIZON_YEARS,
            repayment: None,
        }
    }
}

impl ProjectionParams {
    fn validate(&self) -> EngineResult<()> {
        if !self.growth_rate_percent.is_finite() || self.growth_rate_percent < 0.0 {
            return Err(EngineError::invalid(
                "growth_rate_percent",
                "must be finite and non-negative",
            ));
        }
        if let Some(plan) = &self.repayment {
            if !plan.annual_repayment_billions.is_finite() || plan.annual_repayment_billions < 0.0 {
                return Err(EngineError::invalid(
                    "annual_repayment_billions",
                    "must be finite and non-negative",
                ));
            }
            if !plan.interest_rate_percent.is_finite() || plan.interest_rate_percent < 0.0 {
                return Err(EngineError::invalid(
                    "interest_rate_percent",
                    "must be finite and non-negative",
                ));
            }
        }
        Ok(())
    }
}

/// Extend `base` with `horizon_years` projected records
///
/// Organic model: each year compounds at the growth rate. Repayment model:
/// interest accrues, the annual repayment is subtracted, and the result is
/// floored at zero; the floored value carries forward, so a fully repaid
/// debt stays at zero for the rest of the horizon.
///
/// Projected records always carry a per-citizen figure, unlike historical
/// records, which carry it only for the final year of their window. Pure
/// function: `base` is never mutated.
pub fn project(base: &Series, params: &ProjectionParams) -> EngineResult<Series> {
    params.validate()?;

    let last = base.last().ok_or_else(|| {
        EngineError::PreconditionFailed("cannot project from an empty base series".into())
    })?;

    debug!(
        "projecting {} years from {} (total {}B), repayment={}",
        params.horizon_years,
        last.year,
        last.total_debt,
        params.repayment.is_some()
    );

    let mut result = base.clone();
    let mut current_debt = last.total_debt;

    for offset in 1..=params.horizon_years {
        current_debt = match &params.repayment {
            Some(plan) => {
                let accrued = current_debt * (1.0 + plan.interest_rate_percent / 100.0);
                (accrued - plan.annual_repayment_billions).max(0.0)
            }
            None => current_debt * (1.0 + params.growth_rate_percent / 100.0),
        };

        let record = DebtRecord::synthesized(last.year + offset as i32, current_debt);
        result.insert(record.with_per_citizen());
    }

    Ok(result)
}
