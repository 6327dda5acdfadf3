//! Derived metrics: debt-to-GDP ratios, currency conversion, milestone
//! crossings, and heatmap bucketing

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::series::{DebtRecord, Series};

/// Debt milestones in billions of local currency
pub const DEFAULT_MILESTONES_BILLIONS: [f64; 3] = [1_000.0, 5_000.0, 10_000.0];

/// Sparse GDP-by-year table with an explicit fallback
///
/// Lookup policy: an exact year hit returns the tabulated figure; any other
/// year falls back to `default_gdp` (conventionally the most recent known
/// figure). A missing year is never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GdpTable {
    by_year: BTreeMap<i32, f64>,
    default_gdp: f64,
}

impl GdpTable {
    pub fn new(by_year: BTreeMap<i32, f64>, default_gdp: f64) -> Self {
        Self { by_year, default_gdp }
    }

    /// Build from year/GDP pairs
    pub fn from_entries(entries: &[(i32, f64)], default_gdp: f64) -> Self {
        Self {
            by_year: entries.iter().copied().collect(),
            default_gdp,
        }
    }

    /// Simplified Kenya reference table (B KES)
    pub fn kenya_reference() -> Self {
        Self::from_entries(&[(2000, 1_300.0), (2025, 7_500.0)], 7_500.0)
    }

    /// GDP for a year, falling back to the default figure
    pub fn gdp_for(&self, year: i32) -> f64 {
        self.by_year.get(&year).copied().unwrap_or(self.default_gdp)
    }
}

/// One point of a debt-to-GDP trend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtToGdpPoint {
    pub year: i32,
    pub ratio_percent: f64,
}

/// Debt-to-GDP ratio per year of the series, in series order
pub fn debt_to_gdp(series: &Series, gdp: &GdpTable) -> Vec<DebtToGdpPoint> {
    series
        .iter()
        .map(|record| DebtToGdpPoint {
            year: record.year,
            ratio_percent: record.total_debt / gdp.gdp_for(record.year) * 100.0,
        })
        .collect()
}

/// Convert every currency-denominated field of a record to USD
///
/// `rate` is local currency units per US dollar and must be a positive
/// finite number. Returns a fresh record; the input is untouched.
pub fn convert_to_usd(record: &DebtRecord, rate: f64) -> EngineResult<DebtRecord> {
    if !rate.is_finite() || rate <= 0.0 {
        return Err(EngineError::invalid(
            "rate",
            "exchange rate must be finite and positive",
        ));
    }

    Ok(DebtRecord {
        year: record.year,
        total_debt: record.total_debt / rate,
        external_debt: record.external_debt / rate,
        internal_debt: record.internal_debt / rate,
        budget_deficit: record.budget_deficit / rate,
        debt_per_citizen: record.debt_per_citizen.map(|v| v / rate),
    })
}

/// Number of thresholds the current value has reached or passed
///
/// Thresholds are evaluated independently; the count is the cardinality of
/// the satisfying subset.
pub fn milestones_crossed(current_value_billions: f64, thresholds: &[f64]) -> usize {
    thresholds
        .iter()
        .filter(|&&t| current_value_billions >= t)
        .count()
}

/// Heatmap bucket (0..=4) for a value relative to the largest value in its
/// set, with breakpoints at ratios 0.2/0.4/0.6/0.8
///
/// A non-positive or non-finite `max_value_in_set` maps every value to
/// bucket 0.
pub fn heatmap_bucket(value: f64, max_value_in_set: f64) -> usize {
    if !max_value_in_set.is_finite() || max_value_in_set <= 0.0 {
        return 0;
    }
    let ratio = value / max_value_in_set;
    if ratio < 0.2 {
        0
    } else if ratio < 0.4 {
        1
    } else if ratio < 0.6 {
        2
    } else if ratio < 0.8 {
        3
    } else {
        4
    }
}
