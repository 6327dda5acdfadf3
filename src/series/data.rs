//! Debt record and annual series data structures

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Population used for per-citizen figures (2025 estimate)
pub const POPULATION: f64 = 54_000_000.0;

/// One fiscal year's debt snapshot
///
/// Currency amounts are in billions of local currency, except
/// `debt_per_citizen` which is in whole local currency units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtRecord {
    /// Fiscal year, unique within a series
    pub year: i32,

    /// Total public debt (B local)
    pub total_debt: f64,

    /// Externally held portion (B local)
    pub external_debt: f64,

    /// Domestically held portion (B local)
    pub internal_debt: f64,

    /// Budget deficit for the year (B local, signed; surplus is negative)
    pub budget_deficit: f64,

    /// Per-citizen debt in local currency units; only the final year of a
    /// historical window and every projected year carry this
    /// (serializes as an empty CSV field when absent)
    #[serde(default)]
    pub debt_per_citizen: Option<f64>,
}

impl DebtRecord {
    /// Synthesize a record from a running total, split evenly between
    /// external and internal holdings
    pub fn synthesized(year: i32, total_debt: f64) -> Self {
        Self {
            year,
            total_debt,
            external_debt: total_debt / 2.0,
            internal_debt: total_debt / 2.0,
            budget_deficit: 0.0,
            debt_per_citizen: None,
        }
    }

    /// Per-citizen debt for this record's total, in local currency units
    pub fn per_citizen(&self) -> f64 {
        self.total_debt * 1e9 / POPULATION
    }

    /// Copy of this record annotated with its per-citizen figure
    pub fn with_per_citizen(&self) -> Self {
        Self {
            debt_per_citizen: Some(self.per_citizen()),
            ..self.clone()
        }
    }
}

/// Ordered sequence of annual debt records, ascending by year, unique years
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Series {
    records: Vec<DebtRecord>,
}

impl Series {
    /// Empty series
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a series from records in any order; sorts by year and rejects
    /// duplicate years
    pub fn from_records(mut records: Vec<DebtRecord>) -> EngineResult<Self> {
        records.sort_by_key(|r| r.year);
        for pair in records.windows(2) {
            if pair[0].year == pair[1].year {
                return Err(EngineError::invalid(
                    "records",
                    format!("duplicate year {}", pair[0].year),
                ));
            }
        }
        Ok(Self { records })
    }

    /// Insert a record, keeping year order; replaces any existing record
    /// for the same year
    pub fn insert(&mut self, record: DebtRecord) {
        match self.records.binary_search_by_key(&record.year, |r| r.year) {
            Ok(idx) => self.records[idx] = record,
            Err(idx) => self.records.insert(idx, record),
        }
    }

    /// Look up the record for an exact year
    pub fn get(&self, year: i32) -> Option<&DebtRecord> {
        self.records
            .binary_search_by_key(&year, |r| r.year)
            .ok()
            .map(|idx| &self.records[idx])
    }

    /// Earliest record
    pub fn first(&self) -> Option<&DebtRecord> {
        self.records.first()
    }

    /// Latest record
    pub fn last(&self) -> Option<&DebtRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DebtRecord> {
        self.records.iter()
    }

    /// Records as a slice, ascending by year
    pub fn records(&self) -> &[DebtRecord] {
        &self.records
    }

    /// Consume into the underlying record vector
    pub fn into_records(self) -> Vec<DebtRecord> {
        self.records
    }

    /// Largest total debt in the series (for heatmap scaling); 0 if empty
    pub fn max_total_debt(&self) -> f64 {
        self.records.iter().fold(0.0_f64, |m, r| m.max(r.total_debt))
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a DebtRecord;
    type IntoIter = std::slice::Iter<'a, DebtRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn record(year: i32, total: f64) -> DebtRecord {
        DebtRecord::synthesized(year, total)
    }

    #[test]
    fn test_from_records_sorts_by_year() {
        let series =
            Series::from_records(vec![record(2010, 2.0), record(2000, 1.0), record(2020, 3.0)])
                .unwrap();

        let years: Vec<i32> = series.iter().map(|r| r.year).collect();
        assert_eq!(years, vec![2000, 2010, 2020]);
    }

    #[test]
    fn test_from_records_rejects_duplicate_years() {
        let result = Series::from_records(vec![record(2000, 1.0), record(2000, 2.0)]);
        assert!(matches!(
            result,
            Err(EngineError::InvalidParameter { name: "records", .. })
        ));
    }

    #[test]
    fn test_insert_replaces_same_year() {
        let mut series = Series::from_records(vec![record(2000, 1.0)]).unwrap();
        series.insert(record(2000, 5.0));
        series.insert(record(1995, 0.5));

        assert_eq!(series.len(), 2);
        assert_eq!(series.first().map(|r| r.year), Some(1995));
        assert_relative_eq!(series.get(2000).unwrap().total_debt, 5.0);
    }

    #[test]
    fn test_per_citizen_annotation() {
        let annotated = record(2025, 11_000.0).with_per_citizen();
        // 11000 B / 54M citizens
        assert_relative_eq!(
            annotated.debt_per_citizen.unwrap(),
            11_000.0 * 1e9 / 54_000_000.0
        );
    }

    #[test]
    fn test_max_total_debt() {
        let series =
            Series::from_records(vec![record(2000, 346.88), record(2025, 11_000.0)]).unwrap();
        assert_relative_eq!(series.max_total_debt(), 11_000.0);
        assert_relative_eq!(Series::new().max_total_debt(), 0.0);
    }
}
