//! Advisors consuming the metrics table. Each one is a pure function over
//! in-memory tables producing an independent result table; only the risk
//! advisor takes another advisor's output (training) as input.

pub mod appraisal;
pub mod hiring;
pub mod rebalance;
pub mod risk;
pub mod training;

use std::collections::BTreeMap;

use super::domain::{ActivityMetricsRow, EmpId};

/// Buckets metric rows per employee, ascending by EmpID, keeping the rows'
/// relative order within each bucket.
pub(crate) fn rows_by_employee(
    rows: &[ActivityMetricsRow],
) -> BTreeMap<EmpId, Vec<&ActivityMetricsRow>> {
    let mut buckets: BTreeMap<EmpId, Vec<&ActivityMetricsRow>> = BTreeMap::new();
    for row in rows {
        buckets.entry(row.emp_id).or_default().push(row);
    }
    buckets
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
