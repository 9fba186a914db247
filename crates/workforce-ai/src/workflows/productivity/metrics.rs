use std::collections::HashMap;

use super::domain::{ActivityMetricsRow, EmpId, WorkforceModel};

/// Derives the weighted-productivity columns for every activity row.
///
/// All derived columns are recomputed from scratch; the returned table keeps
/// the input row order. Per-employee aggregates (EmpTotalTI, WPI) are
/// broadcast to each of that employee's rows.
pub fn compute_metrics(model: &WorkforceModel) -> Vec<ActivityMetricsRow> {
    let salary_by_emp: HashMap<EmpId, f64> = model
        .roster
        .iter()
        .map(|employee| (employee.emp_id, employee.salary_inr))
        .collect();

    let mut total_tim: HashMap<EmpId, f64> = HashMap::new();
    for row in &model.activities {
        *total_tim.entry(row.emp_id).or_default() += row.time_freq * row.importance;
    }

    let mut rows: Vec<ActivityMetricsRow> = model
        .activities
        .iter()
        .map(|activity| {
            let tim = activity.time_freq * activity.importance;
            let emp_total_ti = total_tim.get(&activity.emp_id).copied().unwrap_or(0.0);
            // An all-zero workload gets zero weight on every row rather than
            // dividing by zero.
            let rel_weight = if emp_total_ti > 0.0 {
                tim / emp_total_ti
            } else {
                0.0
            };
            let salary_inr = salary_by_emp
                .get(&activity.emp_id)
                .copied()
                .unwrap_or_default();
            let dollar_value = rel_weight * salary_inr;
            let net_value = dollar_value * activity.points;

            ActivityMetricsRow {
                emp_id: activity.emp_id,
                activity: activity.activity.clone(),
                time_freq: activity.time_freq,
                importance: activity.importance,
                points: activity.points,
                salary_inr,
                tim,
                rel_weight,
                dollar_value,
                net_value,
                emp_total_ti,
                wpi: 0.0,
            }
        })
        .collect();

    // WPI: delivered value over expected value per employee, zero when the
    // expected value is zero.
    let mut value_totals: HashMap<EmpId, (f64, f64)> = HashMap::new();
    for row in &rows {
        let entry = value_totals.entry(row.emp_id).or_default();
        entry.0 += row.dollar_value;
        entry.1 += row.net_value;
    }
    let wpi_by_emp: HashMap<EmpId, f64> = value_totals
        .into_iter()
        .map(|(emp_id, (dollar, net))| {
            let wpi = if dollar > 0.0 { net / dollar } else { 0.0 };
            (emp_id, wpi)
        })
        .collect();

    for row in &mut rows {
        row.wpi = wpi_by_emp.get(&row.emp_id).copied().unwrap_or(0.0);
    }

    rows
}
