use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::super::domain::{ActivityMetricsRow, EmployeeRecord};
use super::super::settings::AnalysisSettings;
use super::rows_by_employee;

/// Workload baseline the capacity shortfall is measured against. Fixed, and
/// intentionally distinct from the configurable WorkloadMaxTI trigger.
const EXCESS_TI_BASELINE: f64 = 140.0;

/// Number of activities quoted in the drafted job description.
const JD_ACTIVITY_COUNT: usize = 5;

/// Headcount decision for the whole team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HiringDecision {
    #[serde(rename = "HireNeeded")]
    pub hire_needed: bool,
    #[serde(rename = "NewHires")]
    pub new_hires: u32,
    /// High-load, low-quality activities to quote in the job description.
    #[serde(rename = "JD_Activities")]
    pub jd_activities: Vec<String>,
    #[serde(rename = "HireTargetTI")]
    pub hire_target_ti: f64,
    #[serde(rename = "BudgetINR")]
    pub budget_inr: i64,
}

impl HiringDecision {
    fn not_needed(settings: &AnalysisSettings) -> Self {
        Self {
            hire_needed: false,
            new_hires: 0,
            jd_activities: Vec::new(),
            hire_target_ti: settings.hire_target_ti,
            budget_inr: 0,
        }
    }
}

/// Decides whether the team needs new hires and, if so, sizes the intake and
/// drafts the job-description activity list and salary budget.
pub fn hiring_decision(
    rows: &[ActivityMetricsRow],
    roster: &[EmployeeRecord],
    settings: &AnalysisSettings,
) -> HiringDecision {
    let per_employee = rows_by_employee(rows);
    let employee_ti: Vec<f64> = per_employee
        .values()
        .map(|emp_rows| emp_rows[0].emp_total_ti)
        .collect();

    let overloaded_count = employee_ti
        .iter()
        .filter(|total| **total > settings.workload_max_ti)
        .count();
    // Row-weighted mean: employees with more activities weigh more.
    let team_avg_ti = if rows.is_empty() {
        0.0
    } else {
        rows.iter().map(|row| row.emp_total_ti).sum::<f64>() / rows.len() as f64
    };

    let hire_needed = overloaded_count >= 2 || team_avg_ti > settings.workload_max_ti;
    if !hire_needed {
        return HiringDecision::not_needed(settings);
    }

    let excess_ti: f64 = employee_ti
        .iter()
        .map(|total| (total - EXCESS_TI_BASELINE).max(0.0))
        .sum();
    let new_hires = (excess_ti / settings.hire_target_ti).ceil() as u32;

    let jd_activities = rank_jd_activities(rows);

    let budget_inr =
        (median_salary(roster) * (settings.hire_target_ti / settings.ideal_ti)).round() as i64;

    HiringDecision {
        hire_needed: true,
        new_hires,
        jd_activities,
        hire_target_ti: settings.hire_target_ti,
        budget_inr,
    }
}

/// Top activities by team-wide TIm (descending), breaking ties toward the
/// lowest mean Points: the heaviest work done least well.
fn rank_jd_activities(rows: &[ActivityMetricsRow]) -> Vec<String> {
    #[derive(Default)]
    struct ActivityLoad {
        tim: f64,
        points_sum: f64,
        count: usize,
    }

    let mut by_activity: BTreeMap<&str, ActivityLoad> = BTreeMap::new();
    for row in rows {
        let load = by_activity.entry(row.activity.as_str()).or_default();
        load.tim += row.tim;
        load.points_sum += row.points;
        load.count += 1;
    }

    let mut ranked: Vec<(&str, f64, f64)> = by_activity
        .into_iter()
        .map(|(activity, load)| (activity, load.tim, load.points_sum / load.count as f64))
        .collect();
    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then(a.2.partial_cmp(&b.2).unwrap_or(Ordering::Equal))
    });

    ranked
        .into_iter()
        .take(JD_ACTIVITY_COUNT)
        .map(|(activity, _, _)| activity.to_string())
        .collect()
}

fn median_salary(roster: &[EmployeeRecord]) -> f64 {
    let mut salaries: Vec<f64> = roster.iter().map(|employee| employee.salary_inr).collect();
    if salaries.is_empty() {
        return 0.0;
    }
    salaries.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let middle = salaries.len() / 2;
    if salaries.len() % 2 == 1 {
        salaries[middle]
    } else {
        (salaries[middle - 1] + salaries[middle]) / 2.0
    }
}
