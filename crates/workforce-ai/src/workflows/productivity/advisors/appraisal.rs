use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::super::domain::{ActivityMetricsRow, EmpId, EmployeeRecord};
use super::super::tenure::{self, TenureError};
use super::{round1, round2, rows_by_employee};

/// Compensation-action suggestion for one employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppraisalRow {
    #[serde(rename = "EmpID")]
    pub emp_id: EmpId,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Role")]
    pub role: String,
    #[serde(rename = "WPI")]
    pub wpi: f64,
    #[serde(rename = "YearsWorked")]
    pub years_worked: f64,
    #[serde(rename = "AppraisalSuggestion")]
    pub appraisal_suggestion: String,
}

/// Maps each employee's productivity index and tenure to a compensation
/// action. The branches are evaluated in order; promotion requires both the
/// higher index band and more than two years of service.
pub fn suggest_appraisal(
    rows: &[ActivityMetricsRow],
    roster: &[EmployeeRecord],
    today: NaiveDate,
) -> Result<Vec<AppraisalRow>, TenureError> {
    let mut suggestions = Vec::new();

    for (emp_id, emp_rows) in rows_by_employee(rows) {
        let Some(employee) = roster.iter().find(|record| record.emp_id == emp_id) else {
            continue;
        };
        let wpi = emp_rows[0].wpi;

        let date_of_joining = tenure::parse_date_of_joining(emp_id, &employee.date_of_joining)?;
        let years = tenure::years_of_service(date_of_joining, today);

        let suggestion = if wpi < 0.9 {
            "Risk Flag (Needs Review)"
        } else if (0.9..=1.1).contains(&wpi) {
            "Normal Increment (~5%)"
        } else if wpi > 1.2 && years > 2.0 {
            "Promotion / Incentive"
        } else if wpi > 1.1 {
            "Incentive"
        } else {
            // Defensive default; the bands above cover the whole range.
            "No Change"
        };

        suggestions.push(AppraisalRow {
            emp_id,
            name: employee.name.clone(),
            role: employee.role.clone(),
            wpi: round2(wpi),
            years_worked: round1(years),
            appraisal_suggestion: suggestion.to_string(),
        });
    }

    Ok(suggestions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(emp_id: u32, date_of_joining: &str) -> EmployeeRecord {
        EmployeeRecord {
            emp_id: EmpId(emp_id),
            name: format!("Employee {emp_id}"),
            role: "Analyst".to_string(),
            salary_inr: 500000.0,
            date_of_joining: date_of_joining.to_string(),
        }
    }

    fn metric_row(emp_id: u32, wpi: f64) -> ActivityMetricsRow {
        ActivityMetricsRow {
            emp_id: EmpId(emp_id),
            activity: "Reporting".to_string(),
            time_freq: 4.0,
            importance: 5.0,
            points: 1.0,
            salary_inr: 500000.0,
            tim: 20.0,
            rel_weight: 1.0,
            dollar_value: 500000.0,
            net_value: 500000.0,
            emp_total_ti: 20.0,
            wpi,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
    }

    fn suggestion_for(wpi: f64, date_of_joining: &str) -> String {
        let rows = vec![metric_row(1, wpi)];
        let roster = vec![employee(1, date_of_joining)];
        let appraisals = suggest_appraisal(&rows, &roster, today()).expect("evaluates");
        appraisals[0].appraisal_suggestion.clone()
    }

    #[test]
    fn underperformance_is_flagged_for_review() {
        assert_eq!(suggestion_for(0.7, "01/01/2020"), "Risk Flag (Needs Review)");
    }

    #[test]
    fn on_target_band_gets_the_normal_increment() {
        assert_eq!(suggestion_for(0.9, "01/01/2020"), "Normal Increment (~5%)");
        assert_eq!(suggestion_for(1.1, "01/01/2020"), "Normal Increment (~5%)");
    }

    #[test]
    fn strong_index_with_short_tenure_earns_incentive_only() {
        // 1.5 years of service: above the incentive bar, below the promotion
        // tenure requirement.
        assert_eq!(suggestion_for(1.15, "01-09-2024"), "Incentive");
        assert_eq!(suggestion_for(1.25, "01-09-2024"), "Incentive");
    }

    #[test]
    fn strong_index_with_long_tenure_earns_promotion() {
        assert_eq!(suggestion_for(1.25, "01/01/2020"), "Promotion / Incentive");
    }

    #[test]
    fn tenure_is_rounded_to_one_decimal() {
        let rows = vec![metric_row(1, 1.0)];
        let roster = vec![employee(1, "01/03/2024")];
        let appraisals = suggest_appraisal(&rows, &roster, today()).expect("evaluates");
        assert_eq!(appraisals[0].years_worked, 2.0);
    }

    #[test]
    fn unparseable_joining_date_fails_the_run() {
        let rows = vec![metric_row(1, 1.0)];
        let roster = vec![employee(1, "2020/01/01")];
        let error = suggest_appraisal(&rows, &roster, today()).expect_err("date rejected");
        assert!(error.to_string().contains("2020/01/01"));
    }
}
