use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::super::domain::{ActivityMetricsRow, EmpId, EmployeeRecord};
use super::super::settings::AnalysisSettings;
use super::super::tenure::{self, TenureError};
use super::training::TrainingRow;
use super::{round2, rows_by_employee};

/// A deficit only counts as critical when the activity matters this much.
const CRITICAL_IMPORTANCE_FLOOR: f64 = 4.0;
/// Points below this on a critical activity mark a critical deficit.
const CRITICAL_POINTS_CEILING: f64 = 1.0;

/// Performance-intervention flags for one employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskRow {
    #[serde(rename = "EmpID")]
    pub emp_id: EmpId,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Role")]
    pub role: String,
    #[serde(rename = "WPI")]
    pub wpi: f64,
    #[serde(rename = "HighImpDeficits")]
    pub high_imp_deficits: usize,
    #[serde(rename = "HighImpGapINR")]
    pub high_imp_gap_inr: f64,
    #[serde(rename = "PIP_Flag")]
    pub pip_flag: String,
    #[serde(rename = "Separation_Flag")]
    pub separation_flag: String,
    #[serde(rename = "Remark")]
    pub remark: String,
}

/// Flags employees for PIP or separation from their critical deficits and the
/// training advisor's per-deficit ROI, passed in explicitly.
pub fn risk_flags(
    rows: &[ActivityMetricsRow],
    roster: &[EmployeeRecord],
    training: &[TrainingRow],
    settings: &AnalysisSettings,
    today: NaiveDate,
) -> Result<Vec<RiskRow>, TenureError> {
    let mut flagged = Vec::new();

    for (emp_id, emp_rows) in rows_by_employee(rows) {
        let Some(employee) = roster.iter().find(|record| record.emp_id == emp_id) else {
            continue;
        };
        let wpi = emp_rows[0].wpi;

        // Parsed up front: an unreadable DateOfJoining fails the whole run.
        let date_of_joining = tenure::parse_date_of_joining(emp_id, &employee.date_of_joining)?;
        let _tenure_years = tenure::years_of_service(date_of_joining, today);

        let critical: Vec<&ActivityMetricsRow> = emp_rows
            .iter()
            .filter(|row| {
                row.importance >= CRITICAL_IMPORTANCE_FLOOR
                    && row.points < CRITICAL_POINTS_CEILING
            })
            .copied()
            .collect();
        let critical_count = critical.len();
        let critical_gap_inr: f64 = critical
            .iter()
            .map(|row| row.dollar_value * (1.0 - row.points))
            .sum();

        let emp_training: Vec<&TrainingRow> = training
            .iter()
            .filter(|proposal| proposal.emp_id == emp_id)
            .collect();
        // Per-deficit join on activity name: any critical deficit whose
        // training ROI sits below the floor means training will not pay back.
        let critical_low_roi = !emp_training.is_empty()
            && critical.iter().any(|deficit| {
                emp_training.iter().any(|proposal| {
                    proposal.activity == deficit.activity
                        && proposal.roi < settings.training_roi_min
                })
            });

        let (pip_flag, separation_flag, remark) = if critical_low_roi {
            ("No", "Yes", "High-impact deficits, low ROI → should be fired")
        } else if critical_count > 0 {
            ("Yes", "No", "High-impact deficits → needs training")
        } else {
            ("No", "No", "No issues")
        };

        flagged.push(RiskRow {
            emp_id,
            name: employee.name.clone(),
            role: employee.role.clone(),
            wpi: round2(wpi),
            high_imp_deficits: critical_count,
            high_imp_gap_inr: round2(critical_gap_inr),
            pip_flag: pip_flag.to_string(),
            separation_flag: separation_flag.to_string(),
            remark: remark.to_string(),
        });
    }

    Ok(flagged)
}
