use serde::{Deserialize, Serialize};
use std::fmt;

use super::settings::AnalysisSettings;

/// Roster identifier for an employee. Activities reference it as a foreign key.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct EmpId(pub u32);

impl fmt::Display for EmpId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One roster row. Loaded once per analysis run and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    #[serde(rename = "EmpID")]
    pub emp_id: EmpId,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Role")]
    pub role: String,
    #[serde(rename = "SalaryINR")]
    pub salary_inr: f64,
    /// Kept verbatim from the upload; the tenure-aware advisors parse it
    /// (day/month/year with `/` or `-` separators) and fail the run otherwise.
    #[serde(rename = "DateOfJoining")]
    pub date_of_joining: String,
}

/// One activity-log row: how often an employee performs an activity, how much
/// it matters, and how well they do it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    #[serde(rename = "EmpID")]
    pub emp_id: EmpId,
    #[serde(rename = "Activity")]
    pub activity: String,
    #[serde(rename = "TimeFreq")]
    pub time_freq: f64,
    #[serde(rename = "Importance")]
    pub importance: f64,
    #[serde(rename = "Points")]
    pub points: f64,
}

/// One skill-catalog row. `keyword` is matched case-insensitively against
/// activity names when proposing training.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRecord {
    #[serde(rename = "Keyword")]
    pub keyword: String,
    #[serde(rename = "Program")]
    pub program: String,
    #[serde(rename = "SkillArea")]
    pub skill_area: String,
    #[serde(rename = "CostExternalPerPersonINR")]
    pub cost_external_per_person_inr: f64,
    #[serde(rename = "CostInhousePerSessionINR")]
    pub cost_inhouse_per_session_inr: f64,
    #[serde(rename = "ExpectedLift")]
    pub expected_lift: f64,
}

/// The validated aggregate every advisor reads from. Constructed only by the
/// loader, never mutated afterwards; derived tables travel as explicit values
/// rather than being attached back onto the model.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkforceModel {
    pub roster: Vec<EmployeeRecord>,
    pub activities: Vec<ActivityRecord>,
    pub skills: Vec<SkillRecord>,
    pub settings: AnalysisSettings,
}

impl WorkforceModel {
    pub fn employee(&self, emp_id: EmpId) -> Option<&EmployeeRecord> {
        self.roster.iter().find(|employee| employee.emp_id == emp_id)
    }
}

/// An activity row joined with its employee's salary and every derived metric
/// column. Recomputed in full on each run; input row order is preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityMetricsRow {
    #[serde(rename = "EmpID")]
    pub emp_id: EmpId,
    #[serde(rename = "Activity")]
    pub activity: String,
    #[serde(rename = "TimeFreq")]
    pub time_freq: f64,
    #[serde(rename = "Importance")]
    pub importance: f64,
    #[serde(rename = "Points")]
    pub points: f64,
    #[serde(rename = "SalaryINR")]
    pub salary_inr: f64,
    /// Time x Importance, the raw workload weight of this row.
    #[serde(rename = "TIm")]
    pub tim: f64,
    /// This row's share of the employee's total TIm (0 when that total is 0).
    #[serde(rename = "RelWeight")]
    pub rel_weight: f64,
    /// Salary apportioned to this activity via its relative weight.
    #[serde(rename = "DollarValue")]
    pub dollar_value: f64,
    /// DollarValue scaled by quality (Points).
    #[serde(rename = "NetValue")]
    pub net_value: f64,
    /// The employee's total TIm, broadcast to each of their rows.
    #[serde(rename = "EmpTotalTI")]
    pub emp_total_ti: f64,
    /// Workload Productivity Index: delivered value over expected value for
    /// the employee, broadcast to each of their rows. 1.0 means exactly on
    /// target, below 1 underperforming, above 1 overperforming.
    #[serde(rename = "WPI")]
    pub wpi: f64,
}
