use serde::{Deserialize, Serialize};

use super::super::domain::{ActivityMetricsRow, EmpId, SkillRecord};
use super::super::settings::AnalysisSettings;
use super::{round2, rows_by_employee};

/// Activities scoring below this are deficits worth matching against the
/// skill catalog.
const DEFICIT_POINTS_CEILING: f64 = 2.0;

/// One training proposal for an (employee, deficit activity) pair that
/// matched the skill catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingRow {
    #[serde(rename = "EmpID")]
    pub emp_id: EmpId,
    #[serde(rename = "Activity")]
    pub activity: String,
    #[serde(rename = "Program")]
    pub program: String,
    #[serde(rename = "SkillArea")]
    pub skill_area: String,
    #[serde(rename = "DeficitValue")]
    pub deficit_value: f64,
    #[serde(rename = "TrainingCost")]
    pub training_cost: f64,
    #[serde(rename = "ExpectedGain")]
    pub expected_gain: f64,
    /// Reported to two decimals; the Train/Skip cut uses the unrounded value.
    #[serde(rename = "ROI")]
    pub roi: f64,
    #[serde(rename = "Recommendation")]
    pub recommendation: String,
}

/// Matches each employee's deficit activities against the skill catalog and
/// ranks the resulting interventions by return on investment. Deficits with
/// no catalog keyword produce no row.
pub fn suggest_training(
    rows: &[ActivityMetricsRow],
    skills: &[SkillRecord],
    settings: &AnalysisSettings,
) -> Vec<TrainingRow> {
    let mut proposals = Vec::new();

    for (emp_id, emp_rows) in rows_by_employee(rows) {
        let deficits = emp_rows
            .iter()
            .filter(|row| row.points < DEFICIT_POINTS_CEILING);

        for deficit in deficits {
            let Some(skill) = skills
                .iter()
                .find(|skill| skill.keyword.eq_ignore_ascii_case(&deficit.activity))
            else {
                continue;
            };

            // Cheaper of the two delivery options.
            let training_cost = skill
                .cost_external_per_person_inr
                .min(skill.cost_inhouse_per_session_inr);
            let expected_gain = deficit.dollar_value * skill.expected_lift;
            let roi = if training_cost > 0.0 {
                (expected_gain - training_cost) / training_cost
            } else {
                0.0
            };
            let recommendation = if roi >= settings.training_roi_min {
                "Train"
            } else {
                "Skip (Low ROI)"
            };

            proposals.push(TrainingRow {
                emp_id,
                activity: deficit.activity.clone(),
                program: skill.program.clone(),
                skill_area: skill.skill_area.clone(),
                deficit_value: round2(deficit.dollar_value),
                training_cost,
                expected_gain: round2(expected_gain),
                roi: round2(roi),
                recommendation: recommendation.to_string(),
            });
        }
    }

    proposals
}
