use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::super::domain::{ActivityMetricsRow, EmpId};
use super::round2;

/// One redistribution proposal for a single (employee, activity) row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RebalanceRow {
    #[serde(rename = "EmpID")]
    pub emp_id: EmpId,
    #[serde(rename = "Activity")]
    pub activity: String,
    #[serde(rename = "Points")]
    pub points: f64,
    #[serde(rename = "OriginalFreq")]
    pub original_freq: f64,
    #[serde(rename = "AssignedFreq")]
    pub assigned_freq: f64,
    #[serde(rename = "DeltaFreq")]
    pub delta_freq: f64,
    #[serde(rename = "OriginalImp")]
    pub original_imp: f64,
    #[serde(rename = "AssignedImp")]
    pub assigned_imp: f64,
    #[serde(rename = "DeltaImp")]
    pub delta_imp: f64,
    #[serde(rename = "Suggestion")]
    pub suggestion: String,
}

/// Redistributes each activity group's frequency and importance in proportion
/// to each member's Points, preserving the group totals. Reporting-only: the
/// proposals are never written back into the model.
pub fn suggest_rebalance(rows: &[ActivityMetricsRow]) -> Vec<RebalanceRow> {
    let mut groups: BTreeMap<&str, Vec<&ActivityMetricsRow>> = BTreeMap::new();
    for row in rows {
        groups.entry(row.activity.as_str()).or_default().push(row);
    }

    let mut proposals = Vec::new();
    for (activity, group) in groups {
        let total_freq: f64 = group.iter().map(|row| row.time_freq).sum();
        let total_imp: f64 = group.iter().map(|row| row.importance).sum();
        let total_points: f64 = group.iter().map(|row| row.points).sum();
        let members = group.len() as f64;

        for row in &group {
            let (freq_share, imp_share) = if total_points > 0.0 {
                (
                    row.points / total_points * total_freq,
                    row.points / total_points * total_imp,
                )
            } else {
                // Nobody in the group scored; split evenly instead.
                (total_freq / members, total_imp / members)
            };

            let delta_freq = round2(freq_share - row.time_freq);
            let delta_imp = round2(imp_share - row.importance);

            let mut suggestions = Vec::new();
            if delta_freq > 0.0 {
                suggestions.push(format!("Increase Frequency by {delta_freq}"));
            } else if delta_freq < 0.0 {
                suggestions.push(format!("Decrease Frequency by {}", delta_freq.abs()));
            }
            if delta_imp > 0.0 {
                suggestions.push(format!("Increase Importance by {delta_imp}"));
            } else if delta_imp < 0.0 {
                suggestions.push(format!("Decrease Importance by {}", delta_imp.abs()));
            }
            let suggestion = if suggestions.is_empty() {
                "No change".to_string()
            } else {
                suggestions.join("; ")
            };

            proposals.push(RebalanceRow {
                emp_id: row.emp_id,
                activity: activity.to_string(),
                points: row.points,
                original_freq: row.time_freq,
                assigned_freq: round2(freq_share),
                delta_freq,
                original_imp: row.importance,
                assigned_imp: round2(imp_share),
                delta_imp,
                suggestion,
            });
        }
    }

    proposals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric_row(
        emp_id: u32,
        activity: &str,
        time_freq: f64,
        importance: f64,
        points: f64,
    ) -> ActivityMetricsRow {
        ActivityMetricsRow {
            emp_id: EmpId(emp_id),
            activity: activity.to_string(),
            time_freq,
            importance,
            points,
            salary_inr: 0.0,
            tim: time_freq * importance,
            rel_weight: 0.0,
            dollar_value: 0.0,
            net_value: 0.0,
            emp_total_ti: 0.0,
            wpi: 0.0,
        }
    }

    #[test]
    fn redistribution_follows_points_and_preserves_totals() {
        let rows = vec![
            metric_row(1, "Reporting", 6.0, 6.0, 2.0),
            metric_row(2, "Reporting", 2.0, 2.0, 1.0),
        ];

        let proposals = suggest_rebalance(&rows);
        assert_eq!(proposals.len(), 2);

        // Two thirds of the group metric goes to the 2-point member.
        assert!((proposals[0].assigned_freq - 5.33).abs() < 1e-9);
        assert!((proposals[1].assigned_freq - 2.67).abs() < 1e-9);

        let freq_total: f64 = proposals.iter().map(|p| p.assigned_freq).sum();
        let imp_total: f64 = proposals.iter().map(|p| p.assigned_imp).sum();
        assert!((freq_total - 8.0).abs() < 0.01);
        assert!((imp_total - 8.0).abs() < 0.01);
    }

    #[test]
    fn zero_point_groups_fall_back_to_an_even_split() {
        let rows = vec![
            metric_row(1, "Filing", 6.0, 4.0, 0.0),
            metric_row(2, "Filing", 2.0, 2.0, 0.0),
        ];

        let proposals = suggest_rebalance(&rows);
        assert_eq!(proposals[0].assigned_freq, 4.0);
        assert_eq!(proposals[1].assigned_freq, 4.0);
        assert_eq!(proposals[0].assigned_imp, 3.0);
        assert_eq!(proposals[1].assigned_imp, 3.0);
    }

    #[test]
    fn suggestion_text_names_both_directions() {
        let rows = vec![
            metric_row(1, "Reporting", 2.0, 6.0, 2.0),
            metric_row(2, "Reporting", 6.0, 2.0, 1.0),
        ];

        let proposals = suggest_rebalance(&rows);
        assert!(proposals[0].suggestion.contains("Increase Frequency by"));
        assert!(proposals[0].suggestion.contains("; "));
        assert!(proposals[1].suggestion.contains("Decrease Frequency by"));
    }

    #[test]
    fn balanced_rows_say_no_change() {
        let rows = vec![
            metric_row(1, "Reporting", 4.0, 4.0, 1.0),
            metric_row(2, "Reporting", 4.0, 4.0, 1.0),
        ];

        let proposals = suggest_rebalance(&rows);
        assert!(proposals.iter().all(|p| p.suggestion == "No change"));
        assert!(proposals.iter().all(|p| p.delta_freq == 0.0));
    }

    #[test]
    fn groups_are_emitted_in_activity_name_order() {
        let rows = vec![
            metric_row(1, "Zoning", 4.0, 4.0, 1.0),
            metric_row(1, "Audits", 4.0, 4.0, 1.0),
        ];

        let proposals = suggest_rebalance(&rows);
        assert_eq!(proposals[0].activity, "Audits");
        assert_eq!(proposals[1].activity, "Zoning");
    }
}
