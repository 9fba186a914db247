use serde::{Deserialize, Serialize};

/// Threshold configuration for one analysis run, immutable once constructed.
///
/// Every key must be present when deserializing: a settings payload missing a
/// field is rejected outright instead of being silently defaulted. Callers
/// that want the standard deployment values use [`AnalysisSettings::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisSettings {
    /// Lower bound of the sustainable workload band (total TIm per employee).
    #[serde(rename = "WorkloadMinTI")]
    pub workload_min_ti: f64,
    /// Upper bound of the workload band; exceeding it marks an employee as
    /// overloaded for the hiring trigger.
    #[serde(rename = "WorkloadMaxTI")]
    pub workload_max_ti: f64,
    /// Reference workload used to scale the hiring budget.
    #[serde(rename = "IdealTI")]
    pub ideal_ti: f64,
    /// Workload each new hire is expected to absorb.
    #[serde(rename = "HireTargetTI")]
    pub hire_target_ti: f64,
    /// Minimum return-on-investment for a training proposal to be worth
    /// running; also the floor below which the risk advisor treats a critical
    /// deficit as untrainable.
    #[serde(rename = "TrainingROIMin")]
    pub training_roi_min: f64,
    /// Cohort size at which an in-house session beats external seats.
    /// Declared for the session-batching logic; not consulted by the current
    /// advisors.
    #[serde(rename = "InhouseMinLearners")]
    pub inhouse_min_learners: u32,
    /// WPI threshold for a performance-improvement plan. Declared but not
    /// consulted by the current risk branching.
    #[serde(rename = "PIP_WPI")]
    pub pip_wpi: f64,
    /// WPI threshold for separation. Declared but not consulted by the
    /// current risk branching.
    #[serde(rename = "SEP_WPI")]
    pub sep_wpi: f64,
    /// Critical-deficit count threshold. Declared but not consulted by the
    /// current risk branching.
    #[serde(rename = "MinHighImpDeficits")]
    pub min_high_imp_deficits: u32,
    /// Critical-gap threshold as a fraction of salary. Declared but not
    /// consulted by the current risk branching.
    #[serde(rename = "HighImpGapPctOfSalary")]
    pub high_imp_gap_pct_of_salary: f64,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            workload_min_ti: 100.0,
            workload_max_ti: 150.0,
            ideal_ti: 125.0,
            hire_target_ti: 135.0,
            training_roi_min: 0.14,
            inhouse_min_learners: 3,
            pip_wpi: 0.90,
            sep_wpi: 0.75,
            min_high_imp_deficits: 3,
            high_imp_gap_pct_of_salary: 0.20,
        }
    }
}
