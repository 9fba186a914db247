//! Workforce productivity analytics: validated activity tables in, HR
//! recommendation tables out.
//!
//! The pipeline is a pure function of (roster, activities, skills, settings,
//! evaluation date). Data flows strictly downstream: loader, metrics engine,
//! then the advisors — rebalance, training, hiring, risk (which also reads
//! the training output), and appraisal. Everything is recomputed from
//! scratch on each invocation.

pub mod advisors;
pub mod domain;
pub mod loader;
pub mod metrics;
pub mod router;
pub mod settings;
pub mod tenure;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use advisors::appraisal::{suggest_appraisal, AppraisalRow};
pub use advisors::hiring::{hiring_decision, HiringDecision};
pub use advisors::rebalance::{suggest_rebalance, RebalanceRow};
pub use advisors::risk::{risk_flags, RiskRow};
pub use advisors::training::{suggest_training, TrainingRow};
pub use domain::{ActivityMetricsRow, EmpId, WorkforceModel};
pub use loader::{WorkforceCsvLoader, WorkforceImportError};
pub use metrics::compute_metrics;
pub use router::productivity_router;
pub use settings::AnalysisSettings;
pub use tenure::TenureError;

/// Full result record returned to the caller, one key per advisor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub activities_with_metrics: Vec<ActivityMetricsRow>,
    pub rebalance: Vec<RebalanceRow>,
    pub training: Vec<TrainingRow>,
    pub hiring: HiringDecision,
    pub risks: Vec<RiskRow>,
    pub appraisal: Vec<AppraisalRow>,
}

/// Runs the metrics engine and every advisor over a validated model.
///
/// `today` anchors the tenure calculations so runs are reproducible; the
/// HTTP and CLI frontends default it to the current date.
pub fn run_analysis(
    model: &WorkforceModel,
    today: NaiveDate,
) -> Result<AnalysisReport, TenureError> {
    let metrics = compute_metrics(model);

    let rebalance = suggest_rebalance(&metrics);
    let training = suggest_training(&metrics, &model.skills, &model.settings);
    let hiring = hiring_decision(&metrics, &model.roster, &model.settings);
    let risks = risk_flags(&metrics, &model.roster, &training, &model.settings, today)?;
    let appraisal = suggest_appraisal(&metrics, &model.roster, today)?;

    Ok(AnalysisReport {
        activities_with_metrics: metrics,
        rebalance,
        training,
        hiring,
        risks,
        appraisal,
    })
}
