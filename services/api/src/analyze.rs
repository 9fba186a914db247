use crate::infra::parse_date;
use chrono::{Local, NaiveDate};
use clap::Args;
use std::path::PathBuf;
use workforce_ai::error::AppError;
use workforce_ai::workflows::productivity::{
    run_analysis, AnalysisReport, AnalysisSettings, WorkforceCsvLoader,
};

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// Roster CSV (EmpID, Name, Role, SalaryINR, DateOfJoining)
    #[arg(long)]
    pub(crate) roster: PathBuf,
    /// Activity log CSV (EmpID, Activity, TimeFreq, Importance, Points)
    #[arg(long)]
    pub(crate) activities: PathBuf,
    /// Skill catalog CSV (Keyword, Program, SkillArea, costs, ExpectedLift)
    #[arg(long)]
    pub(crate) skills: PathBuf,
    /// Evaluation date for tenure calculations (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// JSON file with a full threshold override (partial objects are rejected)
    #[arg(long)]
    pub(crate) settings: Option<PathBuf>,
    /// Emit the raw result record as pretty JSON instead of the summary
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let AnalyzeArgs {
        roster,
        activities,
        skills,
        today,
        settings,
        json,
    } = args;

    let settings: AnalysisSettings = match settings {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => AnalysisSettings::default(),
    };

    let model = WorkforceCsvLoader::from_paths(roster, activities, skills, settings)?;
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let report = run_analysis(&model, today)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    render_report(&report, today);
    Ok(())
}

fn render_report(report: &AnalysisReport, today: NaiveDate) {
    let employees: std::collections::BTreeSet<_> = report
        .activities_with_metrics
        .iter()
        .map(|row| row.emp_id)
        .collect();
    println!(
        "Workforce productivity analysis ({} employees, {} activity rows, evaluated {today})",
        employees.len(),
        report.activities_with_metrics.len()
    );

    let hiring = &report.hiring;
    if hiring.hire_needed {
        println!(
            "\nHiring: {} new hire(s) needed, budget ~INR {} at {} target TI each",
            hiring.new_hires, hiring.budget_inr, hiring.hire_target_ti
        );
        println!("Job description focus: {}", hiring.jd_activities.join(", "));
    } else {
        println!("\nHiring: no new hires required");
    }

    println!("\nRisk flags");
    for risk in &report.risks {
        println!(
            "- {} ({}) WPI {} | {} high-impact deficit(s), gap INR {} | PIP {} | Separation {} | {}",
            risk.name,
            risk.role,
            risk.wpi,
            risk.high_imp_deficits,
            risk.high_imp_gap_inr,
            risk.pip_flag,
            risk.separation_flag,
            risk.remark
        );
    }

    if report.training.is_empty() {
        println!("\nTraining proposals: none matched the skill catalog");
    } else {
        println!("\nTraining proposals");
        for proposal in &report.training {
            println!(
                "- Employee {} | {} -> {} ({}) | cost INR {} | ROI {} | {}",
                proposal.emp_id,
                proposal.activity,
                proposal.program,
                proposal.skill_area,
                proposal.training_cost,
                proposal.roi,
                proposal.recommendation
            );
        }
    }

    println!("\nAppraisal suggestions");
    for appraisal in &report.appraisal {
        println!(
            "- {} ({}) WPI {} | {} year(s) | {}",
            appraisal.name,
            appraisal.role,
            appraisal.wpi,
            appraisal.years_worked,
            appraisal.appraisal_suggestion
        );
    }

    let changes = report
        .rebalance
        .iter()
        .filter(|row| row.suggestion != "No change")
        .count();
    println!(
        "\nRebalance: {} of {} rows need adjustment (run with --json for the full table)",
        changes,
        report.rebalance.len()
    );
}
