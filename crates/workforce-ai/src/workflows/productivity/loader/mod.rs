mod parser;

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::domain::{ActivityRecord, EmpId, EmployeeRecord, SkillRecord, WorkforceModel};
use super::settings::AnalysisSettings;

/// Column checked by the range validation, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricColumn {
    TimeFreq,
    Importance,
    Points,
}

impl fmt::Display for MetricColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MetricColumn::TimeFreq => "TimeFreq",
            MetricColumn::Importance => "Importance",
            MetricColumn::Points => "Points",
        };
        f.write_str(name)
    }
}

/// Integrity failure in the uploaded tables. The categories run in a fixed
/// order (referential, range, cardinality, salary) and the first failing
/// category aborts the load carrying every offender it found.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid EmpIDs in activities: {}", join_ids(.0))]
    UnknownEmployees(Vec<EmpId>),
    #[error("{column} values must be between {min} and {max} ({} offending rows)", .rows.len())]
    OutOfRange {
        column: MetricColumn,
        min: f64,
        max: f64,
        /// Zero-based positions of the offending activity rows.
        rows: Vec<usize>,
    },
    #[error("each employee must have 7-10 activities; offenders: {}", join_counts(.0))]
    ActivityCountOutOfBounds(Vec<(EmpId, usize)>),
    #[error("all salaries must be positive numbers; offenders: {}", join_ids(.0))]
    NonPositiveSalary(Vec<EmpId>),
}

fn join_ids(ids: &[EmpId]) -> String {
    ids.iter()
        .map(EmpId::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_counts(offenders: &[(EmpId, usize)]) -> String {
    offenders
        .iter()
        .map(|(emp_id, count)| format!("{emp_id}: {count}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Failure while turning raw CSV uploads into a validated model.
#[derive(Debug, thiserror::Error)]
pub enum WorkforceImportError {
    #[error("failed to read workforce table: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid workforce CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Parses the three CSV tables and validates them into a [`WorkforceModel`].
pub struct WorkforceCsvLoader;

impl WorkforceCsvLoader {
    pub fn from_paths(
        roster: impl AsRef<Path>,
        activities: impl AsRef<Path>,
        skills: impl AsRef<Path>,
        settings: AnalysisSettings,
    ) -> Result<WorkforceModel, WorkforceImportError> {
        let roster = File::open(roster)?;
        let activities = File::open(activities)?;
        let skills = File::open(skills)?;
        Self::from_readers(roster, activities, skills, settings)
    }

    pub fn from_readers<R1, R2, R3>(
        roster: R1,
        activities: R2,
        skills: R3,
        settings: AnalysisSettings,
    ) -> Result<WorkforceModel, WorkforceImportError>
    where
        R1: Read,
        R2: Read,
        R3: Read,
    {
        let roster = parser::parse_roster(roster)?;
        let activities = parser::parse_activities(activities)?;
        let skills = parser::parse_skills(skills)?;
        let model = validate(roster, activities, skills, settings)?;
        Ok(model)
    }
}

/// Runs the integrity checks and assembles the model. Downstream advisors
/// assume these invariants and do not re-validate.
pub fn validate(
    roster: Vec<EmployeeRecord>,
    activities: Vec<ActivityRecord>,
    skills: Vec<SkillRecord>,
    settings: AnalysisSettings,
) -> Result<WorkforceModel, ValidationError> {
    let known_ids: HashSet<EmpId> = roster.iter().map(|employee| employee.emp_id).collect();
    let missing: BTreeSet<EmpId> = activities
        .iter()
        .map(|activity| activity.emp_id)
        .filter(|emp_id| !known_ids.contains(emp_id))
        .collect();
    if !missing.is_empty() {
        return Err(ValidationError::UnknownEmployees(
            missing.into_iter().collect(),
        ));
    }

    check_range(&activities, MetricColumn::TimeFreq, 0.0, 7.0, |row| {
        row.time_freq
    })?;
    check_range(&activities, MetricColumn::Importance, 0.0, 7.0, |row| {
        row.importance
    })?;
    check_range(&activities, MetricColumn::Points, 0.0, 2.0, |row| row.points)?;

    let mut counts: BTreeMap<EmpId, usize> = BTreeMap::new();
    for activity in &activities {
        *counts.entry(activity.emp_id).or_default() += 1;
    }
    let offenders: Vec<(EmpId, usize)> = counts
        .into_iter()
        .filter(|(_, count)| !(7..=10).contains(count))
        .collect();
    if !offenders.is_empty() {
        return Err(ValidationError::ActivityCountOutOfBounds(offenders));
    }

    let bad_salaries: Vec<EmpId> = roster
        .iter()
        .filter(|employee| employee.salary_inr <= 0.0)
        .map(|employee| employee.emp_id)
        .collect();
    if !bad_salaries.is_empty() {
        return Err(ValidationError::NonPositiveSalary(bad_salaries));
    }

    Ok(WorkforceModel {
        roster,
        activities,
        skills,
        settings,
    })
}

fn check_range(
    activities: &[ActivityRecord],
    column: MetricColumn,
    min: f64,
    max: f64,
    value: impl Fn(&ActivityRecord) -> f64,
) -> Result<(), ValidationError> {
    let rows: Vec<usize> = activities
        .iter()
        .enumerate()
        .filter(|(_, row)| {
            let v = value(row);
            !(min..=max).contains(&v)
        })
        .map(|(index, _)| index)
        .collect();

    if rows.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            column,
            min,
            max,
            rows,
        })
    }
}
