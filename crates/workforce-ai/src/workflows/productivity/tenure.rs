use chrono::NaiveDate;

use super::domain::EmpId;

/// Joining dates arrive in either day/month/year form; both separators are in
/// active use across the uploaded rosters.
const ACCEPTED_FORMATS: [&str; 2] = ["%d/%m/%Y", "%d-%m-%Y"];

/// Raised when an employee's DateOfJoining matches neither accepted format.
/// Fatal to the advisors that need tenure; the run stops here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown date format for employee {emp_id}: {value}")]
pub struct TenureError {
    pub emp_id: EmpId,
    pub value: String,
}

pub fn parse_date_of_joining(emp_id: EmpId, value: &str) -> Result<NaiveDate, TenureError> {
    let trimmed = value.trim();
    for format in ACCEPTED_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(date);
        }
    }

    Err(TenureError {
        emp_id,
        value: value.to_string(),
    })
}

/// Years of service in 365.25-day years, fractional.
pub fn years_of_service(date_of_joining: NaiveDate, today: NaiveDate) -> f64 {
    (today - date_of_joining).num_days() as f64 / 365.25
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_slash_and_dash_separators() {
        let slash = parse_date_of_joining(EmpId(101), "15/06/2021").expect("slash format");
        assert_eq!(slash, NaiveDate::from_ymd_opt(2021, 6, 15).unwrap());

        let dash = parse_date_of_joining(EmpId(101), "15-06-2021").expect("dash format");
        assert_eq!(dash, slash);
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let date = parse_date_of_joining(EmpId(7), " 01/01/2020 ").expect("trimmed input");
        assert_eq!(date, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
    }

    #[test]
    fn rejects_unknown_formats_naming_the_employee() {
        let error = parse_date_of_joining(EmpId(204), "2021-06-15").expect_err("ISO rejected");
        let message = error.to_string();
        assert!(message.contains("204"), "message names the employee: {message}");
        assert!(message.contains("2021-06-15"));
    }

    #[test]
    fn years_of_service_uses_fractional_years() {
        let joined = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let today = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
        let years = years_of_service(joined, today);
        assert!((years - 2.0).abs() < 0.01, "two calendar years, got {years}");
    }
}
