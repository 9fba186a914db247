use serde::de::DeserializeOwned;
use std::io::Read;

use super::super::domain::{ActivityRecord, EmployeeRecord, SkillRecord};

fn read_rows<T, R>(reader: R) -> Result<Vec<T>, csv::Error>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    csv_reader.deserialize().collect()
}

pub(crate) fn parse_roster<R: Read>(reader: R) -> Result<Vec<EmployeeRecord>, csv::Error> {
    read_rows(reader)
}

pub(crate) fn parse_activities<R: Read>(reader: R) -> Result<Vec<ActivityRecord>, csv::Error> {
    read_rows(reader)
}

pub(crate) fn parse_skills<R: Read>(reader: R) -> Result<Vec<SkillRecord>, csv::Error> {
    read_rows(reader)
}
