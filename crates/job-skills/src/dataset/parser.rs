use serde::{Deserialize, Deserializer};
use std::io::Read;

use super::{JobPosting, JobSkillLink, Skill};

#[derive(Debug, Deserialize)]
struct PostingRow {
    job_id: i64,
    job_title_short: String,
    #[serde(default, deserialize_with = "optional_salary")]
    salary_year_avg: Option<f64>,
    #[serde(deserialize_with = "flexible_bool")]
    job_work_from_home: bool,
}

#[derive(Debug, Deserialize)]
struct SkillRow {
    skill_id: i64,
    skills: String,
}

#[derive(Debug, Deserialize)]
struct LinkRow {
    job_id: i64,
    skill_id: i64,
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
}

pub(crate) fn parse_postings<R: Read>(reader: R) -> Result<Vec<JobPosting>, csv::Error> {
    csv_reader(reader)
        .deserialize::<PostingRow>()
        .map(|row| {
            row.map(|row| JobPosting {
                job_id: row.job_id,
                job_title_short: row.job_title_short,
                salary_year_avg: row.salary_year_avg,
                job_work_from_home: row.job_work_from_home,
            })
        })
        .collect()
}

pub(crate) fn parse_skills<R: Read>(reader: R) -> Result<Vec<Skill>, csv::Error> {
    csv_reader(reader)
        .deserialize::<SkillRow>()
        .map(|row| {
            row.map(|row| Skill {
                skill_id: row.skill_id,
                name: row.skills,
            })
        })
        .collect()
}

pub(crate) fn parse_links<R: Read>(reader: R) -> Result<Vec<JobSkillLink>, csv::Error> {
    csv_reader(reader)
        .deserialize::<LinkRow>()
        .map(|row| {
            row.map(|row| JobSkillLink {
                job_id: row.job_id,
                skill_id: row.skill_id,
            })
        })
        .collect()
}

fn optional_salary<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    let Some(raw) = raw else {
        return Ok(None);
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") {
        return Ok(None);
    }

    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(|err| serde::de::Error::custom(format!("invalid salary '{trimmed}': {err}")))
}

fn flexible_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_bool(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid boolean '{}'", raw.trim())))
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "t" | "1" | "yes" => Some(true),
        "false" | "f" | "0" | "no" | "" => Some(false),
        _ => None,
    }
}
