mod parser;

use serde::Serialize;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::info;

pub const POSTINGS_FILE: &str = "job_postings_fact.csv";
pub const SKILLS_FILE: &str = "skills_dim.csv";
pub const LINKS_FILE: &str = "skills_job_dim.csv";

/// A single job advertisement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobPosting {
    pub job_id: i64,
    pub job_title_short: String,
    pub salary_year_avg: Option<f64>,
    pub job_work_from_home: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub skill_id: i64,
    pub name: String,
}

/// "posting requires skill"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct JobSkillLink {
    pub job_id: i64,
    pub skill_id: i64,
}

/// Identifies which source table an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    JobPostings,
    Skills,
    JobSkills,
}

impl Table {
    pub const fn label(self) -> &'static str {
        match self {
            Self::JobPostings => "job postings",
            Self::Skills => "skills",
            Self::JobSkills => "job/skill links",
        }
    }

    pub const fn file_name(self) -> &'static str {
        match self {
            Self::JobPostings => POSTINGS_FILE,
            Self::Skills => SKILLS_FILE,
            Self::JobSkills => LINKS_FILE,
        }
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("missing {table} table at {}: {source}", .path.display())]
    MissingInput {
        table: Table,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid {table} data: {source}")]
    Csv {
        table: Table,
        #[source]
        source: csv::Error,
    },
}

impl DatasetError {
    pub fn is_missing_input(&self) -> bool {
        matches!(self, Self::MissingInput { .. })
    }
}

/// The three immutable input tables for one run.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub postings: Vec<JobPosting>,
    pub skills: Vec<Skill>,
    pub links: Vec<JobSkillLink>,
}

impl Dataset {
    pub fn new(postings: Vec<JobPosting>, skills: Vec<Skill>, links: Vec<JobSkillLink>) -> Self {
        Self {
            postings,
            skills,
            links,
        }
    }

    /// Loads the three well-known CSV files from `dir`.
    ///
    /// All three files are opened before any of them is parsed.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self, DatasetError> {
        let dir = dir.as_ref();
        info!(data_dir = %dir.display(), "loading source tables");

        let postings = open_table(dir, Table::JobPostings)?;
        let skills = open_table(dir, Table::Skills)?;
        let links = open_table(dir, Table::JobSkills)?;

        Self::from_readers(postings, skills, links)
    }

    pub fn from_readers<P: Read, S: Read, L: Read>(
        postings: P,
        skills: S,
        links: L,
    ) -> Result<Self, DatasetError> {
        let postings = parser::parse_postings(postings).map_err(|source| DatasetError::Csv {
            table: Table::JobPostings,
            source,
        })?;
        let skills = parser::parse_skills(skills).map_err(|source| DatasetError::Csv {
            table: Table::Skills,
            source,
        })?;
        let links = parser::parse_links(links).map_err(|source| DatasetError::Csv {
            table: Table::JobSkills,
            source,
        })?;

        info!(
            postings = postings.len(),
            skills = skills.len(),
            links = links.len(),
            "source tables loaded"
        );

        Ok(Self::new(postings, skills, links))
    }
}

fn open_table(dir: &Path, table: Table) -> Result<File, DatasetError> {
    let path = dir.join(table.file_name());
    File::open(&path).map_err(|source| DatasetError::MissingInput {
        table,
        path,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const POSTINGS: &str = "job_id,job_title_short,job_title,salary_year_avg,job_work_from_home\n\
1,Data Analyst,Senior Data Analyst,90000.0,True\n\
2,Data Analyst,Data Analyst II,,False\n\
3,Data Engineer,Data Engineer,NaN,True\n";
    const SKILLS: &str = "skill_id,skills,type\n0,sql,programming\n1,excel,analyst_tools\n";
    const LINKS: &str = "job_id,skill_id\n1,0\n1,1\n2,0\n";

    #[test]
    fn parses_tables_and_ignores_extra_columns() {
        let dataset = Dataset::from_readers(
            Cursor::new(POSTINGS),
            Cursor::new(SKILLS),
            Cursor::new(LINKS),
        )
        .expect("dataset parses");

        assert_eq!(dataset.postings.len(), 3);
        assert_eq!(
            dataset.postings[0],
            JobPosting {
                job_id: 1,
                job_title_short: "Data Analyst".to_string(),
                salary_year_avg: Some(90000.0),
                job_work_from_home: true,
            }
        );
        assert_eq!(dataset.postings[1].salary_year_avg, None);
        assert!(!dataset.postings[1].job_work_from_home);
        assert_eq!(dataset.postings[2].salary_year_avg, None);
        assert_eq!(dataset.skills[1].name, "excel");
        assert_eq!(dataset.links.len(), 3);
    }

    #[test]
    fn malformed_salary_reports_the_table() {
        let postings = "job_id,job_title_short,salary_year_avg,job_work_from_home\n\
1,Data Analyst,lots,False\n";
        let error = Dataset::from_readers(
            Cursor::new(postings),
            Cursor::new(SKILLS),
            Cursor::new(LINKS),
        )
        .expect_err("bad salary rejected");

        match error {
            DatasetError::Csv { table, .. } => assert_eq!(table, Table::JobPostings),
            other => panic!("expected csv error, got {other:?}"),
        }
    }

    #[test]
    fn from_dir_reports_missing_input() {
        let error = Dataset::from_dir("./does-not-exist").expect_err("expected missing input");

        assert!(error.is_missing_input());
        match error {
            DatasetError::MissingInput { table, path, .. } => {
                assert_eq!(table, Table::JobPostings);
                assert!(path.ends_with(POSTINGS_FILE));
            }
            other => panic!("expected missing input, got {other:?}"),
        }
    }
}
