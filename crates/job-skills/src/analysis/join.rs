use crate::dataset::{Dataset, JobPosting};
use std::collections::HashMap;

/// Row-level predicate applied to postings before the joins.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PostingFilter<'a> {
    pub(crate) job_title: &'a str,
    pub(crate) require_salary: bool,
    pub(crate) remote_only: bool,
}

impl<'a> PostingFilter<'a> {
    pub(crate) fn title(job_title: &'a str) -> Self {
        Self {
            job_title,
            require_salary: false,
            remote_only: false,
        }
    }

    pub(crate) fn salaried(self) -> Self {
        Self {
            require_salary: true,
            ..self
        }
    }

    pub(crate) fn remote(self) -> Self {
        Self {
            remote_only: true,
            ..self
        }
    }

    fn matches(&self, posting: &JobPosting) -> bool {
        posting.job_title_short == self.job_title
            && (!self.require_salary || posting.salary_year_avg.is_some())
            && (!self.remote_only || posting.job_work_from_home)
    }
}

/// One row of `postings ⋈ links ⋈ skills`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SkillRow<'a> {
    pub(crate) skill: &'a str,
    pub(crate) salary: Option<f64>,
}

/// Inner-joins the filtered postings to their skills.
///
/// Rows come out in posting order, and within a posting in link-table order.
/// Links without a matching skill are dropped, as are postings without links.
pub(crate) fn skill_rows<'a>(
    dataset: &'a Dataset,
    filter: PostingFilter<'_>,
) -> Vec<SkillRow<'a>> {
    let mut skill_names: HashMap<i64, &str> = HashMap::with_capacity(dataset.skills.len());
    for skill in &dataset.skills {
        skill_names
            .entry(skill.skill_id)
            .or_insert(skill.name.as_str());
    }

    let mut links_by_job: HashMap<i64, Vec<i64>> = HashMap::new();
    for link in &dataset.links {
        links_by_job
            .entry(link.job_id)
            .or_default()
            .push(link.skill_id);
    }

    let skill_names = &skill_names;
    dataset
        .postings
        .iter()
        .filter(|posting| filter.matches(posting))
        .filter_map(|posting| {
            links_by_job
                .get(&posting.job_id)
                .map(|skill_ids| (posting, skill_ids))
        })
        .flat_map(move |(posting, skill_ids)| {
            skill_ids.iter().filter_map(move |skill_id| {
                skill_names.get(skill_id).map(|&skill| SkillRow {
                    skill,
                    salary: posting.salary_year_avg,
                })
            })
        })
        .collect()
}

/// Per-skill totals over joined rows.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SkillAggregate {
    pub(crate) skill: String,
    pub(crate) postings: usize,
    salary_total: f64,
    salaried: usize,
}

impl SkillAggregate {
    /// Mean over the rows that carried a salary.
    pub(crate) fn mean_salary(&self) -> Option<f64> {
        if self.salaried == 0 {
            None
        } else {
            Some(self.salary_total / self.salaried as f64)
        }
    }
}

/// Groups rows by skill name, keeping first-occurrence order.
pub(crate) fn aggregate_by_skill(rows: &[SkillRow<'_>]) -> Vec<SkillAggregate> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut aggregates: Vec<SkillAggregate> = Vec::new();

    for row in rows {
        let index = *positions.entry(row.skill).or_insert_with(|| {
            aggregates.push(SkillAggregate {
                skill: row.skill.to_string(),
                postings: 0,
                salary_total: 0.0,
                salaried: 0,
            });
            aggregates.len() - 1
        });

        let aggregate = &mut aggregates[index];
        aggregate.postings += 1;
        if let Some(salary) = row.salary {
            aggregate.salary_total += salary;
            aggregate.salaried += 1;
        }
    }

    aggregates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{JobSkillLink, Skill};

    fn posting(job_id: i64, title: &str, salary: Option<f64>, remote: bool) -> JobPosting {
        JobPosting {
            job_id,
            job_title_short: title.to_string(),
            salary_year_avg: salary,
            job_work_from_home: remote,
        }
    }

    fn dataset() -> Dataset {
        Dataset::new(
            vec![
                posting(1, "Data Analyst", Some(100.0), true),
                posting(2, "Data Analyst", None, false),
                posting(3, "Data Engineer", Some(300.0), true),
                posting(4, "Data Analyst", Some(50.0), false),
            ],
            vec![
                Skill {
                    skill_id: 10,
                    name: "sql".to_string(),
                },
                Skill {
                    skill_id: 11,
                    name: "python".to_string(),
                },
            ],
            vec![
                JobSkillLink {
                    job_id: 1,
                    skill_id: 11,
                },
                JobSkillLink {
                    job_id: 1,
                    skill_id: 10,
                },
                JobSkillLink {
                    job_id: 2,
                    skill_id: 10,
                },
                JobSkillLink {
                    job_id: 3,
                    skill_id: 10,
                },
                JobSkillLink {
                    job_id: 4,
                    skill_id: 99,
                },
                JobSkillLink {
                    job_id: 42,
                    skill_id: 10,
                },
            ],
        )
    }

    #[test]
    fn inner_join_drops_dangling_links_and_keeps_order() {
        let dataset = dataset();
        let rows = skill_rows(&dataset, PostingFilter::title("Data Analyst"));
        let skills: Vec<&str> = rows.iter().map(|row| row.skill).collect();
        assert_eq!(skills, vec!["python", "sql", "sql"]);
    }

    #[test]
    fn filters_compose() {
        let dataset = dataset();
        let salaried = skill_rows(&dataset, PostingFilter::title("Data Analyst").salaried());
        assert_eq!(salaried.len(), 2);
        assert!(salaried.iter().all(|row| row.salary.is_some()));

        let remote = skill_rows(
            &dataset,
            PostingFilter::title("Data Engineer").salaried().remote(),
        );
        assert_eq!(remote.len(), 1);
        assert_eq!(remote[0].skill, "sql");
    }

    #[test]
    fn aggregates_keep_first_occurrence_order() {
        let dataset = dataset();
        let rows = skill_rows(&dataset, PostingFilter::title("Data Analyst"));
        let aggregates = aggregate_by_skill(&rows);

        assert_eq!(aggregates.len(), 2);
        assert_eq!(aggregates[0].skill, "python");
        assert_eq!(aggregates[1].skill, "sql");
        assert_eq!(aggregates[1].postings, 2);
        assert_eq!(aggregates[1].mean_salary(), Some(100.0));
    }
}
