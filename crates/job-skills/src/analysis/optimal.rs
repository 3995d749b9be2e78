use super::join::{aggregate_by_skill, skill_rows, PostingFilter};
use super::views::OptimalEntry;
use crate::dataset::Dataset;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptimalCriteria {
    pub limit: usize,
    /// Skills need strictly more remote salaried postings than this.
    pub min_demand: usize,
}

impl Default for OptimalCriteria {
    fn default() -> Self {
        Self {
            limit: 25,
            min_demand: 10,
        }
    }
}

/// Skills that are both well paid and well supported, over remote salaried
/// postings titled `job_title`.
///
/// Order is `avg_salary` desc, then `demand_count` desc, then skill name.
pub fn optimal_skills(
    dataset: &Dataset,
    job_title: &str,
    criteria: OptimalCriteria,
) -> Vec<OptimalEntry> {
    let rows = skill_rows(dataset, PostingFilter::title(job_title).salaried().remote());
    let aggregates = aggregate_by_skill(&rows);
    let candidates = aggregates.len();

    let mut entries: Vec<OptimalEntry> = aggregates
        .into_iter()
        .filter(|aggregate| aggregate.postings > criteria.min_demand)
        .filter_map(|aggregate| {
            aggregate.mean_salary().map(|avg_salary| OptimalEntry {
                avg_salary,
                demand_count: aggregate.postings,
                skill: aggregate.skill,
            })
        })
        .collect();
    debug!(
        job_title,
        rows = rows.len(),
        candidates,
        above_floor = entries.len(),
        "optimal rows joined"
    );

    entries.sort_by(|a, b| {
        b.avg_salary
            .total_cmp(&a.avg_salary)
            .then_with(|| b.demand_count.cmp(&a.demand_count))
            .then_with(|| a.skill.cmp(&b.skill))
    });
    entries.truncate(criteria.limit);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{JobPosting, JobSkillLink, Skill};

    fn push_postings(
        dataset: &mut Dataset,
        count: usize,
        salary: Option<f64>,
        remote: bool,
        skill_id: i64,
    ) {
        for _ in 0..count {
            let job_id = dataset.postings.len() as i64 + 1;
            dataset.postings.push(JobPosting {
                job_id,
                job_title_short: "Data Analyst".to_string(),
                salary_year_avg: salary,
                job_work_from_home: remote,
            });
            dataset.links.push(JobSkillLink { job_id, skill_id });
        }
    }

    fn skills(names: &[&str]) -> Vec<Skill> {
        names
            .iter()
            .enumerate()
            .map(|(id, name)| Skill {
                skill_id: id as i64,
                name: name.to_string(),
            })
            .collect()
    }

    #[test]
    fn floor_excludes_ten_and_includes_eleven() {
        let mut dataset = Dataset {
            skills: skills(&["go", "snowflake"]),
            ..Dataset::default()
        };
        push_postings(&mut dataset, 10, Some(150_000.0), true, 0);
        push_postings(&mut dataset, 11, Some(120_000.0), true, 1);

        let top = optimal_skills(&dataset, "Data Analyst", OptimalCriteria::default());
        assert_eq!(
            top,
            vec![OptimalEntry {
                skill: "snowflake".to_string(),
                demand_count: 11,
                avg_salary: 120_000.0,
            }]
        );
    }

    #[test]
    fn only_remote_salaried_postings_count() {
        let mut dataset = Dataset {
            skills: skills(&["sql"]),
            ..Dataset::default()
        };
        push_postings(&mut dataset, 8, Some(100_000.0), true, 0);
        push_postings(&mut dataset, 20, Some(100_000.0), false, 0);
        push_postings(&mut dataset, 20, None, true, 0);

        assert!(optimal_skills(&dataset, "Data Analyst", OptimalCriteria::default()).is_empty());
    }

    #[test]
    fn equal_salaries_rank_by_demand() {
        let mut dataset = Dataset {
            skills: skills(&["excel", "sql", "tableau"]),
            ..Dataset::default()
        };
        push_postings(&mut dataset, 12, Some(90_000.0), true, 0);
        push_postings(&mut dataset, 30, Some(90_000.0), true, 1);
        push_postings(&mut dataset, 15, Some(95_000.0), true, 2);

        let order: Vec<String> =
            optimal_skills(&dataset, "Data Analyst", OptimalCriteria::default())
                .into_iter()
                .map(|entry| entry.skill)
                .collect();
        assert_eq!(order, vec!["tableau", "sql", "excel"]);
    }

    #[test]
    fn caps_at_limit() {
        let names: Vec<String> = (0..30).map(|id| format!("skill-{id:02}")).collect();
        let names: Vec<&str> = names.iter().map(String::as_str).collect();
        let mut dataset = Dataset {
            skills: skills(&names),
            ..Dataset::default()
        };
        for id in 0..30 {
            push_postings(&mut dataset, 11, Some(50_000.0 + id as f64), true, id);
        }

        let top = optimal_skills(&dataset, "Data Analyst", OptimalCriteria::default());
        assert_eq!(top.len(), 25);
        assert_eq!(top[0].skill, "skill-29");
    }
}
