use super::join::{aggregate_by_skill, skill_rows, PostingFilter};
use super::views::PayEntry;
use crate::dataset::Dataset;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayCriteria {
    pub limit: usize,
    /// When set, a skill must appear in more than this many salaried postings.
    pub min_postings: Option<usize>,
}

impl Default for PayCriteria {
    fn default() -> Self {
        Self {
            limit: 10,
            min_postings: None,
        }
    }
}

/// Skills with the highest mean yearly salary among salaried postings titled
/// `job_title`.
///
/// With the default criteria there is no sample floor, so a skill seen in a
/// single posting ranks on that one salary. Equal means are ordered by skill
/// name.
pub fn top_paying_skills(
    dataset: &Dataset,
    job_title: &str,
    criteria: PayCriteria,
) -> Vec<PayEntry> {
    let rows = skill_rows(dataset, PostingFilter::title(job_title).salaried());
    let aggregates = aggregate_by_skill(&rows);
    debug!(
        job_title,
        rows = rows.len(),
        skills = aggregates.len(),
        "pay rows joined"
    );

    let mut entries: Vec<PayEntry> = aggregates
        .into_iter()
        .filter(|aggregate| match criteria.min_postings {
            Some(floor) => aggregate.postings > floor,
            None => true,
        })
        .filter_map(|aggregate| {
            aggregate.mean_salary().map(|avg_salary| PayEntry {
                avg_salary,
                count: aggregate.postings,
                skill: aggregate.skill,
            })
        })
        .collect();

    entries.sort_by(|a, b| {
        b.avg_salary
            .total_cmp(&a.avg_salary)
            .then_with(|| a.skill.cmp(&b.skill))
    });
    entries.truncate(criteria.limit);
    entries
}
