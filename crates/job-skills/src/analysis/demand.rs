use super::join::{aggregate_by_skill, skill_rows, PostingFilter};
use super::views::DemandEntry;
use crate::dataset::Dataset;
use tracing::debug;

/// Skills most frequently linked to postings titled `job_title`.
///
/// Counts every joined row. `sort_by` is stable, so equal counts keep the
/// order in which the skill was first seen.
pub fn top_demanded_skills(dataset: &Dataset, job_title: &str, limit: usize) -> Vec<DemandEntry> {
    let rows = skill_rows(dataset, PostingFilter::title(job_title));
    let mut aggregates = aggregate_by_skill(&rows);
    debug!(
        job_title,
        rows = rows.len(),
        skills = aggregates.len(),
        "demand rows joined"
    );

    aggregates.sort_by(|a, b| b.postings.cmp(&a.postings));

    aggregates
        .into_iter()
        .take(limit)
        .map(|aggregate| DemandEntry {
            skill: aggregate.skill,
            count: aggregate.postings,
        })
        .collect()
}
