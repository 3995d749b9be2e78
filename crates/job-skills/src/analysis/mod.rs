//! Join, group, and rank pipelines over the posting/skill tables.
//!
//! Every analysis inner-joins postings to links on `job_id` and links to
//! skills on `skill_id`, then groups by skill *name*. Each returns a fresh,
//! ordered `Vec` that callers treat as read-only.

mod demand;
mod join;
mod optimal;
mod pay;
pub mod views;

pub use demand::top_demanded_skills;
pub use optimal::{optimal_skills, OptimalCriteria};
pub use pay::{top_paying_skills, PayCriteria};
pub use views::{DemandEntry, OptimalEntry, PayEntry};

use crate::dataset::Dataset;

pub const DEFAULT_JOB_TITLE: &str = "Data Analyst";
pub const DEFAULT_DEMAND_LIMIT: usize = 5;

/// Knobs shared by the three analyses. Defaults reproduce the reference
/// charts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    pub job_title: String,
    pub demand_limit: usize,
    pub pay_limit: usize,
    pub pay_min_postings: Option<usize>,
    pub optimal_limit: usize,
    pub optimal_min_demand: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        let pay = PayCriteria::default();
        let optimal = OptimalCriteria::default();
        Self {
            job_title: DEFAULT_JOB_TITLE.to_string(),
            demand_limit: DEFAULT_DEMAND_LIMIT,
            pay_limit: pay.limit,
            pay_min_postings: pay.min_postings,
            optimal_limit: optimal.limit,
            optimal_min_demand: optimal.min_demand,
        }
    }
}

impl AnalysisConfig {
    pub fn pay_criteria(&self) -> PayCriteria {
        PayCriteria {
            limit: self.pay_limit,
            min_postings: self.pay_min_postings,
        }
    }

    pub fn optimal_criteria(&self) -> OptimalCriteria {
        OptimalCriteria {
            limit: self.optimal_limit,
            min_demand: self.optimal_min_demand,
        }
    }
}

/// Runs the analyses against one dataset with one configuration.
#[derive(Debug, Clone, Copy)]
pub struct SkillAnalyzer<'a> {
    dataset: &'a Dataset,
    config: &'a AnalysisConfig,
}

impl<'a> SkillAnalyzer<'a> {
    pub fn new(dataset: &'a Dataset, config: &'a AnalysisConfig) -> Self {
        Self { dataset, config }
    }

    pub fn demand(&self) -> Vec<DemandEntry> {
        top_demanded_skills(self.dataset, &self.config.job_title, self.config.demand_limit)
    }

    pub fn pay(&self) -> Vec<PayEntry> {
        top_paying_skills(
            self.dataset,
            &self.config.job_title,
            self.config.pay_criteria(),
        )
    }

    pub fn optimal(&self) -> Vec<OptimalEntry> {
        optimal_skills(
            self.dataset,
            &self.config.job_title,
            self.config.optimal_criteria(),
        )
    }
}
