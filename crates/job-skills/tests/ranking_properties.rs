use job_skills::analysis::{
    optimal_skills, top_demanded_skills, top_paying_skills, OptimalCriteria, PayCriteria,
};
use job_skills::dataset::{Dataset, JobPosting, JobSkillLink, Skill};
use proptest::prelude::*;

const TITLE: &str = "Data Analyst";
const SKILL_NAMES: [&str; 8] = [
    "sql", "excel", "python", "tableau", "power bi", "r", "sas", "looker",
];

fn posting_strategy() -> impl Strategy<Value = (bool, Option<u32>, bool)> {
    (
        prop::bool::weighted(0.8),
        prop::option::weighted(0.6, 40_000u32..200_000),
        any::<bool>(),
    )
}

prop_compose! {
    fn dataset_strategy()(
        postings in prop::collection::vec(posting_strategy(), 0..120),
        links in prop::collection::vec((0usize..120, 0i64..10), 0..600),
    ) -> Dataset {
        let postings: Vec<JobPosting> = postings
            .into_iter()
            .enumerate()
            .map(|(index, (analyst, salary, remote))| JobPosting {
                job_id: index as i64,
                job_title_short: if analyst { TITLE } else { "Data Engineer" }.to_string(),
                salary_year_avg: salary.map(f64::from),
                job_work_from_home: remote,
            })
            .collect();
        let skills = SKILL_NAMES
            .iter()
            .enumerate()
            .map(|(id, name)| Skill { skill_id: id as i64, name: name.to_string() })
            .collect();
        // job ids past the posting count and skill ids 8..10 dangle on purpose
        let links = links
            .into_iter()
            .map(|(job, skill_id)| JobSkillLink { job_id: job as i64, skill_id })
            .collect();
        Dataset::new(postings, skills, links)
    }
}

/// Joined row count for `skill` under the given posting predicate.
fn naive_count(dataset: &Dataset, skill: &str, keep: impl Fn(&JobPosting) -> bool) -> usize {
    let Some(skill_id) = dataset
        .skills
        .iter()
        .find(|candidate| candidate.name == skill)
        .map(|candidate| candidate.skill_id)
    else {
        return 0;
    };

    dataset
        .links
        .iter()
        .filter(|link| link.skill_id == skill_id)
        .filter(|link| {
            dataset
                .postings
                .iter()
                .any(|posting| posting.job_id == link.job_id && keep(posting))
        })
        .count()
}

proptest! {
    #[test]
    fn demand_is_bounded_and_non_increasing(dataset in dataset_strategy()) {
        let demand = top_demanded_skills(&dataset, TITLE, 5);
        prop_assert!(demand.len() <= 5);
        for pair in demand.windows(2) {
            prop_assert!(pair[0].count >= pair[1].count);
        }
        for entry in &demand {
            let expected = naive_count(&dataset, &entry.skill, |posting| {
                posting.job_title_short == TITLE
            });
            prop_assert_eq!(entry.count, expected);
        }
    }

    #[test]
    fn pay_is_bounded_sorted_and_salaried_only(dataset in dataset_strategy()) {
        let pay = top_paying_skills(&dataset, TITLE, PayCriteria::default());
        prop_assert!(pay.len() <= 10);
        for pair in pay.windows(2) {
            prop_assert!(pair[0].avg_salary >= pair[1].avg_salary);
        }
        for entry in &pay {
            let salaried = naive_count(&dataset, &entry.skill, |posting| {
                posting.job_title_short == TITLE && posting.salary_year_avg.is_some()
            });
            prop_assert_eq!(entry.count, salaried);
            prop_assert!(entry.avg_salary >= 40_000.0 && entry.avg_salary < 200_000.0);
        }
    }

    #[test]
    fn optimal_respects_floor_and_ordering(dataset in dataset_strategy()) {
        let optimal = optimal_skills(&dataset, TITLE, OptimalCriteria::default());
        prop_assert!(optimal.len() <= 25);
        prop_assert!(optimal.iter().all(|entry| entry.demand_count > 10));
        for pair in optimal.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(
                a.avg_salary > b.avg_salary
                    || (a.avg_salary == b.avg_salary && a.demand_count >= b.demand_count)
            );
        }
    }

    #[test]
    fn analyses_are_idempotent(dataset in dataset_strategy()) {
        prop_assert_eq!(
            top_demanded_skills(&dataset, TITLE, 5),
            top_demanded_skills(&dataset, TITLE, 5)
        );
        prop_assert_eq!(
            top_paying_skills(&dataset, TITLE, PayCriteria::default()),
            top_paying_skills(&dataset, TITLE, PayCriteria::default())
        );
        prop_assert_eq!(
            optimal_skills(&dataset, TITLE, OptimalCriteria::default()),
            optimal_skills(&dataset, TITLE, OptimalCriteria::default())
        );
    }
}
