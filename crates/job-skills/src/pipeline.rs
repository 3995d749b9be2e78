use crate::analysis::{AnalysisConfig, DemandEntry, OptimalEntry, PayEntry, SkillAnalyzer};
use crate::dataset::Dataset;
use crate::error::AppError;
use crate::render::{charts, ChartKind, ChartRenderer, RenderError, RenderedChart};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;
use tracing::{error, info, warn};

/// The three finalized result tables of one run.
#[derive(Debug, Clone, Serialize)]
pub struct SkillReport {
    pub job_title: String,
    pub generated_at: DateTime<Utc>,
    pub demand: Vec<DemandEntry>,
    pub pay: Vec<PayEntry>,
    pub optimal: Vec<OptimalEntry>,
}

impl SkillReport {
    pub fn build(dataset: &Dataset, config: &AnalysisConfig) -> Self {
        let analyzer = SkillAnalyzer::new(dataset, config);

        let demand = analyzer.demand();
        let pay = analyzer.pay();
        let optimal = analyzer.optimal();

        for (kind, rows) in [
            (ChartKind::Demand, demand.len()),
            (ChartKind::Pay, pay.len()),
            (ChartKind::Optimal, optimal.len()),
        ] {
            if rows == 0 {
                warn!(job_title = %config.job_title, analysis = %kind, "no qualifying rows");
            }
        }

        info!(
            job_title = %config.job_title,
            demand = demand.len(),
            pay = pay.len(),
            optimal = optimal.len(),
            "analyses complete"
        );

        Self {
            job_title: config.job_title.clone(),
            generated_at: Utc::now(),
            demand,
            pay,
            optimal,
        }
    }
}

/// Output of [`generate`].
#[derive(Debug, Clone)]
pub struct GeneratedReport {
    pub report: SkillReport,
    pub charts: Vec<RenderedChart>,
}

/// Loads the tables from `data_dir` and runs the analyses.
pub fn analyze<P: AsRef<Path>>(
    data_dir: P,
    config: &AnalysisConfig,
) -> Result<SkillReport, AppError> {
    let dataset = Dataset::from_dir(data_dir)?;
    Ok(SkillReport::build(&dataset, config))
}

/// Loads, analyzes, and renders all three charts.
pub fn generate<P: AsRef<Path>>(
    data_dir: P,
    config: &AnalysisConfig,
    renderer: &dyn ChartRenderer,
) -> Result<GeneratedReport, AppError> {
    let report = analyze(data_dir, config)?;
    let charts = render_report(&report, config, renderer)?;
    Ok(GeneratedReport { report, charts })
}

/// Renders every chart of `report`.
///
/// A failure on one chart does not stop the others from being attempted;
/// the first failure is returned once all three have been tried.
pub fn render_report(
    report: &SkillReport,
    config: &AnalysisConfig,
    renderer: &dyn ChartRenderer,
) -> Result<Vec<RenderedChart>, RenderError> {
    let job_title = report.job_title.as_str();
    let attempts = [
        renderer.render_bar(&charts::demand_chart(
            job_title,
            config.demand_limit,
            &report.demand,
        )),
        renderer.render_bar(&charts::pay_chart(job_title, config.pay_limit, &report.pay)),
        renderer.render_scatter(&charts::optimal_chart(job_title, &report.optimal)),
    ];

    let mut rendered = Vec::with_capacity(attempts.len());
    let mut first_failure = None;
    for attempt in attempts {
        match attempt {
            Ok(chart) => rendered.push(chart),
            Err(err) => {
                error!(error = %err, "chart rendering failed");
                first_failure.get_or_insert(err);
            }
        }
    }

    match first_failure {
        Some(err) => Err(err),
        None => Ok(rendered),
    }
}
