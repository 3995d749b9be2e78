use crate::commands::{run_generate, run_report};
use clap::{Args, Parser, Subcommand};
use job_skills::config::AppConfig;
use job_skills::error::AppError;
use job_skills::telemetry;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "job-skills",
    about = "Rank the most in-demand, best-paid, and optimal skills for a job title",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze the source tables and render the three skill charts (default command)
    Generate(GenerateArgs),
    /// Analyze the source tables and print the rankings without rendering charts
    Report(ReportArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct AnalysisArgs {
    /// Directory holding job_postings_fact.csv, skills_dim.csv and skills_job_dim.csv
    #[arg(long)]
    pub(crate) data_dir: Option<PathBuf>,
    /// Value of job_title_short to analyze
    #[arg(long)]
    pub(crate) job_title: Option<String>,
    /// Number of in-demand skills to keep
    #[arg(long)]
    pub(crate) demand_limit: Option<usize>,
    /// Number of top-paying skills to keep
    #[arg(long)]
    pub(crate) pay_limit: Option<usize>,
    /// Only rank pay for skills seen in more than this many salaried postings
    #[arg(long)]
    pub(crate) pay_min_postings: Option<usize>,
    /// Number of optimal skills to keep
    #[arg(long)]
    pub(crate) optimal_limit: Option<usize>,
    /// Optimal skills need more than this many remote salaried postings
    #[arg(long)]
    pub(crate) optimal_min_demand: Option<usize>,
}

impl AnalysisArgs {
    fn apply(self, config: &mut AppConfig) {
        if let Some(data_dir) = self.data_dir {
            config.paths.data_dir = data_dir;
        }
        if let Some(job_title) = self.job_title {
            config.analysis.job_title = job_title;
        }
        if let Some(limit) = self.demand_limit {
            config.analysis.demand_limit = limit;
        }
        if let Some(limit) = self.pay_limit {
            config.analysis.pay_limit = limit;
        }
        if self.pay_min_postings.is_some() {
            config.analysis.pay_min_postings = self.pay_min_postings;
        }
        if let Some(limit) = self.optimal_limit {
            config.analysis.optimal_limit = limit;
        }
        if let Some(floor) = self.optimal_min_demand {
            config.analysis.optimal_min_demand = floor;
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct GenerateArgs {
    #[command(flatten)]
    pub(crate) analysis: AnalysisArgs,
    /// Directory receiving the rendered charts
    #[arg(long)]
    pub(crate) output_dir: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ReportArgs {
    #[command(flatten)]
    pub(crate) analysis: AnalysisArgs,
    /// Print the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Generate(GenerateArgs::default()));

    let mut config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match command {
        Command::Generate(args) => {
            args.analysis.apply(&mut config);
            if let Some(output_dir) = args.output_dir {
                config.paths.output_dir = output_dir;
            }
            run_generate(&config)
        }
        Command::Report(args) => {
            args.analysis.apply(&mut config);
            run_report(&config, args.json)
        }
    }
}
