use job_skills::config::AppConfig;
use job_skills::error::AppError;
use job_skills::pipeline::{self, SkillReport};
use job_skills::render::charts::format_currency;
use job_skills::render::{RenderedChart, SvgChartRenderer};
use std::io::{self, Write};
use tracing::info;

pub(crate) fn run_generate(config: &AppConfig) -> Result<(), AppError> {
    let renderer = SvgChartRenderer::new(&config.paths.output_dir);
    let generated = pipeline::generate(&config.paths.data_dir, &config.analysis, &renderer)?;
    info!(
        output_dir = %renderer.output_dir().display(),
        charts = generated.charts.len(),
        "charts written"
    );

    print_report(&generated.report);
    print_charts(&generated.charts);
    Ok(())
}

pub(crate) fn run_report(config: &AppConfig, json: bool) -> Result<(), AppError> {
    let report = pipeline::analyze(&config.paths.data_dir, &config.analysis)?;

    if json {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        serde_json::to_writer_pretty(&mut handle, &report).map_err(io::Error::from)?;
        writeln!(handle)?;
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &SkillReport) {
    println!("Skill report for {}", report.job_title);
    println!(
        "Generated at: {}",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );

    println!();
    println!("Most in-demand skills:");
    if report.demand.is_empty() {
        println!("  (no postings matched)");
    }
    for (rank, entry) in report.demand.iter().enumerate() {
        println!("  {:>2}. {:<20} {:>8} postings", rank + 1, entry.skill, entry.count);
    }

    println!();
    println!("Top paying skills:");
    if report.pay.is_empty() {
        println!("  (no salaried postings matched)");
    }
    for (rank, entry) in report.pay.iter().enumerate() {
        println!(
            "  {:>2}. {:<20} {:>10}  ({} salaried postings)",
            rank + 1,
            entry.skill,
            format_currency(entry.avg_salary),
            entry.count
        );
    }

    println!();
    println!("Optimal remote skills:");
    if report.optimal.is_empty() {
        println!("  (no skill cleared the demand floor)");
    }
    for (rank, entry) in report.optimal.iter().enumerate() {
        println!(
            "  {:>2}. {:<20} {:>10}  demand {}",
            rank + 1,
            entry.skill,
            format_currency(entry.avg_salary),
            entry.demand_count
        );
    }
}

fn print_charts(charts: &[RenderedChart]) {
    println!();
    println!("Charts:");
    for chart in charts {
        let note = if chart.placeholder { " (placeholder)" } else { "" };
        println!("  {:<24} {}{}", chart.kind.label(), chart.path.display(), note);
    }
}
