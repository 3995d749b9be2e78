use crate::analysis::{DemandEntry, OptimalEntry, PayEntry};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Demand,
    Pay,
    Optimal,
}

impl ChartKind {
    pub const fn ordered() -> [Self; 3] {
        [Self::Demand, Self::Pay, Self::Optimal]
    }

    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Demand => "in_demand_skills.svg",
            Self::Pay => "top_paying_skills.svg",
            Self::Optimal => "optimal_skills.svg",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Demand => "in-demand skills chart",
            Self::Pay => "top paying skills chart",
            Self::Optimal => "optimal skills chart",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    Count,
    Currency,
}

impl ValueFormat {
    pub fn format(self, value: f64) -> String {
        match self {
            Self::Count => format!("{}", value.round() as i64),
            Self::Currency => format_currency(value),
        }
    }
}

/// `$` prefix, no cents, comma-grouped thousands.
pub fn format_currency(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if rounded < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    SkyBlue,
    Salmon,
    Purple,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

/// Horizontal bar chart; `bars[0]` is drawn on top.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub kind: ChartKind,
    pub title: String,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub value_format: ValueFormat,
    pub annotate_values: bool,
    pub shade: Shade,
    pub bars: Vec<Bar>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub label: String,
    pub x: f64,
    pub y: f64,
    /// Drives marker size.
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterChart {
    pub kind: ChartKind,
    pub title: String,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub y_format: ValueFormat,
    pub shade: Shade,
    pub points: Vec<ScatterPoint>,
}

fn plural(job_title: &str) -> String {
    if job_title.ends_with('s') {
        job_title.to_string()
    } else {
        format!("{job_title}s")
    }
}

pub fn demand_chart(job_title: &str, limit: usize, entries: &[DemandEntry]) -> BarChart {
    BarChart {
        kind: ChartKind::Demand,
        title: format!("Top {limit} In-Demand Skills for {}", plural(job_title)),
        x_label: "Number of Job Postings",
        y_label: "Skill",
        value_format: ValueFormat::Count,
        annotate_values: true,
        shade: Shade::SkyBlue,
        bars: entries
            .iter()
            .map(|entry| Bar {
                label: entry.skill.clone(),
                value: entry.count as f64,
            })
            .collect(),
    }
}

pub fn pay_chart(job_title: &str, limit: usize, entries: &[PayEntry]) -> BarChart {
    BarChart {
        kind: ChartKind::Pay,
        title: format!("Top {limit} High-Paying Skills for {}", plural(job_title)),
        x_label: "Average Yearly Salary",
        y_label: "Skill",
        value_format: ValueFormat::Currency,
        annotate_values: false,
        shade: Shade::Salmon,
        bars: entries
            .iter()
            .map(|entry| Bar {
                label: entry.skill.clone(),
                value: entry.avg_salary,
            })
            .collect(),
    }
}

pub fn optimal_chart(job_title: &str, entries: &[OptimalEntry]) -> ScatterChart {
    ScatterChart {
        kind: ChartKind::Optimal,
        title: format!("Optimal Skills: Salary vs. Demand (Remote {job_title})"),
        x_label: "Demand (Number of Job Postings)",
        y_label: "Average Yearly Salary",
        y_format: ValueFormat::Currency,
        shade: Shade::Purple,
        points: entries
            .iter()
            .map(|entry| ScatterPoint {
                label: entry.skill.clone(),
                x: entry.demand_count as f64,
                y: entry.avg_salary,
                weight: entry.demand_count as f64,
            })
            .collect(),
    }
}
