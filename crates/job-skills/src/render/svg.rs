use super::charts::{BarChart, ChartKind, ScatterChart, Shade};
use super::{ChartRenderer, RenderError, RenderedChart};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

const FONT: &str = "sans-serif";
const PLACEHOLDER: &str = "No qualifying data";
const MUTED: RGBColor = RGBColor(120, 120, 120);
const CANVAS: (u32, u32) = (1000, 600);

/// Writes each chart as an SVG file inside `output_dir`.
#[derive(Debug, Clone)]
pub struct SvgChartRenderer {
    output_dir: PathBuf,
}

impl SvgChartRenderer {
    pub fn new<P: Into<PathBuf>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn target(&self, kind: ChartKind) -> Result<PathBuf, RenderError> {
        fs::create_dir_all(&self.output_dir).map_err(|source| RenderError::OutputDir {
            path: self.output_dir.clone(),
            source,
        })?;
        Ok(self.output_dir.join(kind.file_name()))
    }
}

impl ChartRenderer for SvgChartRenderer {
    fn render_bar(&self, chart: &BarChart) -> Result<RenderedChart, RenderError> {
        let path = self.target(chart.kind)?;
        let on_error = backend_error(chart.kind);
        {
            let root = SVGBackend::new(&path, CANVAS).into_drawing_area();
            root.fill(&WHITE).map_err(&on_error)?;

            if chart.bars.is_empty() {
                draw_placeholder(&root, &chart.title).map_err(&on_error)?;
            } else {
                draw_bars(&root, chart).map_err(&on_error)?;
            }
            root.present().map_err(&on_error)?;
        }

        info!(
            chart = %chart.kind,
            path = %path.display(),
            bars = chart.bars.len(),
            "saved chart"
        );
        Ok(RenderedChart {
            kind: chart.kind,
            path,
            placeholder: chart.bars.is_empty(),
        })
    }

    fn render_scatter(&self, chart: &ScatterChart) -> Result<RenderedChart, RenderError> {
        let path = self.target(chart.kind)?;
        let on_error = backend_error(chart.kind);
        {
            let root = SVGBackend::new(&path, CANVAS).into_drawing_area();
            root.fill(&WHITE).map_err(&on_error)?;

            if chart.points.is_empty() {
                draw_placeholder(&root, &chart.title).map_err(&on_error)?;
            } else {
                draw_scatter(&root, chart).map_err(&on_error)?;
            }
            root.present().map_err(&on_error)?;
        }

        info!(
            chart = %chart.kind,
            path = %path.display(),
            points = chart.points.len(),
            "saved chart"
        );
        Ok(RenderedChart {
            kind: chart.kind,
            path,
            placeholder: chart.points.is_empty(),
        })
    }
}

fn backend_error<E: Display>(kind: ChartKind) -> impl Fn(E) -> RenderError {
    move |err| RenderError::Backend {
        chart: kind,
        message: err.to_string(),
    }
}

fn color(shade: Shade) -> RGBColor {
    match shade {
        Shade::SkyBlue => RGBColor(135, 206, 235),
        Shade::Salmon => RGBColor(250, 128, 114),
        Shade::Purple => RGBColor(128, 0, 128),
    }
}

type DrawResult<T> = Result<T, DrawingAreaErrorKind<std::io::Error>>;

fn draw_placeholder(root: &DrawingArea<SVGBackend<'_>, Shift>, title: &str) -> DrawResult<()> {
    let (width, height) = root.dim_in_pixel();
    let centered = Pos::new(HPos::Center, VPos::Center);

    let title_style = TextStyle::from((FONT, 24).into_font()).pos(centered);
    root.draw_text(title, &title_style, (width as i32 / 2, 40))?;

    let body_style = TextStyle::from((FONT, 20).into_font())
        .color(&MUTED)
        .pos(centered);
    root.draw_text(
        PLACEHOLDER,
        &body_style,
        (width as i32 / 2, height as i32 / 2),
    )
}

fn draw_bars(root: &DrawingArea<SVGBackend<'_>, Shift>, chart: &BarChart) -> DrawResult<()> {
    let count = chart.bars.len() as i32;
    let max_value = chart.bars.iter().map(|bar| bar.value).fold(0.0_f64, f64::max);
    let x_max = if max_value > 0.0 { max_value * 1.15 } else { 1.0 };

    // Bar at rank r sits on row `count - 1 - r` so rank 0 is on top.
    let row = |rank: usize| count - 1 - rank as i32;
    let label_for = |value: &SegmentValue<i32>| match value {
        SegmentValue::CenterOf(position) if (0..count).contains(position) => {
            chart.bars[(count - 1 - position) as usize].label.clone()
        }
        _ => String::new(),
    };
    let value_label = |value: &f64| chart.value_format.format(*value);

    let mut context = ChartBuilder::on(root)
        .caption(&chart.title, (FONT, 24))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(150)
        .build_cartesian_2d(0.0..x_max, (0..count).into_segmented())?;

    context
        .configure_mesh()
        .disable_y_mesh()
        .x_desc(chart.x_label)
        .y_desc(chart.y_label)
        .x_label_formatter(&value_label)
        .y_labels(chart.bars.len())
        .y_label_formatter(&label_for)
        .draw()?;

    context.draw_series(
        Histogram::horizontal(&context)
            .style(color(chart.shade).filled())
            .margin(12)
            .data(
                chart
                    .bars
                    .iter()
                    .enumerate()
                    .map(|(rank, bar)| (row(rank), bar.value)),
            ),
    )?;

    if chart.annotate_values {
        let style =
            TextStyle::from((FONT, 14).into_font()).pos(Pos::new(HPos::Left, VPos::Center));
        context.draw_series(chart.bars.iter().enumerate().map(|(rank, bar)| {
            Text::new(
                format!("  {}", chart.value_format.format(bar.value)),
                (bar.value, SegmentValue::CenterOf(row(rank))),
                style.clone(),
            )
        }))?;
    }

    Ok(())
}

fn draw_scatter(
    root: &DrawingArea<SVGBackend<'_>, Shift>,
    chart: &ScatterChart,
) -> DrawResult<()> {
    let x_max = chart.points.iter().map(|point| point.x).fold(0.0_f64, f64::max);
    let (y_min, y_max) = chart
        .points
        .iter()
        .fold((f64::MAX, f64::MIN), |(low, high), point| {
            (low.min(point.y), high.max(point.y))
        });
    let y_pad = ((y_max - y_min) * 0.1).max(1_000.0);
    let value_label = |value: &f64| chart.y_format.format(*value);

    let mut context = ChartBuilder::on(root)
        .caption(&chart.title, (FONT, 24))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(90)
        .build_cartesian_2d(
            0.0..(x_max * 1.1).max(1.0),
            (y_min - y_pad)..(y_max + y_pad),
        )?;

    context
        .configure_mesh()
        .x_desc(chart.x_label)
        .y_desc(chart.y_label)
        .y_label_formatter(&value_label)
        .draw()?;

    let marker = color(chart.shade).mix(0.7).filled();
    context.draw_series(chart.points.iter().map(|point| {
        Circle::new((point.x, point.y), marker_radius(point.weight), marker)
    }))?;

    let label_style = TextStyle::from((FONT, 13).into_font());
    context.draw_series(chart.points.iter().map(|point| {
        Text::new(point.label.clone(), (point.x, point.y), label_style.clone())
    }))?;

    Ok(())
}

/// Marker area grows linearly with weight.
fn marker_radius(weight: f64) -> u32 {
    (weight * 2.0).sqrt().clamp(3.0, 40.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_radius_is_clamped() {
        assert_eq!(marker_radius(0.0), 3);
        assert_eq!(marker_radius(50.0), 10);
        assert_eq!(marker_radius(10_000.0), 40);
    }
}
