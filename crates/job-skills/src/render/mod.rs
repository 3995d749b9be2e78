pub mod charts;
mod svg;

pub use charts::{Bar, BarChart, ChartKind, ScatterChart, ScatterPoint, Shade, ValueFormat};
pub use svg::SvgChartRenderer;

use std::fmt::Debug;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("unable to prepare output directory {}: {source}", .path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to draw {chart}: {message}")]
    Backend { chart: ChartKind, message: String },
}

/// Where a chart ended up and whether it carried any data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedChart {
    pub kind: ChartKind,
    pub path: PathBuf,
    pub placeholder: bool,
}

/// Turns finalized result tables into image artifacts.
///
/// Implementations must not reorder the records they are given. An empty
/// chart is valid input and must still produce an artifact.
pub trait ChartRenderer: Debug {
    fn render_bar(&self, chart: &BarChart) -> Result<RenderedChart, RenderError>;
    fn render_scatter(&self, chart: &ScatterChart) -> Result<RenderedChart, RenderError>;
}
