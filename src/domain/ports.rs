use crate::domain::chart::QuadrantChart;
use crate::utils::error::Result;
use std::path::Path;

/// Rasterises a chart layout into an image file at `path`.
pub trait ChartRenderer {
    fn render(&self, chart: &QuadrantChart, path: &Path) -> Result<()>;
}

/// Opens a saved chart for the user to look at.
pub trait Viewer {
    fn show(&self, path: &Path) -> Result<()>;
}
