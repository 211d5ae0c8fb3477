use crate::core::collector::Collector;
use crate::core::viewer::show_best_effort;
use crate::domain::chart::{ChartSettings, QuadrantChart};
use crate::domain::model::Initiative;
use crate::domain::ports::{ChartRenderer, Viewer};
use crate::utils::error::Result;
use std::io::{BufRead, Write};
use std::path::PathBuf;

pub const NOTHING_TO_PLOT_MESSAGE: &str = "No initiatives to plot.";

#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    /// Nothing was entered; no image was written.
    Empty,
    Rendered {
        path: PathBuf,
        initiatives: usize,
        displayed: bool,
    },
}

/// Runs collection to completion, then hands the result to the renderer once.
pub struct QuadrantSession<C: ChartRenderer, V: Viewer> {
    renderer: C,
    viewer: V,
    settings: ChartSettings,
    output_path: PathBuf,
}

impl<C: ChartRenderer, V: Viewer> QuadrantSession<C, V> {
    pub fn new(renderer: C, viewer: V, settings: ChartSettings, output_path: impl Into<PathBuf>) -> Self {
        Self {
            renderer,
            viewer,
            settings,
            output_path: output_path.into(),
        }
    }

    pub fn run<R: BufRead, W: Write>(&self, input: R, mut output: W) -> Result<SessionOutcome> {
        tracing::info!("Starting initiative collection");

        let initiatives = Collector::new(input, &mut output).collect()?;

        if initiatives.is_empty() {
            tracing::info!("No initiatives entered, skipping chart");
            writeln!(output, "{}", NOTHING_TO_PLOT_MESSAGE)?;
            return Ok(SessionOutcome::Empty);
        }

        let displayed = self.render(&initiatives)?;
        writeln!(output, "Chart saved to: {}", self.output_path.display())?;

        Ok(SessionOutcome::Rendered {
            path: self.output_path.clone(),
            initiatives: initiatives.len(),
            displayed,
        })
    }

    /// Save the chart, then try to display it. Only the display step is
    /// allowed to fail quietly; a failed save is returned.
    pub fn render(&self, initiatives: &[Initiative]) -> Result<bool> {
        for initiative in initiatives {
            tracing::debug!(
                "'{}' falls in {}",
                initiative.name,
                initiative.quadrant(self.settings.midpoint)
            );
        }

        let chart = QuadrantChart::build(initiatives, &self.settings);
        tracing::debug!(
            "Chart layout: {} points, {} reference lines, {} captions",
            chart.points.len(),
            chart.reference_lines.len(),
            chart.captions.len()
        );

        self.renderer.render(&chart, &self.output_path)?;
        tracing::info!("📁 Chart saved to: {}", self.output_path.display());

        Ok(show_best_effort(&self.viewer, &self.output_path))
    }
}
