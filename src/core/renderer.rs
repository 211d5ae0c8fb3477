use crate::domain::chart::{ChartColor, LineStyle, QuadrantChart};
use crate::domain::ports::ChartRenderer;
use crate::utils::error::{QuadrantError, Result};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{register_font, FontStyle};
use std::path::Path;
use std::sync::OnceLock;

const FONT_FAMILY: &str = "sans-serif";
const FONT_BYTES: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");

const POINT_RADIUS: u32 = 5;
const DASH_LENGTH: u32 = 8;
const DASH_SPACING: u32 = 5;

static FONT_REGISTERED: OnceLock<std::result::Result<(), String>> = OnceLock::new();

/// plotters 的 ab_glyph 後端需要先註冊字型才能畫任何文字
fn ensure_font() -> Result<()> {
    FONT_REGISTERED
        .get_or_init(|| {
            register_font(FONT_FAMILY, FontStyle::Normal, FONT_BYTES)
                .map_err(|_| "bundled DejaVuSans.ttf could not be parsed".to_string())
        })
        .clone()
        .map_err(|message| QuadrantError::FontError { message })
}

fn to_rgb(color: ChartColor) -> RGBColor {
    RGBColor(color.0, color.1, color.2)
}

fn render_err<E: std::fmt::Display>(e: E) -> QuadrantError {
    QuadrantError::render(e.to_string())
}

/// PNG renderer on top of the plotters bitmap backend.
#[derive(Debug, Clone)]
pub struct PngRenderer {
    width: u32,
    height: u32,
}

impl PngRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for PngRenderer {
    fn default() -> Self {
        Self::new(640, 480)
    }
}

impl ChartRenderer for PngRenderer {
    fn render(&self, chart: &QuadrantChart, path: &Path) -> Result<()> {
        ensure_font()?;

        // BitMapBackend 以 u32 計算 w * h，溢位會直接 panic
        if self.width == 0 || self.height == 0 || self.width.checked_mul(self.height).is_none() {
            return Err(QuadrantError::render(format!(
                "image size {}x{} cannot be allocated",
                self.width, self.height
            )));
        }

        // BitMapBackend 只在 present() 時才寫檔，先確認目錄存在以便回報清楚的 IO 錯誤
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.is_dir() {
                return Err(QuadrantError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("output directory does not exist: {}", parent.display()),
                )));
            }
        }

        tracing::debug!(
            "Rendering {} points at {}x{} to {}",
            chart.points.len(),
            self.width,
            self.height,
            path.display()
        );

        let root = BitMapBackend::new(path, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE).map_err(render_err)?;

        let mut ctx = ChartBuilder::on(&root)
            .caption(&chart.title, (FONT_FAMILY, 22))
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(55)
            .build_cartesian_2d(
                chart.x_bounds.min..chart.x_bounds.max,
                chart.y_bounds.min..chart.y_bounds.max,
            )
            .map_err(render_err)?;

        let mut mesh = ctx.configure_mesh();
        mesh.x_desc(chart.x_label.as_str())
            .y_desc(chart.y_label.as_str())
            .label_style((FONT_FAMILY, 13))
            .axis_desc_style((FONT_FAMILY, 16));
        if chart.grid {
            mesh.bold_line_style(RGBColor(0xb0, 0xb0, 0xb0).stroke_width(1))
                .light_line_style(TRANSPARENT);
        } else {
            mesh.disable_mesh();
        }
        mesh.draw().map_err(render_err)?;

        for line in &chart.reference_lines {
            let style = to_rgb(line.color).stroke_width(1);
            let endpoints = line.endpoints().to_vec();
            match line.style {
                LineStyle::Dashed => ctx
                    .draw_series(DashedLineSeries::new(endpoints, DASH_LENGTH, DASH_SPACING, style))
                    .map_err(render_err)?,
            };
        }

        ctx.draw_series(
            chart
                .points
                .iter()
                .map(|p| Circle::new((p.x, p.y), POINT_RADIUS, to_rgb(p.color).filled())),
        )
        .map_err(render_err)?;

        ctx.draw_series(chart.points.iter().map(|p| {
            Text::new(
                p.name.clone(),
                (p.label_x, p.label_y),
                (FONT_FAMILY, 14).into_font().color(&BLACK),
            )
        }))
        .map_err(render_err)?;

        if !chart.captions.is_empty() {
            let caption_style = (FONT_FAMILY, 15)
                .into_font()
                .color(&RGBColor(0x88, 0x84, 0xd8))
                .pos(Pos::new(HPos::Center, VPos::Center));
            ctx.draw_series(chart.captions.iter().map(|c| {
                Text::new(c.quadrant.caption().to_string(), (c.x, c.y), caption_style.clone())
            }))
            .map_err(render_err)?;
        }

        root.present().map_err(render_err)?;
        tracing::debug!("Chart written to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::ChartSettings;
    use crate::domain::model::Initiative;
    use tempfile::TempDir;

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

    #[test]
    fn test_font_registration_is_repeatable() {
        assert!(ensure_font().is_ok());
        assert!(ensure_font().is_ok());
    }

    #[test]
    fn test_render_writes_png() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("initiatives.png");
        let chart = QuadrantChart::build(
            &[Initiative::new("X", 3.0, 3.0), Initiative::new("Y", 1.0, 5.0)],
            &ChartSettings::default(),
        );

        PngRenderer::default().render(&chart, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.len() > PNG_MAGIC.len());
        assert_eq!(&bytes[..8], &PNG_MAGIC);
    }

    #[test]
    fn test_render_with_captions() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("captions.png");
        let settings = ChartSettings {
            quadrant_labels: true,
            ..ChartSettings::default()
        };
        let chart = QuadrantChart::build(&[Initiative::new("A", 2.0, 4.0)], &settings);

        PngRenderer::new(800, 600).render(&chart, &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_render_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("initiatives.png");
        let chart = QuadrantChart::build(&[Initiative::new("A", 2.0, 4.0)], &ChartSettings::default());

        let err = PngRenderer::default().render(&chart, &path).unwrap_err();
        assert!(matches!(err, QuadrantError::IoError(_)));
        assert!(!path.exists());
    }

    #[test]
    fn test_overflowing_size_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("huge.png");
        let chart = QuadrantChart::build(&[Initiative::new("A", 2.0, 4.0)], &ChartSettings::default());

        let err = PngRenderer::new(70_000, 70_000).render(&chart, &path).unwrap_err();
        assert!(matches!(err, QuadrantError::RenderError { .. }));
        assert!(!path.exists());
    }
}
