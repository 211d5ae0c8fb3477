//! Pure description of the quadrant chart.
//!
//! Everything the renderer draws is decided here: point and label
//! positions, axis bounds, the two reference lines and their style. Keeping
//! the layout free of any drawing backend lets the geometry be checked
//! directly.

use crate::domain::model::{Initiative, Quadrant};

pub const DEFAULT_TITLE: &str = "Initiatives Quadrant";
pub const DEFAULT_X_LABEL: &str = "Cost";
pub const DEFAULT_Y_LABEL: &str = "Business Value";
pub const DEFAULT_AXIS_MAX: f64 = 5.5;
pub const DEFAULT_MIDPOINT: f64 = 3.0;
pub const DEFAULT_LABEL_OFFSET: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartColor(pub u8, pub u8, pub u8);

impl ChartColor {
    pub const BLACK: ChartColor = ChartColor(0, 0, 0);
}

/// Ten-colour cycle assigned to successive points.
pub const POINT_PALETTE: [ChartColor; 10] = [
    ChartColor(0x1f, 0x77, 0xb4),
    ChartColor(0xff, 0x7f, 0x0e),
    ChartColor(0x2c, 0xa0, 0x2c),
    ChartColor(0xd6, 0x27, 0x28),
    ChartColor(0x94, 0x67, 0xbd),
    ChartColor(0x8c, 0x56, 0x4b),
    ChartColor(0xe3, 0x77, 0xc2),
    ChartColor(0x7f, 0x7f, 0x7f),
    ChartColor(0xbc, 0xbd, 0x22),
    ChartColor(0x17, 0xbe, 0xcf),
];

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSettings {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub axis_max: f64,
    pub midpoint: f64,
    pub label_offset: f64,
    pub quadrant_labels: bool,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            x_label: DEFAULT_X_LABEL.to_string(),
            y_label: DEFAULT_Y_LABEL.to_string(),
            axis_max: DEFAULT_AXIS_MAX,
            midpoint: DEFAULT_MIDPOINT,
            label_offset: DEFAULT_LABEL_OFFSET,
            quadrant_labels: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Dashed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceLine {
    pub orientation: Orientation,
    /// x for a vertical line, y for a horizontal one
    pub at: f64,
    pub span: Bounds,
    pub style: LineStyle,
    pub color: ChartColor,
}

impl ReferenceLine {
    pub fn endpoints(&self) -> [(f64, f64); 2] {
        match self.orientation {
            Orientation::Vertical => [(self.at, self.span.min), (self.at, self.span.max)],
            Orientation::Horizontal => [(self.span.min, self.at), (self.span.max, self.at)],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlotPoint {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub label_x: f64,
    pub label_y: f64,
    pub color: ChartColor,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuadrantCaption {
    pub quadrant: Quadrant,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuadrantChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_bounds: Bounds,
    pub y_bounds: Bounds,
    pub grid: bool,
    pub points: Vec<PlotPoint>,
    pub reference_lines: Vec<ReferenceLine>,
    pub captions: Vec<QuadrantCaption>,
}

impl QuadrantChart {
    pub fn build(initiatives: &[Initiative], settings: &ChartSettings) -> Self {
        let bounds = Bounds {
            min: 0.0,
            max: settings.axis_max,
        };

        let points = initiatives
            .iter()
            .enumerate()
            .map(|(idx, initiative)| PlotPoint {
                name: initiative.name.clone(),
                x: initiative.cost,
                y: initiative.value,
                label_x: initiative.cost + settings.label_offset,
                label_y: initiative.value + settings.label_offset,
                color: POINT_PALETTE[idx % POINT_PALETTE.len()],
            })
            .collect();

        let reference_lines = vec![
            ReferenceLine {
                orientation: Orientation::Vertical,
                at: settings.midpoint,
                span: bounds,
                style: LineStyle::Dashed,
                color: ChartColor::BLACK,
            },
            ReferenceLine {
                orientation: Orientation::Horizontal,
                at: settings.midpoint,
                span: bounds,
                style: LineStyle::Dashed,
                color: ChartColor::BLACK,
            },
        ];

        let captions = if settings.quadrant_labels {
            let low = (bounds.min + settings.midpoint) / 2.0;
            let high = (settings.midpoint + bounds.max) / 2.0;
            Quadrant::ALL
                .iter()
                .map(|&quadrant| QuadrantCaption {
                    quadrant,
                    x: if quadrant.is_high_cost() { high } else { low },
                    y: if quadrant.is_high_value() { high } else { low },
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            title: settings.title.clone(),
            x_label: settings.x_label.clone(),
            y_label: settings.y_label.clone(),
            x_bounds: bounds,
            y_bounds: bounds,
            grid: true,
            points,
            reference_lines,
            captions,
        }
    }
}
