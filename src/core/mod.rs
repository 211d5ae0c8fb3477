pub mod collector;
pub mod renderer;
pub mod session;
pub mod viewer;

pub use crate::domain::chart::{ChartSettings, QuadrantChart};
pub use crate::domain::model::{Initiative, Quadrant};
pub use crate::domain::ports::{ChartRenderer, Viewer};
pub use crate::utils::error::Result;
