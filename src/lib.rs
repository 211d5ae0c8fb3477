pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;
#[cfg(feature = "cli")]
pub use crate::core::viewer::SystemViewer;

pub use config::{AppConfig, ChartConfig};
pub use crate::core::{
    collector::Collector,
    renderer::PngRenderer,
    session::{QuadrantSession, SessionOutcome},
    viewer::NoopViewer,
};
pub use domain::model::Initiative;
pub use utils::error::{QuadrantError, Result};
