use crate::config::{AppConfig, ChartConfig};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "initiative-quadrant")]
#[command(about = "Rate initiatives by cost and business value and plot them on a quadrant chart")]
pub struct CliConfig {
    /// Where to write the PNG chart [default: initiatives.png]
    #[arg(short, long)]
    pub output: Option<String>,

    /// Image width in pixels [default: 640]
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels [default: 480]
    #[arg(long)]
    pub height: Option<u32>,

    /// Only save the chart, do not try to open a viewer
    #[arg(long)]
    pub no_display: bool,

    /// Draw a caption in each quadrant
    #[arg(long)]
    pub quadrant_labels: bool,

    /// Path to an optional TOML chart configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Resolve defaults, then the config file (if any), then explicit flags.
    pub fn resolve(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::debug!("Loading chart configuration from {}", path);
                let file = ChartConfig::from_file(path)?;
                // 錯誤回報以檔案中的 chart.* 鍵為準
                file.validate()?;
                AppConfig::from_chart_config(&file)
            }
            None => AppConfig::default(),
        };

        if let Some(output) = &self.output {
            config.output_path = output.clone();
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if self.no_display {
            config.display = false;
        }
        if self.quadrant_labels {
            config.chart.quadrant_labels = true;
        }

        Ok(config)
    }
}
