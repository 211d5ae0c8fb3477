use clap::Parser;
use initiative_quadrant::domain::ports::Viewer;
use initiative_quadrant::utils::error::ErrorSeverity;
use initiative_quadrant::utils::{logger, validation::Validate};
use initiative_quadrant::{
    AppConfig, CliConfig, NoopViewer, PngRenderer, QuadrantError, QuadrantSession, SessionOutcome,
    SystemViewer,
};

fn run_session<V: Viewer>(config: &AppConfig, viewer: V) -> Result<SessionOutcome, QuadrantError> {
    let renderer = PngRenderer::new(config.width, config.height);
    let session = QuadrantSession::new(renderer, viewer, config.chart.clone(), &config.output_path);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    session.run(stdin.lock(), stdout.lock())
}

fn exit_with(e: &QuadrantError) -> ! {
    tracing::error!(
        "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting initiative-quadrant");
    tracing::debug!("CLI config: {:?}", cli);

    // 合併設定檔與命令列參數並驗證
    let config = match cli.resolve().and_then(|config| config.validate().map(|_| config)) {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    let result = if config.display {
        run_session(&config, SystemViewer)
    } else {
        run_session(&config, NoopViewer)
    };

    match result {
        Ok(SessionOutcome::Empty) => {
            tracing::info!("Nothing collected");
        }
        Ok(SessionOutcome::Rendered {
            path,
            initiatives,
            displayed,
        }) => {
            tracing::info!(
                "✅ Plotted {} initiatives to {} (viewer opened: {})",
                initiatives,
                path.display(),
                displayed
            );
        }
        Err(e) => exit_with(&e),
    }
}
