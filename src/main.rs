use clap::Parser;
use curriculum_board::core::ConfigProvider;
use curriculum_board::utils::error::{BoardError, ErrorSeverity};
use curriculum_board::utils::{logger, validation::Validate};
use curriculum_board::{
    BoardEngine, BoardPipeline, CliConfig, KanbanRenderer, LocalStorage, TomlConfig,
};

async fn build<C: ConfigProvider>(config: C) -> curriculum_board::Result<Vec<String>> {
    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = BoardPipeline::new(storage, config, KanbanRenderer::new())?;
    BoardEngine::new(pipeline).run().await
}

async fn run(cli: CliConfig) -> curriculum_board::Result<Vec<String>> {
    match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from {}", path);
            let config = TomlConfig::from_file(path)?;
            config.validate()?;
            build(config).await
        }
        None => {
            cli.validate()?;
            build(cli).await
        }
    }
}

fn exit_code(e: &BoardError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_logger(cli.verbose, cli.log_json);

    tracing::debug!("CLI config: {:?}", cli);

    match run(cli).await {
        Ok(written) => {
            println!("✅ Curriculum board built");
            for path in written {
                println!("📁 {}", path);
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                "❌ Build failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            let code = exit_code(&e);
            if code > 0 {
                std::process::exit(code);
            }
            Ok(())
        }
    }
}
