use clap::Parser;
use salary_stats::core::ConfigProvider;
use salary_stats::utils::{logger, validation::Validate};
use salary_stats::{run_sources, CliConfig, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env 需在解析參數前載入，SJ_TOKEN 才能被 clap 讀到
    let _ = dotenvy::dotenv();
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting salary-stats");

    match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let config = match TomlConfig::from_file(path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("💡 Make sure the file exists and is valid TOML format");
                    std::process::exit(1);
                }
            };
            run(&config).await
        }
        None => run(&cli).await,
    }
}

async fn run<C: ConfigProvider + Validate>(config: &C) -> anyhow::Result<()> {
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }
    tracing::debug!(
        "Languages: {:?}, sources: {:?}, period: {} days",
        config.languages(),
        config.sources(),
        config.search().period_days
    );

    // 部分來源失敗時仍印出其他來源，最後依最嚴重的錯誤決定退出碼
    let summary = run_sources(config, |table| println!("{}", table)).await;
    for failure in &summary.failures {
        eprintln!(
            "❌ {} statistics failed: {}",
            failure.source,
            failure.error.user_friendly_message()
        );
        eprintln!("💡 建議: {}", failure.error.recovery_suggestion());
    }

    let exit_code = summary.exit_code();
    if exit_code > 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}
