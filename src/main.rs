use clap::Parser;
use conf_append::core::ConfigProvider;
use conf_append::utils::{logger, validation::Validate};
use conf_append::{AppendError, BatchAppender, CliConfig, LocalFs, RunReport};

fn run(cli: &CliConfig) -> Result<RunReport, AppendError> {
    let settings = cli.resolve()?;
    settings.validate()?;

    let appender = BatchAppender::from_config(LocalFs::new(), &settings);
    appender.run(settings.sandbox_root())
}

fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting conf-append");
    tracing::debug!("CLI config: {:?}", cli);

    match run(&cli) {
        Ok(report) if report.dry_run => {
            tracing::info!(
                "✅ Dry run: {} files would be modified",
                report.candidates
            );
        }
        Ok(report) => {
            tracing::info!(
                "✅ Appended to {} files across {} subdirectories",
                report.appended,
                report.subdirectories
            );
        }
        Err(e) => {
            tracing::error!("❌ {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e);
            std::process::exit(e.exit_code());
        }
    }
}
