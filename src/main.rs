use clap::Parser;
use vacancy_stats::utils::error::ErrorSeverity;
use vacancy_stats::utils::logger;
use vacancy_stats::utils::validation::Validate;
use vacancy_stats::{CliArgs, ReportEngine, Result, SourceSelection};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let _log_guard = logger::init_cli_logger(args.verbose);

    tracing::info!("Starting vacancy-stats");
    if args.verbose {
        tracing::debug!(
            config = ?args.config,
            languages = ?args.languages,
            source = ?args.source,
            "CLI arguments"
        );
    }

    match run(&args).await {
        Ok(report) => {
            println!("{}", report);
            tracing::info!("Report completed");
        }
        Err(e) => {
            tracing::error!(
                "Report failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("{}", e.user_friendly_message());
            eprintln!("Suggestion: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

async fn run(args: &CliArgs) -> Result<String> {
    let settings = args.resolve_settings()?;
    match args.source {
        SourceSelection::All => settings.validate()?,
        selection => settings.validate_for(selection)?,
    }

    let engine = ReportEngine::new(settings)?;
    engine.run(args.source).await
}
