use clap::Parser;
use patterns_demo::utils::{logger, validation::Validate};
use patterns_demo::{CliConfig, ConsoleSink, DemoEngine};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting patterns-demo CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let engine = DemoEngine::new(config, ConsoleSink);

    match engine.run() {
        Ok(()) => {
            tracing::info!("✅ Demonstration completed");
        }
        Err(e) => {
            tracing::error!("❌ Demonstration failed: {} (Severity: {:?})", e, e.severity());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }
}
