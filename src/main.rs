use clap::Parser;
use ramarag::cli::handlers;
use ramarag::cli::Cli;
use ramarag::cli::Commands;
use ramarag::config::AppConfig;
use ramarag::logging;
use ramarag::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load()?;

    let level = if cli.verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };
    logging::init_logging_with_level(level)?;

    if config.logging.backtrace {
        std::env::set_var("RUST_BACKTRACE", "1");
    }

    match cli.command {
        Commands::Index { dataset, output } => {
            handlers::handle_index(&config, &dataset, output).await
        }
        Commands::Check { statement, sources } => {
            handlers::handle_check(&config, statement, sources).await
        }
        Commands::Config => handlers::handle_config(&config),
    }
}
