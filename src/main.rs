use clap::Parser;
use dolar_bot::adapter::inbound::cli::{check, run, Cli, Commands};
use dolar_bot::infrastructure::config::settings::Config;
use tracing::error;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let config = match Config::load(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };

    config.init_logging();

    let result = match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run::execute(config).await,
        Commands::Check => check::execute(&config).await,
    };

    if let Err(e) = result {
        error!(error = %e, "Fatal error");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
