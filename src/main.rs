mod cli;
mod config;
mod datasources;
mod error;
mod logic;
mod models;
mod report;

use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use logic::ObservationService;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging
    let default_filter = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let today = chrono::Utc::now().date_naive();
    let command = cli.command.unwrap_or(Commands::Report);

    // Setup runs before any config is required
    if matches!(command, Commands::Init) {
        let (_config, path) = Config::setup_interactive(today)?;
        println!("Run `farmops report` to see your first snapshot.");
        tracing::debug!("Config written to {}", path.display());
        return Ok(());
    }

    // Load configuration, falling back to the demo profile
    let config = if Config::exists(cli.config.as_ref()) {
        Config::load(cli.config.clone())?
    } else {
        tracing::warn!("No configuration found - using demo farm profile. Run `farmops init` to set up.");
        Config::demo(today)
    };

    let seed = cli.seed.unwrap_or_else(|| chrono::Utc::now().timestamp());
    tracing::debug!(seed, stress = cli.stress, "simulation parameters");

    let service = ObservationService::new(&config, cli.offline);

    match command {
        Commands::Report => {
            let observation = service.observe(seed, cli.stress).await;
            let days = config.farm.days_from_planting(today);
            report::print_report(&config, &observation, days);
        }
        Commands::Forecast { days } => {
            let observation = service.observe(seed, cli.stress).await;
            report::print_forecast(&observation, days, cli.stress, seed);
        }
        Commands::Schedule { days } => {
            let observation = service.observe(seed, cli.stress).await;
            report::print_schedule(&observation, days, seed);
        }
        Commands::Check => {
            config.validate()?;
            println!("Configuration: OK ({}, {})", config.farm.name, config.farm.crop);
            let alert_engine = logic::alerts::AlertEngine::new();
            println!("Alert rules: {}", alert_engine.list_rules().join(", "));
            if service.has_weather_client() {
                if service.weather_reachable().await {
                    println!("OpenWeatherMap: OK");
                } else {
                    println!("OpenWeatherMap: UNREACHABLE");
                }
            } else {
                println!("OpenWeatherMap: not configured (demo weather will be used)");
            }
        }
        Commands::Init => {}
    }

    Ok(())
}
