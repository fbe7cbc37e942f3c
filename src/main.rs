use clap::Parser;
use leech::application::CycleDriver;
use leech::cli::Cli;
use leech::domain::cycle_period;
use leech::infrastructure::{ActivityLog, GitClient, Settings, SystemRunner};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    info!(minutes = cli.interval, "leech will commit every {} minutes", cli.interval);

    let settings = Settings::load();
    info!(remote_url = %settings.remote_url, "remote resolved");

    let git = GitClient::new(SystemRunner, settings.remote_url);
    let driver = CycleDriver::new(git, ActivityLog::at_default_path(), cycle_period(cli.interval));

    match driver.run() {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            error!(error = %e, "leech stopped");
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}
