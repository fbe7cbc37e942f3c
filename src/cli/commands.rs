//! CLI command definitions

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "leech")]
#[command(about = "Posts a dummy commit to a remote repository every N minutes", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Minutes to wait between cycles (positive integer)
    #[arg(value_name = "INTERVAL_MINUTES", value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: u64,
}
