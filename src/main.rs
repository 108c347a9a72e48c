use anyhow::{Context, Result};
use clap::Parser;

use tmdbclientdataprovider::cli::{Cli, Commands};
use tmdbclientdataprovider::config::{API_KEY_ENV, Config};
use tmdbclientdataprovider::{search, telemetry};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init();

    let config = Config::from_cli(&cli, std::env::var(API_KEY_ENV).ok())?;
    match cli.command {
        Commands::Search(args) => {
            let results = search::execute(&config, args.into()).await?;
            let json =
                serde_json::to_string_pretty(&results).context("error marshaling results")?;
            println!("{json}");
        }
    }
    Ok(())
}
