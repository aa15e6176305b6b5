use std::error::Error;
use std::io;

use clap::{CommandFactory, Parser};
use clap_complete::generate;

use nbstats::cli::{Cli, Commands};
use nbstats::client::ApiClient;
use nbstats::config::Config;
use nbstats::error::Result;
use nbstats::{commands, logging, output};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");

        if verbose {
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("Caused by: {cause}");
                source = cause.source();
            }
        }

        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    output::set_json_output(cli.json);

    match cli.command {
        // Commands that don't require config/client
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "nbstats", &mut io::stdout());
        }
        Commands::Init => {
            logging::init(cli.verbose, None);
            commands::init::run().await?;
        }
        // Commands that require config and client
        command => {
            let config = Config::load();
            logging::init(cli.verbose, config.as_ref().ok());
            let config = config?;

            let client = ApiClient::new(config.api_url(cli.api_url.as_deref()));

            match command {
                Commands::Teams => {
                    commands::teams::list(&client).await?;
                }
                Commands::Team { abbrev } => {
                    commands::teams::show(&client, &abbrev).await?;
                }
                Commands::Completions { .. } | Commands::Init => {
                    // Already handled above
                }
            }
        }
    }

    Ok(())
}
