use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "nbstats")]
#[command(about = "A CLI for the NBStats basketball API", version)]
#[command(after_help = "EXAMPLES:
    nbstats teams                     List all teams
    nbstats teams --json              List all teams as JSON
    nbstats team LAL                  Show one team
    nbstats --api-url http://localhost:8000/api/v1/ teams")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// API base URL, overriding NBSTATS_API_URL and the config file
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Enable debug logging and show error causes
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all teams
    #[command(after_help = "EXAMPLES:
    nbstats teams
    nbstats teams --json")]
    Teams,
    /// Show a single team
    #[command(after_help = "EXAMPLES:
    nbstats team LAL
    nbstats team BOS --json")]
    Team {
        /// Team abbreviation (e.g., LAL)
        abbrev: String,
    },
    /// Generate shell completions
    #[command(after_help = "EXAMPLES:
    nbstats completions bash > ~/.bash_completion.d/nbstats
    nbstats completions zsh > ~/.zfunc/_nbstats
    nbstats completions fish > ~/.config/fish/completions/nbstats.fish")]
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
    /// Initialize configuration file interactively
    #[command(after_help = "EXAMPLES:
    nbstats init")]
    Init,
}
