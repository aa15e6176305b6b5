use std::io::{self, Write};

use url::Url;

use crate::config::{Config, DEFAULT_API_URL};
use crate::error::{NbStatsError, Result};

fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Accepts an absolute http(s) URL and makes sure it ends with `/`, since
/// request paths are appended to it verbatim.
fn normalize_api_url(input: &str) -> Result<String> {
    let url = Url::parse(input).map_err(|e| NbStatsError::InvalidUrl(format!("{input}: {e}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(NbStatsError::InvalidUrl(format!(
            "{input}: expected an http or https URL"
        )));
    }

    let mut url = url.to_string();
    if !url.ends_with('/') {
        url.push('/');
    }
    Ok(url)
}

pub async fn run() -> Result<()> {
    let config_path = Config::config_path()?;

    if config_path.exists() {
        let answer = prompt(&format!(
            "Config file already exists at {}. Overwrite? [y/N] ",
            config_path.display()
        ))?;

        if !answer.eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    println!("NBStats CLI Configuration");
    println!("=========================\n");

    let api_url = prompt(&format!("Enter the NBStats API base URL [{DEFAULT_API_URL}]: "))?;
    let api_url = if api_url.is_empty() {
        DEFAULT_API_URL.to_string()
    } else {
        normalize_api_url(&api_url)?
    };

    let log_level = prompt("Enter a log level (error, warn, info, debug) [optional]: ")?;

    let config = Config {
        api_url: Some(api_url),
        log_level: (!log_level.is_empty()).then_some(log_level),
    };
    let saved_to = config.save()?;

    println!("\nConfig saved to {}", saved_to.display());
    println!("You can now use 'nbstats' commands!");

    Ok(())
}
