use colored::Colorize;
use serde_json::Value;
use tabled::Tabled;

use crate::client::ApiClient;
use crate::error::Result;
use crate::output::{self, label, print_item, print_notice, render_items};
use crate::teams::{TeamList, TeamsFetcher};
use crate::types::Team;

#[derive(Tabled)]
struct TeamRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Abbrev")]
    abbreviation: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "City")]
    city: String,
}

impl From<&Team> for TeamRow {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id().map(|id| id.to_string()).unwrap_or_else(|| "-".to_string()),
            abbreviation: team.abbreviation().unwrap_or("-").to_string(),
            name: team.name().unwrap_or("-").to_string(),
            city: team.city().unwrap_or("-").to_string(),
        }
    }
}

const UNAVAILABLE_NOTICE: &str = "Teams are unavailable right now; showing an empty list.";

/// What `teams` writes: an optional stderr notice and the stdout body.
struct RenderedList {
    notice: Option<&'static str>,
    body: String,
}

fn render_list(list: TeamList, json: bool) -> RenderedList {
    let notice = list.is_unavailable().then_some(UNAVAILABLE_NOTICE);
    let body = render_items(&list.into_teams(), |team: &Team| TeamRow::from(team), json);
    RenderedList { notice, body }
}

/// Never fails: an unreachable backend renders as an empty list.
pub async fn list(client: &ApiClient) -> Result<()> {
    let list = TeamsFetcher::new(client).load().await;
    let rendered = render_list(list, output::is_json_output());

    if let Some(notice) = rendered.notice {
        print_notice(notice);
    }
    println!("{}", rendered.body);

    Ok(())
}

pub async fn show(client: &ApiClient, abbrev: &str) -> Result<()> {
    let team = TeamsFetcher::new(client).fetch_team(abbrev).await?;

    print_item(&team, |team| {
        let title = team.name().unwrap_or(abbrev);
        println!("{}", title.bold());
        for (key, value) in team.fields() {
            println!("  {} {}", label(key), display_value(value));
        }
    });

    Ok(())
}

fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "-".dimmed().to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
