//! Team lookups against the NBStats backend.
//!
//! Listing is fail-soft: any transport, status or decode failure is logged
//! once and replaced by an empty list, so callers never see an error.

use tracing::error;

use crate::client::ApiClient;
use crate::error::{NbStatsError, Result};
use crate::types::Team;

const ALL_TEAMS_PATH: &str = "teams/all";

/// Outcome of a fail-soft team listing.
///
/// `Unavailable` lets callers tell a failed fetch apart from a backend that
/// simply has no teams; both collapse to an empty list via [`TeamList::into_teams`].
#[derive(Debug, Clone, PartialEq)]
pub enum TeamList {
    Loaded(Vec<Team>),
    Unavailable,
}

impl TeamList {
    pub fn into_teams(self) -> Vec<Team> {
        match self {
            TeamList::Loaded(teams) => teams,
            TeamList::Unavailable => Vec::new(),
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, TeamList::Unavailable)
    }
}

pub struct TeamsFetcher<'a> {
    client: &'a ApiClient,
}

impl<'a> TeamsFetcher<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// All teams, or an empty list if they could not be fetched.
    pub async fn fetch_teams(&self) -> Vec<Team> {
        self.load().await.into_teams()
    }

    pub async fn load(&self) -> TeamList {
        match self.try_fetch_teams().await {
            Ok(teams) => TeamList::Loaded(teams),
            Err(e) => {
                error!(error = %e, "Error fetching teams");
                TeamList::Unavailable
            }
        }
    }

    pub async fn try_fetch_teams(&self) -> Result<Vec<Team>> {
        self.client.get(ALL_TEAMS_PATH).await
    }

    /// A single team by abbreviation. The backend answers `null` for unknown
    /// abbreviations.
    pub async fn fetch_team(&self, abbrev: &str) -> Result<Team> {
        let team: Option<Team> = self.client.get_segments(&["teams", abbrev]).await?;
        team.ok_or_else(|| NbStatsError::TeamNotFound(abbrev.to_string()))
    }
}
