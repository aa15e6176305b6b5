use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{NbStatsError, Result};

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api/v1/";
const API_URL_ENV: &str = "NBSTATS_API_URL";

#[derive(Serialize, Deserialize, Default, Debug, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents =
            std::fs::read_to_string(&config_path).map_err(|e| NbStatsError::ConfigRead {
                path: config_path.clone(),
                source: e,
            })?;

        toml::from_str(&contents).map_err(|e| NbStatsError::ConfigParse {
            path: config_path,
            source: e,
        })
    }

    pub fn save(&self) -> Result<PathBuf> {
        let config_path = Self::config_path()?;
        let write_err = |e| NbStatsError::ConfigWrite {
            path: config_path.clone(),
            source: e,
        };

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }

        let contents = toml::to_string(self)?;
        std::fs::write(&config_path, contents).map_err(write_err)?;

        Ok(config_path)
    }

    pub fn config_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "nbstats")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(NbStatsError::NoConfigDir)
    }

    /// API base URL: explicit flag, then `NBSTATS_API_URL`, then the config
    /// file, then the local default.
    pub fn api_url(&self, explicit: Option<&str>) -> String {
        resolve_api_url(
            explicit,
            std::env::var(API_URL_ENV).ok().as_deref(),
            self.api_url.as_deref(),
        )
    }
}

fn resolve_api_url(explicit: Option<&str>, env: Option<&str>, file: Option<&str>) -> String {
    explicit
        .or(env)
        .or(file)
        .unwrap_or(DEFAULT_API_URL)
        .to_string()
}
