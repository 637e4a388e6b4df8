use std::path::PathBuf;

use thiserror::Error;

use crate::domain::league::LeagueId;

pub const DEFAULT_FIXTURE_PATH: &str = "fixtures/league.json";
pub const DEFAULT_LEAGUE_ID: LeagueId = LeagueId(1);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("LEAGUE_ID must be an integer, got {0:?}")]
    InvalidLeagueId(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub fixture_path: PathBuf,
    pub league_id: LeagueId,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> { Self::from_lookup(|key| std::env::var(key).ok()) }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let fixture_path = lookup("FIXTURE_PATH").map(PathBuf::from).unwrap_or_else(|| PathBuf::from(DEFAULT_FIXTURE_PATH));
        let league_id = match lookup("LEAGUE_ID") {
            Some(raw) => raw.trim().parse().map(LeagueId).map_err(|_| ConfigError::InvalidLeagueId(raw))?,
            None => DEFAULT_LEAGUE_ID,
        };
        Ok(Self { fixture_path, league_id })
    }
}
