use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{league::League, player::Player, team::Team};

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read fixture {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed fixture: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read-only league data loaded from a JSON document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Fixture {
    #[serde(default)]
    pub leagues: Vec<League>,
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub players: Vec<Player>,
}

impl Fixture {
    pub fn from_json_str(json: &str) -> Result<Self, FixtureError> { Ok(serde_json::from_str(json)?) }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| FixtureError::Io { path: path.to_path_buf(), source })?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_document() {
        let fixture = Fixture::from_json_str(
            r#"{
                "leagues": [{ "id": 1, "name": "Premier" }, { "id": 2 }],
                "teams": [{ "id": 0, "name": "Team 0", "league_id": 1, "founding_date": "1900-01-01T00:00:00Z" }],
                "players": [{ "id": 0, "first_name": "Player", "last_name": "0", "date_of_birth": "2000-01-01T00:00:00Z", "team_id": 0 }]
            }"#,
        )
        .unwrap();
        assert_eq!(fixture.leagues.len(), 2);
        assert_eq!(fixture.leagues[1].name, None);
        assert_eq!(fixture.teams[0].league_id.0, 1);
        assert_eq!(fixture.players[0].team_id.0, 0);
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let fixture = Fixture::from_json_str(r#"{ "leagues": [{ "id": 3 }] }"#).unwrap();
        assert!(fixture.teams.is_empty());
        assert!(fixture.players.is_empty());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = Fixture::from_json_str(r#"{ "teams": [{ "id": "zero" }] }"#).unwrap_err();
        assert!(matches!(err, FixtureError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Fixture::load("does/not/exist.json").unwrap_err();
        assert!(matches!(err, FixtureError::Io { .. }));
    }
}
