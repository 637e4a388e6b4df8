use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use super::fixture::Fixture;
use crate::domain::{
    league::LeagueId,
    player::Player,
    repository::{LeagueRepository, PlayerRepository, TeamRepository},
    team::{Team, TeamId},
};

/// Serves all three lookups from an immutable [`Fixture`].
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    fixture: Arc<Fixture>,
}

impl InMemoryRepository {
    pub fn new(fixture: Fixture) -> Self { Self { fixture: Arc::new(fixture) } }
}

#[async_trait]
impl LeagueRepository for InMemoryRepository {
    async fn is_valid(&self, id: LeagueId) -> Result<bool> { Ok(self.fixture.leagues.iter().any(|l| l.id == id)) }
}

#[async_trait]
impl TeamRepository for InMemoryRepository {
    async fn get_for_league(&self, league_id: LeagueId) -> Result<Vec<Team>> {
        Ok(self.fixture.teams.iter().filter(|t| t.league_id == league_id).cloned().collect())
    }
}

#[async_trait]
impl PlayerRepository for InMemoryRepository {
    async fn get_for_team(&self, team_id: TeamId) -> Result<Vec<Player>> {
        Ok(self.fixture.players.iter().filter(|p| p.team_id == team_id).cloned().collect())
    }
}
