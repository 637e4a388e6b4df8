use crate::domain::league::LeagueId;
use crate::domain::player::Player;
use crate::domain::repository::{LeagueRepository, PlayerRepository, TeamRepository};
use anyhow::{Context, Result};
use async_trait::async_trait;

#[async_trait]
pub trait PlayerService: Send + Sync + 'static {
    /// All players of every team in the league, ordered by team then by player.
    ///
    /// An unknown league, a league without teams, and teams without players all
    /// yield an empty vector. Errors only come from a failing repository.
    async fn get_for_league(&self, league_id: LeagueId) -> Result<Vec<Player>>;
}

#[derive(Clone)]
pub struct PlayerServiceImpl<L: LeagueRepository, T: TeamRepository, P: PlayerRepository> {
    leagues: L,
    teams: T,
    players: P,
}

impl<L: LeagueRepository, T: TeamRepository, P: PlayerRepository> PlayerServiceImpl<L, T, P> {
    pub fn new(leagues: L, teams: T, players: P) -> Self { Self { leagues, teams, players } }
}

#[async_trait]
impl<L: LeagueRepository, T: TeamRepository, P: PlayerRepository> PlayerService for PlayerServiceImpl<L, T, P> {
    async fn get_for_league(&self, league_id: LeagueId) -> Result<Vec<Player>> {
        let valid = self
            .leagues
            .is_valid(league_id)
            .await
            .with_context(|| format!("checking league {league_id}"))?;
        if !valid {
            tracing::debug!(%league_id, "league is not valid");
            return Ok(Vec::new());
        }

        let teams = self
            .teams
            .get_for_league(league_id)
            .await
            .with_context(|| format!("listing teams of league {league_id}"))?;
        tracing::debug!(%league_id, teams = teams.len(), "resolved teams");

        let mut result = Vec::new();
        for team in &teams {
            let players = self
                .players
                .get_for_team(team.id)
                .await
                .with_context(|| format!("listing players of team {}", team.id))?;
            result.extend(players);
        }
        tracing::debug!(%league_id, players = result.len(), "resolved players");
        Ok(result)
    }
}
