use async_trait::async_trait;

use super::{
    league::LeagueId,
    player::Player,
    team::{Team, TeamId},
};

#[async_trait]
pub trait LeagueRepository: Send + Sync + 'static {
    async fn is_valid(&self, id: LeagueId) -> anyhow::Result<bool>;
}

#[async_trait]
pub trait TeamRepository: Send + Sync + 'static {
    /// Teams of a league, in the order the backing source keeps them.
    async fn get_for_league(&self, league_id: LeagueId) -> anyhow::Result<Vec<Team>>;
}

#[async_trait]
pub trait PlayerRepository: Send + Sync + 'static {
    async fn get_for_team(&self, team_id: TeamId) -> anyhow::Result<Vec<Player>>;
}
