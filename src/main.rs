use league_players::{
    application::player_service::{PlayerService, PlayerServiceImpl},
    config::Config,
    infrastructure::{fixture::Fixture, in_memory_repo::InMemoryRepository},
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    let fixture = Fixture::load(&config.fixture_path)?;
    tracing::info!(
        path = %config.fixture_path.display(),
        leagues = fixture.leagues.len(),
        teams = fixture.teams.len(),
        players = fixture.players.len(),
        "fixture loaded"
    );

    let repo = InMemoryRepository::new(fixture);
    let service = PlayerServiceImpl::new(repo.clone(), repo.clone(), repo);
    let players = service.get_for_league(config.league_id).await?;
    tracing::info!(league_id = %config.league_id, count = players.len(), "players resolved");

    println!("{}", serde_json::to_string_pretty(&players)?);
    Ok(())
}
