pub mod league;
pub mod player;
pub mod repository;
pub mod team;
