pub mod fixture;
pub mod in_memory_repo;
