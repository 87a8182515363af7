//! Repository layer.
//!
//! Each repository implements [`crate::store::PlayerStore`]: `PlayerRepo`
//! against PostgreSQL, `MemoryPlayerRepo` in process.

pub mod memory_player_repo;
pub mod player_repo;

pub use memory_player_repo::MemoryPlayerRepo;
pub use player_repo::PlayerRepo;
