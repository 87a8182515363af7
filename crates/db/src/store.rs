//! The persistence seam the record service is written against.

use arena_core::filter::Predicate;
use arena_core::paging::PageRequest;
use arena_core::types::DbId;
use async_trait::async_trait;

use crate::models::player::{NewPlayer, Player};

/// Storage operations for player records.
///
/// Predicate slices are conjunctions; an empty slice matches every row.
/// Errors are passed through unmodified so callers can classify them.
#[async_trait]
pub trait PlayerStore: Send + Sync {
    /// Verify the backing store is reachable.
    async fn ping(&self) -> Result<(), sqlx::Error>;

    async fn exists_by_id(&self, id: DbId) -> Result<bool, sqlx::Error>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Player>, sqlx::Error>;

    /// Store a new player and return it with its assigned id.
    async fn insert(&self, player: &NewPlayer) -> Result<Player, sqlx::Error>;

    /// Overwrite every column of an existing player.
    ///
    /// Fails with [`sqlx::Error::RowNotFound`] if the row has disappeared.
    async fn save(&self, player: &Player) -> Result<Player, sqlx::Error>;

    /// Delete a player. Returns `true` if a row was removed.
    async fn delete_by_id(&self, id: DbId) -> Result<bool, sqlx::Error>;

    async fn count(&self, predicates: &[Predicate]) -> Result<i64, sqlx::Error>;

    async fn find_all(
        &self,
        predicates: &[Predicate],
        page: &PageRequest,
    ) -> Result<Vec<Player>, sqlx::Error>;
}
