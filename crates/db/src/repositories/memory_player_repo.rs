//! In-process [`PlayerStore`] backed by a `BTreeMap`.
//!
//! Evaluates the same predicate list as [`super::PlayerRepo`] in Rust, with
//! the same ordering rules (selected field ascending, then id). Ids start
//! at 1 and are never reused.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use arena_core::filter::Predicate;
use arena_core::paging::PageRequest;
use arena_core::player::PlayerOrder;
use arena_core::types::DbId;
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::player::{NewPlayer, Player};
use crate::store::PlayerStore;

#[derive(Debug)]
struct Rows {
    by_id: BTreeMap<DbId, Player>,
    last_id: DbId,
}

/// Memory-backed [`PlayerStore`].
#[derive(Debug)]
pub struct MemoryPlayerRepo {
    rows: RwLock<Rows>,
}

impl MemoryPlayerRepo {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Rows {
                by_id: BTreeMap::new(),
                last_id: 0,
            }),
        }
    }
}

impl Default for MemoryPlayerRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlayerStore for MemoryPlayerRepo {
    async fn ping(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }

    async fn exists_by_id(&self, id: DbId) -> Result<bool, sqlx::Error> {
        Ok(self.rows.read().await.by_id.contains_key(&id))
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Player>, sqlx::Error> {
        Ok(self.rows.read().await.by_id.get(&id).cloned())
    }

    async fn insert(&self, player: &NewPlayer) -> Result<Player, sqlx::Error> {
        let mut rows = self.rows.write().await;
        rows.last_id += 1;
        let stored = player.clone().into_player(rows.last_id);
        rows.by_id.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn save(&self, player: &Player) -> Result<Player, sqlx::Error> {
        let mut rows = self.rows.write().await;
        let slot = rows
            .by_id
            .get_mut(&player.id)
            .ok_or(sqlx::Error::RowNotFound)?;
        *slot = player.clone();
        Ok(player.clone())
    }

    async fn delete_by_id(&self, id: DbId) -> Result<bool, sqlx::Error> {
        Ok(self.rows.write().await.by_id.remove(&id).is_some())
    }

    async fn count(&self, predicates: &[Predicate]) -> Result<i64, sqlx::Error> {
        let rows = self.rows.read().await;
        let count = rows
            .by_id
            .values()
            .filter(|p| matches_all(p, predicates))
            .count();
        Ok(count as i64)
    }

    async fn find_all(
        &self,
        predicates: &[Predicate],
        page: &PageRequest,
    ) -> Result<Vec<Player>, sqlx::Error> {
        let rows = self.rows.read().await;
        let mut matched: Vec<&Player> = rows
            .by_id
            .values()
            .filter(|p| matches_all(p, predicates))
            .collect();
        matched.sort_by(|a, b| compare(a, b, page.order()));

        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(page.limit()).unwrap_or(usize::MAX);
        Ok(matched
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }
}

fn matches_all(player: &Player, predicates: &[Predicate]) -> bool {
    predicates.iter().all(|predicate| matches(player, predicate))
}

fn matches(player: &Player, predicate: &Predicate) -> bool {
    match predicate {
        Predicate::NameContains(needle) => player.name.contains(needle.as_str()),
        Predicate::TitleContains(needle) => player.title.contains(needle.as_str()),
        Predicate::RaceIs(race) => player.race == *race,
        Predicate::ProfessionIs(profession) => player.profession == *profession,
        Predicate::BannedIs(banned) => player.banned == *banned,
        Predicate::ExperienceIn(span) => span.contains(player.experience()),
        Predicate::LevelIn(span) => span.contains(player.level()),
        Predicate::BirthdayIn(span) => span.contains(player.birthday),
    }
}

fn compare(a: &Player, b: &Player, order: PlayerOrder) -> Ordering {
    let primary = match order {
        PlayerOrder::Id => Ordering::Equal,
        PlayerOrder::Name => a.name.cmp(&b.name),
        PlayerOrder::Experience => a.experience().cmp(&b.experience()),
        PlayerOrder::Birthday => a.birthday.cmp(&b.birthday),
        PlayerOrder::Level => a.level().cmp(&b.level()),
    };
    primary.then(a.id.cmp(&b.id))
}
