//! Player record service.
//!
//! Sits between the handlers and a [`PlayerStore`]: checks ids, enforces the
//! field rules from [`arena_core::validation`], derives level data, and maps
//! missing rows to [`CoreError::NotFound`].

use std::sync::Arc;

use arena_core::error::CoreError;
use arena_core::filter::PlayerFilter;
use arena_core::paging::PageRequest;
use arena_core::types::DbId;
use arena_core::validation::{
    validate_birthday, validate_experience, validate_name, validate_title,
};
use arena_db::models::player::{CreatePlayer, NewPlayer, Player, UpdatePlayer};
use arena_db::store::PlayerStore;

use crate::error::AppResult;

const ENTITY: &str = "Player";

#[derive(Clone)]
pub struct PlayerService {
    store: Arc<dyn PlayerStore>,
}

impl PlayerService {
    pub fn new(store: Arc<dyn PlayerStore>) -> Self {
        Self { store }
    }

    /// Check that the backing store answers.
    pub async fn ping(&self) -> AppResult<()> {
        Ok(self.store.ping().await?)
    }

    /// Validate every field of `input`, derive level data, and store it.
    ///
    /// `banned` defaults to `false`; all other fields are required.
    pub async fn create(&self, input: CreatePlayer) -> AppResult<Player> {
        let name = required(input.name, "name")?;
        let title = required(input.title, "title")?;
        let race = required(input.race, "race")?;
        let profession = required(input.profession, "profession")?;
        let birthday = required(input.birthday, "birthday")?;
        let experience = required(input.experience, "experience")?;

        validate_name(&name)?;
        validate_title(&title)?;
        validate_experience(experience)?;
        validate_birthday(&birthday)?;

        let new_player = NewPlayer::new(
            name,
            title,
            race,
            profession,
            experience,
            birthday,
            input.banned.unwrap_or(false),
        );
        let player = self.store.insert(&new_player).await?;
        tracing::info!(player_id = player.id, level = player.level(), "Player created");
        Ok(player)
    }

    pub async fn get(&self, id: DbId) -> AppResult<Player> {
        let player = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(CoreError::NotFound { entity: ENTITY, id })?;
        Ok(player)
    }

    /// Apply the supplied fields of `input` to an existing player.
    ///
    /// The player must exist before any field is looked at. Each supplied
    /// field is validated on its own; absent fields keep their stored value.
    /// Level data is recomputed from the resulting experience.
    pub async fn update(&self, id: DbId, input: UpdatePlayer) -> AppResult<Player> {
        let mut player = self.get(id).await?;

        if let Some(name) = input.name {
            validate_name(&name)?;
            player.name = name;
        }
        if let Some(title) = input.title {
            validate_title(&title)?;
            player.title = title;
        }
        if let Some(race) = input.race {
            player.race = race;
        }
        if let Some(profession) = input.profession {
            player.profession = profession;
        }
        if let Some(birthday) = input.birthday {
            validate_birthday(&birthday)?;
            player.birthday = birthday;
        }
        if let Some(banned) = input.banned {
            player.banned = banned;
        }
        let experience = match input.experience {
            Some(experience) => {
                validate_experience(experience)?;
                experience
            }
            None => player.experience(),
        };
        player.set_experience(experience);

        let saved = self.store.save(&player).await?;
        tracing::info!(player_id = saved.id, "Player updated");
        Ok(saved)
    }

    pub async fn delete(&self, id: DbId) -> AppResult<()> {
        if !self.store.exists_by_id(id).await? {
            return Err(CoreError::NotFound { entity: ENTITY, id }.into());
        }
        if !self.store.delete_by_id(id).await? {
            // Removed by a concurrent request between the two calls.
            return Err(CoreError::NotFound { entity: ENTITY, id }.into());
        }
        tracing::info!(player_id = id, "Player deleted");
        Ok(())
    }

    /// One page of players matching `filter`.
    pub async fn list(&self, filter: &PlayerFilter, page: &PageRequest) -> AppResult<Vec<Player>> {
        let predicates = filter.predicates();
        tracing::debug!(
            predicates = predicates.len(),
            page = page.number(),
            size = page.limit(),
            order = ?page.order(),
            "Listing players"
        );
        Ok(self.store.find_all(&predicates, page).await?)
    }

    /// Number of players matching `filter`, ignoring paging.
    pub async fn count(&self, filter: &PlayerFilter) -> AppResult<i64> {
        let predicates = filter.predicates();
        tracing::debug!(predicates = predicates.len(), "Counting players");
        Ok(self.store.count(&predicates).await?)
    }
}

fn required<T>(value: Option<T>, field: &str) -> Result<T, CoreError> {
    value.ok_or_else(|| CoreError::Validation(format!("{field} is required")))
}

#[cfg(test)]
mod tests {
    use arena_core::player::{PlayerOrder, Profession, Race};
    use arena_core::types::Timestamp;
    use arena_db::repositories::MemoryPlayerRepo;
    use assert_matches::assert_matches;
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::error::AppError;

    fn service() -> PlayerService {
        PlayerService::new(Arc::new(MemoryPlayerRepo::new()))
    }

    fn birthday(year: i32) -> Timestamp {
        Utc.with_ymd_and_hms(year, 6, 15, 12, 0, 0).unwrap()
    }

    fn ann() -> CreatePlayer {
        CreatePlayer {
            name: Some("Ann".into()),
            title: Some("Archer".into()),
            race: Some(Race::Elf),
            profession: Some(Profession::Rogue),
            experience: Some(0),
            birthday: Some(birthday(2005)),
            banned: None,
        }
    }

    #[tokio::test]
    async fn create_derives_level_and_defaults_banned() {
        let player = service().create(ann()).await.unwrap();
        assert_eq!(player.id, 1);
        assert_eq!(player.level(), 0);
        assert_eq!(player.until_next_level(), 100);
        assert!(!player.banned);
    }

    #[tokio::test]
    async fn created_player_reads_back_unchanged() {
        let svc = service();
        let created = svc.create(ann()).await.unwrap();
        assert_eq!(svc.get(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn create_requires_each_field() {
        let svc = service();
        let cases: [(&str, fn(&mut CreatePlayer)); 6] = [
            ("name", |p| p.name = None),
            ("title", |p| p.title = None),
            ("race", |p| p.race = None),
            ("profession", |p| p.profession = None),
            ("birthday", |p| p.birthday = None),
            ("experience", |p| p.experience = None),
        ];
        for (field, clear) in cases {
            let mut input = ann();
            clear(&mut input);
            let err = svc.create(input).await.unwrap_err();
            assert_matches!(
                err,
                AppError::Core(CoreError::Validation(msg)) if msg == format!("{field} is required")
            );
        }
        assert_eq!(svc.count(&PlayerFilter::default()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn create_enforces_field_boundaries() {
        let svc = service();

        let mut input = ann();
        input.experience = Some(10_000_000);
        input.name = Some("A".repeat(12));
        input.title = Some(String::new());
        input.birthday = Some(Utc.with_ymd_and_hms(3000, 12, 31, 23, 59, 59).unwrap());
        let player = svc.create(input).await.unwrap();
        assert_eq!(player.level(), 446);

        let mut input = ann();
        input.name = Some(String::new());
        assert_matches!(svc.create(input).await, Err(AppError::Core(CoreError::Validation(_))));

        let mut input = ann();
        input.title = Some("T".repeat(31));
        assert_matches!(svc.create(input).await, Err(AppError::Core(CoreError::Validation(_))));

        let mut input = ann();
        input.experience = Some(-1);
        assert_matches!(svc.create(input).await, Err(AppError::Core(CoreError::Validation(_))));

        let mut input = ann();
        input.birthday = Some(birthday(1999));
        assert_matches!(svc.create(input).await, Err(AppError::Core(CoreError::Validation(_))));
    }

    #[tokio::test]
    async fn empty_update_only_recomputes_derived_fields() {
        let svc = service();
        let created = svc.create(ann()).await.unwrap();
        let updated = svc.update(created.id, UpdatePlayer::default()).await.unwrap();
        assert_eq!(updated, created);
    }

    #[tokio::test]
    async fn update_changes_supplied_fields_only() {
        let svc = service();
        let created = svc.create(ann()).await.unwrap();

        let input = UpdatePlayer {
            experience: Some(300),
            banned: Some(true),
            ..Default::default()
        };
        let updated = svc.update(created.id, input).await.unwrap();

        assert_eq!(updated.name, "Ann");
        assert_eq!(updated.race, Race::Elf);
        assert_eq!(updated.experience(), 300);
        assert_eq!(updated.level(), 2);
        assert_eq!(updated.until_next_level(), 300);
        assert!(updated.banned);
    }

    #[tokio::test]
    async fn invalid_update_leaves_record_unchanged() {
        let svc = service();
        let created = svc.create(ann()).await.unwrap();

        let input = UpdatePlayer {
            name: Some("Bob".into()),
            experience: Some(20_000_000),
            ..Default::default()
        };
        assert_matches!(
            svc.update(created.id, input).await,
            Err(AppError::Core(CoreError::Validation(_)))
        );
        assert_eq!(svc.get(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn missing_player_is_not_found_before_validation() {
        let svc = service();
        let input = UpdatePlayer {
            name: Some(String::new()),
            ..Default::default()
        };
        assert_matches!(
            svc.update(42, input).await,
            Err(AppError::Core(CoreError::NotFound { id: 42, .. }))
        );
        assert_matches!(svc.get(42).await, Err(AppError::Core(CoreError::NotFound { .. })));
        assert_matches!(svc.delete(42).await, Err(AppError::Core(CoreError::NotFound { .. })));
    }

    #[tokio::test]
    async fn delete_removes_player() {
        let svc = service();
        let created = svc.create(ann()).await.unwrap();
        svc.delete(created.id).await.unwrap();
        assert_matches!(svc.get(created.id).await, Err(AppError::Core(CoreError::NotFound { .. })));
        assert_matches!(svc.delete(created.id).await, Err(AppError::Core(CoreError::NotFound { .. })));
    }

    #[tokio::test]
    async fn list_and_count_share_filters() {
        let svc = service();
        for (name, race) in [("Ann", Race::Elf), ("Bo", Race::Human), ("Cy", Race::Elf)] {
            let mut input = ann();
            input.name = Some(name.into());
            input.race = Some(race);
            svc.create(input).await.unwrap();
        }

        let filter = PlayerFilter {
            race: Some(Race::Elf),
            ..Default::default()
        };
        let page = PageRequest::new(0, 1, PlayerOrder::Name).unwrap();

        let listed = svc.list(&filter, &page).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "Ann");
        assert_eq!(svc.count(&filter).await.unwrap(), 2);
    }
}
