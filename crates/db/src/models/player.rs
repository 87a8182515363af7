//! Player entity model and DTOs.
//!
//! `experience`, `level` and `until_next_level` are private on both
//! [`Player`] and [`NewPlayer`]: the derived pair is only ever written
//! alongside experience, through [`Progress::from_experience`].

use arena_core::level::Progress;
use arena_core::player::{Profession, Race};
use arena_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A player row from the `players` table.
///
/// Serializes with camelCase keys; `birthday` is epoch milliseconds.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: DbId,
    pub name: String,
    pub title: String,
    #[sqlx(try_from = "String")]
    pub race: Race,
    #[sqlx(try_from = "String")]
    pub profession: Profession,
    experience: i32,
    level: i32,
    until_next_level: i32,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub birthday: Timestamp,
    pub banned: bool,
}

impl Player {
    pub fn experience(&self) -> i32 {
        self.experience
    }

    pub fn level(&self) -> i32 {
        self.level
    }

    pub fn until_next_level(&self) -> i32 {
        self.until_next_level
    }

    /// Set experience and recompute `level` / `until_next_level`.
    pub fn set_experience(&mut self, experience: i32) {
        let progress = Progress::from_experience(experience);
        self.experience = experience;
        self.level = progress.level;
        self.until_next_level = progress.until_next_level;
    }
}

/// A fully validated player that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPlayer {
    pub name: String,
    pub title: String,
    pub race: Race,
    pub profession: Profession,
    experience: i32,
    progress: Progress,
    pub birthday: Timestamp,
    pub banned: bool,
}

impl NewPlayer {
    /// Assemble a new player, deriving level data from `experience`.
    pub fn new(
        name: String,
        title: String,
        race: Race,
        profession: Profession,
        experience: i32,
        birthday: Timestamp,
        banned: bool,
    ) -> Self {
        Self {
            name,
            title,
            race,
            profession,
            experience,
            progress: Progress::from_experience(experience),
            birthday,
            banned,
        }
    }

    pub fn experience(&self) -> i32 {
        self.experience
    }

    pub fn level(&self) -> i32 {
        self.progress.level
    }

    pub fn until_next_level(&self) -> i32 {
        self.progress.until_next_level
    }

    /// Turn into a stored [`Player`] under the given id.
    pub(crate) fn into_player(self, id: DbId) -> Player {
        Player {
            id,
            name: self.name,
            title: self.title,
            race: self.race,
            profession: self.profession,
            experience: self.experience,
            level: self.progress.level,
            until_next_level: self.progress.until_next_level,
            birthday: self.birthday,
            banned: self.banned,
        }
    }
}

/// DTO for creating a player.
///
/// Every field is optional at the wire level so a missing one can be
/// reported as a bad request rather than a body rejection. All but `banned`
/// are required by the create operation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlayer {
    pub name: Option<String>,
    pub title: Option<String>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    pub experience: Option<i32>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub birthday: Option<Timestamp>,
    /// Defaults to `false` if omitted.
    pub banned: Option<bool>,
}

/// DTO for updating an existing player. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlayer {
    pub name: Option<String>,
    pub title: Option<String>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    pub experience: Option<i32>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub birthday: Option<Timestamp>,
    pub banned: Option<bool>,
}
