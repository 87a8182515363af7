//! Player listing filters.
//!
//! [`PlayerFilter`] holds the optional query parameters. Each parameter maps
//! to at most one [`Predicate`]; an absent parameter contributes nothing.
//! The resulting list is a conjunction: an empty list matches every record.
//! Storage backends decide how to evaluate it (SQL or in memory).

use serde::Deserialize;

use crate::params::empty_as_none;
use crate::player::{Profession, Race};
use crate::types::Timestamp;

const MILLIS_PER_HOUR: i64 = 3_600_000;
const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

/// Filter parameters shared by the list and count endpoints.
///
/// `after` / `before` are epoch milliseconds. An empty value (`?race=`) is
/// the same as leaving the parameter out, except for `name` and `title`
/// where the empty needle matches every record.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerFilter {
    pub name: Option<String>,
    pub title: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub race: Option<Race>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub profession: Option<Profession>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub after: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub before: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub banned: Option<bool>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub min_experience: Option<i32>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub max_experience: Option<i32>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub min_level: Option<i32>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub max_level: Option<i32>,
}

impl PlayerFilter {
    /// Translate the supplied parameters into a conjunction of predicates.
    pub fn predicates(&self) -> Vec<Predicate> {
        [
            self.name.clone().map(Predicate::NameContains),
            self.title.clone().map(Predicate::TitleContains),
            self.race.map(Predicate::RaceIs),
            self.profession.map(Predicate::ProfessionIs),
            birthday_span(self.after, self.before).map(Predicate::BirthdayIn),
            self.banned.map(Predicate::BannedIs),
            Span::from_bounds(self.min_experience, self.max_experience)
                .map(Predicate::ExperienceIn),
            Span::from_bounds(self.min_level, self.max_level).map(Predicate::LevelIn),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

/// One condition over a stored player.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Case-sensitive substring match on `name`.
    NameContains(String),
    /// Case-sensitive substring match on `title`.
    TitleContains(String),
    RaceIs(Race),
    ProfessionIs(Profession),
    BannedIs(bool),
    ExperienceIn(Span<i32>),
    LevelIn(Span<i32>),
    BirthdayIn(Span<Timestamp>),
}

/// Inclusive bound on an ordered field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span<T> {
    AtLeast(T),
    AtMost(T),
    Between(T, T),
}

impl<T: PartialOrd + Copy> Span<T> {
    /// Build a span from optional bounds; `None` when both are absent.
    pub fn from_bounds(min: Option<T>, max: Option<T>) -> Option<Self> {
        match (min, max) {
            (None, None) => None,
            (Some(min), None) => Some(Self::AtLeast(min)),
            (None, Some(max)) => Some(Self::AtMost(max)),
            (Some(min), Some(max)) => Some(Self::Between(min, max)),
        }
    }

    pub fn contains(&self, value: T) -> bool {
        match *self {
            Self::AtLeast(min) => value >= min,
            Self::AtMost(max) => value <= max,
            Self::Between(min, max) => min <= value && value <= max,
        }
    }
}

// ---------------------------------------------------------------------------
// Birthday range
// ---------------------------------------------------------------------------

/// Birthday span from `after` / `before` epoch milliseconds.
///
/// A lone bound is used as-is. With both bounds the upper one is moved by
/// [`adjust_upper_day_bound`] first.
pub fn birthday_span(after: Option<i64>, before: Option<i64>) -> Option<Span<Timestamp>> {
    match (after, before) {
        (None, None) => None,
        (Some(after), None) => Some(Span::AtLeast(instant(after))),
        (None, Some(before)) => Some(Span::AtMost(instant(before))),
        (Some(after), Some(before)) => Some(Span::Between(
            instant(after),
            instant(adjust_upper_day_bound(before)),
        )),
    }
}

/// Zero the 12-hour clock hour of `before` (UTC) and step back one millisecond.
///
/// Minutes, seconds and milliseconds are left alone and an afternoon value
/// only drops back to noon, so this is only a midnight boundary when
/// `before` already sits on an hour-zero mark. Existing clients rely on
/// these exact ranges; do not normalize.
pub fn adjust_upper_day_bound(before: i64) -> i64 {
    let hour_of_day = before.rem_euclid(MILLIS_PER_DAY) / MILLIS_PER_HOUR;
    before
        .saturating_sub((hour_of_day % 12) * MILLIS_PER_HOUR)
        .saturating_sub(1)
}

/// Convert epoch milliseconds, clamping values outside chrono's range.
fn instant(millis: i64) -> Timestamp {
    Timestamp::from_timestamp_millis(millis).unwrap_or(if millis < 0 {
        Timestamp::MIN_UTC
    } else {
        Timestamp::MAX_UTC
    })
}
