//! Player enumerations and field limits.
//!
//! Race and profession are stored as `TEXT` and converted through
//! [`TryFrom<String>`], so the database crate can decode them without this
//! crate depending on sqlx.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Field limits
// ---------------------------------------------------------------------------

/// Maximum name length, in characters.
pub const NAME_MAX_LEN: usize = 12;

/// Maximum title length, in characters.
pub const TITLE_MAX_LEN: usize = 30;

/// Smallest accepted experience value.
pub const EXPERIENCE_MIN: i32 = 0;

/// Largest accepted experience value.
pub const EXPERIENCE_MAX: i32 = 10_000_000;

/// Earliest accepted birthday year.
pub const BIRTHDAY_YEAR_MIN: i32 = 2000;

/// Latest accepted birthday year.
pub const BIRTHDAY_YEAR_MAX: i32 = 3000;

/// Returned when a stored or supplied name matches no known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid {kind} '{value}'. Must be one of: {allowed}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
    pub allowed: String,
}

// ---------------------------------------------------------------------------
// Race
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Race {
    Human,
    Dwarf,
    Elf,
    Giant,
    Orc,
    Troll,
    Hobbit,
}

impl Race {
    pub const ALL: [Race; 7] = [
        Self::Human,
        Self::Dwarf,
        Self::Elf,
        Self::Giant,
        Self::Orc,
        Self::Troll,
        Self::Hobbit,
    ];

    /// Convert from a database string value.
    pub fn from_str_value(s: &str) -> Result<Self, UnknownVariant> {
        Self::ALL
            .into_iter()
            .find(|race| race.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "race",
                value: s.to_string(),
                allowed: Self::ALL.map(|r| r.as_str()).join(", "),
            })
    }

    /// Convert to the database string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Human => "HUMAN",
            Self::Dwarf => "DWARF",
            Self::Elf => "ELF",
            Self::Giant => "GIANT",
            Self::Orc => "ORC",
            Self::Troll => "TROLL",
            Self::Hobbit => "HOBBIT",
        }
    }
}

impl TryFrom<String> for Race {
    type Error = UnknownVariant;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str_value(&value)
    }
}

impl FromStr for Race {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_value(s)
    }
}

// ---------------------------------------------------------------------------
// Profession
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Profession {
    Warrior,
    Rogue,
    Sorcerer,
    Cleric,
    Paladin,
    Nazgul,
    Warlock,
    Druid,
}

impl Profession {
    pub const ALL: [Profession; 8] = [
        Self::Warrior,
        Self::Rogue,
        Self::Sorcerer,
        Self::Cleric,
        Self::Paladin,
        Self::Nazgul,
        Self::Warlock,
        Self::Druid,
    ];

    /// Convert from a database string value.
    pub fn from_str_value(s: &str) -> Result<Self, UnknownVariant> {
        Self::ALL
            .into_iter()
            .find(|profession| profession.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "profession",
                value: s.to_string(),
                allowed: Self::ALL.map(|p| p.as_str()).join(", "),
            })
    }

    /// Convert to the database string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Warrior => "WARRIOR",
            Self::Rogue => "ROGUE",
            Self::Sorcerer => "SORCERER",
            Self::Cleric => "CLERIC",
            Self::Paladin => "PALADIN",
            Self::Nazgul => "NAZGUL",
            Self::Warlock => "WARLOCK",
            Self::Druid => "DRUID",
        }
    }
}

impl TryFrom<String> for Profession {
    type Error = UnknownVariant;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str_value(&value)
    }
}

impl FromStr for Profession {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_value(s)
    }
}

// ---------------------------------------------------------------------------
// Sort order
// ---------------------------------------------------------------------------

/// Field a player listing is sorted by (ascending).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerOrder {
    #[default]
    Id,
    Name,
    Experience,
    Birthday,
    Level,
}

impl PlayerOrder {
    pub const ALL: [PlayerOrder; 5] = [
        Self::Id,
        Self::Name,
        Self::Experience,
        Self::Birthday,
        Self::Level,
    ];

    /// Query-string name (`ID`, `NAME`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Name => "NAME",
            Self::Experience => "EXPERIENCE",
            Self::Birthday => "BIRTHDAY",
            Self::Level => "LEVEL",
        }
    }

    /// Column name in the `players` table.
    pub fn column(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Experience => "experience",
            Self::Birthday => "birthday",
            Self::Level => "level",
        }
    }
}

impl FromStr for PlayerOrder {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|order| order.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "order",
                value: s.to_string(),
                allowed: Self::ALL.map(|o| o.as_str()).join(", "),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn race_round_trips_through_db_string() {
        for race in Race::ALL {
            assert_eq!(Race::from_str_value(race.as_str()), Ok(race));
        }
    }

    #[test]
    fn profession_round_trips_through_db_string() {
        for profession in Profession::ALL {
            assert_eq!(Profession::try_from(profession.as_str().to_string()), Ok(profession));
        }
    }

    #[test]
    fn unknown_race_lists_allowed_values() {
        let err = Race::from_str_value("VAMPIRE").unwrap_err();
        assert_eq!(err.kind, "race");
        assert!(err.to_string().contains("HUMAN, DWARF, ELF"));
    }

    #[test]
    fn lowercase_names_are_rejected() {
        assert!(Profession::from_str_value("warrior").is_err());
    }

    #[test]
    fn enums_serialize_as_upper_case_names() {
        assert_eq!(serde_json::to_string(&Race::Hobbit).unwrap(), "\"HOBBIT\"");
        assert_eq!(
            serde_json::from_str::<Profession>("\"NAZGUL\"").unwrap(),
            Profession::Nazgul
        );
        assert_eq!(
            serde_json::from_str::<PlayerOrder>("\"BIRTHDAY\"").unwrap(),
            PlayerOrder::Birthday
        );
    }

    #[test]
    fn order_parses_from_query_names() {
        for order in PlayerOrder::ALL {
            assert_eq!(order.as_str().parse::<PlayerOrder>(), Ok(order));
        }
        assert_eq!("ELF".parse::<Race>(), Ok(Race::Elf));
        assert!("HEIGHT".parse::<PlayerOrder>().is_err());
    }

    #[test]
    fn default_order_is_id() {
        assert_eq!(PlayerOrder::default().column(), "id");
    }
}
