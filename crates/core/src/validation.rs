//! Field validation for player records.
//!
//! Each check is a pure predicate over one candidate value. Callers decide
//! which fields to check: creation checks all of them, partial updates only
//! the supplied ones.

use chrono::Datelike;

use crate::error::CoreError;
use crate::player::{
    BIRTHDAY_YEAR_MAX, BIRTHDAY_YEAR_MIN, EXPERIENCE_MAX, EXPERIENCE_MIN, NAME_MAX_LEN,
    TITLE_MAX_LEN,
};
use crate::types::{DbId, Timestamp};

/// Validate a player name: 1 to 12 characters.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    let len = name.chars().count();
    if len == 0 || len > NAME_MAX_LEN {
        return Err(CoreError::Validation(format!(
            "name must be between 1 and {NAME_MAX_LEN} characters, got {len}"
        )));
    }
    Ok(())
}

/// Validate a player title: at most 30 characters, empty allowed.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    let len = title.chars().count();
    if len > TITLE_MAX_LEN {
        return Err(CoreError::Validation(format!(
            "title must be at most {TITLE_MAX_LEN} characters, got {len}"
        )));
    }
    Ok(())
}

/// Validate experience against the closed range `[0, 10_000_000]`.
pub fn validate_experience(experience: i32) -> Result<(), CoreError> {
    if !(EXPERIENCE_MIN..=EXPERIENCE_MAX).contains(&experience) {
        return Err(CoreError::Validation(format!(
            "experience must be between {EXPERIENCE_MIN} and {EXPERIENCE_MAX}, got {experience}"
        )));
    }
    Ok(())
}

/// Validate a birthday: non-negative epoch value and a UTC calendar year in
/// `[2000, 3000]`.
pub fn validate_birthday(birthday: &Timestamp) -> Result<(), CoreError> {
    if birthday.timestamp_millis() < 0 {
        return Err(CoreError::Validation(
            "birthday must not be before the Unix epoch".to_string(),
        ));
    }
    let year = birthday.year();
    if !(BIRTHDAY_YEAR_MIN..=BIRTHDAY_YEAR_MAX).contains(&year) {
        return Err(CoreError::Validation(format!(
            "birthday year must be between {BIRTHDAY_YEAR_MIN} and {BIRTHDAY_YEAR_MAX}, got {year}"
        )));
    }
    Ok(())
}

/// Parse a path-supplied player id.
///
/// Rejects decimal notation (`.` or `,`), anything `i64` parsing refuses, and
/// values that are not strictly positive.
pub fn check_id(raw: &str) -> Result<DbId, CoreError> {
    if raw.contains(['.', ',']) {
        return Err(CoreError::Validation(format!(
            "id must be a whole number, got '{raw}'"
        )));
    }
    let id: DbId = raw
        .parse()
        .map_err(|_| CoreError::Validation(format!("id must be an integer, got '{raw}'")))?;
    if id <= 0 {
        return Err(CoreError::Validation(format!(
            "id must be positive, got {id}"
        )));
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::{TimeZone, Utc};

    use super::*;

    fn year_start(year: i32) -> Timestamp {
        Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap()
    }

    fn year_end(year: i32) -> Timestamp {
        Utc.with_ymd_and_hms(year, 12, 31, 23, 59, 59).unwrap()
    }

    // -- name ----------------------------------------------------------------

    #[test]
    fn name_length_boundaries() {
        assert!(validate_name("A").is_ok());
        assert!(validate_name(&"n".repeat(12)).is_ok());
        assert_matches!(validate_name(""), Err(CoreError::Validation(_)));
        assert_matches!(validate_name(&"n".repeat(13)), Err(CoreError::Validation(_)));
    }

    #[test]
    fn name_counts_characters_not_bytes() {
        assert!(validate_name("Гэндальфище").is_ok());
    }

    // -- title ---------------------------------------------------------------

    #[test]
    fn title_length_boundaries() {
        assert!(validate_title("").is_ok());
        assert!(validate_title(&"t".repeat(30)).is_ok());
        assert_matches!(validate_title(&"t".repeat(31)), Err(CoreError::Validation(_)));
    }

    // -- experience ----------------------------------------------------------

    #[test]
    fn experience_boundaries() {
        assert!(validate_experience(0).is_ok());
        assert!(validate_experience(10_000_000).is_ok());
        assert!(validate_experience(-1).is_err());
        assert!(validate_experience(10_000_001).is_err());
    }

    // -- birthday ------------------------------------------------------------

    #[test]
    fn birthday_year_boundaries() {
        assert!(validate_birthday(&year_start(2000)).is_ok());
        assert!(validate_birthday(&year_end(3000)).is_ok());
        assert!(validate_birthday(&year_end(1999)).is_err());
        assert!(validate_birthday(&year_start(3001)).is_err());
    }

    #[test]
    fn birthday_before_epoch_is_rejected() {
        let err = validate_birthday(&Utc.timestamp_millis_opt(-1).unwrap()).unwrap_err();
        assert!(err.to_string().contains("Unix epoch"));
    }

    #[test]
    fn first_millisecond_of_2000() {
        let ts = Utc.timestamp_millis_opt(946_684_800_000).unwrap();
        assert!(validate_birthday(&ts).is_ok());
        let ts = Utc.timestamp_millis_opt(946_684_799_999).unwrap();
        assert!(validate_birthday(&ts).is_err());
    }

    // -- check_id ------------------------------------------------------------

    #[test]
    fn check_id_accepts_positive_integers() {
        assert_eq!(check_id("5").unwrap(), 5);
        assert_eq!(check_id("9223372036854775807").unwrap(), i64::MAX);
    }

    #[test]
    fn check_id_rejects_malformed_input() {
        for raw in ["0", "-3", "5.0", "5,0", "abc", "", " 5", "9223372036854775808"] {
            assert_matches!(check_id(raw), Err(CoreError::Validation(_)), "input {raw:?}");
        }
    }
}
