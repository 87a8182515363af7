//! Level derivation from experience.
//!
//! Level `L` is reached at `50 * L * (L + 1)` experience, which inverts to
//! `L = floor((sqrt(2500 + 200 * exp) - 50) / 100)`. At every threshold the
//! radicand is the perfect square `(100L + 50)^2`, so the `f64` square root
//! is exact there and the floor never lands one level short.

/// Derived progression for a given experience value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub level: i32,
    pub until_next_level: i32,
}

impl Progress {
    /// Derive level and remaining experience from `experience`.
    ///
    /// Expects a validated value in `[0, 10_000_000]`.
    pub fn from_experience(experience: i32) -> Self {
        let level = level_for(experience);
        Self {
            level,
            until_next_level: until_next_level(level, experience),
        }
    }
}

/// Level reached with `experience` points.
pub fn level_for(experience: i32) -> i32 {
    let radicand = 2500.0 + 200.0 * f64::from(experience);
    ((radicand.sqrt() - 50.0) / 100.0).floor() as i32
}

/// Experience still needed to go from `level` to `level + 1`.
pub fn until_next_level(level: i32, experience: i32) -> i32 {
    let level = i64::from(level);
    (50 * (level + 1) * (level + 2) - i64::from(experience)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::{EXPERIENCE_MAX, EXPERIENCE_MIN};

    #[test]
    fn zero_experience_is_level_zero() {
        assert_eq!(
            Progress::from_experience(0),
            Progress {
                level: 0,
                until_next_level: 100
            }
        );
    }

    #[test]
    fn thresholds_land_exactly_on_the_next_level() {
        assert_eq!(level_for(99), 0);
        assert_eq!(level_for(100), 1);
        assert_eq!(level_for(299), 1);
        assert_eq!(level_for(300), 2);
        assert_eq!(level_for(600), 3);
    }

    #[test]
    fn threshold_for_every_level_is_exact() {
        for level in 0..=446 {
            let threshold = 50 * level * (level + 1);
            assert_eq!(level_for(threshold), level, "threshold {threshold}");
            if threshold > 0 {
                assert_eq!(level_for(threshold - 1), level - 1);
            }
        }
    }

    #[test]
    fn maximum_experience() {
        let progress = Progress::from_experience(EXPERIENCE_MAX);
        assert_eq!(progress.level, 446);
        assert_eq!(progress.until_next_level, 12_800);
    }

    #[test]
    fn level_is_monotonic_and_remaining_is_positive() {
        let mut previous = level_for(EXPERIENCE_MIN);
        for experience in (EXPERIENCE_MIN..=EXPERIENCE_MAX).step_by(997) {
            let progress = Progress::from_experience(experience);
            assert!(progress.level >= previous);
            assert!(progress.until_next_level > 0);
            previous = progress.level;
        }
    }

    #[test]
    fn remaining_counts_down_within_a_level() {
        assert_eq!(until_next_level(1, 100), 200);
        assert_eq!(until_next_level(1, 299), 1);
        assert_eq!(until_next_level(2, 300), 300);
    }
}
