//! Page selection for player listings.

use crate::error::CoreError;
use crate::player::PlayerOrder;

/// Page size used when the client does not supply one.
pub const DEFAULT_PAGE_SIZE: i64 = 3;

/// A validated page request: zero-based page number, page size and sort field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    number: i64,
    size: i64,
    order: PlayerOrder,
}

impl PageRequest {
    /// Build a page request.
    ///
    /// Rejects a negative page number, a page size below one, and any page
    /// whose row offset would overflow.
    pub fn new(number: i64, size: i64, order: PlayerOrder) -> Result<Self, CoreError> {
        if number < 0 {
            return Err(CoreError::Validation(format!(
                "pageNumber must not be negative, got {number}"
            )));
        }
        if size < 1 {
            return Err(CoreError::Validation(format!(
                "pageSize must be at least 1, got {size}"
            )));
        }
        if number.checked_mul(size).is_none() {
            return Err(CoreError::Validation(
                "pageNumber * pageSize is too large".to_string(),
            ));
        }
        Ok(Self {
            number,
            size,
            order,
        })
    }

    pub fn number(&self) -> i64 {
        self.number
    }

    /// Maximum rows on this page (SQL `LIMIT`).
    pub fn limit(&self) -> i64 {
        self.size
    }

    /// Rows skipped before this page (SQL `OFFSET`).
    pub fn offset(&self) -> i64 {
        self.number * self.size
    }

    pub fn order(&self) -> PlayerOrder {
        self.order
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            number: 0,
            size: DEFAULT_PAGE_SIZE,
            order: PlayerOrder::Id,
        }
    }
}
