//! Shared query parameter types for API handlers.

use arena_core::error::CoreError;
use arena_core::paging::{PageRequest, DEFAULT_PAGE_SIZE};
use arena_core::params::empty_as_none;
use arena_core::player::PlayerOrder;
use serde::Deserialize;

/// Paging parameters for the player list (`?order=&pageNumber=&pageSize=`).
///
/// Deserialized from the same query string as
/// [`arena_core::filter::PlayerFilter`]; each ignores the other's keys.
/// Empty values fall back to the defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagingParams {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub order: Option<PlayerOrder>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub page_number: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub page_size: Option<i64>,
}

impl PagingParams {
    /// Apply defaults (`ID`, page 0, size 3) and validate.
    pub fn to_page_request(&self) -> Result<PageRequest, CoreError> {
        PageRequest::new(
            self.page_number.unwrap_or(0),
            self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
            self.order.unwrap_or_default(),
        )
    }
}
