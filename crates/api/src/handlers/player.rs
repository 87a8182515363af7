//! Handlers for the `/players` resource.
//!
//! Path ids arrive as raw strings and go through
//! [`check_id`](arena_core::validation::check_id), so `5.0` or `abc` is a 400
//! rather than a routing miss.

use arena_core::filter::PlayerFilter;
use arena_core::validation::check_id;
use arena_db::models::player::{CreatePlayer, Player, UpdatePlayer};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppResult;
use crate::extract::{AppJson, AppQuery};
use crate::query::PagingParams;
use crate::state::AppState;

/// GET /rest/players
///
/// Accepts the filter parameters plus `order`, `pageNumber`, `pageSize`.
pub async fn list(
    State(state): State<AppState>,
    AppQuery(filter): AppQuery<PlayerFilter>,
    AppQuery(paging): AppQuery<PagingParams>,
) -> AppResult<Json<Vec<Player>>> {
    let page = paging.to_page_request()?;
    let players = state.players.list(&filter, &page).await?;
    Ok(Json(players))
}

/// GET /rest/players/count
pub async fn count(
    State(state): State<AppState>,
    AppQuery(filter): AppQuery<PlayerFilter>,
) -> AppResult<Json<i64>> {
    let count = state.players.count(&filter).await?;
    Ok(Json(count))
}

/// POST /rest/players
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreatePlayer>,
) -> AppResult<Json<Player>> {
    let player = state.players.create(input).await?;
    Ok(Json(player))
}

/// GET /rest/players/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Player>> {
    let id = check_id(&raw_id)?;
    let player = state.players.get(id).await?;
    Ok(Json(player))
}

/// POST /rest/players/{id}
///
/// Partial update: omitted fields keep their stored values.
pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    AppJson(input): AppJson<UpdatePlayer>,
) -> AppResult<Json<Player>> {
    let id = check_id(&raw_id)?;
    let player = state.players.update(id, input).await?;
    Ok(Json(player))
}

/// DELETE /rest/players/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<StatusCode> {
    let id = check_id(&raw_id)?;
    state.players.delete(id).await?;
    Ok(StatusCode::OK)
}
