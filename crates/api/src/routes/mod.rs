pub mod health;
pub mod player;

use axum::Router;

use crate::state::AppState;

/// Build the `/rest` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /players                 list, create
/// /players/count           count
/// /players/{id}            get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/players", player::router())
}
