use crate::services::PlayerService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the service holds its store behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Player record service (validation, derivation, persistence).
    pub players: PlayerService,
}
