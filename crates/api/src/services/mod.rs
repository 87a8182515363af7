//! Request-independent record logic shared by the HTTP handlers.

pub mod player_service;

pub use player_service::PlayerService;
