//! Domain logic for the player registry.
//!
//! Everything in this crate is pure: field validation, level derivation,
//! filter predicates and paging. No database or HTTP dependencies.

pub mod error;
pub mod filter;
pub mod level;
pub mod paging;
pub mod params;
pub mod player;
pub mod types;
pub mod validation;
