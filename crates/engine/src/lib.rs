//! Pokedex Engine library.
//!
//! This crate contains all server-side code for the Pokedex catalog service.
//!
//! ## Structure
//!
//! - `use_cases/` - Catalog lifecycle, battle simulation, matchup queries
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

/// Test fixtures module for integration testing.
#[cfg(test)]
pub mod test_fixtures;

pub use app::App;
