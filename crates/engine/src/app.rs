//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::ports::{ArtifactStore, PokemonRepo};
use crate::use_cases::{CatalogOps, MatchupQuery, SimulateBattle};

/// Main application state.
///
/// Holds the use cases wired to their ports. Passed to HTTP handlers via
/// Axum state. Nothing here is mutable between requests; every request is
/// an independent unit of work.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub catalog: CatalogOps,
    pub battle: SimulateBattle,
    pub matchups: MatchupQuery,
}

impl App {
    pub fn new(repo: Arc<dyn PokemonRepo>, artifacts: Arc<dyn ArtifactStore>) -> Self {
        Self {
            use_cases: UseCases {
                catalog: CatalogOps::new(repo.clone(), artifacts),
                battle: SimulateBattle::new(repo.clone()),
                matchups: MatchupQuery::new(repo),
            },
        }
    }
}
