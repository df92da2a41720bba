//! Application state shared across routes

use std::sync::Arc;

use crate::config::Config;
use crate::util::rng::SharedRng;

/// Shared application state
///
/// Intentionally small: the game is stateless and the full state
/// round-trips through the client, so the only shared pieces are the
/// configuration and the fruit RNG.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub fruit_rng: SharedRng,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self::with_rng(config, SharedRng::from_entropy())
    }

    /// Build state with an explicit RNG, for deterministic tests
    pub fn with_rng(config: Config, fruit_rng: SharedRng) -> Self {
        Self {
            config: Arc::new(config),
            fruit_rng,
        }
    }
}
