//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It owns the activity directory behind a single `RwLock`: every mutation
//! serializes through that lock, so precondition checks and roster edits
//! happen atomically with respect to other requests.

use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

// =============================================================================
// ACTIVITY
// =============================================================================

/// A scheduled offering with a participant capacity and a roster of
/// signed-up emails. The activity name is the directory key, not a field,
/// which keeps the wire shape of `GET /activities` a plain name → record map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    /// Signup order; never contains the same email twice.
    pub participants: Vec<String>,
}

/// The complete set of activities known to the service. `IndexMap` keeps
/// seed insertion order, which is the default listing order.
pub type Directory = IndexMap<String, Activity>;

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — the directory is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<RwLock<Directory>>,
    /// When true, signup rejects rosters already at `max_participants`.
    pub enforce_capacity: bool,
}

impl AppState {
    #[must_use]
    pub fn new(directory: Directory, enforce_capacity: bool) -> Self {
        Self { directory: Arc::new(RwLock::new(directory)), enforce_capacity }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
