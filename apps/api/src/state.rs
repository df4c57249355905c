//! Application state shared with request handlers.

use database::DocumentStore;

/// Shared application state.
///
/// Cloned per handler; [`DocumentStore`] wraps an Arc'd database handle
/// so clones are cheap. The store may be in its unavailable state when
/// no database connection was established at startup.
#[derive(Clone)]
pub struct AppState {
    /// Document-store handle used by the diagnostics endpoint
    pub store: DocumentStore,
}
