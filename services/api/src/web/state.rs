//! services/api/src/web/state.rs
//!
//! Defines the application's shared state.

use campaign_core::CampaignGenerator;
use std::sync::Arc;

//=========================================================================================
// AppState (Shared Across All Requests)
//=========================================================================================

/// The shared application state, created once at startup and passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<CampaignGenerator>,
}
