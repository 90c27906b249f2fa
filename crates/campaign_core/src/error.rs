//! crates/campaign_core/src/error.rs

use crate::ports::PortError;

/// Errors surfaced by the campaign generation core.
#[derive(Debug, thiserror::Error)]
pub enum CampaignError {
    /// The request cannot be served as given; detected without any network call.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The remote text service failed. Images never surface this; they fall back instead.
    #[error("Error generating email: {0}")]
    RemoteService(#[from] PortError),

    /// Both the remote image call and the local fallback failed.
    #[error("Image generation failed: {0}")]
    ImageGeneration(String),
}

pub type CampaignResult<T> = Result<T, CampaignError>;
