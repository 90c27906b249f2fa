pub mod image_llm;
pub mod text_llm;

pub use image_llm::GeminiImageAdapter;
pub use text_llm::OpenAiTextAdapter;

use crate::{config::Config, error::ApiError};
use async_openai::config::OpenAIConfig;
use campaign_core::{CampaignGenerator, FontSet};
use std::sync::Arc;

/// Wires the Gemini text and image adapters into a `CampaignGenerator`.
pub fn build_generator(config: &Config, fonts: FontSet) -> Result<CampaignGenerator, ApiError> {
    let openai_config = OpenAIConfig::new()
        .with_api_key(config.gemini_api_key.clone())
        .with_api_base(text_llm::openai_compatible_base(&config.gemini_api_base));
    let text_adapter = Arc::new(OpenAiTextAdapter::new(
        text_llm::single_attempt_client(openai_config),
        config.text_model.clone(),
    ));

    let http = reqwest::Client::builder()
        .build()
        .map_err(|e| ApiError::Internal(format!("Failed to build HTTP client: {}", e)))?;
    let image_adapter = Arc::new(GeminiImageAdapter::new(
        http,
        config.gemini_api_base.clone(),
        config.gemini_api_key.clone(),
        config.image_model.clone(),
    ));

    Ok(CampaignGenerator::new(
        text_adapter,
        image_adapter,
        config.output_dir.clone(),
        fonts,
    ))
}
