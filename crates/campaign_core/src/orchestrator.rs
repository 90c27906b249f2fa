//! crates/campaign_core/src/orchestrator.rs
//!
//! The generation orchestrator: one remote call per artifact, a local fallback
//! for images, and packaging of the result for the web layer.

use crate::domain::{EmailBrief, GeneratedImage, GeneratedPart, ImageBrief, ImageOrigin};
use crate::error::{CampaignError, CampaignResult};
use crate::ports::{ImageGenerationService, TextGenerationService};
use crate::prompt::{build_email_prompt, build_image_prompt};
use crate::render::{render_fallback_image, FontSet};
use base64::{engine::general_purpose, Engine as _};
use chrono::{DateTime, Local};
use image::{DynamicImage, ImageFormat};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

pub const REMOTE_SUCCESS_MESSAGE: &str = "AI-generated image created successfully";
pub const FALLBACK_SUCCESS_MESSAGE: &str = "Professional fallback image generated successfully.";

//=========================================================================================
// Filenames
//=========================================================================================

/// Keeps alphanumerics, spaces, hyphens and underscores, trims trailing
/// whitespace and turns the remaining spaces into underscores.
pub fn sanitize_survey_name(survey_name: &str) -> String {
    let kept: String = survey_name
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect();
    kept.trim_end().replace(' ', "_")
}

/// `{prefix}{sanitized name}_{YYYYmmdd_HHMMSS}.png`. Two requests for the same
/// name within one second get the same filename.
pub fn derive_filename(origin: ImageOrigin, survey_name: &str, at: DateTime<Local>) -> String {
    format!(
        "{}{}_{}.png",
        origin.filename_prefix(),
        sanitize_survey_name(survey_name),
        at.format("%Y%m%d_%H%M%S")
    )
}

/// Reduces a caller-supplied filename to its last path component so it cannot
/// escape the output directory.
fn requested_filename(requested: &str) -> Option<String> {
    Path::new(requested)
        .file_name()
        .and_then(|name| name.to_str())
        .filter(|name| !name.trim().is_empty())
        .map(str::to_string)
}

//=========================================================================================
// The Orchestrator
//=========================================================================================

/// Produces the email copy and banner image for a campaign.
#[derive(Clone)]
pub struct CampaignGenerator {
    text_service: Arc<dyn TextGenerationService>,
    image_service: Arc<dyn ImageGenerationService>,
    output_dir: PathBuf,
    fonts: FontSet,
}

impl CampaignGenerator {
    /// Creates a new `CampaignGenerator` writing images into `output_dir`.
    pub fn new(
        text_service: Arc<dyn TextGenerationService>,
        image_service: Arc<dyn ImageGenerationService>,
        output_dir: impl Into<PathBuf>,
        fonts: FontSet,
    ) -> Self {
        Self {
            text_service,
            image_service,
            output_dir: output_dir.into(),
            fonts,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Drafts the invitation email. There is no fallback: a remote failure is
    /// returned to the caller as is.
    pub async fn acquire_email_text(&self, brief: &EmailBrief<'_>) -> CampaignResult<String> {
        let prompt = build_email_prompt(
            brief.survey_name,
            brief.compensation,
            brief.length_of_interview_minutes,
            brief.tone,
            brief.educational_info,
        )?;

        let text = self.text_service.generate_text(&prompt).await?;
        Ok(text)
    }

    /// Produces the campaign image, trying the remote service once and
    /// rendering the local fallback if that fails for any reason.
    pub async fn acquire_image(
        &self,
        brief: &ImageBrief<'_>,
        save_filename: Option<&str>,
    ) -> CampaignResult<GeneratedImage> {
        let prompt = build_image_prompt(
            brief.survey_name,
            brief.medical_specialty,
            brief.tone,
            brief.image_style,
            brief.include_text_overlay,
        );

        info!(
            "Generating image for '{}' (specialty: {}, style: {}, tone: {})",
            brief.survey_name, brief.medical_specialty, brief.image_style, brief.tone
        );

        let reason = match self.try_remote(&prompt, brief.survey_name, save_filename).await {
            Ok(image) => return Ok(image),
            Err(reason) => reason,
        };
        warn!("Remote image generation failed, using fallback: {}", reason);

        self.render_fallback(brief, save_filename).await.map_err(|e| {
            warn!("Fallback image generation failed: {}", e);
            CampaignError::ImageGeneration(e)
        })
    }

    async fn try_remote(
        &self,
        prompt: &str,
        survey_name: &str,
        save_filename: Option<&str>,
    ) -> Result<GeneratedImage, String> {
        let parts = self
            .image_service
            .generate_image(prompt)
            .await
            .map_err(|e| e.to_string())?;

        // The description is the last text seen before the first image.
        let mut description = None;
        let mut image_data = None;
        for part in parts {
            match part {
                GeneratedPart::Text(text) if !text.trim().is_empty() => description = Some(text),
                GeneratedPart::Text(_) => {}
                GeneratedPart::InlineImage { data, .. } => {
                    image_data = Some(data);
                    break;
                }
            }
        }

        let data = image_data.ok_or_else(|| "No image generated by the remote service".to_string())?;
        if let Some(text) = &description {
            info!("Remote image description: {}", text);
        }

        let filename = self.filename_for(ImageOrigin::Remote, survey_name, save_filename);
        let packaged = tokio::task::spawn_blocking(move || {
            let image = image::load_from_memory(&data).map_err(|e| format!("Could not decode image: {e}"))?;
            let png = encode_png(&image)?;
            Ok::<_, String>((image, png))
        })
        .await
        .map_err(|e| format!("Image decoding task failed: {e}"))??;

        self.persist(
            packaged,
            filename,
            description.unwrap_or_else(|| REMOTE_SUCCESS_MESSAGE.to_string()),
            ImageOrigin::Remote,
        )
        .await
    }

    async fn render_fallback(
        &self,
        brief: &ImageBrief<'_>,
        save_filename: Option<&str>,
    ) -> Result<GeneratedImage, String> {
        let filename = self.filename_for(ImageOrigin::Fallback, brief.survey_name, save_filename);
        let survey_name = brief.survey_name.to_string();
        let specialty = brief.medical_specialty.to_string();
        let fonts = self.fonts.clone();

        // A panic while drawing surfaces here as a JoinError.
        let packaged = tokio::task::spawn_blocking(move || {
            let image = DynamicImage::ImageRgb8(render_fallback_image(&survey_name, &specialty, &fonts));
            let png = encode_png(&image)?;
            Ok::<_, String>((image, png))
        })
        .await
        .map_err(|e| format!("Fallback rendering task failed: {e}"))??;

        self.persist(
            packaged,
            filename,
            FALLBACK_SUCCESS_MESSAGE.to_string(),
            ImageOrigin::Fallback,
        )
        .await
    }

    fn filename_for(&self, origin: ImageOrigin, survey_name: &str, save_filename: Option<&str>) -> String {
        save_filename
            .and_then(requested_filename)
            .unwrap_or_else(|| derive_filename(origin, survey_name, Local::now()))
    }

    /// Writes the PNG bytes to the output directory and base64-encodes the very
    /// same bytes for the response.
    async fn persist(
        &self,
        (image, png): (DynamicImage, Vec<u8>),
        filename: String,
        description: String,
        origin: ImageOrigin,
    ) -> Result<GeneratedImage, String> {
        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| format!("Could not create {}: {e}", self.output_dir.display()))?;

        let path = self.output_dir.join(&filename);
        tokio::fs::write(&path, &png)
            .await
            .map_err(|e| format!("Could not write {}: {e}", path.display()))?;
        info!("{} image saved as: {}", origin.as_str(), path.display());

        let base64 = general_purpose::STANDARD.encode(&png);
        Ok(GeneratedImage {
            image,
            png,
            filename,
            base64,
            description,
            origin,
            path,
        })
    }
}

fn encode_png(image: &DynamicImage) -> Result<Vec<u8>, String> {
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, ImageFormat::Png)
        .map_err(|e| format!("Could not encode PNG: {e}"))?;
    Ok(buffer.into_inner())
}
