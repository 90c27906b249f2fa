//! crates/campaign_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! Every value here lives for a single request and is never stored.

use image::DynamicImage;
use std::path::PathBuf;

/// A validated campaign request, as accepted from the web form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignRequest {
    pub survey_name: String,
    pub medical_specialty: String,
    pub tone: String,
    pub image_style: String,
    pub compensation: u32,
    pub length_of_interview_minutes: u32,
    pub educational_info: Option<String>,
    pub include_text_overlay: bool,
}

impl CampaignRequest {
    /// The subset of fields needed to write the invitation email.
    pub fn email_brief(&self) -> EmailBrief<'_> {
        EmailBrief {
            survey_name: &self.survey_name,
            compensation: self.compensation,
            length_of_interview_minutes: self.length_of_interview_minutes,
            tone: &self.tone,
            educational_info: self.educational_info.as_deref(),
        }
    }

    /// The subset of fields needed to produce the campaign image.
    pub fn image_brief(&self) -> ImageBrief<'_> {
        ImageBrief {
            survey_name: &self.survey_name,
            medical_specialty: &self.medical_specialty,
            tone: &self.tone,
            image_style: &self.image_style,
            include_text_overlay: self.include_text_overlay,
        }
    }
}

/// Inputs for the email prompt.
#[derive(Debug, Clone, Copy)]
pub struct EmailBrief<'a> {
    pub survey_name: &'a str,
    pub compensation: u32,
    pub length_of_interview_minutes: u32,
    pub tone: &'a str,
    pub educational_info: Option<&'a str>,
}

/// Inputs for the image prompt and the fallback renderer.
#[derive(Debug, Clone, Copy)]
pub struct ImageBrief<'a> {
    pub survey_name: &'a str,
    pub medical_specialty: &'a str,
    pub tone: &'a str,
    pub image_style: &'a str,
    pub include_text_overlay: bool,
}

/// Where a generated image came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageOrigin {
    Remote,
    Fallback,
}

impl ImageOrigin {
    /// Filename prefix used when no explicit filename is requested.
    pub fn filename_prefix(self) -> &'static str {
        match self {
            ImageOrigin::Remote => "survey_image_",
            ImageOrigin::Fallback => "fallback_",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ImageOrigin::Remote => "remote",
            ImageOrigin::Fallback => "fallback",
        }
    }
}

/// A campaign image that has been persisted to the output directory.
///
/// `png` holds exactly the bytes written to `path`, and `base64` is the
/// encoding of those same bytes.
#[derive(Debug, Clone)]
pub struct GeneratedImage {
    pub image: DynamicImage,
    pub png: Vec<u8>,
    pub filename: String,
    pub base64: String,
    pub description: String,
    pub origin: ImageOrigin,
    pub path: PathBuf,
}

/// One piece of a multi-part response from the remote image service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratedPart {
    Text(String),
    InlineImage { mime_type: String, data: Vec<u8> },
}
