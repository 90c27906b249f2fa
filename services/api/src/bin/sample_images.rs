//! services/api/src/bin/sample_images.rs
//!
//! Generates sample campaign images without starting the web server.
//!
//! ```text
//! sample_images                          # cardiology example banner
//! sample_images template <specialty> [style]
//! ```
//!
//! A template is a banner without text overlay, saved as
//! `template_{specialty}_{style}.png` so it can be reused across surveys.

use api_lib::{adapters::build_generator, config::Config, error::ApiError};
use campaign_core::{FontSet, ImageBrief};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const TEMPLATE_SURVEY_NAME: &str = "Medical Research Template";

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    let config = Config::from_env()?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let generator = build_generator(&config, FontSet::load(config.font_path.as_deref()))?;
    let args: Vec<String> = std::env::args().skip(1).collect();

    let image = match args.first().map(String::as_str) {
        Some("template") => {
            let specialty = args
                .get(1)
                .ok_or_else(|| {
                    ApiError::Internal("usage: sample_images template <specialty> [style]".to_string())
                })?;
            let style = args.get(2).map(String::as_str).unwrap_or("professional");
            let brief = ImageBrief {
                survey_name: TEMPLATE_SURVEY_NAME,
                medical_specialty: specialty,
                tone: "professional",
                image_style: style,
                include_text_overlay: false,
            };
            let filename = format!("template_{}_{}.png", specialty, style);
            generator.acquire_image(&brief, Some(&filename)).await?
        }
        _ => {
            let brief = ImageBrief {
                survey_name: "Advanced Heart Failure Management Survey 2025",
                medical_specialty: "cardiology",
                tone: "professional",
                image_style: "professional",
                include_text_overlay: true,
            };
            generator.acquire_image(&brief, None).await?
        }
    };

    info!(
        "{} image written to {} ({})",
        image.origin.as_str(),
        image.path.display(),
        image.description
    );
    Ok(())
}
