pub mod domain;
pub mod error;
pub mod orchestrator;
pub mod ports;
pub mod prompt;
pub mod render;
pub mod specialty;

pub use domain::{CampaignRequest, EmailBrief, GeneratedImage, GeneratedPart, ImageBrief, ImageOrigin};
pub use error::{CampaignError, CampaignResult};
pub use orchestrator::{derive_filename, sanitize_survey_name, CampaignGenerator};
pub use ports::{ImageGenerationService, PortError, PortResult, TextGenerationService};
pub use render::{render_fallback_image, FontSet};
pub use specialty::SpecialtyProfile;
