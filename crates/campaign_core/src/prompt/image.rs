//! crates/campaign_core/src/prompt/image.rs
//!
//! Builds the prompt sent to the image model for a campaign banner.

use crate::specialty::SpecialtyProfile;

const VISUAL_REQUIREMENTS: &str = r#"VISUAL REQUIREMENTS:
- Dimensions: 16:9 landscape format, suitable for email headers and web banners
- Resolution: High-resolution, crisp and clear
- Color scheme: Professional medical colors (blues, teals, whites, subtle accent colors)
- Professional aesthetic suitable for medical professionals
- Clean, uncluttered design with plenty of white space"#;

const PROFESSIONAL_STYLE: &str = r#"PROFESSIONAL STYLE:
- Clean, corporate medical aesthetic
- Subtle gradients and professional typography
- Medical professionals in business attire
- Hospital or clinic environment backgrounds
- Sophisticated color palette with medical blues and whites
- Icons and symbols should be minimal and elegant"#;

const INFOGRAPHIC_STYLE: &str = r#"INFOGRAPHIC STYLE:
- Data visualization elements (charts, graphs, statistics)
- Clear information hierarchy
- Iconography representing survey benefits
- Step-by-step visual flow
- Bold, readable typography
- Engaging data presentation elements"#;

const MEDICAL_ILLUSTRATION_STYLE: &str = r#"MEDICAL ILLUSTRATION STYLE:
- Detailed medical diagrams and anatomical elements
- Scientific accuracy in medical representations
- Educational poster aesthetic
- Medical textbook illustration quality
- Precise, technical visual elements
- Professional medical publication style"#;

const CLEAN_MODERN_STYLE: &str = r#"CLEAN MODERN STYLE:
- Minimalist design with lots of white space
- Modern typography and clean lines
- Subtle shadows and depth
- Contemporary medical technology elements
- Fresh, approachable color palette
- Modern healthcare facility aesthetics"#;

const NO_TEXT_OVERLAY: &str = "- Create image without text overlay (background/template only)";

const COMPOSITION_AND_TECHNICAL: &str = r#"COMPOSITION GUIDELINES:
- Center-weighted composition with clear focal point
- Balance between imagery and negative space
- Professional lighting and color temperature
- Avoid overly complex or busy designs
- Ensure scalability from large banners to small email thumbnails
- Create a sense of trust, expertise, and medical authority
- Make it appealing to busy healthcare professionals
- Include subtle elements that suggest collaboration and knowledge sharing

TECHNICAL SPECIFICATIONS:
- High contrast for readability
- Professional color grading
- Sharp, crisp details
- Suitable for both digital and print applications
- Optimized for professional medical communications

Create this medical survey campaign image now with careful attention to professional medical aesthetics and clear visual communication."#;

/// Visual styles for the generated banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageStyle {
    Professional,
    Infographic,
    MedicalIllustration,
    CleanModern,
}

impl ImageStyle {
    /// Resolves a style label, falling back to professional.
    pub fn resolve(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "infographic" => ImageStyle::Infographic,
            "medical_illustration" => ImageStyle::MedicalIllustration,
            "clean_modern" => ImageStyle::CleanModern,
            _ => ImageStyle::Professional,
        }
    }

    pub fn instructions(self) -> &'static str {
        match self {
            ImageStyle::Professional => PROFESSIONAL_STYLE,
            ImageStyle::Infographic => INFOGRAPHIC_STYLE,
            ImageStyle::MedicalIllustration => MEDICAL_ILLUSTRATION_STYLE,
            ImageStyle::CleanModern => CLEAN_MODERN_STYLE,
        }
    }
}

fn text_overlay_block(survey_name: &str) -> String {
    format!(
        "TEXT OVERLAY REQUIREMENTS:\n\
         - Main headline: \"{survey_name}\" (prominent, readable typography)\n\
         - Subtitle: \"Healthcare Professional Survey\" or \"Medical Research Study\"\n\
         - Call-to-action element: \"Share Your Expertise\" or \"Join the Research\"\n\
         - Text should be easily readable against the background\n\
         - Use professional, medical-appropriate fonts\n\
         - Ensure text contrast meets accessibility standards"
    )
}

/// Builds the campaign image prompt. Pure and deterministic.
pub fn build_image_prompt(
    survey_name: &str,
    medical_specialty: &str,
    tone: &str,
    image_style: &str,
    include_text_overlay: bool,
) -> String {
    let profile = SpecialtyProfile::lookup(medical_specialty);
    let style = ImageStyle::resolve(image_style);

    let mut prompt = format!(
        "Create a high-quality, professional medical survey campaign image for healthcare professionals.\n\n\
         CAMPAIGN DETAILS:\n\
         - Survey Focus: {survey_name}\n\
         - Target Specialty: {medical_specialty}\n\
         - Visual Tone: {tone}\n\
         - Style: {image_style}\n\n"
    );
    prompt.push_str(VISUAL_REQUIREMENTS);
    prompt.push_str(&format!(
        "\n- Specialty Elements: Incorporate {}\n\n",
        profile.visual_elements
    ));
    prompt.push_str(style.instructions());
    prompt.push_str("\n\n");

    if include_text_overlay {
        prompt.push_str(&text_overlay_block(survey_name));
    } else {
        prompt.push_str(NO_TEXT_OVERLAY);
    }

    prompt.push_str("\n\n");
    prompt.push_str(COMPOSITION_AND_TECHNICAL);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn general_elements() -> &'static str {
        SpecialtyProfile::general().visual_elements
    }

    #[test]
    fn includes_campaign_details() {
        let prompt = build_image_prompt("Heart Health Pulse", "cardiology", "formal", "infographic", true);

        assert!(prompt.contains("- Survey Focus: Heart Health Pulse"));
        assert!(prompt.contains("- Target Specialty: cardiology"));
        assert!(prompt.contains("- Visual Tone: formal"));
        assert!(prompt.contains("- Style: infographic"));
        assert!(prompt.contains("ECG patterns"));
        assert!(prompt.contains(INFOGRAPHIC_STYLE));
    }

    #[test]
    fn specialty_lookup_ignores_case_and_falls_back_to_general() {
        let upper = build_image_prompt("Survey", "NEUROLOGY", "formal", "professional", false);
        assert!(upper.contains("neural networks"));

        let unknown = build_image_prompt("Survey", "dermatology", "formal", "professional", false);
        assert!(unknown.contains(&format!("Incorporate {}", general_elements())));
    }

    #[test]
    fn unknown_style_falls_back_to_professional() {
        let prompt = build_image_prompt("Survey", "oncology", "formal", "vaporwave", false);
        assert!(prompt.contains(PROFESSIONAL_STYLE));

        let modern = build_image_prompt("Survey", "oncology", "formal", "Clean_Modern", false);
        assert!(modern.contains(CLEAN_MODERN_STYLE));
        assert!(!modern.contains(PROFESSIONAL_STYLE));
    }

    #[test]
    fn text_overlay_embeds_the_survey_name_as_headline() {
        let prompt = build_image_prompt("Q3 Oncology Insights", "oncology", "formal", "professional", true);
        assert!(prompt.contains("- Main headline: \"Q3 Oncology Insights\""));
        assert!(!prompt.contains(NO_TEXT_OVERLAY));
    }

    #[test]
    fn without_overlay_asks_for_a_text_free_image() {
        let prompt = build_image_prompt("Q3 Oncology Insights", "oncology", "formal", "professional", false);
        assert!(prompt.contains(NO_TEXT_OVERLAY));
        assert!(!prompt.contains("TEXT OVERLAY REQUIREMENTS"));
    }

    #[test]
    fn always_ends_with_composition_and_technical_blocks() {
        for overlay in [true, false] {
            let prompt = build_image_prompt("Survey", "surgery", "formal", "professional", overlay);
            assert!(prompt.ends_with(COMPOSITION_AND_TECHNICAL));
            assert!(prompt.contains("TECHNICAL SPECIFICATIONS:"));
        }
    }
}
