//! crates/campaign_core/src/prompt/email.rs
//!
//! Builds the prompt sent to the text model to draft an HCP survey invitation.

use crate::error::{CampaignError, CampaignResult};

const PERSONA: &str = "You are an expert medical communications specialist with 15+ years of experience crafting compelling survey invitations for Healthcare Professionals (HCPs). You understand their challenges, time constraints, and motivations.";

const FORMAL_GUIDELINES: &str = r#"TONE GUIDELINES - FORMAL:
- Use professional, respectful language appropriate for medical colleagues
- Maintain clinical terminology where relevant
- Structure with clear, organized paragraphs
- Use formal salutations and closings
- Emphasize professional value and scientific merit
- Reference peer collaboration and medical community contribution"#;

const CASUAL_GUIDELINES: &str = r#"TONE GUIDELINES - CASUAL:
- Use friendly, approachable language while maintaining professionalism
- Include conversational elements ("We'd love to hear from you")
- Keep sentences shorter and more direct
- Use inclusive language ("we", "together")
- Balance friendliness with respect for expertise"#;

const EDUCATIONAL_GUIDELINES: &str = r#"TONE GUIDELINES - EDUCATIONAL:
- Position survey as a learning and knowledge-sharing opportunity
- Explain broader context and importance of research topic
- Highlight contribution to medical advancement
- Include relevant background on subject matter
- Emphasize educational value for participants
- Use evidence-based language"#;

const COMPELLING_GUIDELINES: &str = r#"TONE GUIDELINES - COMPELLING:
- Create urgency without being pushy
- Emphasize critical importance of their perspective
- Highlight impact on patient care/medical practice
- Use action-oriented language
- Stress limited opportunity and exclusivity
- Include credibility indicators"#;

const CONTENT_SPECIFICATIONS: &str = r#"CONTENT SPECIFICATIONS:
- Length: 150-250 words
- Include survey name naturally
- Address HCP concerns (time, relevance, legitimacy)
- Use appropriate medical terminology
- Mention compensation naturally
- Include exclusivity and professional recognition
- Ensure confidentiality/anonymity is mentioned

AVOID:
- Generic language
- Aggressive sales tactics
- Minimizing time constraints
- Unclear participation instructions

OUTPUT FORMAT:
Subject Line: [Subject]
Email Body:
[Body]
Signature:
[Signature]"#;

/// The writing styles the email prompt knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Formal,
    Casual,
    Educational,
    Compelling,
}

impl Tone {
    /// Resolves a free-form tone label. Anything unrecognised is treated as formal.
    pub fn resolve(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "casual" => Tone::Casual,
            "educational" => Tone::Educational,
            "compelling" => Tone::Compelling,
            _ => Tone::Formal,
        }
    }

    pub fn guidelines(self) -> &'static str {
        match self {
            Tone::Formal => FORMAL_GUIDELINES,
            Tone::Casual => CASUAL_GUIDELINES,
            Tone::Educational => EDUCATIONAL_GUIDELINES,
            Tone::Compelling => COMPELLING_GUIDELINES,
        }
    }
}

/// Builds the invitation email prompt.
///
/// Fails with [`CampaignError::InvalidConfiguration`] when the survey name is
/// blank, or when the educational tone is requested without educational info.
pub fn build_email_prompt(
    survey_name: &str,
    compensation: u32,
    length_of_interview_minutes: u32,
    tone: &str,
    educational_info: Option<&str>,
) -> CampaignResult<String> {
    if survey_name.trim().is_empty() {
        return Err(CampaignError::InvalidConfiguration(
            "Survey name is required.".to_string(),
        ));
    }

    let resolved = Tone::resolve(tone);
    let educational_focus = match resolved {
        Tone::Educational => match educational_info.map(str::trim) {
            Some(info) if !info.is_empty() => Some(info),
            _ => {
                return Err(CampaignError::InvalidConfiguration(
                    "Educational tone selected, but no educational info provided.".to_string(),
                ))
            }
        },
        _ => None,
    };

    let mut prompt = format!(
        "{PERSONA}\n\nSURVEY DETAILS:\n\
         - Survey Name: {survey_name}\n\
         - Compensation: ${compensation} USD\n\
         - Duration: {length_of_interview_minutes} minutes\n\
         - Target Tone: {tone}\n"
    );
    if let Some(info) = educational_focus {
        prompt.push_str(&format!("- Educational Focus: {info}\n"));
    }

    prompt.push('\n');
    prompt.push_str(resolved.guidelines());
    prompt.push_str("\n\n");

    prompt.push_str(&format!(
        "EMAIL REQUIREMENTS:\n\
         1. SUBJECT LINE: Engaging, mentions survey topic and compensation\n\
         2. OPENING: Professional greeting acknowledging expertise\n\
         3. PURPOSE: Clear explanation of survey objective and relevance\n\
         4. VALUE: Why participation matters (beyond compensation)\n\
         5. LOGISTICS: Duration ({length_of_interview_minutes} mins), compensation (${compensation}), participation method\n\
         6. CREDIBILITY: Establish trust and legitimacy\n\
         7. CALL-TO-ACTION: Clear next steps to participate\n\
         8. CLOSING: Professional sign-off with contact info\n\n"
    ));
    prompt.push_str(CONTENT_SPECIFICATIONS);

    Ok(prompt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn includes_campaign_details_and_output_markers() {
        let prompt = build_email_prompt("Heart Health Pulse", 50, 15, "formal", None).unwrap();

        assert!(prompt.contains("- Survey Name: Heart Health Pulse"));
        assert!(prompt.contains("- Compensation: $50 USD"));
        assert!(prompt.contains("- Duration: 15 minutes"));
        assert!(prompt.contains("5. LOGISTICS: Duration (15 mins), compensation ($50)"));
        assert!(prompt.contains("8. CLOSING:"));
        assert!(prompt.contains("- Length: 150-250 words"));
        for marker in ["Subject Line:", "Email Body:", "Signature:"] {
            assert!(prompt.contains(marker), "missing marker {marker}");
        }
    }

    #[test]
    fn unrecognised_tone_uses_formal_guidelines() {
        for tone in ["professional", "whimsical", "", "FORMAL"] {
            let prompt = build_email_prompt("Heart Health Pulse", 50, 15, tone, None).unwrap();
            assert!(prompt.contains(FORMAL_GUIDELINES), "tone {tone:?}");
            assert!(prompt.contains(&format!("- Target Tone: {tone}\n")));
        }
    }

    #[test]
    fn each_known_tone_selects_its_block() {
        let casual = build_email_prompt("Survey", 10, 5, "Casual", None).unwrap();
        assert!(casual.contains(CASUAL_GUIDELINES));
        assert!(!casual.contains(FORMAL_GUIDELINES));

        let compelling = build_email_prompt("Survey", 10, 5, "compelling", None).unwrap();
        assert!(compelling.contains(COMPELLING_GUIDELINES));
    }

    #[test]
    fn educational_tone_requires_info() {
        for info in [None, Some(""), Some("   ")] {
            let err = build_email_prompt("Survey", 10, 5, "educational", info).unwrap_err();
            assert!(matches!(err, CampaignError::InvalidConfiguration(_)));
        }

        let prompt = build_email_prompt(
            "Survey",
            10,
            5,
            "Educational",
            Some("New GLP-1 prescribing guidance"),
        )
        .unwrap();
        assert!(prompt.contains("- Educational Focus: New GLP-1 prescribing guidance"));
        assert!(prompt.contains(EDUCATIONAL_GUIDELINES));
    }

    #[test]
    fn educational_info_is_ignored_for_other_tones() {
        let prompt = build_email_prompt("Survey", 10, 5, "casual", Some("background")).unwrap();
        assert!(!prompt.contains("Educational Focus"));
    }

    #[test]
    fn blank_survey_name_is_rejected() {
        let err = build_email_prompt("  ", 10, 5, "formal", None).unwrap_err();
        assert!(matches!(err, CampaignError::InvalidConfiguration(_)));
    }

    #[test]
    fn prompt_is_deterministic() {
        let a = build_email_prompt("Survey", 10, 5, "casual", None).unwrap();
        let b = build_email_prompt("Survey", 10, 5, "casual", None).unwrap();
        assert_eq!(a, b);
    }
}
