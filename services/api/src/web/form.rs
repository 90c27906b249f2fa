//! services/api/src/web/form.rs
//!
//! The campaign form as submitted by the browser, and its validation into a
//! `CampaignRequest`. Validation collects every problem instead of stopping at
//! the first one.

use campaign_core::CampaignRequest;
use serde::Deserialize;
use utoipa::ToSchema;

pub const SURVEY_NAME_ERROR: &str = "Survey name is required and must be at least 3 characters.";
pub const COMPENSATION_ERROR: &str = "Compensation must be a non-negative number.";
pub const LOI_ERROR: &str = "Length of interview must be a positive number.";
pub const EDUCATIONAL_INFO_ERROR: &str = "Educational tone requires educational information.";

const MIN_SURVEY_NAME_CHARS: usize = 3;

/// The raw `application/x-www-form-urlencoded` fields of the campaign form.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct GenerateForm {
    pub survey_name: Option<String>,
    /// Defaults to `general`.
    pub medical_specialty: Option<String>,
    /// Defaults to `professional`, which is written in the formal tone.
    pub tone: Option<String>,
    /// Defaults to `professional`.
    pub image_style: Option<String>,
    /// Whole US dollars.
    pub compensation: Option<String>,
    /// Length of interview in minutes.
    pub loi: Option<String>,
    pub educational_info: Option<String>,
    /// A checkbox: present as `on` when ticked.
    pub include_text: Option<String>,
}

/// Parses a field made only of ASCII digits.
fn parse_whole_number(value: Option<&str>) -> Option<u32> {
    let value = value?.trim();
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn is_checked(value: Option<&str>) -> bool {
    matches!(
        value.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
        Some("on" | "true" | "1" | "yes")
    )
}

impl GenerateForm {
    /// Validates the form, returning every error message found.
    pub fn validate(self) -> Result<CampaignRequest, Vec<String>> {
        let mut errors = Vec::new();

        let survey_name = self
            .survey_name
            .as_deref()
            .map(str::trim)
            .filter(|name| name.chars().count() >= MIN_SURVEY_NAME_CHARS)
            .map(str::to_string);
        if survey_name.is_none() {
            errors.push(SURVEY_NAME_ERROR.to_string());
        }

        let compensation = parse_whole_number(self.compensation.as_deref());
        if compensation.is_none() {
            errors.push(COMPENSATION_ERROR.to_string());
        }

        let loi = parse_whole_number(self.loi.as_deref()).filter(|minutes| *minutes >= 1);
        if loi.is_none() {
            errors.push(LOI_ERROR.to_string());
        }

        let tone = non_blank(self.tone).unwrap_or_else(|| "professional".to_string());
        let educational_info = non_blank(self.educational_info);
        if tone.trim().eq_ignore_ascii_case("educational") && educational_info.is_none() {
            errors.push(EDUCATIONAL_INFO_ERROR.to_string());
        }

        match (survey_name, compensation, loi) {
            (Some(survey_name), Some(compensation), Some(loi)) if errors.is_empty() => {
                Ok(CampaignRequest {
                    survey_name,
                    medical_specialty: non_blank(self.medical_specialty)
                        .unwrap_or_else(|| "general".to_string()),
                    tone,
                    image_style: non_blank(self.image_style)
                        .unwrap_or_else(|| "professional".to_string()),
                    compensation,
                    length_of_interview_minutes: loi,
                    educational_info,
                    include_text_overlay: is_checked(self.include_text.as_deref()),
                })
            }
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(survey_name: &str, compensation: &str, loi: &str) -> GenerateForm {
        GenerateForm {
            survey_name: Some(survey_name.to_string()),
            compensation: Some(compensation.to_string()),
            loi: Some(loi.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn accepts_a_minimal_form_with_defaults() {
        let request = form("Heart Health Pulse", "50", "15").validate().unwrap();

        assert_eq!(request.survey_name, "Heart Health Pulse");
        assert_eq!(request.compensation, 50);
        assert_eq!(request.length_of_interview_minutes, 15);
        assert_eq!(request.medical_specialty, "general");
        assert_eq!(request.tone, "professional");
        assert_eq!(request.image_style, "professional");
        assert!(!request.include_text_overlay);
        assert!(request.educational_info.is_none());
    }

    #[test]
    fn zero_compensation_is_allowed() {
        assert_eq!(form("Survey", "0", "1").validate().unwrap().compensation, 0);
    }

    #[test]
    fn collects_every_error() {
        let errors = GenerateForm::default().validate().unwrap_err();
        assert_eq!(errors, vec![SURVEY_NAME_ERROR, COMPENSATION_ERROR, LOI_ERROR]);
    }

    #[test]
    fn rejects_malformed_numbers() {
        for bad in ["-5", "1.5", "ten", "", "99999999999999"] {
            let errors = form("Survey", bad, "10").validate().unwrap_err();
            assert_eq!(errors, vec![COMPENSATION_ERROR], "compensation {bad:?}");
        }
        let errors = form("Survey", "10", "0").validate().unwrap_err();
        assert_eq!(errors, vec![LOI_ERROR]);
    }

    #[test]
    fn short_survey_names_are_rejected() {
        let errors = form("  ab ", "10", "10").validate().unwrap_err();
        assert_eq!(errors, vec![SURVEY_NAME_ERROR]);
    }

    #[test]
    fn educational_tone_requires_info() {
        let mut f = form("Survey", "10", "10");
        f.tone = Some("Educational".to_string());
        f.educational_info = Some("   ".to_string());
        assert_eq!(f.validate().unwrap_err(), vec![EDUCATIONAL_INFO_ERROR]);

        let mut f = form("Survey", "10", "10");
        f.tone = Some("educational".to_string());
        f.educational_info = Some("Updated lipid guidelines".to_string());
        let request = f.validate().unwrap();
        assert_eq!(request.educational_info.as_deref(), Some("Updated lipid guidelines"));
    }

    #[test]
    fn checkbox_on_enables_text_overlay() {
        let mut f = form("Survey", "10", "10");
        f.include_text = Some("on".to_string());
        assert!(f.validate().unwrap().include_text_overlay);
    }
}
