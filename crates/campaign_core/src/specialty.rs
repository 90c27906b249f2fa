//! crates/campaign_core/src/specialty.rs
//!
//! The specialty visual profile table. Both the image prompt builder (for the
//! textual description) and the fallback renderer (for literal colours) read
//! from this one table, so a specialty always means the same thing to both.

use image::Rgb;

/// Background, text and accent colours for one specialty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb<u8>,
    pub text: Rgb<u8>,
    pub accent: Rgb<u8>,
}

const fn palette(background: [u8; 3], accent: [u8; 3]) -> Palette {
    Palette {
        background: Rgb(background),
        text: Rgb([0xff, 0xff, 0xff]),
        accent: Rgb(accent),
    }
}

const GENERAL_PALETTE: Palette = palette([0x2d, 0x37, 0x48], [0x42, 0x99, 0xe1]);

#[derive(Debug, PartialEq, Eq)]
pub struct SpecialtyProfile {
    pub key: &'static str,
    pub visual_elements: &'static str,
    pub palette: Palette,
}

pub const GENERAL_KEY: &str = "general";

static PROFILES: &[SpecialtyProfile] = &[
    SpecialtyProfile {
        key: "cardiology",
        visual_elements: "subtle heart imagery, ECG patterns, stethoscope elements, cardiovascular icons",
        palette: palette([0x2c, 0x52, 0x82], [0xe5, 0x3e, 0x3e]),
    },
    SpecialtyProfile {
        key: "oncology",
        visual_elements: "cellular imagery, research lab elements, microscope motifs, hope and healing themes",
        palette: palette([0x55, 0x3c, 0x9a], [0x9f, 0x7a, 0xea]),
    },
    SpecialtyProfile {
        key: "primary_care",
        visual_elements: "diverse patient care imagery, family medicine elements, community health themes",
        palette: palette([0x2d, 0x37, 0x48], [0x48, 0xbb, 0x78]),
    },
    SpecialtyProfile {
        key: "neurology",
        visual_elements: "brain imagery, neural networks, neurological examination tools",
        palette: palette([0x1a, 0x36, 0x5d], [0x42, 0x99, 0xe1]),
    },
    SpecialtyProfile {
        key: "pediatrics",
        visual_elements: "child-friendly colors, pediatric care elements, family-centered themes",
        palette: palette([0x2b, 0x6c, 0xb0], [0xf6, 0xad, 0x55]),
    },
    SpecialtyProfile {
        key: "psychiatry",
        visual_elements: "mental health awareness imagery, brain and mind connection themes",
        palette: GENERAL_PALETTE,
    },
    SpecialtyProfile {
        key: "emergency_medicine",
        visual_elements: "urgent care elements, emergency room themes, critical care imagery",
        palette: GENERAL_PALETTE,
    },
    SpecialtyProfile {
        key: "surgery",
        visual_elements: "surgical precision imagery, OR themes, medical precision elements",
        palette: palette([0x1a, 0x20, 0x2c], [0x38, 0xb2, 0xac]),
    },
    SpecialtyProfile {
        key: "radiology",
        visual_elements: "imaging equipment, scan imagery, diagnostic themes",
        palette: GENERAL_PALETTE,
    },
    SpecialtyProfile {
        key: "pharmacy",
        visual_elements: "pharmaceutical elements, medication management themes",
        palette: GENERAL_PALETTE,
    },
    SpecialtyProfile {
        key: GENERAL_KEY,
        visual_elements: "universal medical symbols, healthcare collaboration imagery, medical professionalism",
        palette: GENERAL_PALETTE,
    },
];

impl SpecialtyProfile {
    /// Finds the profile for `key`, ignoring ASCII case and surrounding whitespace.
    /// Unknown keys resolve to the "general" profile.
    pub fn lookup(key: &str) -> &'static SpecialtyProfile {
        let key = key.trim();
        PROFILES
            .iter()
            .find(|profile| profile.key.eq_ignore_ascii_case(key))
            .unwrap_or_else(Self::general)
    }

    pub fn general() -> &'static SpecialtyProfile {
        // The general entry is always last in the table.
        &PROFILES[PROFILES.len() - 1]
    }

    pub fn all() -> &'static [SpecialtyProfile] {
        PROFILES
    }
}

/// Turns a specialty key such as `primary_care` into `Primary Care`.
pub fn display_name(specialty: &str) -> String {
    specialty
        .trim()
        .split(|c: char| c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(SpecialtyProfile::lookup("Cardiology").key, "cardiology");
        assert_eq!(SpecialtyProfile::lookup("  ONCOLOGY ").key, "oncology");
    }

    #[test]
    fn unknown_specialty_resolves_to_general() {
        let profile = SpecialtyProfile::lookup("dermatology");
        assert_eq!(profile.key, GENERAL_KEY);
        assert_eq!(profile, SpecialtyProfile::general());
        assert_eq!(SpecialtyProfile::lookup("").key, GENERAL_KEY);
    }

    #[test]
    fn specialties_without_their_own_colours_share_the_general_palette() {
        for key in ["psychiatry", "emergency_medicine", "radiology", "pharmacy"] {
            assert_eq!(SpecialtyProfile::lookup(key).palette, GENERAL_PALETTE);
        }
        assert_ne!(SpecialtyProfile::lookup("cardiology").palette, GENERAL_PALETTE);
    }

    #[test]
    fn display_name_title_cases_words() {
        assert_eq!(display_name("primary_care"), "Primary Care");
        assert_eq!(display_name("CARDIOLOGY"), "Cardiology");
        assert_eq!(display_name(""), "");
    }
}
