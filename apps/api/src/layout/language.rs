//! Document language detection and section-heading vocabulary.
//!
//! Detection is a coarse substring heuristic: a lowercase sample of the title,
//! summary and first two experience descriptions is scanned for German marker
//! morphemes. Two or more distinct hits select German; anything less stays English.

use std::borrow::Cow;

use serde::Serialize;

use crate::models::cv::CanonicalCv;

/// German marker words/morphemes, matched as plain substrings of the sample.
pub const GERMAN_MARKERS: [&str; 19] = [
    "erfahrung",
    "kenntnisse",
    "fähigkeiten",
    "verantwortlich",
    "unternehmen",
    "tätigkeiten",
    "entwicklung",
    "aufgaben",
    "bereich",
    "mittels",
    "wurden",
    "wurde",
    "habe",
    "haben",
    "leitung",
    "planung",
    "umsetzung",
    "werkzeug",
    "arbeit",
];

/// Minimum number of distinct marker hits for a German classification.
pub const GERMAN_THRESHOLD: usize = 2;

const SUMMARY_SAMPLE_CHARS: usize = 400;
const DESCRIPTION_SAMPLE_CHARS: usize = 200;
const DESCRIPTIONS_SAMPLED: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "de")]
    German,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::German => "de",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Label keys and sets
// ────────────────────────────────────────────────────────────────────────────

/// Semantic section keys. The discriminant indexes `LabelSet::headings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelKey {
    Profile = 0,
    Experience = 1,
    Education = 2,
    Skills = 3,
    Languages = 4,
    Interests = 5,
    Projects = 6,
    Certifications = 7,
}

impl LabelKey {
    /// Parses a `sectionLabels` key. `summary` is the stored name for the profile section.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim() {
            "profile" | "summary" => Some(LabelKey::Profile),
            "experience" => Some(LabelKey::Experience),
            "education" => Some(LabelKey::Education),
            "skills" => Some(LabelKey::Skills),
            "languages" => Some(LabelKey::Languages),
            "interests" => Some(LabelKey::Interests),
            "projects" => Some(LabelKey::Projects),
            "certifications" => Some(LabelKey::Certifications),
            _ => None,
        }
    }
}

/// Resolved headings plus the per-language fixed phrases.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelSet {
    pub language: Language,
    headings: [Cow<'static, str>; 8],
    /// End-date placeholder for a current position.
    pub present: &'static str,
    /// Prefix of the education grade line.
    pub grade: &'static str,
}

pub const ENGLISH_LABELS: LabelSet = LabelSet {
    language: Language::English,
    headings: [
        Cow::Borrowed("Profile"),
        Cow::Borrowed("Professional Experience"),
        Cow::Borrowed("Education"),
        Cow::Borrowed("Skills"),
        Cow::Borrowed("Languages"),
        Cow::Borrowed("Interests"),
        Cow::Borrowed("Projects"),
        Cow::Borrowed("Certifications"),
    ],
    present: "Present",
    grade: "Grade",
};

pub const GERMAN_LABELS: LabelSet = LabelSet {
    language: Language::German,
    headings: [
        Cow::Borrowed("Profil"),
        Cow::Borrowed("Berufserfahrung"),
        Cow::Borrowed("Bildung"),
        Cow::Borrowed("Fähigkeiten"),
        Cow::Borrowed("Sprachen"),
        Cow::Borrowed("Interessen"),
        Cow::Borrowed("Projekte"),
        Cow::Borrowed("Zertifikate"),
    ],
    present: "Heute",
    grade: "Note",
};

impl LabelSet {
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::English => ENGLISH_LABELS,
            Language::German => GERMAN_LABELS,
        }
    }

    pub fn heading(&self, key: LabelKey) -> &str {
        &self.headings[key as usize]
    }

    /// Replaces individual headings. Blank overrides are ignored.
    pub fn with_overrides(mut self, overrides: &[(LabelKey, String)]) -> Self {
        for (key, label) in overrides {
            let label = label.trim();
            if !label.is_empty() {
                self.headings[*key as usize] = Cow::Owned(label.to_string());
            }
        }
        self
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Detection
// ────────────────────────────────────────────────────────────────────────────

/// Builds the lowercase text sample the detector scans.
pub fn detection_sample(cv: &CanonicalCv) -> String {
    let mut sample = String::new();
    sample.push_str(&cv.personal.title);
    sample.push(' ');
    sample.extend(cv.summary.chars().take(SUMMARY_SAMPLE_CHARS));
    sample.push(' ');
    for exp in cv.experiences.iter().take(DESCRIPTIONS_SAMPLED) {
        sample.extend(exp.description.chars().take(DESCRIPTION_SAMPLE_CHARS));
        sample.push(' ');
    }
    sample.to_lowercase()
}

/// Number of distinct markers present in the sample.
pub fn marker_hits(sample: &str) -> usize {
    GERMAN_MARKERS
        .iter()
        .filter(|marker| sample.contains(*marker))
        .count()
}

pub fn detect_language(cv: &CanonicalCv) -> Language {
    if marker_hits(&detection_sample(cv)) >= GERMAN_THRESHOLD {
        Language::German
    } else {
        Language::English
    }
}

/// Detected label set with the document's own heading overrides applied.
pub fn labels_for(cv: &CanonicalCv) -> LabelSet {
    LabelSet::for_language(detect_language(cv)).with_overrides(&cv.label_overrides)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::cv::Experience;

    fn cv_with_summary(summary: &str) -> CanonicalCv {
        CanonicalCv {
            summary: summary.to_string(),
            ..Default::default()
        }
    }

    fn experience(description: &str) -> Experience {
        Experience {
            description: description.to_string(),
            ..Default::default()
        }
    }

    // ── detect_language ─────────────────────────────────────────────────────

    #[test]
    fn test_german_summary_selects_german() {
        let cv = cv_with_summary("Verantwortlich für die Entwicklung und Leitung von Teams");
        assert_eq!(detect_language(&cv), Language::German);
    }

    #[test]
    fn test_no_markers_selects_english() {
        let cv = cv_with_summary("Backend engineer building distributed systems in Rust");
        assert_eq!(detect_language(&cv), Language::English);
    }

    #[test]
    fn test_single_marker_stays_english() {
        let cv = cv_with_summary("Led the Entwicklung of a payments platform");
        assert_eq!(marker_hits(&detection_sample(&cv)), 1);
        assert_eq!(detect_language(&cv), Language::English);
    }

    #[test]
    fn test_markers_in_title_and_experience_count() {
        let cv = CanonicalCv {
            personal: crate::models::cv::PersonalInfo {
                title: "Leitung IT".to_string(),
                ..Default::default()
            },
            experiences: vec![experience("Planung der Migration")],
            ..Default::default()
        };
        assert_eq!(detect_language(&cv), Language::German);
    }

    #[test]
    fn test_third_experience_not_sampled() {
        let cv = CanonicalCv {
            experiences: vec![
                experience("Built APIs"),
                experience("Ran on-call"),
                experience("Leitung und Planung"),
            ],
            ..Default::default()
        };
        assert_eq!(detect_language(&cv), Language::English);
    }

    #[test]
    fn test_summary_sample_window_is_400_chars() {
        let mut summary = "x".repeat(400);
        summary.push_str(" leitung planung");
        assert_eq!(detect_language(&cv_with_summary(&summary)), Language::English);
    }

    #[test]
    fn test_description_sample_window_is_200_chars() {
        let cv = CanonicalCv {
            experiences: vec![experience(&format!("{} leitung planung", "y".repeat(200)))],
            ..Default::default()
        };
        assert_eq!(detect_language(&cv), Language::English);
    }

    #[test]
    fn test_uppercase_umlaut_markers_match() {
        let cv = cv_with_summary("FÄHIGKEITEN und TÄTIGKEITEN");
        assert_eq!(detect_language(&cv), Language::German);
    }

    // ── LabelSet ────────────────────────────────────────────────────────────

    #[test]
    fn test_label_sets_are_wholesale() {
        let de = labels_for(&cv_with_summary("Erfahrung im Bereich Cloud"));
        assert_eq!(de.heading(LabelKey::Experience), "Berufserfahrung");
        assert_eq!(de.heading(LabelKey::Skills), "Fähigkeiten");
        assert_eq!(de.present, "Heute");

        let en = labels_for(&cv_with_summary("Cloud engineer"));
        assert_eq!(en.heading(LabelKey::Experience), "Professional Experience");
        assert_eq!(en.present, "Present");
    }

    #[test]
    fn test_overrides_replace_single_heading() {
        let cv = CanonicalCv {
            label_overrides: vec![
                (LabelKey::Projects, "Side Projects".to_string()),
                (LabelKey::Skills, "   ".to_string()),
            ],
            ..Default::default()
        };
        let labels = labels_for(&cv);
        assert_eq!(labels.heading(LabelKey::Projects), "Side Projects");
        assert_eq!(labels.heading(LabelKey::Skills), "Skills");
        assert_eq!(labels.heading(LabelKey::Education), "Education");
    }

    #[test]
    fn test_label_key_parsing() {
        assert_eq!(LabelKey::from_key("summary"), Some(LabelKey::Profile));
        assert_eq!(LabelKey::from_key("certifications"), Some(LabelKey::Certifications));
        assert_eq!(LabelKey::from_key("hobbies"), None);
    }
}
