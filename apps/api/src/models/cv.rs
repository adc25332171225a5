//! Canonical, strongly-typed view of a CV document.
//!
//! Stored documents are loosely typed and carry several historical spellings of the
//! same field. `layout::normalize` folds them into these types exactly once, so the
//! templates never sniff shapes or aliases at render time.

use serde::Serialize;

use crate::layout::language::LabelKey;

/// Contact and identity block, resolved from `personal_info` or legacy top-level fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub website: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PhotoShape {
    Round,
    Square,
}

/// Profile photo with its URL already absolutized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Photo {
    pub url: String,
    /// Side length in logical pixels.
    pub size_px: f64,
    pub shape: PhotoShape,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    /// Multiline free text; one bullet per non-empty line.
    pub description: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Education {
    pub degree: String,
    pub field: String,
    pub institution: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub grade: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub issue_date: String,
    pub expiry_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LanguageSkill {
    pub language: String,
    pub proficiency: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub link: String,
    pub technologies: Vec<String>,
}

/// A user-defined titled block. Only entries with both parts non-empty survive normalization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomSection {
    pub title: String,
    /// Whitespace is preserved verbatim.
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillCategory {
    pub name: String,
    pub items: Vec<String>,
}

/// Skills after shape resolution.
///
/// `Categorized` keeps the document's category order; templates that render a
/// plain cloud use [`Skills::flattened`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "shape", content = "items", rename_all = "snake_case")]
pub enum Skills {
    Flat(Vec<String>),
    Categorized(Vec<SkillCategory>),
}

impl Default for Skills {
    fn default() -> Self {
        Skills::Flat(Vec::new())
    }
}

impl Skills {
    /// All skill names in display order, categories concatenated.
    pub fn flattened(&self) -> Vec<String> {
        match self {
            Skills::Flat(items) => items.clone(),
            Skills::Categorized(categories) => categories
                .iter()
                .flat_map(|c| c.items.iter().cloned())
                .collect(),
        }
    }

    pub fn categories(&self) -> Option<&[SkillCategory]> {
        match self {
            Skills::Flat(_) => None,
            Skills::Categorized(categories) => Some(categories),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Skills::Flat(items) => items.is_empty(),
            Skills::Categorized(categories) => categories.iter().all(|c| c.items.is_empty()),
        }
    }
}

/// The normalized document every layout template renders from.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CanonicalCv {
    pub personal: PersonalInfo,
    pub summary: String,
    pub photo: Option<Photo>,
    pub experiences: Vec<Experience>,
    pub educations: Vec<Education>,
    pub skills: Skills,
    pub certifications: Vec<Certification>,
    pub languages: Vec<LanguageSkill>,
    pub projects: Vec<Project>,
    pub interests: Vec<String>,
    /// Free-text fallback shown when `interests` is empty.
    pub hobbies: String,
    pub custom_sections: Vec<CustomSection>,
    /// Per-heading overrides from `sectionLabels`, applied after language selection.
    pub label_overrides: Vec<(LabelKey, String)>,
}
