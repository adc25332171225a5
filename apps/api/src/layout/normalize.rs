//! Folds a loosely-typed CV document into [`CanonicalCv`].
//!
//! Field precedence (first non-empty wins):
//!
//! | canonical   | sources                                                           |
//! |-------------|-------------------------------------------------------------------|
//! | name        | `personal_info.name`, `personal_info.full_name`, `full_name`      |
//! | title       | `personal_info.title`, `personal_info.jobTitle`, `title`          |
//! | email       | `personal_info.email`, `email`                                    |
//! | phone       | `personal_info.phone`, `phone`                                    |
//! | location    | `personal_info.location`, `location`                              |
//! | linkedin    | `personal_info.linkedin`, `personal_info.linkedin_url`, `linkedin_url` |
//! | website     | `personal_info.website`, `website`                                |
//! | summary     | `personal_info.summary`, `profile_summary`, `summary`             |
//! | photo       | `personal_info.photo`, `photo_path`                               |
//! | hobbies     | `personal_info.hobbies`, `hobbies`, `interests` (when a string)   |
//!
//! `personalInfo` is accepted when `personal_info` is absent. Nothing here fails:
//! absent, null or mistyped input degrades to an empty value.

use serde_json::{Map, Value};

use crate::layout::language::LabelKey;
use crate::models::cv::{
    CanonicalCv, Certification, CustomSection, Education, Experience, LanguageSkill,
    PersonalInfo, Photo, PhotoShape, Project, SkillCategory, Skills,
};

pub const DEFAULT_API_ORIGIN: &str = "http://localhost:8000";

/// Pixel sizes behind the photo size keywords.
pub const PHOTO_SIZE_SMALL: f64 = 56.0;
pub const PHOTO_SIZE_MEDIUM: f64 = 76.0;
pub const PHOTO_SIZE_LARGE: f64 = 100.0;

// ────────────────────────────────────────────────────────────────────────────
// API origin / photo URLs
// ────────────────────────────────────────────────────────────────────────────

/// Origin that serves uploaded files, without a trailing `/api` segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiOrigin(String);

impl ApiOrigin {
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim().trim_end_matches('/');
        let origin = trimmed
            .strip_suffix("/api")
            .unwrap_or(trimmed)
            .trim_end_matches('/');
        if origin.is_empty() {
            Self::default()
        } else {
            ApiOrigin(origin.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Rewrites `/uploads/...` and `uploads/...` onto this origin; anything else
    /// (absolute URLs, data URIs) passes through unchanged.
    pub fn resolve_photo(&self, raw: &str) -> String {
        if raw.starts_with("/uploads/") || raw.starts_with("uploads/") {
            format!("{}/{}", self.0, raw.trim_start_matches('/'))
        } else {
            raw.to_string()
        }
    }
}

impl Default for ApiOrigin {
    fn default() -> Self {
        ApiOrigin(DEFAULT_API_ORIGIN.to_string())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Entry point
// ────────────────────────────────────────────────────────────────────────────

pub fn normalize(doc: &Value, origin: &ApiOrigin) -> CanonicalCv {
    let empty = Map::new();
    let root = doc.as_object().unwrap_or(&empty);
    let pi = ["personal_info", "personalInfo"]
        .iter()
        .find_map(|key| root.get(*key).and_then(Value::as_object))
        .unwrap_or(&empty);

    let personal = PersonalInfo {
        name: pick(pi, &["name", "full_name"], root, &["full_name"]),
        title: pick(pi, &["title", "jobTitle"], root, &["title"]),
        email: pick(pi, &["email"], root, &["email"]),
        phone: pick(pi, &["phone"], root, &["phone"]),
        location: pick(pi, &["location"], root, &["location"]),
        linkedin: pick(pi, &["linkedin", "linkedin_url"], root, &["linkedin_url"]),
        website: pick(pi, &["website"], root, &["website"]),
    };

    CanonicalCv {
        personal,
        summary: pick(pi, &["summary"], root, &["profile_summary", "summary"]),
        photo: resolve_photo(pi, root, origin),
        experiences: objects(root, &["experiences", "experience"])
            .map(normalize_experience)
            .collect(),
        educations: objects(root, &["educations", "education"])
            .map(normalize_education)
            .collect(),
        skills: normalize_skills(root.get("skills").unwrap_or(&Value::Null)),
        certifications: objects(root, &["certifications"])
            .map(normalize_certification)
            .collect(),
        languages: objects(root, &["languages"])
            .map(|l| LanguageSkill {
                language: first_text(l, &["language", "name"]),
                proficiency: first_text(l, &["proficiency", "level"]),
            })
            .collect(),
        projects: objects(root, &["projects"]).map(normalize_project).collect(),
        interests: array(root, &["interests"])
            .filter_map(|i| entry_name(i, &["name", "interest"]))
            .collect(),
        hobbies: free_text_interests(pi, root),
        custom_sections: objects(root, &["custom_sections", "customSections"])
            .filter_map(normalize_custom_section)
            .collect(),
        label_overrides: root
            .get("sectionLabels")
            .and_then(Value::as_object)
            .map(|labels| {
                labels
                    .iter()
                    .filter_map(|(key, label)| {
                        let key = LabelKey::from_key(key)?;
                        let label = label.as_str()?.trim();
                        (!label.is_empty()).then(|| (key, label.to_string()))
                    })
                    .collect()
            })
            .unwrap_or_default(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

/// Resolves the three accepted skill shapes.
///
/// A sequence becomes `Flat`; a category mapping becomes `Categorized` (categories
/// whose entries are all empty are dropped). Anything else is an empty flat list.
pub fn normalize_skills(value: &Value) -> Skills {
    match value {
        Value::Array(items) => Skills::Flat(skill_names(items)),
        Value::Object(categories) => {
            let grouped: Vec<SkillCategory> = categories
                .iter()
                .filter_map(|(name, items)| {
                    let items = skill_names(items.as_array()?);
                    (!items.is_empty()).then(|| SkillCategory {
                        name: name.trim().to_string(),
                        items,
                    })
                })
                .collect();
            if grouped.is_empty() {
                Skills::Flat(Vec::new())
            } else {
                Skills::Categorized(grouped)
            }
        }
        _ => Skills::Flat(Vec::new()),
    }
}

fn skill_names(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .filter_map(|item| entry_name(item, &["name"]))
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Collections
// ────────────────────────────────────────────────────────────────────────────

fn normalize_experience(e: &Map<String, Value>) -> Experience {
    let mut description = first_text(e, &["description"]);
    if description.is_empty() {
        // Parsed uploads store bullets as a list instead of a text block.
        description = e
            .get("responsibilities")
            .and_then(Value::as_array)
            .map(|lines| lines.iter().filter_map(text).collect::<Vec<_>>().join("\n"))
            .unwrap_or_default();
    }

    Experience {
        role: first_text(e, &["role", "position", "job_title"]),
        company: first_text(e, &["company", "company_name"]),
        location: first_text(e, &["location"]),
        start_date: first_text(e, &["startDate", "start_date", "start_year"]),
        end_date: first_text(e, &["endDate", "end_date", "end_year"]),
        current: e.get("current").and_then(Value::as_bool).unwrap_or(false),
        description,
        skills: e
            .get("skills")
            .and_then(Value::as_array)
            .map(|items| skill_names(items))
            .unwrap_or_default(),
    }
}

fn normalize_education(e: &Map<String, Value>) -> Education {
    Education {
        degree: first_text(e, &["degree"]),
        field: first_text(e, &["field", "field_of_study"]),
        institution: first_text(e, &["institution", "institution_name"]),
        location: first_text(e, &["location"]),
        start_date: first_text(e, &["startDate", "start_date", "start_year"]),
        end_date: first_text(e, &["endDate", "end_date", "end_year"]),
        grade: first_text(e, &["grade"]),
        description: first_text(e, &["description"]),
    }
}

fn normalize_certification(c: &Map<String, Value>) -> Certification {
    Certification {
        name: first_text(c, &["name"]),
        issuer: first_text(c, &["issuer"]),
        issue_date: first_text(c, &["issueDate", "date", "issue_date"]),
        expiry_date: first_text(c, &["expiryDate", "expiry_date"]),
    }
}

fn normalize_project(p: &Map<String, Value>) -> Project {
    Project {
        name: first_text(p, &["name"]),
        description: first_text(p, &["description"]),
        link: first_text(p, &["link", "url"]),
        technologies: p
            .get("technologies")
            .and_then(Value::as_array)
            .map(|items| skill_names(items))
            .unwrap_or_default(),
    }
}

/// Paragraph shown when there is no interest list. A string-valued `interests`
/// counts only after both `hobbies` fields.
fn free_text_interests(pi: &Map<String, Value>, root: &Map<String, Value>) -> String {
    let hobbies = pick(pi, &["hobbies"], root, &["hobbies"]);
    if !hobbies.is_empty() {
        return hobbies;
    }
    root.get("interests")
        .and_then(Value::as_str)
        .map(str::trim)
        .unwrap_or_default()
        .to_string()
}

fn normalize_custom_section(s: &Map<String, Value>) -> Option<CustomSection> {
    let title = first_text(s, &["title", "name"]);
    // Content keeps its whitespace; only emptiness is judged on the trimmed form.
    let content = ["content", "text"]
        .iter()
        .filter_map(|key| s.get(*key).and_then(Value::as_str))
        .find(|c| !c.trim().is_empty())?
        .to_string();
    (!title.is_empty()).then_some(CustomSection { title, content })
}

// ────────────────────────────────────────────────────────────────────────────
// Photo
// ────────────────────────────────────────────────────────────────────────────

fn resolve_photo(
    pi: &Map<String, Value>,
    root: &Map<String, Value>,
    origin: &ApiOrigin,
) -> Option<Photo> {
    let raw = pick(pi, &["photo"], root, &["photo_path"]);
    if raw.is_empty() {
        return None;
    }

    let setting = |key: &str| pi.get(key).or_else(|| root.get(key));

    Some(Photo {
        url: origin.resolve_photo(&raw),
        size_px: photo_size(setting("photoSize")),
        shape: match setting("photoShape").and_then(Value::as_str) {
            Some(shape) if shape.trim().eq_ignore_ascii_case("square") => PhotoShape::Square,
            _ => PhotoShape::Round,
        },
    })
}

/// Numeric values are pixels; keywords map through small/medium/large; anything else is medium.
pub fn photo_size(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n
            .as_f64()
            .filter(|px| px.is_finite() && *px > 0.0)
            .unwrap_or(PHOTO_SIZE_MEDIUM),
        Some(Value::String(keyword)) => match keyword.trim() {
            "small" => PHOTO_SIZE_SMALL,
            "large" => PHOTO_SIZE_LARGE,
            _ => PHOTO_SIZE_MEDIUM,
        },
        _ => PHOTO_SIZE_MEDIUM,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Loose accessors
// ────────────────────────────────────────────────────────────────────────────

/// Trimmed display text for scalars. Numbers are accepted (years are often stored as integers).
fn text(value: &Value) -> Option<String> {
    let s = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    (!s.is_empty()).then_some(s)
}

fn first_text(obj: &Map<String, Value>, keys: &[&str]) -> String {
    keys.iter()
        .find_map(|key| obj.get(*key).and_then(text))
        .unwrap_or_default()
}

/// Nested keys first, then legacy top-level keys.
fn pick(
    nested: &Map<String, Value>,
    nested_keys: &[&str],
    root: &Map<String, Value>,
    root_keys: &[&str],
) -> String {
    let nested = first_text(nested, nested_keys);
    if nested.is_empty() {
        first_text(root, root_keys)
    } else {
        nested
    }
}

/// A string entry, or an object's first non-empty name field. Falsy entries yield `None`.
fn entry_name(value: &Value, name_keys: &[&str]) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()).filter(|s| !s.is_empty()),
        Value::Object(obj) => Some(first_text(obj, name_keys)).filter(|s| !s.is_empty()),
        _ => None,
    }
}

/// Elements of the first key holding an array.
fn array<'a>(root: &'a Map<String, Value>, keys: &[&str]) -> impl Iterator<Item = &'a Value> {
    keys.iter()
        .find_map(|key| root.get(*key).and_then(Value::as_array))
        .map(|items| items.iter())
        .into_iter()
        .flatten()
}

/// Object elements of the first key holding an array; other elements are skipped.
fn objects<'a>(
    root: &'a Map<String, Value>,
    keys: &[&str],
) -> impl Iterator<Item = &'a Map<String, Value>> {
    array(root, keys).filter_map(Value::as_object)
}
