//! Shared section renderers.
//!
//! Every template composes these, so the formatting rules for dates, bullets,
//! skills and headings live in exactly one place. A renderer returns `None`
//! when its backing collection is empty; templates never emit empty headings.

use crate::layout::language::{LabelKey, LabelSet};
use crate::layout::tree::{div, span, Element, Node};
use crate::models::cv::{CanonicalCv, Education, Experience, PersonalInfo, Photo, PhotoShape};
use crate::models::theme::{AccentStyle, Theme};

pub const TEXT_COLOR: &str = "#1a1a1a";
pub const MUTED_COLOR: &str = "#6b7280";
pub const RULE_COLOR: &str = "#e5e7eb";
pub const CHIP_BACKGROUND: &str = "#f3f4f6";
pub const ON_BAND_TEXT: &str = "#ffffff";
pub const ON_BAND_MUTED: &str = "rgba(255, 255, 255, 0.8)";
const ON_BAND_CHIP: &str = "rgba(255, 255, 255, 0.15)";

const NAME_PLACEHOLDER: &str = "Your Name";
const DATE_SEPARATOR: &str = " – ";

// ────────────────────────────────────────────────────────────────────────────
// Context and options
// ────────────────────────────────────────────────────────────────────────────

/// Inputs of one render pass.
#[derive(Debug, Clone, Copy)]
pub struct RenderCtx<'a> {
    pub cv: &'a CanonicalCv,
    pub theme: &'a Theme,
    pub labels: &'a LabelSet,
}

/// Background a section is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// White page.
    Paper,
    /// Primary-colored band or sidebar; text is reversed.
    Band,
}

/// Word placed between degree and field in the education heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegreeJoiner {
    Dash,
    In,
}

impl DegreeJoiner {
    fn as_str(&self) -> &'static str {
        match self {
            DegreeJoiner::Dash => "–",
            DegreeJoiner::In => "in",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageArrangement {
    /// Three-column grid of language/proficiency cells.
    Grid,
    /// One row per language, proficiency right-aligned.
    List,
}

// ────────────────────────────────────────────────────────────────────────────
// Formatting rules
// ────────────────────────────────────────────────────────────────────────────

/// `start – end`, or whichever side exists alone. Never a dangling separator.
pub fn date_range(start: &str, end: &str) -> String {
    match (start.is_empty(), end.is_empty()) {
        (false, false) => format!("{start}{DATE_SEPARATOR}{end}"),
        (false, true) => start.to_string(),
        (true, false) => end.to_string(),
        (true, true) => String::new(),
    }
}

/// Date range of a position; a current position ends with the language's "Present".
pub fn experience_dates(exp: &Experience, labels: &LabelSet) -> String {
    let end = if exp.current {
        labels.present
    } else {
        exp.end_date.as_str()
    };
    date_range(&exp.start_date, end)
}

/// Non-empty description lines with any leading bullet or hyphen marker removed.
pub fn description_bullets(description: &str) -> Vec<String> {
    description
        .lines()
        .map(|line| line.trim().trim_start_matches(['•', '-']).trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn degree_heading(edu: &Education, joiner: DegreeJoiner) -> String {
    match (edu.degree.is_empty(), edu.field.is_empty()) {
        (false, false) => format!("{} {} {}", edu.degree, joiner.as_str(), edu.field),
        (false, true) => edu.degree.clone(),
        (true, false) => edu.field.clone(),
        (true, true) => String::new(),
    }
}

pub fn display_name(cv: &CanonicalCv) -> &str {
    if cv.personal.name.is_empty() {
        NAME_PLACEHOLDER
    } else {
        &cv.personal.name
    }
}

/// Present contact fields with their glyphs, in fixed order.
pub fn contact_items(personal: &PersonalInfo) -> Vec<(&'static str, &str)> {
    [
        ("✉", personal.email.as_str()),
        ("☎", personal.phone.as_str()),
        ("📍", personal.location.as_str()),
        ("in", personal.linkedin.as_str()),
        ("🔗", personal.website.as_str()),
    ]
    .into_iter()
    .filter(|(_, value)| !value.is_empty())
    .collect()
}

fn join_present(parts: &[&str], separator: &str) -> String {
    parts
        .iter()
        .copied()
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

// ────────────────────────────────────────────────────────────────────────────
// Standalone building blocks
// ────────────────────────────────────────────────────────────────────────────

/// A section container. `key` becomes `data-section`.
pub fn section(key: &'static str, heading: Node, body: impl IntoIterator<Item = Node>) -> Node {
    div()
        .attr("data-section", key)
        .style("margin-bottom", "16px")
        .child(heading)
        .children(body)
        .into()
}

/// Side-by-side pair. Collapses to the single present side, or nothing.
pub fn two_column(left: Option<Node>, right: Option<Node>) -> Option<Node> {
    match (left, right) {
        (Some(left), Some(right)) => Some(
            div()
                .attr("data-role", "two-column")
                .style("display", "grid")
                .style("grid-template-columns", "1fr 1fr")
                .style("gap", "24px")
                .child(div().child(left))
                .child(div().child(right))
                .into(),
        ),
        (left, right) => left.or(right),
    }
}

pub fn photo(photo: &Photo, border: Option<&str>) -> Node {
    let size = format!("{}px", photo.size_px);
    let radius = match photo.shape {
        PhotoShape::Round => "50%",
        PhotoShape::Square => "8px",
    };
    let mut img = Element::new("img")
        .attr("src", photo.url.as_str())
        .attr("alt", "Profile photo")
        .attr("data-role", "photo")
        .style("width", size.clone())
        .style("height", size)
        .style("border-radius", radius)
        .style("object-fit", "cover")
        .style("flex-shrink", "0");
    if let Some(border) = border {
        img = img.style("border", border);
    }
    img.into()
}

/// Single wrapping row of contact items.
pub fn contact_row(personal: &PersonalInfo, color: &str) -> Option<Node> {
    let items = contact_items(personal);
    if items.is_empty() {
        return None;
    }
    Some(
        div()
            .attr("data-role", "contact")
            .style("display", "flex")
            .style("flex-wrap", "wrap")
            .style("gap", "4px 16px")
            .style("font-size", "12px")
            .style("color", color)
            .children(
                items
                    .into_iter()
                    .map(|(icon, value)| span().text(format!("{icon} {value}")).into()),
            )
            .into(),
    )
}

/// Stacked contact items, for narrow columns.
pub fn contact_list(personal: &PersonalInfo, color: &str) -> Option<Node> {
    let items = contact_items(personal);
    if items.is_empty() {
        return None;
    }
    Some(
        div()
            .attr("data-role", "contact")
            .style("font-size", "11px")
            .style("color", color)
            .style("word-break", "break-word")
            .children(items.into_iter().map(|(icon, value)| {
                div()
                    .style("margin-bottom", "4px")
                    .text(format!("{icon} {value}"))
                    .into()
            }))
            .into(),
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Section renderers
// ────────────────────────────────────────────────────────────────────────────

/// Shared section renderers bound to one render pass.
///
/// Templates receive this as their collaborator and pick which sections to place
/// where. `with_icons` and `on_band` adjust presentation only, never content.
#[derive(Debug, Clone, Copy)]
pub struct Sections<'a> {
    ctx: RenderCtx<'a>,
    icons: bool,
    surface: Surface,
}

impl<'a> Sections<'a> {
    pub fn new(ctx: RenderCtx<'a>) -> Self {
        Sections {
            ctx,
            icons: false,
            surface: Surface::Paper,
        }
    }

    pub fn with_icons(mut self) -> Self {
        self.icons = true;
        self
    }

    pub fn on_band(mut self) -> Self {
        self.surface = Surface::Band;
        self
    }

    pub fn cv(&self) -> &'a CanonicalCv {
        self.ctx.cv
    }

    pub fn theme(&self) -> &'a Theme {
        self.ctx.theme
    }

    fn primary(&self) -> &'a str {
        &self.ctx.theme.primary_color
    }

    fn muted(&self) -> &'static str {
        match self.surface {
            Surface::Paper => MUTED_COLOR,
            Surface::Band => ON_BAND_MUTED,
        }
    }

    // ── Headings ────────────────────────────────────────────────────────────

    pub fn heading(&self, key: LabelKey) -> Node {
        self.heading_text(self.ctx.labels.heading(key), section_icon(Some(key)))
    }

    /// Heading for arbitrary text (custom sections) in the theme's accent style.
    ///
    /// On a band the same accent is drawn in reversed colors; the badge inverts.
    pub fn heading_text(&self, label: &str, icon: &'static str) -> Node {
        let accent = self.ctx.theme.accent;
        let (ink, text_color, badge_fill, badge_text, size) = match self.surface {
            Surface::Paper => (
                self.primary(),
                TEXT_COLOR,
                self.primary(),
                ON_BAND_TEXT,
                "13px",
            ),
            Surface::Band => (
                ON_BAND_TEXT,
                ON_BAND_TEXT,
                ON_BAND_TEXT,
                self.primary(),
                "12px",
            ),
        };

        let mut heading = Element::new("h2")
            .attr("data-accent", accent.as_str())
            .style("margin", "0 0 10px")
            .style("font-size", size)
            .style("font-weight", "700")
            .style("text-transform", "uppercase")
            .style("letter-spacing", "0.08em");
        if self.surface == Surface::Band {
            heading = heading.attr("data-surface", "band");
        }
        if self.icons {
            heading = heading.child(span().style("margin-right", "6px").text(icon));
        }

        match accent {
            AccentStyle::Line => heading
                .style("color", ink)
                .style("border-bottom", format!("1.5px solid {ink}"))
                .style("padding-bottom", "4px")
                .text(label)
                .into(),
            AccentStyle::Badge => heading
                .child(
                    span()
                        .style("display", "inline-block")
                        .style("background", badge_fill)
                        .style("color", badge_text)
                        .style("padding", "3px 10px")
                        .style("border-radius", "4px")
                        .text(label),
                )
                .into(),
            AccentStyle::Dot => heading
                .style("display", "flex")
                .style("align-items", "center")
                .style("gap", "8px")
                .style("color", text_color)
                .child(
                    span()
                        .attr("data-role", "accent-dot")
                        .style("width", "8px")
                        .style("height", "8px")
                        .style("border-radius", "50%")
                        .style("background", ink)
                        .style("flex-shrink", "0"),
                )
                .text(label)
                .into(),
        }
    }

    // ── Text sections ───────────────────────────────────────────────────────

    pub fn summary(&self) -> Option<Node> {
        let summary = &self.ctx.cv.summary;
        if summary.is_empty() {
            return None;
        }
        Some(section(
            "profile",
            self.heading(LabelKey::Profile),
            [Node::from(
                div()
                    .style("line-height", "1.6")
                    .style("white-space", "pre-line")
                    .text(summary.as_str()),
            )],
        ))
    }

    // ── Experience ──────────────────────────────────────────────────────────

    pub fn experience(&self) -> Option<Node> {
        let experiences = &self.ctx.cv.experiences;
        if experiences.is_empty() {
            return None;
        }
        Some(section(
            "experience",
            self.heading(LabelKey::Experience),
            experiences.iter().map(|exp| self.experience_entry(exp)),
        ))
    }

    fn experience_entry(&self, exp: &Experience) -> Node {
        let mut left = div().style("min-width", "0");
        if !exp.role.is_empty() {
            left = left.child(
                div()
                    .attr("data-role", "position")
                    .style("font-weight", "700")
                    .style("font-size", "14px")
                    .text(exp.role.as_str()),
            );
        }
        let secondary = join_present(&[&exp.company, &exp.location], " · ");
        if !secondary.is_empty() {
            left = left.child(div().style("color", self.muted()).text(secondary));
        }

        let mut entry = div()
            .attr("data-entry", "experience")
            .style("margin-bottom", "12px")
            .child(self.entry_header(left, experience_dates(exp, self.ctx.labels)));

        let bullets = description_bullets(&exp.description);
        if !bullets.is_empty() {
            entry = entry.child(bullet_list(bullets));
        }
        if !exp.skills.is_empty() {
            entry = entry.child(self.tag_row(&exp.skills));
        }
        entry.into()
    }

    /// Left block plus right-aligned dates (omitted when empty).
    fn entry_header(&self, left: Element, dates: String) -> Node {
        let dates: Option<Node> = (!dates.is_empty()).then(|| {
            span()
                .attr("data-role", "dates")
                .style("color", self.muted())
                .style("font-size", "12px")
                .style("white-space", "nowrap")
                .style("text-align", "right")
                .text(dates)
                .into()
        });
        div()
            .style("display", "flex")
            .style("justify-content", "space-between")
            .style("align-items", "baseline")
            .style("gap", "12px")
            .child(left)
            .maybe(dates)
            .into()
    }

    // ── Education ───────────────────────────────────────────────────────────

    pub fn education(&self, joiner: DegreeJoiner) -> Option<Node> {
        let educations = &self.ctx.cv.educations;
        if educations.is_empty() {
            return None;
        }
        Some(section(
            "education",
            self.heading(LabelKey::Education),
            educations.iter().map(|edu| self.education_entry(edu, joiner)),
        ))
    }

    fn education_entry(&self, edu: &Education, joiner: DegreeJoiner) -> Node {
        let mut left = div().style("min-width", "0");
        let heading = degree_heading(edu, joiner);
        if !heading.is_empty() {
            left = left.child(
                div()
                    .attr("data-role", "degree")
                    .style("font-weight", "700")
                    .style("font-size", "14px")
                    .text(heading),
            );
        }
        let secondary = join_present(&[&edu.institution, &edu.location], " · ");
        if !secondary.is_empty() {
            left = left.child(div().style("color", self.muted()).text(secondary));
        }

        let mut entry = div()
            .attr("data-entry", "education")
            .style("margin-bottom", "10px")
            .child(self.entry_header(left, date_range(&edu.start_date, &edu.end_date)));
        if !edu.grade.is_empty() {
            entry = entry.child(
                div()
                    .style("color", self.muted())
                    .style("font-size", "12px")
                    .text(format!("{}: {}", self.ctx.labels.grade, edu.grade)),
            );
        }
        if !edu.description.is_empty() {
            entry = entry.child(
                div()
                    .style("margin-top", "2px")
                    .style("font-size", "12px")
                    .style("white-space", "pre-line")
                    .text(edu.description.as_str()),
            );
        }
        entry.into()
    }

    // ── Skills ──────────────────────────────────────────────────────────────

    /// Category groups when the document supplied them, otherwise a pill cloud.
    pub fn skills(&self) -> Option<Node> {
        let skills = &self.ctx.cv.skills;
        if skills.is_empty() {
            return None;
        }
        let body: Node = match skills.categories() {
            Some(categories) => div()
                .attr("data-skills", "grouped")
                .children(categories.iter().map(|category| {
                    let mut row = div().style("margin-bottom", "4px");
                    if !category.name.is_empty() {
                        row = row.child(
                            span()
                                .style("font-weight", "700")
                                .text(format!("{}: ", category.name)),
                        );
                    }
                    row.child(span().text(category.items.join(" · "))).into()
                }))
                .into(),
            None => self.pill_cloud(&skills.flattened(), "flat", true),
        };
        Some(section("skills", self.heading(LabelKey::Skills), [body]))
    }

    fn pill_cloud(&self, items: &[String], kind: &'static str, accented: bool) -> Node {
        let (color, background, border) = match (self.surface, accented) {
            (Surface::Band, _) => (ON_BAND_TEXT, ON_BAND_CHIP, "none".to_string()),
            (Surface::Paper, true) => (
                self.primary(),
                "transparent",
                format!("1px solid {}", self.primary()),
            ),
            (Surface::Paper, false) => (TEXT_COLOR, CHIP_BACKGROUND, "none".to_string()),
        };
        div()
            .attr("data-skills", kind)
            .style("display", "flex")
            .style("flex-wrap", "wrap")
            .style("gap", "6px")
            .children(items.iter().map(|item| {
                span()
                    .attr("data-role", "chip")
                    .style("padding", "2px 10px")
                    .style("border-radius", "999px")
                    .style("font-size", "12px")
                    .style("color", color)
                    .style("background", background)
                    .style("border", border.as_str())
                    .text(item.as_str())
                    .into()
            }))
            .into()
    }

    /// Small square tags, one per item.
    fn tag_row(&self, items: &[String]) -> Node {
        let (color, background) = match self.surface {
            Surface::Paper => (self.primary(), CHIP_BACKGROUND),
            Surface::Band => (ON_BAND_TEXT, ON_BAND_CHIP),
        };
        div()
            .attr("data-role", "entry-skills")
            .style("display", "flex")
            .style("flex-wrap", "wrap")
            .style("gap", "4px")
            .style("margin-top", "4px")
            .children(items.iter().map(|item| {
                span()
                    .attr("data-role", "tag")
                    .style("padding", "1px 6px")
                    .style("border-radius", "4px")
                    .style("font-size", "11px")
                    .style("color", color)
                    .style("background", background)
                    .text(item.as_str())
                    .into()
            }))
            .into()
    }

    // ── Languages ───────────────────────────────────────────────────────────

    pub fn languages(&self, arrangement: LanguageArrangement) -> Option<Node> {
        let languages = &self.ctx.cv.languages;
        if languages.is_empty() {
            return None;
        }
        let body: Node = match arrangement {
            LanguageArrangement::Grid => div()
                .attr("data-languages", "grid")
                .style("display", "grid")
                .style("grid-template-columns", "repeat(3, 1fr)")
                .style("gap", "8px 16px")
                .children(languages.iter().map(|l| {
                    div()
                        .child(div().style("font-weight", "700").text(l.language.as_str()))
                        .child(
                            div()
                                .style("color", self.muted())
                                .style("font-size", "12px")
                                .text(l.proficiency.as_str()),
                        )
                        .into()
                }))
                .into(),
            LanguageArrangement::List => div()
                .attr("data-languages", "list")
                .children(languages.iter().map(|l| {
                    div()
                        .style("display", "flex")
                        .style("justify-content", "space-between")
                        .style("gap", "8px")
                        .style("margin-bottom", "4px")
                        .child(span().style("font-weight", "700").text(l.language.as_str()))
                        .child(
                            span()
                                .style("color", self.muted())
                                .style("font-size", "12px")
                                .text(l.proficiency.as_str()),
                        )
                        .into()
                }))
                .into(),
        };
        Some(section("languages", self.heading(LabelKey::Languages), [body]))
    }

    // ── Certifications ──────────────────────────────────────────────────────

    pub fn certifications(&self) -> Option<Node> {
        let certifications = &self.ctx.cv.certifications;
        if certifications.is_empty() {
            return None;
        }
        Some(section(
            "certifications",
            self.heading(LabelKey::Certifications),
            certifications.iter().map(|cert| {
                let mut left = div()
                    .style("min-width", "0")
                    .child(span().style("font-weight", "700").text(cert.name.as_str()));
                if !cert.issuer.is_empty() {
                    left = left.child(
                        span()
                            .style("color", self.muted())
                            .text(format!(" — {}", cert.issuer)),
                    );
                }
                let mut row = div()
                    .attr("data-entry", "certification")
                    .style("margin-bottom", "6px");
                row = row.child(self.entry_header(
                    left,
                    date_range(&cert.issue_date, &cert.expiry_date),
                ));
                row.into()
            }),
        ))
    }

    // ── Projects ────────────────────────────────────────────────────────────

    pub fn projects(&self) -> Option<Node> {
        let projects = &self.ctx.cv.projects;
        if projects.is_empty() {
            return None;
        }
        Some(section(
            "projects",
            self.heading(LabelKey::Projects),
            projects.iter().map(|project| {
                let mut title = div().child(
                    span()
                        .style("font-weight", "700")
                        .text(project.name.as_str()),
                );
                if !project.link.is_empty() {
                    title = title.child(
                        span()
                            .attr("data-role", "link")
                            .style("margin-left", "8px")
                            .style("font-size", "12px")
                            .style("color", self.primary())
                            .text(project.link.as_str()),
                    );
                }
                let mut entry = div()
                    .attr("data-entry", "project")
                    .style("margin-bottom", "10px")
                    .child(title);
                if !project.description.is_empty() {
                    entry = entry.child(
                        div()
                            .style("color", self.muted())
                            .style("white-space", "pre-line")
                            .text(project.description.as_str()),
                    );
                }
                if !project.technologies.is_empty() {
                    entry = entry.child(
                        div()
                            .style("font-size", "11px")
                            .style("color", self.muted())
                            .text(project.technologies.join(", ")),
                    );
                }
                entry.into()
            }),
        ))
    }

    // ── Interests ───────────────────────────────────────────────────────────

    /// Chips for a list; the free-text hobbies paragraph otherwise.
    pub fn interests(&self) -> Option<Node> {
        let cv = self.ctx.cv;
        let body = if !cv.interests.is_empty() {
            self.pill_cloud(&cv.interests, "interests", false)
        } else if !cv.hobbies.is_empty() {
            div()
                .attr("data-role", "hobbies")
                .style("white-space", "pre-line")
                .text(cv.hobbies.as_str())
                .into()
        } else {
            return None;
        };
        Some(section("interests", self.heading(LabelKey::Interests), [body]))
    }

    // ── Custom sections ─────────────────────────────────────────────────────

    pub fn custom_sections(&self) -> Vec<Node> {
        self.ctx
            .cv
            .custom_sections
            .iter()
            .map(|custom| {
                section(
                    "custom",
                    self.heading_text(&custom.title, section_icon(None)),
                    [Node::from(
                        div()
                            .style("white-space", "pre-wrap")
                            .text(custom.content.as_str()),
                    )],
                )
            })
            .collect()
    }
}

fn bullet_list(lines: Vec<String>) -> Node {
    div()
        .style("margin-top", "4px")
        .children(lines.into_iter().map(|line| {
            div()
                .attr("data-role", "bullet")
                .style("padding-left", "12px")
                .style("text-indent", "-10px")
                .style("margin-bottom", "2px")
                .text(format!("• {line}"))
                .into()
        }))
        .into()
}

/// Emoji shown beside headings in icon-decorated layouts. `None` is a custom section.
fn section_icon(key: Option<LabelKey>) -> &'static str {
    match key {
        Some(LabelKey::Profile) => "👤",
        Some(LabelKey::Experience) => "💼",
        Some(LabelKey::Education) => "🎓",
        Some(LabelKey::Skills) => "⚡",
        Some(LabelKey::Languages) => "🌐",
        Some(LabelKey::Interests) => "🎯",
        Some(LabelKey::Projects) => "🚀",
        Some(LabelKey::Certifications) => "🏆",
        None => "📌",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::language::{ENGLISH_LABELS, GERMAN_LABELS};
    use crate::models::cv::{LanguageSkill, SkillCategory, Skills};

    fn exp(start: &str, end: &str, current: bool) -> Experience {
        Experience {
            start_date: start.to_string(),
            end_date: end.to_string(),
            current,
            ..Default::default()
        }
    }

    fn render_with<F>(cv: &CanonicalCv, theme: &Theme, f: F) -> Option<Node>
    where
        F: Fn(Sections<'_>) -> Option<Node>,
    {
        let ctx = RenderCtx {
            cv,
            theme,
            labels: &ENGLISH_LABELS,
        };
        f(Sections::new(ctx))
    }

    // ── date ranges ─────────────────────────────────────────────────────────

    #[test]
    fn test_current_position_ends_with_present() {
        assert_eq!(
            experience_dates(&exp("2022-01", "", true), &ENGLISH_LABELS),
            "2022-01 – Present"
        );
        assert_eq!(experience_dates(&exp("2022-01", "", true), &GERMAN_LABELS), "2022-01 – Heute");
    }

    #[test]
    fn test_current_overrides_end_date() {
        assert_eq!(
            experience_dates(&exp("2019", "2021", true), &ENGLISH_LABELS),
            "2019 – Present"
        );
    }

    #[test]
    fn test_end_date_alone_has_no_separator() {
        assert_eq!(experience_dates(&exp("", "2021-06", false), &ENGLISH_LABELS), "2021-06");
    }

    #[test]
    fn test_start_date_alone_has_no_separator() {
        assert_eq!(experience_dates(&exp("2021-06", "", false), &ENGLISH_LABELS), "2021-06");
        assert_eq!(date_range("", ""), "");
    }

    #[test]
    fn test_current_without_start_shows_present_only() {
        assert_eq!(experience_dates(&exp("", "", true), &ENGLISH_LABELS), "Present");
    }

    // ── description bullets ─────────────────────────────────────────────────

    #[test]
    fn test_description_markers_stripped() {
        let lines =
            description_bullets("• Built APIs\n\n- Led team\n   \n  Shipped v2  \n--Cut costs");
        assert_eq!(lines, vec!["Built APIs", "Led team", "Shipped v2", "Cut costs"]);
    }

    #[test]
    fn test_description_keeps_inner_hyphens() {
        assert_eq!(description_bullets("- Built a real-time feed"), vec!["Built a real-time feed"]);
    }

    // ── education heading ───────────────────────────────────────────────────

    #[test]
    fn test_degree_heading_joiners() {
        let edu = Education {
            degree: "MSc".to_string(),
            field: "Computer Science".to_string(),
            ..Default::default()
        };
        assert_eq!(degree_heading(&edu, DegreeJoiner::Dash), "MSc – Computer Science");
        assert_eq!(degree_heading(&edu, DegreeJoiner::In), "MSc in Computer Science");

        let no_field = Education {
            degree: "BSc".to_string(),
            ..Default::default()
        };
        assert_eq!(degree_heading(&no_field, DegreeJoiner::In), "BSc");
    }

    // ── headings ────────────────────────────────────────────────────────────

    #[test]
    fn test_accent_styles_mark_heading() {
        let cv = CanonicalCv {
            summary: "Hello".to_string(),
            ..Default::default()
        };
        for accent in AccentStyle::ALL {
            let theme = Theme {
                accent,
                ..Default::default()
            };
            let node = render_with(&cv, &theme, |s| s.summary()).unwrap();
            let headings = node.find_all(&|e| e.tag == "h2");
            assert_eq!(headings.len(), 1);
            assert_eq!(headings[0].get_attr("data-accent"), Some(accent.as_str()));
            assert_eq!(headings[0].text_content(), "Profile");
        }
    }

    #[test]
    fn test_dot_accent_draws_dot_in_primary_color() {
        let cv = CanonicalCv {
            summary: "Hello".to_string(),
            ..Default::default()
        };
        let theme = Theme {
            accent: AccentStyle::Dot,
            primary_color: "#2563eb".to_string(),
            ..Default::default()
        };
        let node = render_with(&cv, &theme, |s| s.summary()).unwrap();
        let dots = node.find_all(&|e| e.get_attr("data-role") == Some("accent-dot"));
        assert_eq!(dots.len(), 1);
        assert_eq!(dots[0].style_value("background"), Some("#2563eb"));
    }

    #[test]
    fn test_band_headings_keep_accent_style() {
        let cv = CanonicalCv {
            skills: Skills::Flat(vec!["Go".to_string()]),
            ..Default::default()
        };
        for accent in AccentStyle::ALL {
            let theme = Theme {
                accent,
                primary_color: "#2563eb".to_string(),
                ..Default::default()
            };
            let node = render_with(&cv, &theme, |s| s.on_band().skills()).unwrap();
            let headings = node.find_all(&|e| e.tag == "h2");
            assert_eq!(headings[0].get_attr("data-accent"), Some(accent.as_str()));
            assert_eq!(headings[0].get_attr("data-surface"), Some("band"));
        }
    }

    #[test]
    fn test_band_badge_is_inverted() {
        let cv = CanonicalCv {
            summary: "Hello".to_string(),
            ..Default::default()
        };
        let theme = Theme {
            accent: AccentStyle::Badge,
            primary_color: "#2563eb".to_string(),
            ..Default::default()
        };
        let node = render_with(&cv, &theme, |s| s.on_band().summary()).unwrap();
        let badge = node.find_all(&|e| e.tag == "span" && e.text_content() == "Profile");
        assert_eq!(badge[0].style_value("background"), Some(ON_BAND_TEXT));
        assert_eq!(badge[0].style_value("color"), Some("#2563eb"));
    }

    // ── experience ──────────────────────────────────────────────────────────

    #[test]
    fn test_experience_skills_render_as_tags() {
        let cv = CanonicalCv {
            experiences: vec![Experience {
                role: "Engineer".to_string(),
                description: "Built APIs".to_string(),
                skills: vec!["Rust".to_string(), "Postgres".to_string()],
                ..Default::default()
            }],
            ..Default::default()
        };
        let node = render_with(&cv, &Theme::default(), |s| s.experience()).unwrap();
        let tags: Vec<String> = node
            .find_all(&|e| e.get_attr("data-role") == Some("tag"))
            .into_iter()
            .map(|e| e.text_content())
            .collect();
        assert_eq!(tags, vec!["Rust", "Postgres"]);

        let entry = node.find_all(&|e| e.get_attr("data-entry") == Some("experience"));
        let Some(Node::Element(last)) = entry[0].children.last() else {
            panic!("entry must have children");
        };
        assert_eq!(last.get_attr("data-role"), Some("entry-skills"));
    }

    // ── skills ──────────────────────────────────────────────────────────────

    #[test]
    fn test_grouped_skills_take_precedence() {
        let cv = CanonicalCv {
            skills: Skills::Categorized(vec![SkillCategory {
                name: "Languages".to_string(),
                items: vec!["Go".to_string(), "Rust".to_string()],
            }]),
            ..Default::default()
        };
        let node = render_with(&cv, &Theme::default(), |s| s.skills()).unwrap();
        assert!(node.find_all(&|e| e.get_attr("data-skills") == Some("flat")).is_empty());
        let grouped = node.find_all(&|e| e.get_attr("data-skills") == Some("grouped"));
        assert_eq!(grouped[0].text_content(), "Languages: Go · Rust");
    }

    #[test]
    fn test_flat_skills_render_as_chips() {
        let cv = CanonicalCv {
            skills: Skills::Flat(vec!["Go".to_string(), "Rust".to_string()]),
            ..Default::default()
        };
        let node = render_with(&cv, &Theme::default(), |s| s.skills()).unwrap();
        let chips = node.find_all(&|e| e.get_attr("data-role") == Some("chip"));
        let names: Vec<String> = chips.iter().map(|c| c.text_content()).collect();
        assert_eq!(names, vec!["Go", "Rust"]);
    }

    // ── omission ────────────────────────────────────────────────────────────

    #[test]
    fn test_empty_collections_render_nothing() {
        let cv = CanonicalCv::default();
        let theme = Theme::default();
        assert!(render_with(&cv, &theme, |s| s.summary()).is_none());
        assert!(render_with(&cv, &theme, |s| s.experience()).is_none());
        assert!(render_with(&cv, &theme, |s| s.education(DegreeJoiner::Dash)).is_none());
        assert!(render_with(&cv, &theme, |s| s.skills()).is_none());
        assert!(render_with(&cv, &theme, |s| s.languages(LanguageArrangement::Grid)).is_none());
        assert!(render_with(&cv, &theme, |s| s.certifications()).is_none());
        assert!(render_with(&cv, &theme, |s| s.projects()).is_none());
        assert!(render_with(&cv, &theme, |s| s.interests()).is_none());
    }

    #[test]
    fn test_hobbies_fallback_when_no_interest_list() {
        let cv = CanonicalCv {
            hobbies: "Hiking and chess".to_string(),
            ..Default::default()
        };
        let node = render_with(&cv, &Theme::default(), |s| s.interests()).unwrap();
        assert_eq!(
            node.find_all(&|e| e.get_attr("data-role") == Some("hobbies")).len(),
            1
        );
    }

    #[test]
    fn test_two_column_collapses() {
        let left: Node = div().text("L").into();
        assert_eq!(two_column(Some(left.clone()), None), Some(left));
        assert!(two_column(None, None).is_none());
    }

    #[test]
    fn test_language_arrangements() {
        let cv = CanonicalCv {
            languages: vec![LanguageSkill {
                language: "German".to_string(),
                proficiency: "C1".to_string(),
            }],
            ..Default::default()
        };
        let theme = Theme::default();
        let grid = render_with(&cv, &theme, |s| s.languages(LanguageArrangement::Grid)).unwrap();
        assert_eq!(grid.find_all(&|e| e.get_attr("data-languages") == Some("grid")).len(), 1);
        let list = render_with(&cv, &theme, |s| s.languages(LanguageArrangement::List)).unwrap();
        assert_eq!(list.find_all(&|e| e.get_attr("data-languages") == Some("list")).len(), 1);
    }
}
