//! CV layout rendering.
//!
//! Pipeline: normalize the raw document, detect its language, pick the template
//! for the theme's layout and wrap the template output in a fixed-width A4 page.
//! Rendering is pure and synchronous; identical inputs yield identical trees.

pub mod language;
pub mod normalize;
pub mod page;
pub mod sections;
pub mod templates;
pub mod tree;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::models::theme::{LayoutKind, Theme};

pub use language::Language;
pub use normalize::ApiOrigin;
pub use page::PageConfig;
pub use tree::Node;

use language::labels_for;
use normalize::normalize;
use sections::{RenderCtx, Sections, TEXT_COLOR};
use templates::template_for;
use tree::{div, text};

/// Output of one render pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedCv {
    pub layout: LayoutKind,
    pub language: Language,
    pub root: Node,
}

impl RenderedCv {
    pub fn to_html(&self) -> String {
        self.root.to_html()
    }

    /// Standalone printable document: one A4 page per sheet, no browser margins.
    pub fn to_document(&self, title: &str) -> String {
        format!(
            concat!(
                "<!DOCTYPE html><html lang=\"{lang}\"><head><meta charset=\"utf-8\">",
                "<title>{title}</title>",
                "<style>@page {{ size: A4; margin: 0 }} body {{ margin: 0 }} ",
                "@media print {{ body {{ -webkit-print-color-adjust: exact; print-color-adjust: exact }} }}",
                "</style></head><body>{body}</body></html>"
            ),
            lang = self.language.code(),
            title = text(title).to_html(),
            body = self.to_html(),
        )
    }
}

/// Renders a raw CV document with a resolved theme.
///
/// Never fails: every document, however sparse, produces a page.
pub fn render_cv(doc: &Value, theme: &Theme, origin: &ApiOrigin, page: &PageConfig) -> RenderedCv {
    let cv = normalize(doc, origin);
    let labels = labels_for(&cv);
    let template = template_for(theme.layout);

    let ctx = RenderCtx {
        cv: &cv,
        theme,
        labels: &labels,
    };
    let content = template.render(Sections::new(ctx));

    let root: Node = div()
        .attr("data-layout", theme.layout.as_str())
        .attr("data-lang", labels.language.code())
        .attr("lang", labels.language.code())
        .style("width", format!("{}px", page.width_px))
        .style("min-height", format!("{}px", page.min_height_px))
        .style("box-sizing", "border-box")
        .style("display", "flex")
        .style("flex-direction", "column")
        .style("overflow", "hidden")
        .style("background", "#ffffff")
        .style("color", TEXT_COLOR)
        .style("font-family", theme.font_family.as_str())
        .style("font-size", "13px")
        .style("line-height", "1.5")
        .children(content)
        .into();

    debug!(
        layout = theme.layout.as_str(),
        accent = theme.accent.as_str(),
        language = labels.language.code(),
        sections = root.section_keys().len(),
        "CV rendered"
    );

    RenderedCv {
        layout: theme.layout,
        language: labels.language,
        root,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::theme::AccentStyle;
    use serde_json::json;

    fn theme(layout: LayoutKind) -> Theme {
        Theme {
            layout,
            ..Default::default()
        }
    }

    fn render(doc: &Value, layout: LayoutKind) -> RenderedCv {
        render_cv(doc, &theme(layout), &ApiOrigin::default(), &PageConfig::a4())
    }

    fn full_doc() -> Value {
        json!({
            "personal_info": {
                "name": "Ada Lovelace",
                "title": "Backend Engineer",
                "email": "ada@example.com",
                "summary": "Engineer focused on distributed systems."
            },
            "experiences": [{
                "position": "Senior Engineer",
                "company": "Analytical Engines",
                "startDate": "2022-01",
                "current": true,
                "description": "• Built the ingest pipeline\n- Led four engineers"
            }],
            "educations": [{"degree": "MSc", "field": "Mathematics", "institution": "UCL"}],
            "skills": ["Rust", "Go"],
            "languages": [{"language": "English", "proficiency": "Native"}],
            "certifications": [{"name": "CKA", "issuer": "CNCF", "issueDate": "2023"}],
            "projects": [{"name": "cvstudio", "link": "github.com/ada/cvstudio"}],
            "interests": ["Chess"],
            "custom_sections": [
                {"title": "Volunteering", "content": "Code club mentor"},
                {"title": "Talks", "content": "RustConf 2024"}
            ]
        })
    }

    // ── page ────────────────────────────────────────────────────────────────

    #[test]
    fn test_root_is_a4_sized() {
        let rendered = render(&full_doc(), LayoutKind::Clean);
        let Node::Element(root) = &rendered.root else {
            panic!("root must be an element");
        };
        assert_eq!(root.style_value("width"), Some("794px"));
        assert_eq!(root.style_value("min-height"), Some("1123px"));
        assert_eq!(root.get_attr("data-layout"), Some("clean"));
        assert_eq!(root.get_attr("data-lang"), Some("en"));
    }

    #[test]
    fn test_render_is_idempotent() {
        for kind in LayoutKind::ALL {
            let a = render(&full_doc(), kind);
            let b = render(&full_doc(), kind);
            assert_eq!(a, b);
            assert_eq!(a.to_html(), b.to_html());
        }
    }

    // ── section omission ────────────────────────────────────────────────────

    #[test]
    fn test_empty_collections_omitted_in_every_layout() {
        let doc = json!({
            "personal_info": {"name": "Ada"},
            "experiences": [{"position": "Engineer", "company": "X"}],
            "languages": [],
            "certifications": [],
            "skills": {}
        });
        for kind in LayoutKind::ALL {
            let rendered = render(&doc, kind);
            let keys = rendered.root.section_keys();
            assert_eq!(keys, vec!["experience"], "layout {}", kind.as_str());
            let headings = rendered.root.find_all(&|e| e.tag == "h2");
            assert_eq!(headings.len(), 1, "layout {}", kind.as_str());
        }
    }

    #[test]
    fn test_empty_document_renders_placeholder_name() {
        for kind in LayoutKind::ALL {
            let rendered = render(&json!({}), kind);
            assert!(rendered.root.section_keys().is_empty());
            let names = rendered.root.find_all(&|e| e.tag == "h1");
            assert_eq!(names.len(), 1);
            assert_eq!(names[0].text_content(), "Your Name");
        }
    }

    // ── dates ───────────────────────────────────────────────────────────────

    fn dates_in(rendered: &RenderedCv) -> Vec<String> {
        rendered
            .root
            .find_all(&|e| e.get_attr("data-role") == Some("dates"))
            .into_iter()
            .map(|e| e.text_content())
            .collect()
    }

    #[test]
    fn test_current_position_dates_follow_language() {
        let en = render(&full_doc(), LayoutKind::Clean);
        assert!(dates_in(&en).contains(&"2022-01 – Present".to_string()));

        let mut doc = full_doc();
        doc["personal_info"]["summary"] =
            json!("Verantwortlich für die Entwicklung und Leitung der Plattform.");
        let de = render(&doc, LayoutKind::Clean);
        assert_eq!(de.language, Language::German);
        assert!(dates_in(&de).contains(&"2022-01 – Heute".to_string()));
    }

    #[test]
    fn test_end_date_only_has_no_separator() {
        let doc = json!({
            "experiences": [{"position": "Engineer", "endDate": "2021-06"}]
        });
        let rendered = render(&doc, LayoutKind::Minimal);
        assert_eq!(dates_in(&rendered), vec!["2021-06"]);
    }

    // ── language ────────────────────────────────────────────────────────────

    #[test]
    fn test_german_document_uses_german_headings() {
        let doc = json!({
            "personal_info": {"summary": "Erfahrung im Bereich Cloud und Planung von Projekten"},
            "experiences": [{"position": "Leiter"}]
        });
        let rendered = render(&doc, LayoutKind::Classic);
        assert_eq!(rendered.language, Language::German);
        let experience = rendered.root.find_section("experience").unwrap();
        let heading = experience.children.first().unwrap().text_content();
        assert_eq!(heading, "Berufserfahrung");
    }

    // ── layout resolution ───────────────────────────────────────────────────

    #[test]
    fn test_unknown_layout_renders_like_classic() {
        let origin = ApiOrigin::default();
        let page = PageConfig::a4();
        let unknown = Theme::from_value(&json!({"layout": "nonexistent"}));
        let classic = Theme::from_value(&json!({"layout": "classic"}));
        assert_eq!(
            render_cv(&full_doc(), &unknown, &origin, &page).to_html(),
            render_cv(&full_doc(), &classic, &origin, &page).to_html()
        );
    }

    #[test]
    fn test_custom_sections_only_in_clean_and_minimal() {
        for kind in LayoutKind::ALL {
            let rendered = render(&full_doc(), kind);
            let customs: Vec<String> = rendered
                .root
                .find_all(&|e| e.get_attr("data-section") == Some("custom"))
                .into_iter()
                .map(|e| e.text_content())
                .collect();
            match kind {
                LayoutKind::Clean | LayoutKind::Minimal => {
                    assert_eq!(customs.len(), 2);
                    assert!(customs[0].contains("Volunteering"));
                    assert!(customs[1].contains("Talks"));
                }
                _ => assert!(customs.is_empty(), "layout {}", kind.as_str()),
            }
        }
    }

    #[test]
    fn test_section_order_per_layout() {
        let order = |kind| render(&full_doc(), kind).root.section_keys().join(",");
        assert_eq!(
            order(LayoutKind::Clean),
            "profile,experience,education,skills,languages,certifications,projects,interests,custom,custom"
        );
        assert_eq!(
            order(LayoutKind::Modern),
            "skills,languages,interests,profile,experience,education,certifications,projects"
        );
        assert_eq!(
            order(LayoutKind::Executive),
            "skills,languages,interests,certifications,profile,experience,education,projects"
        );
    }

    #[test]
    fn test_accent_identical_across_layouts() {
        let origin = ApiOrigin::default();
        let page = PageConfig::a4();
        for accent in AccentStyle::ALL {
            let mut headings = Vec::new();
            for kind in LayoutKind::ALL {
                let theme = Theme {
                    layout: kind,
                    accent,
                    ..Default::default()
                };
                let rendered = render_cv(&full_doc(), &theme, &origin, &page);
                for h2 in rendered.root.find_all(&|e| e.tag == "h2") {
                    assert_eq!(
                        h2.get_attr("data-accent"),
                        Some(accent.as_str()),
                        "layout {}",
                        kind.as_str()
                    );
                }
                let experience = rendered.root.find_section("experience").unwrap();
                let Some(Node::Element(heading)) = experience.children.first() else {
                    panic!("section must start with its heading");
                };
                headings.push(heading.style.clone());
            }
            assert!(headings.windows(2).all(|pair| pair[0] == pair[1]));
        }
    }

    #[test]
    fn test_sidebar_headings_follow_accent() {
        let theme = Theme {
            layout: LayoutKind::Modern,
            accent: AccentStyle::Dot,
            ..Default::default()
        };
        let rendered = render_cv(&full_doc(), &theme, &ApiOrigin::default(), &PageConfig::a4());
        let skills = rendered.root.find_section("skills").unwrap();
        let dots = Node::Element(skills.clone())
            .find_all(&|e| e.get_attr("data-role") == Some("accent-dot"))
            .len();
        assert_eq!(dots, 1);
    }

    // ── interests ───────────────────────────────────────────────────────────

    #[test]
    fn test_interests_free_text_renders_paragraph() {
        let doc = json!({"interests": "Chess and hiking"});
        for kind in LayoutKind::ALL {
            let rendered = render(&doc, kind);
            let section = rendered
                .root
                .find_section("interests")
                .unwrap_or_else(|| panic!("layout {} lost interests", kind.as_str()));
            assert!(section.text_content().contains("Chess and hiking"));
        }
    }

    // ── document ────────────────────────────────────────────────────────────

    #[test]
    fn test_document_sets_print_page_and_escapes_title() {
        let rendered = render(&full_doc(), LayoutKind::Clean);
        let html = rendered.to_document("Ada <CV>");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("@page { size: A4; margin: 0 }"));
        assert!(html.contains("<title>Ada &lt;CV&gt;</title>"));
        assert!(html.contains("data-layout=\"clean\""));
    }

    #[test]
    fn test_photo_url_absolutized() {
        let doc = json!({"personal_info": {"photo": "/uploads/a.jpg", "photoShape": "square"}});
        let rendered = render(&doc, LayoutKind::Modern);
        let photos = rendered
            .root
            .find_all(&|e| e.get_attr("data-role") == Some("photo"));
        assert_eq!(photos.len(), 1);
        assert_eq!(
            photos[0].get_attr("src"),
            Some("http://localhost:8000/uploads/a.jpg")
        );
        assert_eq!(photos[0].style_value("border-radius"), Some("8px"));
    }
}
