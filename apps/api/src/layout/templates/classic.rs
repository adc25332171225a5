use crate::layout::sections::{
    contact_row, display_name, photo, two_column, DegreeJoiner, LanguageArrangement, Sections,
    ON_BAND_MUTED, ON_BAND_TEXT,
};
use crate::layout::templates::{LayoutDescriptor, LayoutTemplate};
use crate::layout::tree::{div, Element, Node};
use crate::models::theme::LayoutKind;

const PHOTO_BORDER: &str = "3px solid rgba(255, 255, 255, 0.85)";

/// Full-width primary header band, single body column, skills beside languages.
///
/// Also the fallback for layout names that match no template.
pub struct ClassicLayout;

impl LayoutTemplate for ClassicLayout {
    fn kind(&self) -> LayoutKind {
        LayoutKind::Classic
    }

    fn descriptor(&self) -> LayoutDescriptor {
        LayoutDescriptor {
            name: LayoutKind::Classic,
            description: "Colored header band with skills and languages side by side",
            sidebar: false,
            header_band: true,
            custom_sections: false,
        }
    }

    fn render(&self, sections: Sections<'_>) -> Vec<Node> {
        let cv = sections.cv();

        let mut identity = div().style("min-width", "0").child(
            Element::new("h1")
                .style("margin", "0")
                .style("font-size", "28px")
                .style("font-weight", "700")
                .style("color", ON_BAND_TEXT)
                .text(display_name(cv)),
        );
        if !cv.personal.title.is_empty() {
            identity = identity.child(
                div()
                    .attr("data-role", "title")
                    .style("margin", "2px 0 8px")
                    .style("font-size", "15px")
                    .style("color", ON_BAND_MUTED)
                    .text(cv.personal.title.as_str()),
            );
        }
        identity = identity.maybe(contact_row(&cv.personal, ON_BAND_MUTED));

        let band = Element::new("header")
            .attr("data-role", "header-band")
            .style("display", "flex")
            .style("align-items", "center")
            .style("gap", "24px")
            .style("padding", "32px 48px")
            .style("background", sections.theme().primary_color.as_str())
            .style("color", ON_BAND_TEXT)
            .maybe(cv.photo.as_ref().map(|p| photo(p, Some(PHOTO_BORDER))))
            .child(identity);

        let body = div()
            .attr("data-role", "body")
            .style("padding", "24px 48px 40px")
            .maybe(sections.summary())
            .maybe(sections.experience())
            .maybe(sections.education(DegreeJoiner::In))
            .maybe(two_column(
                sections.skills(),
                sections.languages(LanguageArrangement::List),
            ))
            .maybe(sections.certifications())
            .maybe(sections.projects())
            .maybe(sections.interests());

        vec![band.into(), body.into()]
    }
}
