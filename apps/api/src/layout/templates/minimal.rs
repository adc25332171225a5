use crate::layout::sections::{
    contact_row, display_name, photo, two_column, DegreeJoiner, LanguageArrangement, Sections,
    MUTED_COLOR, TEXT_COLOR,
};
use crate::layout::templates::{LayoutDescriptor, LayoutTemplate};
use crate::layout::tree::{div, Element, Node};
use crate::models::theme::LayoutKind;

/// No band, no sidebar. The primary color appears only as the header rule and accents.
pub struct MinimalLayout;

impl LayoutTemplate for MinimalLayout {
    fn kind(&self) -> LayoutKind {
        LayoutKind::Minimal
    }

    fn descriptor(&self) -> LayoutDescriptor {
        LayoutDescriptor {
            name: LayoutKind::Minimal,
            description: "Plain single column under a thin primary rule",
            sidebar: false,
            header_band: false,
            custom_sections: true,
        }
    }

    fn render(&self, sections: Sections<'_>) -> Vec<Node> {
        let cv = sections.cv();

        let mut identity = div().style("min-width", "0").child(
            Element::new("h1")
                .style("margin", "0")
                .style("font-size", "26px")
                .style("font-weight", "300")
                .style("letter-spacing", "0.02em")
                .style("color", TEXT_COLOR)
                .text(display_name(cv)),
        );
        if !cv.personal.title.is_empty() {
            identity = identity.child(
                div()
                    .attr("data-role", "title")
                    .style("margin", "2px 0 8px")
                    .style("font-size", "14px")
                    .style("color", MUTED_COLOR)
                    .text(cv.personal.title.as_str()),
            );
        }
        identity = identity.maybe(contact_row(&cv.personal, MUTED_COLOR));

        let header = Element::new("header")
            .attr("data-role", "header")
            .style("display", "flex")
            .style("justify-content", "space-between")
            .style("align-items", "flex-end")
            .style("gap", "24px")
            .style("margin", "0 48px")
            .style("padding", "40px 0 16px")
            .style(
                "border-bottom",
                format!("2px solid {}", sections.theme().primary_color),
            )
            .child(identity)
            .maybe(cv.photo.as_ref().map(|p| photo(p, None)));

        let body = div()
            .attr("data-role", "body")
            .style("padding", "24px 48px 40px")
            .maybe(sections.summary())
            .maybe(sections.experience())
            .maybe(sections.education(DegreeJoiner::Dash))
            .maybe(two_column(
                sections.skills(),
                sections.languages(LanguageArrangement::List),
            ))
            .maybe(sections.certifications())
            .maybe(sections.projects())
            .maybe(sections.interests())
            .children(sections.custom_sections());

        vec![header.into(), body.into()]
    }
}
