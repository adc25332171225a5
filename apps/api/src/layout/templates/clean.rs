use crate::layout::sections::{
    contact_row, display_name, photo, DegreeJoiner, LanguageArrangement, Sections, MUTED_COLOR,
    RULE_COLOR, TEXT_COLOR,
};
use crate::layout::templates::{LayoutDescriptor, LayoutTemplate};
use crate::layout::tree::{div, Element, Node};
use crate::models::theme::LayoutKind;

/// Single column on white: header with photo top-right, thin divider, icon headings.
pub struct CleanLayout;

impl LayoutTemplate for CleanLayout {
    fn kind(&self) -> LayoutKind {
        LayoutKind::Clean
    }

    fn descriptor(&self) -> LayoutDescriptor {
        LayoutDescriptor {
            name: LayoutKind::Clean,
            description: "Single column with icon headings and a 3-column language grid",
            sidebar: false,
            header_band: false,
            custom_sections: true,
        }
    }

    fn render(&self, sections: Sections<'_>) -> Vec<Node> {
        let sections = sections.with_icons();
        let cv = sections.cv();

        let mut identity = div().style("min-width", "0").child(
            Element::new("h1")
                .style("margin", "0")
                .style("font-size", "28px")
                .style("font-weight", "700")
                .style("color", TEXT_COLOR)
                .text(display_name(cv)),
        );
        if !cv.personal.title.is_empty() {
            identity = identity.child(
                div()
                    .attr("data-role", "title")
                    .style("margin", "2px 0 8px")
                    .style("font-size", "15px")
                    .style("color", sections.theme().primary_color.as_str())
                    .text(cv.personal.title.as_str()),
            );
        }
        identity = identity.maybe(contact_row(&cv.personal, MUTED_COLOR));

        let header = Element::new("header")
            .attr("data-role", "header")
            .style("display", "flex")
            .style("justify-content", "space-between")
            .style("align-items", "flex-start")
            .style("gap", "24px")
            .style("padding", "40px 48px 16px")
            .child(identity)
            .maybe(cv.photo.as_ref().map(|p| photo(p, None)));

        let divider = Element::new("hr")
            .style("border", "none")
            .style("border-top", format!("1px solid {RULE_COLOR}"))
            .style("margin", "0 48px");

        let body = div()
            .attr("data-role", "body")
            .style("padding", "20px 48px 40px")
            .maybe(sections.summary())
            .maybe(sections.experience())
            .maybe(sections.education(DegreeJoiner::Dash))
            .maybe(sections.skills())
            .maybe(sections.languages(LanguageArrangement::Grid))
            .maybe(sections.certifications())
            .maybe(sections.projects())
            .maybe(sections.interests())
            .children(sections.custom_sections());

        vec![header.into(), divider.into(), body.into()]
    }
}
