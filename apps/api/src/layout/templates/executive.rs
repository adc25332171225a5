use crate::layout::sections::{
    contact_row, display_name, photo, DegreeJoiner, LanguageArrangement, Sections, ON_BAND_MUTED,
    ON_BAND_TEXT,
};
use crate::layout::templates::{LayoutDescriptor, LayoutTemplate};
use crate::layout::tree::{div, Element, Node};
use crate::models::theme::LayoutKind;

/// Header band over a two-column body split by a primary vertical rule.
pub struct ExecutiveLayout;

impl LayoutTemplate for ExecutiveLayout {
    fn kind(&self) -> LayoutKind {
        LayoutKind::Executive
    }

    fn descriptor(&self) -> LayoutDescriptor {
        LayoutDescriptor {
            name: LayoutKind::Executive,
            description: "Header band and a ruled two-column body",
            sidebar: true,
            header_band: true,
            custom_sections: false,
        }
    }

    fn render(&self, sections: Sections<'_>) -> Vec<Node> {
        let cv = sections.cv();
        let primary = sections.theme().primary_color.as_str();

        let mut identity = div().style("flex", "1").style("min-width", "0").child(
            Element::new("h1")
                .style("margin", "0")
                .style("font-size", "30px")
                .style("font-weight", "700")
                .style("letter-spacing", "0.06em")
                .style("text-transform", "uppercase")
                .style("color", ON_BAND_TEXT)
                .text(display_name(cv)),
        );
        if !cv.personal.title.is_empty() {
            identity = identity.child(
                div()
                    .attr("data-role", "title")
                    .style("margin", "4px 0 10px")
                    .style("font-size", "15px")
                    .style("letter-spacing", "0.04em")
                    .style("color", ON_BAND_MUTED)
                    .text(cv.personal.title.as_str()),
            );
        }
        identity = identity.maybe(contact_row(&cv.personal, ON_BAND_MUTED));

        let band = Element::new("header")
            .attr("data-role", "header-band")
            .style("display", "flex")
            .style("align-items", "center")
            .style("gap", "28px")
            .style("padding", "36px 40px")
            .style("background", primary)
            .style("color", ON_BAND_TEXT)
            .child(identity)
            .maybe(
                cv.photo
                    .as_ref()
                    .map(|p| photo(p, Some("2px solid rgba(255, 255, 255, 0.9)"))),
            );

        let left = div()
            .attr("data-role", "left-column")
            .style("width", "200px")
            .style("flex-shrink", "0")
            .style("padding-right", "20px")
            .maybe(sections.skills())
            .maybe(sections.languages(LanguageArrangement::List))
            .maybe(sections.interests())
            .maybe(sections.certifications());

        let rule = div()
            .attr("data-role", "column-rule")
            .style("width", "2px")
            .style("flex-shrink", "0")
            .style("background", primary);

        let main = div()
            .attr("data-role", "main")
            .style("flex", "1")
            .style("min-width", "0")
            .style("padding-left", "24px")
            .maybe(sections.summary())
            .maybe(sections.experience())
            .maybe(sections.education(DegreeJoiner::Dash))
            .maybe(sections.projects());

        let body = div()
            .attr("data-role", "body")
            .style("display", "flex")
            .style("padding", "28px 40px 40px")
            .child(left)
            .child(rule)
            .child(main);

        vec![band.into(), body.into()]
    }
}
