use crate::layout::sections::{
    contact_list, display_name, photo, DegreeJoiner, LanguageArrangement, Sections, ON_BAND_MUTED,
    ON_BAND_TEXT,
};
use crate::layout::templates::{LayoutDescriptor, LayoutTemplate};
use crate::layout::tree::{div, Element, Node};
use crate::models::theme::LayoutKind;

const SIDEBAR_WIDTH: &str = "220px";

/// Primary-colored left sidebar with identity and short lists; narrative on the right.
pub struct ModernLayout;

impl LayoutTemplate for ModernLayout {
    fn kind(&self) -> LayoutKind {
        LayoutKind::Modern
    }

    fn descriptor(&self) -> LayoutDescriptor {
        LayoutDescriptor {
            name: LayoutKind::Modern,
            description: "Colored sidebar with photo, contact, skills and languages",
            sidebar: true,
            header_band: false,
            custom_sections: false,
        }
    }

    fn render(&self, sections: Sections<'_>) -> Vec<Node> {
        let cv = sections.cv();
        let band = sections.on_band();

        let mut sidebar = Element::new("aside")
            .attr("data-role", "sidebar")
            .style("width", SIDEBAR_WIDTH)
            .style("flex-shrink", "0")
            .style("box-sizing", "border-box")
            .style("padding", "32px 20px")
            .style("background", sections.theme().primary_color.as_str())
            .style("color", ON_BAND_TEXT);
        if let Some(p) = cv.photo.as_ref() {
            sidebar = sidebar.child(
                div()
                    .style("display", "flex")
                    .style("justify-content", "center")
                    .style("margin-bottom", "16px")
                    .child(photo(p, Some("3px solid rgba(255, 255, 255, 0.85)"))),
            );
        }
        sidebar = sidebar.child(
            Element::new("h1")
                .style("margin", "0")
                .style("font-size", "22px")
                .style("font-weight", "700")
                .style("line-height", "1.2")
                .style("color", ON_BAND_TEXT)
                .text(display_name(cv)),
        );
        if !cv.personal.title.is_empty() {
            sidebar = sidebar.child(
                div()
                    .attr("data-role", "title")
                    .style("margin", "4px 0 16px")
                    .style("font-size", "13px")
                    .style("color", ON_BAND_MUTED)
                    .text(cv.personal.title.as_str()),
            );
        }
        sidebar = sidebar
            .maybe(contact_list(&cv.personal, ON_BAND_MUTED))
            .child(div().style("height", "16px"))
            .maybe(band.skills())
            .maybe(band.languages(LanguageArrangement::List))
            .maybe(band.interests());

        let main = Element::new("main")
            .attr("data-role", "main")
            .style("flex", "1")
            .style("min-width", "0")
            .style("padding", "32px 32px 40px")
            .maybe(sections.summary())
            .maybe(sections.experience())
            .maybe(sections.education(DegreeJoiner::In))
            .maybe(sections.certifications())
            .maybe(sections.projects());

        vec![div()
            .style("display", "flex")
            .style("flex", "1")
            .child(sidebar)
            .child(main)
            .into()]
    }
}
