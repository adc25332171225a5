//! Whole-page layout templates.
//!
//! A template decides page structure and section placement only. Section content
//! comes from the shared [`Sections`] renderers it is handed, so every layout
//! formats dates, bullets and skills identically.

mod classic;
mod clean;
mod executive;
mod minimal;
mod modern;

use serde::Serialize;

use crate::layout::sections::Sections;
use crate::layout::tree::Node;
use crate::models::theme::LayoutKind;

pub use classic::ClassicLayout;
pub use clean::CleanLayout;
pub use executive::ExecutiveLayout;
pub use minimal::MinimalLayout;
pub use modern::ModernLayout;

// ────────────────────────────────────────────────────────────────────────────
// Descriptor
// ────────────────────────────────────────────────────────────────────────────

/// Static facts about a template, served by the layout catalogue endpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutDescriptor {
    pub name: LayoutKind,
    pub description: &'static str,
    /// Has a primary-colored side column.
    pub sidebar: bool,
    /// Has a full-width primary-colored header band.
    pub header_band: bool,
    /// Renders user-defined custom sections.
    pub custom_sections: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// One page layout. Implement this to add a template without touching
/// the renderer or the handlers.
pub trait LayoutTemplate: Send + Sync {
    fn kind(&self) -> LayoutKind;

    fn descriptor(&self) -> LayoutDescriptor;

    /// Page content in document order. The caller wraps it in the sized page root.
    fn render(&self, sections: Sections<'_>) -> Vec<Node>;
}

pub fn template_for(kind: LayoutKind) -> &'static dyn LayoutTemplate {
    match kind {
        LayoutKind::Clean => &CleanLayout,
        LayoutKind::Classic => &ClassicLayout,
        LayoutKind::Modern => &ModernLayout,
        LayoutKind::Executive => &ExecutiveLayout,
        LayoutKind::Minimal => &MinimalLayout,
    }
}

pub fn descriptors() -> Vec<LayoutDescriptor> {
    LayoutKind::ALL
        .into_iter()
        .map(|kind| template_for(kind).descriptor())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_matches_kind() {
        for kind in LayoutKind::ALL {
            let template = template_for(kind);
            assert_eq!(template.kind(), kind);
            assert_eq!(template.descriptor().name, kind);
        }
    }

    #[test]
    fn test_only_clean_and_minimal_take_custom_sections() {
        let with_custom: Vec<LayoutKind> = descriptors()
            .into_iter()
            .filter(|d| d.custom_sections)
            .map(|d| d.name)
            .collect();
        assert_eq!(with_custom, vec![LayoutKind::Clean, LayoutKind::Minimal]);
    }
}
