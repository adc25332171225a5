use serde::Serialize;

/// Page geometry in logical (CSS) pixels.
///
/// A4 at 96 DPI: 210mm × 297mm → 794 × 1123 px. Width is fixed; content may grow
/// the page past `min_height_px`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PageConfig {
    pub width_px: u32,
    pub min_height_px: u32,
    pub dpi: u32,
}

impl PageConfig {
    pub fn a4() -> Self {
        PageConfig {
            width_px: 794,
            min_height_px: 1123,
            dpi: 96,
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self::a4()
    }
}
