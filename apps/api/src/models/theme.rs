//! Visual theme parameters and their single "apply defaults" step.

use serde::Serialize;
use serde_json::Value;

pub const DEFAULT_PRIMARY_COLOR: &str = "#1a1a1a";
pub const DEFAULT_FONT_FAMILY: &str = "Inter, system-ui, sans-serif";

// ────────────────────────────────────────────────────────────────────────────
// Layout kind
// ────────────────────────────────────────────────────────────────────────────

/// The five whole-page templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutKind {
    Clean,
    Classic,
    Modern,
    Executive,
    Minimal,
}

impl LayoutKind {
    pub const ALL: [LayoutKind; 5] = [
        LayoutKind::Clean,
        LayoutKind::Classic,
        LayoutKind::Modern,
        LayoutKind::Executive,
        LayoutKind::Minimal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutKind::Clean => "clean",
            LayoutKind::Classic => "classic",
            LayoutKind::Modern => "modern",
            LayoutKind::Executive => "executive",
            LayoutKind::Minimal => "minimal",
        }
    }

    /// Exact (case-insensitive) name lookup.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(name))
    }

    /// Theme resolution: an absent or blank value selects `Clean`;
    /// a value naming no known layout takes the banded `Classic` branch.
    pub fn resolve(raw: Option<&str>) -> Self {
        match raw.map(str::trim).filter(|s| !s.is_empty()) {
            None => LayoutKind::Clean,
            Some(name) => Self::from_name(name).unwrap_or(LayoutKind::Classic),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Accent style
// ────────────────────────────────────────────────────────────────────────────

/// Section heading decoration, orthogonal to the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccentStyle {
    Line,
    Badge,
    Dot,
}

impl AccentStyle {
    pub const ALL: [AccentStyle; 3] = [AccentStyle::Line, AccentStyle::Badge, AccentStyle::Dot];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccentStyle::Line => "line",
            AccentStyle::Badge => "badge",
            AccentStyle::Dot => "dot",
        }
    }

    pub fn resolve(raw: Option<&str>) -> Self {
        raw.and_then(|name| {
            Self::ALL
                .into_iter()
                .find(|style| style.as_str().eq_ignore_ascii_case(name.trim()))
        })
        .unwrap_or(AccentStyle::Line)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Theme
// ────────────────────────────────────────────────────────────────────────────

/// Fully-resolved theme. Every field is populated; templates never re-apply defaults.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Theme {
    pub primary_color: String,
    pub font_family: String,
    pub layout: LayoutKind,
    pub accent: AccentStyle,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            primary_color: DEFAULT_PRIMARY_COLOR.to_string(),
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            layout: LayoutKind::Clean,
            accent: AccentStyle::Line,
        }
    }
}

impl Theme {
    /// Builds a theme from a partial, loosely-typed object.
    ///
    /// Missing, mistyped or unusable fields fall back to their defaults; this never fails.
    pub fn from_value(value: &Value) -> Self {
        let field = |key: &str| value.get(key).and_then(Value::as_str);

        Theme {
            primary_color: field("primaryColor")
                .map(str::trim)
                .filter(|c| is_hex_color(c))
                .unwrap_or(DEFAULT_PRIMARY_COLOR)
                .to_string(),
            font_family: field("fontFamily")
                .map(str::trim)
                .filter(|f| is_safe_font_family(f))
                .unwrap_or(DEFAULT_FONT_FAMILY)
                .to_string(),
            layout: LayoutKind::resolve(field("layout")),
            accent: AccentStyle::resolve(field("accentStyle")),
        }
    }
}

/// `#rgb`, `#rrggbb` or `#rrggbbaa`.
fn is_hex_color(s: &str) -> bool {
    let Some(digits) = s.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 6 | 8) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// Font stacks end up inside a `style` attribute; reject anything that could close the declaration.
fn is_safe_font_family(s: &str) -> bool {
    !s.is_empty() && !s.chars().any(|c| matches!(c, ';' | '{' | '}' | '<' | '>' | '\\'))
}
