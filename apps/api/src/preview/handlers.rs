//! Axum route handlers for the Render API.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::layout::templates::{descriptors, template_for, LayoutDescriptor};
use crate::layout::{render_cv, Language, Node, PageConfig, RenderedCv};
use crate::models::theme::{AccentStyle, LayoutKind, Theme};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    pub cv: Value,
    #[serde(default)]
    pub theme: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct RenderResponse {
    pub layout: LayoutKind,
    pub language: Language,
    pub page: PageConfig,
    pub html: String,
    pub tree: Node,
}

#[derive(Debug, Serialize)]
pub struct LayoutCatalogue {
    pub layouts: Vec<LayoutDescriptor>,
    pub accent_styles: Vec<AccentStyle>,
    pub defaults: Theme,
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

/// Request theme first, then the theme stored on the document, then defaults.
fn resolve_theme(request: &RenderRequest) -> Theme {
    match &request.theme {
        Some(theme) if !theme.is_null() => Theme::from_value(theme),
        _ => request
            .cv
            .get("theme")
            .map(Theme::from_value)
            .unwrap_or_default(),
    }
}

fn render_request(
    state: &AppState,
    payload: Result<Json<RenderRequest>, JsonRejection>,
) -> Result<RenderedCv, AppError> {
    let Json(request) = payload?;
    if !request.cv.is_object() {
        return Err(AppError::Validation("cv must be a JSON object".to_string()));
    }

    let theme = resolve_theme(&request);
    let rendered = render_cv(&request.cv, &theme, &state.origin, &state.page);
    info!(
        layout = rendered.layout.as_str(),
        language = rendered.language.code(),
        "Rendered CV"
    );
    Ok(rendered)
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/render
///
/// Returns the page as an HTML fragment plus the retained tree it came from.
pub async fn handle_render(
    State(state): State<AppState>,
    payload: Result<Json<RenderRequest>, JsonRejection>,
) -> Result<Json<RenderResponse>, AppError> {
    let rendered = render_request(&state, payload)?;
    Ok(Json(RenderResponse {
        layout: rendered.layout,
        language: rendered.language,
        page: state.page,
        html: rendered.to_html(),
        tree: rendered.root,
    }))
}

/// POST /api/v1/render/html
///
/// Complete printable HTML document for print-to-PDF.
pub async fn handle_render_html(
    State(state): State<AppState>,
    payload: Result<Json<RenderRequest>, JsonRejection>,
) -> Result<Html<String>, AppError> {
    let rendered = render_request(&state, payload)?;
    let name = rendered
        .root
        .find_all(&|e| e.tag == "h1")
        .first()
        .map(|h1| h1.text_content())
        .unwrap_or_default();
    Ok(Html(rendered.to_document(&format!("{name} – CV"))))
}

/// GET /api/v1/layouts
pub async fn handle_list_layouts() -> Json<LayoutCatalogue> {
    Json(LayoutCatalogue {
        layouts: descriptors(),
        accent_styles: AccentStyle::ALL.to_vec(),
        defaults: Theme::default(),
    })
}

/// GET /api/v1/layouts/:name
pub async fn handle_get_layout(
    Path(name): Path<String>,
) -> Result<Json<LayoutDescriptor>, AppError> {
    let kind = LayoutKind::from_name(&name)
        .ok_or_else(|| AppError::NotFound(format!("Layout '{name}' not found")))?;
    Ok(Json(template_for(kind).descriptor()))
}
