// Render API: live preview and printable documents over the layout engine.
// Handlers are thin; all rendering lives in crate::layout.

pub mod handlers;
