use model::{selection::SelectionRect, Document};
use ratatui::style::Style;
use surface::Surface;

pub mod mapping;
pub mod model;
pub mod surface;
mod update;
mod view;

pub use view::{draw_box, emit_str};

/// Repaints the document if the surface size differs from the recorded one.
pub fn update<S: Surface>(surface: &mut S, document: &mut Document, style: Style) -> bool {
    update::update(surface, document, style)
}

pub fn view<S: Surface>(surface: &mut S, document: &Document, style: Style) {
    view::view(surface, document, style)
}

pub fn view_selection<S: Surface>(surface: &mut S, rect: &SelectionRect, selected: bool) {
    view::selection::view(surface, rect, selected)
}

pub fn view_highlight<S: Surface>(
    surface: &mut S,
    document: &Document,
    rect: &SelectionRect,
    style: Style,
) {
    view::selection::highlight(surface, document, rect, style)
}
