use ratatui::style::Style;

use crate::{model::Document, surface::Surface, view};

pub mod viewport;

pub fn update<S: Surface>(surface: &mut S, document: &mut Document, style: Style) -> bool {
    let (width, height) = surface.size();
    if !viewport::update_by_size(&mut document.view_port, width, height) {
        return false;
    }

    view::view(surface, document, style);

    true
}
