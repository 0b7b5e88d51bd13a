use crate::{model::Model, screen::Screen};

mod statusline;

pub fn render_header<S: Screen>(screen: &mut S, model: &Model) {
    statusline::view(screen, model);
}

pub fn render_document<S: Screen>(screen: &mut S, model: &Model) {
    squint_buffer::view(screen, &model.document, model.theme.text);
}
