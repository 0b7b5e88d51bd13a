use squint_buffer::{draw_box, emit_str, mapping, surface::Surface};

use crate::model::Model;

const HEADER_WIDTH: u16 = 42;

pub fn view<S: Surface>(surface: &mut S, model: &Model) {
    let style = model.theme.header;
    let header = model.document.view_port.header;

    draw_box(surface, 1, 1, HEADER_WIDTH, header, style, ' ');
    emit_str(surface, 2, 2, style, "Press Q or ESC to exit.");
    emit_str(surface, 2, 3, style, "Press C to clear screen.");
    emit_str(surface, 2, 4, style, &get_pointer_content(model));
    emit_str(surface, 2, 5, style, &get_offset_content(model));
}

fn get_pointer_content(model: &Model) -> String {
    let (x, y) = match model.pointer {
        Some(position) => (i32::from(position.x), i32::from(position.y)),
        None => (-1, -1),
    };

    format!("Mouse:  {}, {}  ", x, y)
}

fn get_offset_content(model: &Model) -> String {
    let offset = model
        .pointer
        .and_then(|position| mapping::byte_offset(&model.document, position.x, position.y))
        .map_or(-1, |offset| i64::try_from(offset).unwrap_or(i64::MAX));

    format!("Buffer: {}", offset)
}
