use squint_buffer::model::selection::{PointerButtons, ScreenPosition};
use squint_keymap::message::{ButtonMask, PointerEvent};

use crate::{model::Model, screen::Screen};

pub fn update<S: Screen>(screen: &mut S, model: &mut Model, event: &PointerEvent) {
    let position = ScreenPosition::new(event.x, event.y);

    let committed = model
        .selection
        .update(position, to_pointer_buttons(&event.buttons));

    if let Some(rect) = committed {
        squint_buffer::view_highlight(screen, &model.document, &rect, model.theme.selected);
    }

    super::mark_corner(screen, model, 'M');
    model.pointer = Some(position);
}

fn to_pointer_buttons(mask: &ButtonMask) -> PointerButtons {
    if !mask.buttons_only().is_none() {
        PointerButtons::Held
    } else if mask.is_none() {
        PointerButtons::Released
    } else {
        PointerButtons::WheelOnly
    }
}
