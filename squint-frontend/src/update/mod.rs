use squint_keymap::message::ViewerEvent;

use crate::{action::ActionResult, error::AppError, model::Model, screen::Screen};

mod key;
mod pointer;

pub fn update_model<S: Screen>(
    screen: &mut S,
    model: &mut Model,
    event: &ViewerEvent,
) -> Result<ActionResult, AppError> {
    match event {
        ViewerEvent::Key(key) => key::update(screen, model, key),
        ViewerEvent::Pointer(event) => {
            pointer::update(screen, model, event);
            Ok(ActionResult::Normal)
        }
        ViewerEvent::Resize(_, _) => {
            screen.sync()?;
            mark_corner(screen, model, 'R');
            Ok(ActionResult::Normal)
        }
    }
}

/// Debug marker in the bottom right cell showing the last event kind.
fn mark_corner<S: Screen>(screen: &mut S, model: &Model, marker: char) {
    let (width, height) = screen.size();
    if let (Some(x), Some(y)) = (width.checked_sub(1), height.checked_sub(1)) {
        screen.set_content(x, y, marker, &[], model.theme.diagnostic);
    }
}
