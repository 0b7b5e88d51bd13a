use squint_keymap::{key::Key, message::KeymapMessage};

use crate::{action::ActionResult, error::AppError, model::Model, screen::Screen, view};

pub fn update<S: Screen>(
    screen: &mut S,
    model: &mut Model,
    key: &Key,
) -> Result<ActionResult, AppError> {
    let (width, height) = screen.size();
    if let (Some(x), Some(y)) = (width.checked_sub(2), height.checked_sub(2)) {
        let echo = key.to_char().unwrap_or(' ');
        screen.set_content(x, y, echo, &[], model.theme.diagnostic);
    }
    super::mark_corner(screen, model, 'K');

    let message = match model.keymap.resolve(key) {
        Some(message) => message.clone(),
        None => {
            tracing::trace!("no binding for key {}", key);
            return Ok(ActionResult::Normal);
        }
    };

    tracing::debug!("key {} resolved to {:?}", key, message);

    match message {
        KeymapMessage::ClearScreen => {
            screen.clear();
            view::render_document(screen, model);
        }
        KeymapMessage::Quit => return Ok(ActionResult::Quit),
        KeymapMessage::Sync => screen.sync()?,
    }

    Ok(ActionResult::Normal)
}
