use squint_buffer::surface::Surface;
use squint_keymap::message::ViewerEvent;

use crate::error::AppError;

/// Surface that can be flushed to a display and produces input events.
#[allow(async_fn_in_trait)]
pub trait Screen: Surface {
    /// Rereads the display geometry and forces a full repaint on the next
    /// render.
    fn sync(&mut self) -> Result<(), AppError>;

    fn render(&mut self) -> Result<(), AppError>;

    /// Waits for the next event. `None` signals that no further input will
    /// arrive.
    async fn next_event(&mut self) -> Result<Option<ViewerEvent>, AppError>;
}
