use squint_buffer::model::{
    selection::{ScreenPosition, Selection},
    viewport::ViewPort,
    Document, LineBuffer,
};
use squint_keymap::KeyMap;

use crate::settings::{Settings, Theme, MIN_HEADER_HEIGHT};

#[derive(Debug)]
pub struct Model {
    pub document: Document,
    pub keymap: KeyMap,
    pub pointer: Option<ScreenPosition>,
    pub selection: Selection,
    pub theme: Theme,
}

impl Model {
    pub fn new(lines: LineBuffer, settings: &Settings, size: (u16, u16)) -> Self {
        let (width, height) = size;
        let header = settings.header_height.max(MIN_HEADER_HEIGHT);

        Self {
            document: Document::new(
                lines,
                ViewPort::new(width, height, header, settings.footer_height),
            ),
            keymap: KeyMap::default(),
            pointer: None,
            selection: Selection::default(),
            theme: settings.theme.clone(),
        }
    }
}
