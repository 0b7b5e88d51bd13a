use ratatui::style::{Modifier, Style};

use super::{get_char_width, CharWidth};
use crate::{
    mapping,
    model::{selection::SelectionRect, Document},
    surface::Surface,
};

/// Toggles reverse video on every cell inside `rect`. Cells without style take
/// the surface default first.
pub fn view<S: Surface>(surface: &mut S, rect: &SelectionRect, selected: bool) {
    let default_style = surface.default_style();

    for y in rect.top..=rect.bottom {
        let mut x = rect.left;
        while x <= rect.right {
            let Some(cell) = surface.content(x, y) else {
                break;
            };

            let style = if cell.style == Style::default() {
                default_style
            } else {
                cell.style
            };

            let style = if selected {
                style.add_modifier(Modifier::REVERSED)
            } else {
                style.remove_modifier(Modifier::REVERSED)
            };

            surface.set_content(x, y, cell.main, &cell.combining, style);

            match x.checked_add(cell.width as u16) {
                Some(next) => x = next,
                None => break,
            }
        }
    }
}

/// Repaints `rect` with the document text underneath in `style`. Cells that do
/// not map to text are blanked.
pub fn highlight<S: Surface>(
    surface: &mut S,
    document: &Document,
    rect: &SelectionRect,
    style: Style,
) {
    for y in rect.top..=rect.bottom {
        for x in rect.left..=rect.right {
            let Some(c) = mapping::text_at(document, x, y) else {
                surface.set_content(x, y, ' ', &[], style);
                continue;
            };

            match get_char_width(c) {
                CharWidth::Cells(_) => surface.set_content(x, y, c, &[], style),
                CharWidth::Combining => surface.set_content(x, y, ' ', &[c], style),
                CharWidth::Control => surface.set_content(x, y, ' ', &[], style),
            }
        }
    }
}
