use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};
use unicode_width::UnicodeWidthChar;

#[derive(Clone, Debug, PartialEq)]
pub struct CellContent {
    pub main: char,
    pub combining: Vec<char>,
    pub style: Style,
    pub width: usize,
}

/// Character cell screen the viewer paints on. Writes outside of `size` are
/// ignored. A cell that was never styled reports `Style::default()`.
pub trait Surface {
    fn size(&self) -> (u16, u16);
    fn set_content(&mut self, x: u16, y: u16, main: char, combining: &[char], style: Style);
    fn content(&self, x: u16, y: u16) -> Option<CellContent>;
    fn clear(&mut self);
    fn default_style(&self) -> Style;
    fn set_default_style(&mut self, style: Style);
}

/// Persistent cell store backed by a ratatui buffer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CellGrid {
    buffer: Buffer,
    default_style: Style,
}

impl CellGrid {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            buffer: Buffer::empty(Rect::new(0, 0, width, height)),
            default_style: Style::default(),
        }
    }

    /// Changes the grid size and keeps every cell that is still in range.
    pub fn resize(&mut self, width: u16, height: u16) {
        let area = Rect::new(0, 0, width, height);
        if area == self.buffer.area {
            return;
        }

        let mut resized = Buffer::empty(area);
        let overlap = area.intersection(self.buffer.area);
        for y in overlap.top()..overlap.bottom() {
            for x in overlap.left()..overlap.right() {
                if let (Some(source), Some(target)) =
                    (self.buffer.cell((x, y)), resized.cell_mut((x, y)))
                {
                    *target = source.clone();
                }
            }
        }

        tracing::trace!("resized cell grid to {}x{}", width, height);

        self.buffer = resized;
    }

    pub fn row_text(&self, y: u16) -> String {
        let (width, _) = self.size();
        (0..width)
            .filter_map(|x| self.buffer.cell((x, y)))
            .map(|cell| cell.symbol())
            .collect()
    }
}

impl Surface for CellGrid {
    fn size(&self) -> (u16, u16) {
        (self.buffer.area.width, self.buffer.area.height)
    }

    fn set_content(&mut self, x: u16, y: u16, main: char, combining: &[char], style: Style) {
        let Some(cell) = self.buffer.cell_mut((x, y)) else {
            return;
        };

        let mut symbol = String::from(main);
        symbol.extend(combining);

        cell.reset();
        cell.set_symbol(&symbol);
        cell.set_style(style);

        let width = main.width().unwrap_or(1);
        for offset in 1..width {
            let Some(next) = x.checked_add(offset as u16) else {
                break;
            };

            if let Some(continuation) = self.buffer.cell_mut((next, y)) {
                continuation.reset();
            }
        }
    }

    fn content(&self, x: u16, y: u16) -> Option<CellContent> {
        let cell = self.buffer.cell((x, y))?;

        let mut chars = cell.symbol().chars();
        let main = chars.next().unwrap_or(' ');
        let combining = chars.collect();

        let style = if cell.fg == Color::Reset && cell.bg == Color::Reset && cell.modifier.is_empty()
        {
            Style::default()
        } else {
            Style::default()
                .fg(cell.fg)
                .bg(cell.bg)
                .add_modifier(cell.modifier)
        };

        Some(CellContent {
            main,
            combining,
            style,
            width: main.width().unwrap_or(1).max(1),
        })
    }

    fn clear(&mut self) {
        self.buffer.reset();

        let style = self.default_style;
        for cell in self.buffer.content.iter_mut() {
            cell.set_style(style);
        }
    }

    fn default_style(&self) -> Style {
        self.default_style
    }

    fn set_default_style(&mut self, style: Style) {
        self.default_style = style;
    }
}

impl Widget for &CellGrid {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let overlap = area.intersection(self.buffer.area);
        for y in overlap.top()..overlap.bottom() {
            for x in overlap.left()..overlap.right() {
                if let (Some(source), Some(target)) = (self.buffer.cell((x, y)), buf.cell_mut((x, y)))
                {
                    *target = source.clone();
                }
            }
        }
    }
}
