use ratatui::style::Style;
use unicode_width::UnicodeWidthChar;

use crate::{
    model::{Document, LineBuffer},
    surface::Surface,
};

pub mod selection;

const HORIZONTAL: char = '─';
const VERTICAL: char = '│';
const TOP_LEFT: char = '┌';
const TOP_RIGHT: char = '┐';
const BOTTOM_LEFT: char = '└';
const BOTTOM_RIGHT: char = '┘';

/// Paints the bordered text box and every line that fits below the header.
pub fn view<S: Surface>(surface: &mut S, document: &Document, style: Style) {
    let viewport = &document.view_port;

    let width = get_max_line_width(&document.lines);
    let line_count = u16::try_from(document.lines.line_count()).unwrap_or(u16::MAX);

    draw_box(
        surface,
        0,
        viewport.get_border_row(),
        width.saturating_add(1),
        viewport.get_text_row().saturating_add(line_count),
        style,
        ' ',
    );

    let top = viewport.get_text_row();
    for (row, line) in document
        .lines
        .lines()
        .take(viewport.get_visible_rows())
        .enumerate()
    {
        let Some(y) = u16::try_from(row)
            .ok()
            .and_then(|row| top.checked_add(row))
        else {
            break;
        };

        emit_str(surface, 1, y, style, &String::from_utf8_lossy(line));
    }
}

/// Writes `text` starting at `x`. Wide runes take two cells, zero width runes
/// are placed as combining mark on a blank cell.
pub fn emit_str<S: Surface>(surface: &mut S, x: u16, y: u16, style: Style, text: &str) {
    let (width, _) = surface.size();

    let mut x = x;
    for c in text.chars() {
        if x >= width {
            break;
        }

        let advance = match get_char_width(c) {
            CharWidth::Cells(cells) => {
                surface.set_content(x, y, c, &[], style);
                cells
            }
            CharWidth::Combining => {
                surface.set_content(x, y, ' ', &[c], style);
                1
            }
            CharWidth::Control => {
                surface.set_content(x, y, ' ', &[], style);
                1
            }
        };

        x = x.saturating_add(advance);
    }
}

pub fn draw_box<S: Surface>(
    surface: &mut S,
    x1: u16,
    y1: u16,
    x2: u16,
    y2: u16,
    style: Style,
    fill: char,
) {
    let (top, bottom) = if y2 < y1 { (y2, y1) } else { (y1, y2) };
    let (left, right) = if x2 < x1 { (x2, x1) } else { (x1, x2) };

    // NOTE: only cells inside the surface are walked
    let (width, height) = surface.size();
    let inner_right = right.min(width);
    let inner_bottom = bottom.min(height);

    for x in left..=right.min(width.saturating_sub(1)) {
        surface.set_content(x, top, HORIZONTAL, &[], style);
        surface.set_content(x, bottom, HORIZONTAL, &[], style);
    }

    for y in top.saturating_add(1)..inner_bottom {
        surface.set_content(left, y, VERTICAL, &[], style);
        surface.set_content(right, y, VERTICAL, &[], style);
    }

    if top != bottom && left != right {
        surface.set_content(left, top, TOP_LEFT, &[], style);
        surface.set_content(right, top, TOP_RIGHT, &[], style);
        surface.set_content(left, bottom, BOTTOM_LEFT, &[], style);
        surface.set_content(right, bottom, BOTTOM_RIGHT, &[], style);
    }

    for y in top.saturating_add(1)..inner_bottom {
        for x in left.saturating_add(1)..inner_right {
            surface.set_content(x, y, fill, &[], style);
        }
    }
}

enum CharWidth {
    Cells(u16),
    Combining,
    Control,
}

fn get_char_width(c: char) -> CharWidth {
    if c.is_control() {
        return CharWidth::Control;
    }

    match c.width() {
        Some(0) => CharWidth::Combining,
        Some(width) => CharWidth::Cells(width as u16),
        None => CharWidth::Control,
    }
}

fn get_max_line_width(lines: &LineBuffer) -> u16 {
    lines
        .lines()
        .map(|line| {
            String::from_utf8_lossy(line)
                .chars()
                .map(|c| match get_char_width(c) {
                    CharWidth::Cells(cells) => usize::from(cells),
                    CharWidth::Combining | CharWidth::Control => 1,
                })
                .sum::<usize>()
        })
        .max()
        .map(|width| u16::try_from(width).unwrap_or(u16::MAX))
        .unwrap_or_default()
}
