use std::cmp::Ordering;

use crate::mapping::rune_index_to_byte_index;

use self::viewport::ViewPort;

pub mod selection;
pub mod viewport;

pub const LINE_SEPARATOR: u8 = b'\n';

/// A file loaded for display. Lines are fixed after load, only the view port
/// bookkeeping changes while the viewer runs.
#[derive(Clone, Debug, Default)]
pub struct Document {
    pub lines: LineBuffer,
    pub view_port: ViewPort,
}

impl Document {
    pub fn new(lines: LineBuffer, view_port: ViewPort) -> Self {
        Self { lines, view_port }
    }
}

/// Owned copy of a file split on `\n`. Always holds at least one line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LineBuffer {
    lines: Vec<Vec<u8>>,
}

impl LineBuffer {
    pub fn new(content: &[u8]) -> Self {
        let lines = content
            .split(|byte| *byte == LINE_SEPARATOR)
            .map(<[u8]>::to_vec)
            .collect();

        Self { lines }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, index: usize) -> Option<&[u8]> {
        self.lines.get(index).map(Vec::as_slice)
    }

    pub fn lines(&self) -> impl Iterator<Item = &[u8]> {
        self.lines.iter().map(Vec::as_slice)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.lines.join(&LINE_SEPARATOR)
    }

    /// Text between two locations, columns counted in runes. Returns `None`
    /// if a location points past the last line or `start` comes after `end`.
    pub fn substring(&self, start: &Location, end: &Location) -> Option<String> {
        if start > end {
            return None;
        }

        let start_line = self.line(start.line)?;
        let end_line = self.line(end.line)?;

        let start_index = rune_index_to_byte_index(start.column, start_line);
        let end_index = rune_index_to_byte_index(end.column, end_line);

        if start.line == end.line {
            return Some(String::from_utf8_lossy(&start_line[start_index..end_index]).into_owned());
        }

        let mut result = Vec::new();
        result.extend_from_slice(&start_line[start_index..]);
        result.push(LINE_SEPARATOR);
        for line in self.lines.iter().take(end.line).skip(start.line + 1) {
            result.extend_from_slice(line);
            result.push(LINE_SEPARATOR);
        }
        result.extend_from_slice(&end_line[..end_index]);

        Some(String::from_utf8_lossy(&result).into_owned())
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new(&[])
    }
}

/// Position inside a [`LineBuffer`]. `column` counts runes, `line` is the line
/// index. Both zero based.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Location {
    pub column: usize,
    pub line: usize,
}

impl Location {
    pub fn new(column: usize, line: usize) -> Self {
        Self { column, line }
    }
}

impl Ord for Location {
    fn cmp(&self, other: &Self) -> Ordering {
        self.line
            .cmp(&other.line)
            .then(self.column.cmp(&other.column))
    }
}

impl PartialOrd for Location {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
