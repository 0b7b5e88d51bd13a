use crate::model::{Document, Location};

/// Maps a screen cell to a location in the document. Column `x - 1` and row
/// `y - header - 2` account for the left border and the border row below the
/// header. The column is checked against the byte length of the line.
pub fn screen_to_location(document: &Document, x: u16, y: u16) -> Option<Location> {
    let header = document.view_port.header;
    if x < 1 || y <= header {
        return None;
    }

    let line_index = usize::from(y.checked_sub(document.view_port.get_text_row())?);
    let line = document.lines.line(line_index)?;

    let column = usize::from(x - 1);
    if column >= line.len() {
        return None;
    }

    Some(Location::new(column, line_index))
}

/// Rune shown under a screen cell.
pub fn text_at(document: &Document, x: u16, y: u16) -> Option<char> {
    let location = screen_to_location(document, x, y)?;
    let line = document.lines.line(location.line)?;

    let start = rune_index_to_byte_index(location.column, line);
    if start >= line.len() {
        return None;
    }

    let length = get_rune_length(&line[start..]);
    String::from_utf8_lossy(&line[start..start + length])
        .chars()
        .next()
}

// NOTE: the column is added as a byte count. Multi byte runes left of the
// pointer shift the reported offset, substring extraction decodes instead.
pub fn byte_offset(document: &Document, x: u16, y: u16) -> Option<usize> {
    let location = screen_to_location(document, x, y)?;

    let preceding: usize = document
        .lines
        .lines()
        .take(location.line)
        .map(|line| line.len() + 1)
        .sum();

    Some(preceding + location.column)
}

/// Byte index after `count` runes of `line`. Invalid sequences count as one
/// rune per byte.
pub fn rune_index_to_byte_index(count: usize, line: &[u8]) -> usize {
    let mut index = 0;
    for _ in 0..count {
        if index >= line.len() {
            break;
        }
        index += get_rune_length(&line[index..]);
    }
    index
}

pub fn rune_count(line: &[u8]) -> usize {
    let mut count = 0;
    let mut index = 0;
    while index < line.len() {
        index += get_rune_length(&line[index..]);
        count += 1;
    }
    count
}

fn get_rune_length(bytes: &[u8]) -> usize {
    let expected = match bytes.first() {
        None => return 0,
        Some(byte) if *byte < 0x80 => return 1,
        Some(byte) if byte & 0xe0 == 0xc0 => 2,
        Some(byte) if byte & 0xf0 == 0xe0 => 3,
        Some(byte) if byte & 0xf8 == 0xf0 => 4,
        Some(_) => return 1,
    };

    match bytes.get(..expected) {
        Some(candidate) if std::str::from_utf8(candidate).is_ok() => expected,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{viewport::ViewPort, Document, LineBuffer, Location};

    use super::*;

    fn document(content: &str, header: u16) -> Document {
        Document::new(
            LineBuffer::new(content.as_bytes()),
            ViewPort::new(80, 24, header, 0),
        )
    }

    #[test]
    fn rune_index_to_byte_index_zero_is_zero() {
        for line in ["", "abc", "\u{e4}\u{f6}", "\u{1f600}"] {
            assert_eq!(0, rune_index_to_byte_index(0, line.as_bytes()));
        }
    }

    #[test]
    fn rune_index_to_byte_index_full_count_is_byte_length() {
        let lines: [&[u8]; 5] = [
            b"",
            b"plain ascii",
            "gr\u{fc}\u{df}e".as_bytes(),
            "\u{1f600}\u{3b1}a".as_bytes(),
            &[b'a', 0xff, 0xc3, b'b'],
        ];

        for line in lines {
            assert_eq!(line.len(), rune_index_to_byte_index(rune_count(line), line));
        }
    }

    #[test]
    fn rune_index_to_byte_index_steps_over_multi_byte_runes() {
        let line = "a\u{e4}\u{1f600}b".as_bytes();

        assert_eq!(1, rune_index_to_byte_index(1, line));
        assert_eq!(3, rune_index_to_byte_index(2, line));
        assert_eq!(7, rune_index_to_byte_index(3, line));
        assert_eq!(8, rune_index_to_byte_index(4, line));
        assert_eq!(8, rune_index_to_byte_index(12, line));
    }

    #[test]
    fn rune_count_treats_invalid_bytes_as_single_runes() {
        assert_eq!(4, rune_count(&[b'a', 0xff, 0xc3, b'b']));
        assert_eq!(3, rune_count("\u{e4}\u{1f600}x".as_bytes()));
    }

    #[test]
    fn screen_to_location_maps_below_header() {
        let document = document("first\nsecond", 6);

        assert_eq!(Some(Location::new(1, 0)), screen_to_location(&document, 2, 8));
        assert_eq!(Some(Location::new(0, 1)), screen_to_location(&document, 1, 9));
    }

    #[test]
    fn screen_to_location_rejects_border_and_header() {
        let document = document("first\nsecond", 6);

        for y in 0..=7 {
            for x in 0..20 {
                assert_eq!(None, screen_to_location(&document, x, y));
            }
        }

        for y in 0..20 {
            assert_eq!(None, screen_to_location(&document, 0, y));
        }
    }

    #[test]
    fn screen_to_location_rejects_outside_text() {
        let document = document("ab\ncde", 6);

        assert_eq!(None, screen_to_location(&document, 3, 8));
        assert_eq!(None, screen_to_location(&document, 1, 10));
    }

    #[test]
    fn screen_to_location_empty_file_has_no_columns() {
        let document = document("", 6);

        for x in 0..10 {
            assert_eq!(None, screen_to_location(&document, x, 8));
        }
    }

    #[test]
    fn text_at_decodes_rune() {
        let document = document("x\u{e4}y\nz", 6);

        assert_eq!(Some('x'), text_at(&document, 1, 8));
        assert_eq!(Some('\u{e4}'), text_at(&document, 2, 8));
        assert_eq!(Some('y'), text_at(&document, 3, 8));
        assert_eq!(Some('z'), text_at(&document, 1, 9));
        assert_eq!(None, text_at(&document, 1, 2));
    }

    #[test]
    fn text_at_past_last_rune_is_none() {
        let document = document("\u{e4}\u{e4}", 6);

        assert_eq!(None, text_at(&document, 3, 8));
    }

    #[test]
    fn byte_offset_sums_preceding_lines() {
        let document = document("ab\ncde\nfghi", 6);

        assert_eq!(Some(0), byte_offset(&document, 1, 8));
        assert_eq!(Some(1), byte_offset(&document, 2, 8));
        assert_eq!(Some(3), byte_offset(&document, 1, 9));
        assert_eq!(Some(9), byte_offset(&document, 3, 10));
        assert_eq!(None, byte_offset(&document, 5, 10));
    }

    #[test]
    fn byte_offset_counts_column_as_bytes() {
        let document = document("\u{e4}b", 6);

        assert_eq!(Some(1), byte_offset(&document, 2, 8));
    }
}
