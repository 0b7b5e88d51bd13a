/// Screen bookkeeping for a [`super::Document`]. The header margin holds the
/// status box, one border row sits between header and text.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ViewPort {
    pub footer: u16,
    pub header: u16,
    pub height: u16,
    pub width: u16,
}

impl ViewPort {
    pub fn new(width: u16, height: u16, header: u16, footer: u16) -> Self {
        Self {
            footer,
            header,
            height,
            width,
        }
    }

    pub fn get_border_row(&self) -> u16 {
        self.header.saturating_add(1)
    }

    pub fn get_text_row(&self) -> u16 {
        self.header.saturating_add(2)
    }

    pub fn get_visible_rows(&self) -> usize {
        usize::from(
            self.height
                .saturating_sub(self.get_text_row())
                .saturating_sub(self.footer),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::ViewPort;

    #[test]
    fn visible_rows_exclude_header_border_and_footer() {
        let viewport = ViewPort::new(80, 24, 6, 2);

        assert_eq!(7, viewport.get_border_row());
        assert_eq!(8, viewport.get_text_row());
        assert_eq!(14, viewport.get_visible_rows());
    }

    #[test]
    fn visible_rows_saturate_on_tiny_screens() {
        let viewport = ViewPort::new(10, 4, 6, 0);

        assert_eq!(0, viewport.get_visible_rows());
    }
}
