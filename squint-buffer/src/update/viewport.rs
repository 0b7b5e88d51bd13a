use crate::model::viewport::ViewPort;

/// Records a new screen size. Returns `true` if the size changed.
pub fn update_by_size(viewport: &mut ViewPort, width: u16, height: u16) -> bool {
    if viewport.width == width && viewport.height == height {
        return false;
    }

    tracing::debug!(
        "viewport resized from {}x{} to {}x{}",
        viewport.width,
        viewport.height,
        width,
        height
    );

    viewport.width = width;
    viewport.height = height;

    true
}

#[cfg(test)]
mod tests {
    use super::update_by_size;
    use crate::model::viewport::ViewPort;

    #[test]
    fn update_by_size_unchanged_returns_false() {
        let mut viewport = ViewPort::new(80, 24, 6, 0);

        assert!(!update_by_size(&mut viewport, 80, 24));
    }

    #[test]
    fn update_by_size_records_new_size() {
        let mut viewport = ViewPort::new(80, 24, 6, 0);

        assert!(update_by_size(&mut viewport, 100, 30));
        assert_eq!(ViewPort::new(100, 30, 6, 0), viewport);
    }
}
