#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct ScreenPosition {
    pub x: u16,
    pub y: u16,
}

impl ScreenPosition {
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Rectangle of screen cells with `left <= right` and `top <= bottom`. Both
/// edges are inclusive.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct SelectionRect {
    pub bottom: u16,
    pub left: u16,
    pub right: u16,
    pub top: u16,
}

impl SelectionRect {
    pub fn new(first: ScreenPosition, second: ScreenPosition) -> Self {
        let (top, bottom) = if second.y < first.y {
            (second.y, first.y)
        } else {
            (first.y, second.y)
        };

        let (left, right) = if second.x < first.x {
            (second.x, first.x)
        } else {
            (first.x, second.x)
        };

        Self {
            bottom,
            left,
            right,
            top,
        }
    }
}

/// Button state reported with a pointer event.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PointerButtons {
    Held,
    Released,
    WheelOnly,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Selection {
    anchor: Option<ScreenPosition>,
    current: Option<ScreenPosition>,
}

impl Selection {
    pub fn get_anchor(&self) -> Option<ScreenPosition> {
        self.anchor
    }

    /// Rectangle of the in-progress drag, if any.
    pub fn get_active(&self) -> Option<SelectionRect> {
        match (self.anchor, self.current) {
            (Some(anchor), Some(current)) => Some(SelectionRect::new(anchor, current)),
            _ => None,
        }
    }

    /// Feeds a pointer event into the drag state. Returns the committed
    /// rectangle when the buttons are released while a drag is active.
    pub fn update(
        &mut self,
        position: ScreenPosition,
        buttons: PointerButtons,
    ) -> Option<SelectionRect> {
        let mut committed = None;
        match buttons {
            PointerButtons::Held => {
                if self.anchor.is_none() {
                    tracing::trace!("selection started at {:?}", position);
                    self.anchor = Some(position);
                }
                self.current = Some(position);
            }
            PointerButtons::Released => {
                if let Some(anchor) = self.anchor.take() {
                    let rect = SelectionRect::new(anchor, position);
                    tracing::trace!("selection committed: {:?}", rect);

                    committed = Some(rect);
                    self.current = None;
                }
            }
            PointerButtons::WheelOnly => {}
        }

        committed
    }
}

#[cfg(test)]
mod tests {
    use super::{PointerButtons, ScreenPosition, Selection, SelectionRect};

    #[test]
    fn rect_normalizes_rows_and_columns_independently() {
        let rect = SelectionRect::new(ScreenPosition::new(2, 9), ScreenPosition::new(7, 3));

        assert_eq!(2, rect.left);
        assert_eq!(7, rect.right);
        assert_eq!(3, rect.top);
        assert_eq!(9, rect.bottom);
    }

    #[test]
    fn rect_is_identical_for_swapped_corners() {
        let a = ScreenPosition::new(3, 10);
        let b = ScreenPosition::new(5, 12);

        let rect = SelectionRect::new(a, b);
        assert_eq!(rect, SelectionRect::new(b, a));
        assert_eq!((3, 10, 5, 12), (rect.left, rect.top, rect.right, rect.bottom));
    }

    #[test]
    fn update_press_drag_release_commits_rect() {
        let mut selection = Selection::default();

        let press = selection.update(ScreenPosition::new(3, 10), PointerButtons::Held);
        assert_eq!(None, press);
        assert_eq!(Some(ScreenPosition::new(3, 10)), selection.get_anchor());

        let drag = selection.update(ScreenPosition::new(5, 12), PointerButtons::Held);
        assert_eq!(None, drag);
        assert_eq!(
            Some(SelectionRect::new(
                ScreenPosition::new(3, 10),
                ScreenPosition::new(5, 12)
            )),
            selection.get_active()
        );

        let release = selection.update(ScreenPosition::new(5, 12), PointerButtons::Released);
        assert_eq!(
            Some(SelectionRect::new(
                ScreenPosition::new(3, 10),
                ScreenPosition::new(5, 12)
            )),
            release
        );
        assert_eq!(None, selection.get_anchor());
        assert_eq!(None, selection.get_active());
    }

    #[test]
    fn update_keeps_anchor_while_held() {
        let mut selection = Selection::default();
        selection.update(ScreenPosition::new(1, 1), PointerButtons::Held);
        selection.update(ScreenPosition::new(4, 4), PointerButtons::Held);

        assert_eq!(Some(ScreenPosition::new(1, 1)), selection.get_anchor());
    }

    #[test]
    fn update_release_without_anchor_commits_nothing() {
        let mut selection = Selection::default();

        let result = selection.update(ScreenPosition::new(4, 4), PointerButtons::Released);
        assert_eq!(None, result);
    }

    #[test]
    fn update_wheel_does_not_touch_selection() {
        let mut selection = Selection::default();
        selection.update(ScreenPosition::new(1, 1), PointerButtons::Held);

        let result = selection.update(ScreenPosition::new(8, 8), PointerButtons::WheelOnly);
        assert_eq!(None, result);
        assert_eq!(
            Some(SelectionRect::new(
                ScreenPosition::new(1, 1),
                ScreenPosition::new(1, 1)
            )),
            selection.get_active()
        );
    }
}
