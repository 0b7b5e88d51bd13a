use std::ops::BitOr;

use crate::key::Key;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ViewerEvent {
    Key(Key),
    Pointer(PointerEvent),
    Resize(u16, u16),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PointerEvent {
    pub x: u16,
    pub y: u16,
    pub buttons: ButtonMask,
}

/// Buttons held during a pointer event. Physical buttons use the low byte,
/// wheel directions sit above it.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct ButtonMask(u16);

impl ButtonMask {
    pub const NONE: Self = Self(0);
    pub const PRIMARY: Self = Self(1);
    pub const SECONDARY: Self = Self(1 << 1);
    pub const MIDDLE: Self = Self(1 << 2);
    pub const WHEEL_UP: Self = Self(1 << 8);
    pub const WHEEL_DOWN: Self = Self(1 << 9);
    pub const WHEEL_LEFT: Self = Self(1 << 10);
    pub const WHEEL_RIGHT: Self = Self(1 << 11);

    const BUTTONS: u16 = 0xff;

    pub fn is_none(&self) -> bool {
        self.0 == 0
    }

    pub fn buttons_only(&self) -> Self {
        Self(self.0 & Self::BUTTONS)
    }
}

impl BitOr for ButtonMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum KeymapMessage {
    ClearScreen,
    Quit,
    Sync,
}

#[cfg(test)]
mod tests {
    use super::ButtonMask;

    #[test]
    fn buttons_only_drops_wheel() {
        let mask = ButtonMask::PRIMARY | ButtonMask::WHEEL_DOWN;

        assert_eq!(ButtonMask::PRIMARY, mask.buttons_only());
        assert!(ButtonMask::WHEEL_UP.buttons_only().is_none());
        assert!(!ButtonMask::WHEEL_UP.is_none());
    }
}
