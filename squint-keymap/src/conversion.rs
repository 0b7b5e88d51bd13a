use crossterm::event::{
    self, Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};

use crate::{
    key::{Key, KeyCode, KeyModifier},
    message::{ButtonMask, PointerEvent, ViewerEvent},
};

pub fn to_event(event: &Event) -> Option<ViewerEvent> {
    match event {
        Event::Key(key) => to_key(key).map(ViewerEvent::Key),
        Event::Mouse(mouse) => Some(ViewerEvent::Pointer(to_pointer(mouse))),
        Event::Resize(width, height) => Some(ViewerEvent::Resize(*width, *height)),
        Event::FocusGained | Event::FocusLost | Event::Paste(_) => None,
    }
}

pub fn to_key(event: &KeyEvent) -> Option<Key> {
    let modifier = event
        .modifiers
        .iter_names()
        .flat_map(|(s, _)| to_modifier(s))
        .collect();

    match event.code {
        event::KeyCode::Backspace => resolve(event.kind, KeyCode::Backspace, modifier),
        event::KeyCode::Enter => resolve(event.kind, KeyCode::Enter, modifier),
        event::KeyCode::Left => resolve(event.kind, KeyCode::Left, modifier),
        event::KeyCode::Right => resolve(event.kind, KeyCode::Right, modifier),
        event::KeyCode::Up => resolve(event.kind, KeyCode::Up, modifier),
        event::KeyCode::Down => resolve(event.kind, KeyCode::Down, modifier),
        event::KeyCode::Home => resolve(event.kind, KeyCode::Home, modifier),
        event::KeyCode::End => resolve(event.kind, KeyCode::End, modifier),
        event::KeyCode::PageUp => resolve(event.kind, KeyCode::PageUp, modifier),
        event::KeyCode::PageDown => resolve(event.kind, KeyCode::PageDown, modifier),
        event::KeyCode::Tab => resolve(event.kind, KeyCode::Tab, modifier),
        event::KeyCode::Delete => resolve(event.kind, KeyCode::Delete, modifier),
        event::KeyCode::F(n) => resolve(event.kind, KeyCode::F(n), modifier),
        event::KeyCode::Char(c) => {
            resolve(event.kind, KeyCode::from_char(c), with_shift(c, modifier))
        }
        event::KeyCode::Esc => resolve(event.kind, KeyCode::Esc, modifier),
        _ => None,
    }
}

pub fn to_pointer(event: &MouseEvent) -> PointerEvent {
    let buttons = match event.kind {
        MouseEventKind::Down(button) | MouseEventKind::Drag(button) => to_button(button),
        MouseEventKind::Up(_) | MouseEventKind::Moved => ButtonMask::NONE,
        MouseEventKind::ScrollDown => ButtonMask::WHEEL_DOWN,
        MouseEventKind::ScrollUp => ButtonMask::WHEEL_UP,
        MouseEventKind::ScrollLeft => ButtonMask::WHEEL_LEFT,
        MouseEventKind::ScrollRight => ButtonMask::WHEEL_RIGHT,
    };

    PointerEvent {
        x: event.column,
        y: event.row,
        buttons,
    }
}

fn to_button(button: MouseButton) -> ButtonMask {
    match button {
        MouseButton::Left => ButtonMask::PRIMARY,
        MouseButton::Right => ButtonMask::SECONDARY,
        MouseButton::Middle => ButtonMask::MIDDLE,
    }
}

fn resolve(kind: KeyEventKind, code: KeyCode, modifier: Vec<KeyModifier>) -> Option<Key> {
    if kind != KeyEventKind::Press {
        return None;
    }

    Some(Key::new(code, modifier))
}

// NOTE: some terminals report upper case chars without the shift modifier
fn with_shift(c: char, mut modifier: Vec<KeyModifier>) -> Vec<KeyModifier> {
    if c.is_ascii_uppercase() && !modifier.contains(&KeyModifier::Shift) {
        modifier.push(KeyModifier::Shift);
    }
    modifier
}

fn to_modifier(modifier: &str) -> Option<KeyModifier> {
    match modifier {
        "ALT" => Some(KeyModifier::Alt),
        "CONTROL" => Some(KeyModifier::Ctrl),
        "HYPER" => Some(KeyModifier::Command),
        "META" => Some(KeyModifier::Alt),
        "SHIFT" => Some(KeyModifier::Shift),
        "SUPER" => Some(KeyModifier::Command),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{
        Event, KeyCode as CrosstermKeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
        MouseEvent, MouseEventKind,
    };

    use super::*;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn to_key_ctrl_l() {
        let event = KeyEvent::new(CrosstermKeyCode::Char('l'), KeyModifiers::CONTROL);

        assert_eq!(
            Some(Key::new(KeyCode::Char('l'), vec![KeyModifier::Ctrl])),
            to_key(&event)
        );
    }

    #[test]
    fn to_key_uppercase_without_shift_flag() {
        let event = KeyEvent::new(CrosstermKeyCode::Char('Q'), KeyModifiers::NONE);

        assert_eq!(
            Some(Key::new(KeyCode::Char('q'), vec![KeyModifier::Shift])),
            to_key(&event)
        );
    }

    #[test]
    fn to_key_ignores_release() {
        let mut event = KeyEvent::new(CrosstermKeyCode::Esc, KeyModifiers::NONE);
        event.kind = KeyEventKind::Release;

        assert_eq!(None, to_key(&event));
    }

    #[test]
    fn to_pointer_maps_buttons() {
        let down = to_pointer(&mouse(MouseEventKind::Down(MouseButton::Left), 3, 10));
        assert_eq!(
            PointerEvent {
                x: 3,
                y: 10,
                buttons: ButtonMask::PRIMARY
            },
            down
        );

        let drag = to_pointer(&mouse(MouseEventKind::Drag(MouseButton::Right), 5, 12));
        assert_eq!(ButtonMask::SECONDARY, drag.buttons);

        let up = to_pointer(&mouse(MouseEventKind::Up(MouseButton::Left), 5, 12));
        assert!(up.buttons.is_none());

        let moved = to_pointer(&mouse(MouseEventKind::Moved, 1, 1));
        assert!(moved.buttons.is_none());
    }

    #[test]
    fn to_pointer_wheel_is_not_a_button() {
        let scroll = to_pointer(&mouse(MouseEventKind::ScrollDown, 1, 1));

        assert!(!scroll.buttons.is_none());
        assert!(scroll.buttons.buttons_only().is_none());
    }

    #[test]
    fn to_event_resize_and_focus() {
        assert_eq!(
            Some(ViewerEvent::Resize(120, 40)),
            to_event(&Event::Resize(120, 40))
        );
        assert_eq!(None, to_event(&Event::FocusGained));
    }
}
