pub mod conversion;
pub mod key;
mod map;
pub mod message;

pub use map::KeyMap;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum KeyMapError {
    #[error("Keycode {0} could not be resolved.")]
    KeycodeUnresolvable(String),
}
