use std::collections::HashMap;

use crate::{
    key::{Key, KeyModifier},
    message::KeymapMessage,
    KeyMapError,
};

#[derive(Debug)]
pub struct KeyMap {
    mappings: HashMap<Key, KeymapMessage>,
}

impl KeyMap {
    pub fn empty() -> Self {
        Self {
            mappings: HashMap::new(),
        }
    }

    pub fn add_mapping(
        &mut self,
        keycode: &str,
        message: KeymapMessage,
    ) -> Result<(), KeyMapError> {
        let key = Key::from_keycode_string(keycode)
            .ok_or_else(|| KeyMapError::KeycodeUnresolvable(keycode.to_string()))?;

        if let Some(previous) = self.mappings.insert(key, message) {
            tracing::debug!("binding for {} replaced {:?}", keycode, previous);
        }

        Ok(())
    }

    /// Looks up the binding for `key`. Alt does not change the meaning of a
    /// key, so a key held with Alt falls back to the binding without it.
    pub fn resolve(&self, key: &Key) -> Option<&KeymapMessage> {
        if let Some(message) = self.mappings.get(key) {
            return Some(message);
        }

        if !key.modifiers.contains(&KeyModifier::Alt) {
            return None;
        }

        let modifiers = key
            .modifiers
            .iter()
            .filter(|modifier| **modifier != KeyModifier::Alt)
            .cloned()
            .collect();

        self.mappings.get(&Key::new(key.code.clone(), modifiers))
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        let mut map = Self::empty();

        let mappings = [
            ("<C-l>", KeymapMessage::Sync),
            ("<esc>", KeymapMessage::Quit),
            ("q", KeymapMessage::Quit),
            ("Q", KeymapMessage::Quit),
            ("c", KeymapMessage::ClearScreen),
            ("C", KeymapMessage::ClearScreen),
        ];

        for (keycode, message) in mappings {
            if let Err(error) = map.add_mapping(keycode, message) {
                tracing::warn!("skipping default binding: {}", error);
            }
        }

        map
    }
}

#[cfg(test)]
mod tests {
    use super::KeyMap;
    use crate::{message::KeymapMessage, KeyMapError};

    #[test]
    fn add_mapping_rejects_invalid_keycode() {
        let mut map = KeyMap::empty();

        assert_eq!(
            Err(KeyMapError::KeycodeUnresolvable("<nope>".to_string())),
            map.add_mapping("<nope>", KeymapMessage::Quit)
        );
    }
}
