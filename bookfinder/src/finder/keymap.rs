use crate::{finder::command::Command, utils::any::Any};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use serde::{de::Error, Deserialize, Deserializer};
use std::collections::HashMap;

#[derive(Debug, Deserialize)]
pub struct KeyBinding {
    #[serde(deserialize_with = "KeyBinding::deserialize_keys", rename(deserialize = "keys"))]
    events: Vec<Event>,

    #[serde(flatten)]
    command: Command,
}

impl KeyBinding {
    const MISSING_KEY_ERROR_MESSAGE: &'static str = "No key was provided";
    const UNKNOWN_KEY_ERROR_MESSAGE: &'static str = "Unknown key was provided";

    // NOTE: each individual event_str must be of the form
    // [ctrl +] [shift +] [alt +] (<special-key> | <single-character>)
    // where <special-key> is one of the special keys listed below
    fn deserialize_key<'de, D: Deserializer<'de>>(event_str: &str) -> Result<Event, D::Error> {
        let mut modifiers = KeyModifiers::NONE;
        let mut substrs = event_str.split('+').peekable();

        if let Some(&"ctrl") = substrs.peek() {
            modifiers.insert(KeyModifiers::CONTROL);
            substrs.next();
        }

        if let Some(&"shift") = substrs.peek() {
            modifiers.insert(KeyModifiers::SHIFT);
            substrs.next();
        }

        if let Some(&"alt") = substrs.peek() {
            modifiers.insert(KeyModifiers::ALT);
            substrs.next();
        }

        let Some(substr) = substrs.next() else {
            return D::Error::custom(Self::MISSING_KEY_ERROR_MESSAGE).err();
        };
        let code = match substr {
            "backspace" => KeyCode::Backspace,
            "backtab" => KeyCode::BackTab,
            "delete" => KeyCode::Delete,
            "down" => KeyCode::Down,
            "end" => KeyCode::End,
            "enter" => KeyCode::Enter,
            "esc" => KeyCode::Esc,
            "home" => KeyCode::Home,
            "left" => KeyCode::Left,
            "pagedown" => KeyCode::PageDown,
            "pageup" => KeyCode::PageUp,
            "right" => KeyCode::Right,
            "tab" => KeyCode::Tab,
            "up" => KeyCode::Up,
            _ => {
                let mut chars = substr.chars();
                let Some(chr) = chars.next() else {
                    return D::Error::custom(Self::MISSING_KEY_ERROR_MESSAGE).err();
                };
                let None = chars.next() else {
                    return D::Error::custom(Self::UNKNOWN_KEY_ERROR_MESSAGE).err();
                };

                KeyCode::Char(chr)
            }
        };
        let key_event = KeyEvent::new(code, modifiers);
        let event = Event::Key(key_event);

        event.ok()
    }

    // NOTE: every key in the list is an alternative trigger for the same command
    fn deserialize_keys<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Event>, D::Error> {
        Vec::<String>::deserialize(deserializer)?
            .iter()
            .map(String::as_str)
            .map(Self::deserialize_key::<D>)
            .collect()
    }
}

pub struct Keymap {
    value: HashMap<Event, Command>,
}

impl Keymap {
    pub fn new(key_bindings: &[KeyBinding]) -> Self {
        let mut value = HashMap::new();

        for key_binding in key_bindings {
            for event in &key_binding.events {
                value.insert(event.clone(), key_binding.command);
            }
        }

        Self { value }
    }

    pub fn get(&self, event: &Event) -> Option<Command> {
        self.value.get(event).copied()
    }
}
