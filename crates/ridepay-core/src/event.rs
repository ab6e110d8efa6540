#![forbid(unsafe_code)]

//! Input events delivered to the dialog controller.
//!
//! Surfaces translate whatever their host produces (DOM `keydown` and `click`
//! events, or synthetic events from a test harness) into [`Event`] values.
//! Clicks are already resolved to the [`HitRegion`] of the element that was
//! clicked and to the mounted root they belong to, so the controller never
//! needs to inspect host objects.

use bitflags::bitflags;

use crate::node::HitRegion;
use crate::surface::NodeHandle;

bitflags! {
    /// Keyboard modifier state at the time of a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const SHIFT = 0b0001;
        const CTRL = 0b0010;
        const ALT = 0b0100;
        const META = 0b1000;
    }
}

/// A logical key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Escape,
    Enter,
    Tab,
    Backspace,
    Char(char),
    /// Any key without a dedicated variant.
    Other,
}

impl KeyCode {
    /// Map a DOM `KeyboardEvent.key` value to a key code.
    ///
    /// Legacy browsers report `"Esc"` for the escape key; both spellings map
    /// to [`KeyCode::Escape`].
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            "Escape" | "Esc" => Self::Escape,
            "Enter" => Self::Enter,
            "Tab" => Self::Tab,
            "Backspace" => Self::Backspace,
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Char(c),
                    _ => Self::Other,
                }
            }
        }
    }
}

/// Key transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyEventKind {
    #[default]
    Press,
    Repeat,
    Release,
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: Modifiers,
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// A key press with no modifiers.
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::empty(),
            kind: KeyEventKind::Press,
        }
    }

    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    #[must_use]
    pub const fn with_kind(mut self, kind: KeyEventKind) -> Self {
        self.kind = kind;
        self
    }
}

/// A primary-button click, resolved to the region that was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClickEvent {
    /// Root of the mounted tree that received the click.
    pub root: NodeHandle,
    /// Innermost tagged region containing the click target.
    pub target: HitRegion,
}

/// An input event routed to the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    Key(KeyEvent),
    Click(ClickEvent),
}

impl Event {
    /// A plain key press.
    pub const fn key(code: KeyCode) -> Self {
        Self::Key(KeyEvent::new(code))
    }

    /// An escape key press.
    pub const fn escape() -> Self {
        Self::key(KeyCode::Escape)
    }

    /// A click on `target` inside the tree mounted at `root`.
    pub const fn click(root: NodeHandle, target: HitRegion) -> Self {
        Self::Click(ClickEvent { root, target })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn escape_spellings() {
        assert_eq!(KeyCode::from_dom_key("Escape"), KeyCode::Escape);
        assert_eq!(KeyCode::from_dom_key("Esc"), KeyCode::Escape);
    }

    #[test]
    fn named_keys() {
        assert_eq!(KeyCode::from_dom_key("Enter"), KeyCode::Enter);
        assert_eq!(KeyCode::from_dom_key("Tab"), KeyCode::Tab);
        assert_eq!(KeyCode::from_dom_key("Backspace"), KeyCode::Backspace);
        assert_eq!(KeyCode::from_dom_key("ArrowLeft"), KeyCode::Other);
        assert_eq!(KeyCode::from_dom_key(""), KeyCode::Other);
    }

    #[test]
    fn key_event_builder() {
        let ev = KeyEvent::new(KeyCode::Escape)
            .with_modifiers(Modifiers::SHIFT | Modifiers::CTRL)
            .with_kind(KeyEventKind::Release);
        assert_eq!(ev.code, KeyCode::Escape);
        assert!(ev.modifiers.contains(Modifiers::SHIFT));
        assert_eq!(ev.kind, KeyEventKind::Release);
        assert_eq!(Event::escape(), Event::Key(KeyEvent::new(KeyCode::Escape)));
    }

    proptest! {
        #[test]
        fn single_char_keys_map_to_char(c in any::<char>()) {
            let key = c.to_string();
            let code = KeyCode::from_dom_key(&key);
            prop_assert_eq!(code, KeyCode::Char(c));
        }
    }
}
