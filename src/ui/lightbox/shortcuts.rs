// SPDX-License-Identifier: MPL-2.0
//! Keyboard shortcuts of the lightbox.

use iced::keyboard::{self, key::Named, Key, Modifiers};

/// Action bound to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Close,
    Next,
    Previous,
    ZoomIn,
    ZoomOut,
    Rotate,
    ToggleFavorite,
}

impl Shortcut {
    /// Maps a pressed key. Chords with Ctrl/Cmd, Alt or Logo are not shortcuts.
    ///
    /// Character keys are matched on the produced character, so `+` works
    /// whether it comes from the numpad or from Shift+`=`.
    #[must_use]
    pub fn from_key(key: &Key, modifiers: Modifiers) -> Option<Self> {
        if modifiers.command() || modifiers.control() || modifiers.alt() || modifiers.logo() {
            return None;
        }

        match key {
            Key::Named(Named::Escape) => Some(Shortcut::Close),
            Key::Named(Named::ArrowRight) => Some(Shortcut::Next),
            Key::Named(Named::ArrowLeft) => Some(Shortcut::Previous),
            Key::Character(c) => match c.as_str() {
                "+" => Some(Shortcut::ZoomIn),
                "-" => Some(Shortcut::ZoomOut),
                "r" => Some(Shortcut::Rotate),
                "f" => Some(Shortcut::ToggleFavorite),
                _ => None,
            },
            _ => None,
        }
    }

    /// Maps a keyboard event; only key presses can trigger shortcuts.
    ///
    /// Uses the modified key, so Shift+`r` produces `R` and is not a shortcut.
    #[must_use]
    pub fn from_event(event: &keyboard::Event) -> Option<Self> {
        match event {
            keyboard::Event::KeyPressed {
                modified_key,
                modifiers,
                ..
            } => Self::from_key(modified_key, *modifiers),
            _ => None,
        }
    }
}
