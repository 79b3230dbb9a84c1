// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Translation of winit events into router input.
//!
//! This is the only place that looks at winit's modifier state, key names
//! or scroll units. Everything past here works with `ModifierMask`,
//! `editing::Key` and wheel lines.

use crate::editing::{ButtonAction, ImeEvent, ImeService, InputRect, Key, KeyAction, PointerButton};
use crate::model::{EditKey, ModifierMask};
use crate::settings;
use kurbo::Vec2;
use std::sync::Arc;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, Ime, MouseButton, MouseScrollDelta};
use winit::keyboard::{Key as WinitKey, KeyCode, ModifiersState, NamedKey, PhysicalKey};
use winit::window::Window;

impl From<ModifiersState> for ModifierMask {
    fn from(state: ModifiersState) -> Self {
        let mut mask = ModifierMask::empty();
        if state.shift_key() {
            mask |= ModifierMask::SHIFT;
        }
        if state.control_key() {
            mask |= ModifierMask::CONTROL;
        }
        mask
    }
}

/// Map a winit key event's logical and physical key to a router key.
///
/// Character keys keep their logical ASCII letter so shortcuts follow
/// layouts like AZERTY. A non-ASCII logical character (Cyrillic, Persian)
/// falls back to the Latin letter printed on the physical key, so Ctrl+V
/// still pastes on those layouts.
pub fn key(logical: &WinitKey, physical: PhysicalKey) -> Key {
    match logical {
        WinitKey::Named(named) => named_key(*named),
        WinitKey::Character(text) => {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) if ch.is_ascii() => Key::Character(ch),
                (Some(ch), None) => Key::Character(physical_letter(physical).unwrap_or(ch)),
                _ => physical_letter(physical).map_or(Key::Other, Key::Character),
            }
        }
        _ => Key::Other,
    }
}

fn physical_letter(physical: PhysicalKey) -> Option<char> {
    let PhysicalKey::Code(code) = physical else {
        return None;
    };
    let letter = match code {
        KeyCode::KeyA => 'a',
        KeyCode::KeyB => 'b',
        KeyCode::KeyC => 'c',
        KeyCode::KeyD => 'd',
        KeyCode::KeyE => 'e',
        KeyCode::KeyF => 'f',
        KeyCode::KeyG => 'g',
        KeyCode::KeyH => 'h',
        KeyCode::KeyI => 'i',
        KeyCode::KeyJ => 'j',
        KeyCode::KeyK => 'k',
        KeyCode::KeyL => 'l',
        KeyCode::KeyM => 'm',
        KeyCode::KeyN => 'n',
        KeyCode::KeyO => 'o',
        KeyCode::KeyP => 'p',
        KeyCode::KeyQ => 'q',
        KeyCode::KeyR => 'r',
        KeyCode::KeyS => 's',
        KeyCode::KeyT => 't',
        KeyCode::KeyU => 'u',
        KeyCode::KeyV => 'v',
        KeyCode::KeyW => 'w',
        KeyCode::KeyX => 'x',
        KeyCode::KeyY => 'y',
        KeyCode::KeyZ => 'z',
        _ => return None,
    };
    Some(letter)
}

fn named_key(named: NamedKey) -> Key {
    match named {
        NamedKey::ArrowLeft => Key::Edit(EditKey::Left),
        NamedKey::ArrowRight => Key::Edit(EditKey::Right),
        NamedKey::ArrowUp => Key::Edit(EditKey::Up),
        NamedKey::ArrowDown => Key::Edit(EditKey::Down),
        NamedKey::Home => Key::Edit(EditKey::Home),
        NamedKey::End => Key::Edit(EditKey::End),
        NamedKey::Backspace => Key::Edit(EditKey::Backspace),
        NamedKey::Delete => Key::Edit(EditKey::Delete),
        NamedKey::Enter => Key::Edit(EditKey::Enter),
        NamedKey::Tab => Key::Tab,
        NamedKey::Escape => Key::Escape,
        NamedKey::Space => Key::Character(' '),
        NamedKey::F1 => Key::Function(1),
        NamedKey::F2 => Key::Function(2),
        NamedKey::F3 => Key::Function(3),
        NamedKey::F4 => Key::Function(4),
        NamedKey::F5 => Key::Function(5),
        NamedKey::F6 => Key::Function(6),
        NamedKey::F7 => Key::Function(7),
        NamedKey::F8 => Key::Function(8),
        NamedKey::F9 => Key::Function(9),
        NamedKey::F10 => Key::Function(10),
        NamedKey::F11 => Key::Function(11),
        NamedKey::F12 => Key::Function(12),
        _ => Key::Other,
    }
}

pub fn key_action(state: ElementState, repeat: bool) -> KeyAction {
    match (state, repeat) {
        (ElementState::Pressed, false) => KeyAction::Press,
        (ElementState::Pressed, true) => KeyAction::Repeat,
        (ElementState::Released, _) => KeyAction::Release,
    }
}

pub fn pointer_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Left,
        MouseButton::Right => PointerButton::Right,
        _ => PointerButton::Other,
    }
}

pub fn button_action(state: ElementState) -> ButtonAction {
    match state {
        ElementState::Pressed => ButtonAction::Press,
        ElementState::Released => ButtonAction::Release,
    }
}

/// Scroll amount in wheel lines
pub fn scroll_lines(delta: MouseScrollDelta) -> Vec2 {
    match delta {
        MouseScrollDelta::LineDelta(x, y) => Vec2::new(x as f64, y as f64),
        MouseScrollDelta::PixelDelta(pos) => {
            Vec2::new(pos.x, pos.y) / settings::view::PIXELS_PER_SCROLL_LINE
        }
    }
}

/// Characters to feed to `InputRouter::char_input` for a key event's text.
///
/// Control characters produced by Ctrl chords are dropped.
pub fn typed_chars(text: Option<&str>) -> impl Iterator<Item = char> + '_ {
    text.unwrap_or_default().chars().filter(|c| !c.is_control())
}

/// Map a winit IME event. `Enabled` carries no composition change.
pub fn ime_event(ime: &Ime) -> Option<ImeEvent> {
    match ime {
        Ime::Enabled => None,
        Ime::Preedit(text, cursor) => {
            // winit reports a byte range; the editor wants a codepoint index
            let cursor = cursor
                .and_then(|(start, _)| text.get(..start))
                .map_or_else(|| text.chars().count(), |prefix| prefix.chars().count());
            Some(ImeEvent::Composition {
                text: text.clone(),
                cursor,
            })
        }
        Ime::Commit(text) => Some(ImeEvent::Commit(text.clone())),
        Ime::Disabled => Some(ImeEvent::Cancel),
    }
}

/// IME service backed by a winit window
pub struct WindowIme {
    window: Arc<Window>,
}

impl WindowIme {
    pub fn new(window: Arc<Window>) -> Self {
        Self { window }
    }
}

impl ImeService for WindowIme {
    fn attach(&mut self) {
        self.window.set_ime_allowed(true);
    }

    fn detach(&mut self) {
        self.window.set_ime_allowed(false);
    }

    fn publish_input_rect(&mut self, rect: InputRect) {
        self.window.set_ime_cursor_area(
            PhysicalPosition::new(rect.x, rect.y),
            PhysicalSize::new(rect.width.max(0) as u32, rect.height.max(0) as u32),
        );
    }

    fn cancel_composition(&mut self) {
        // winit has no direct cancel; cycling IME permission drops the
        // platform's preedit
        self.window.set_ime_allowed(false);
        self.window.set_ime_allowed(true);
    }
}
