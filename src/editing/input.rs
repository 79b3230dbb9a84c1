// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Routing of keyboard, pointer and wheel events to editor commands.
//!
//! Platforms deliver a key event and, separately, the character it types.
//! For command shortcuts like Ctrl+V only the command should happen, so the
//! router keeps an `allow_char` gate: each key press re-arms it, and a
//! shortcut that handled the press closes it for exactly the next
//! character event.
//!
//! Right-button drags pan the view and left-button drags select text. Only
//! one drag can be active; pressing the other button mid-drag is ignored.

use super::ime::ImeCoordinator;
use super::scratch::ScratchArena;
use super::viewport::ViewTransform;
use crate::model::{EditKey, ModifierMask, TextEditor};
use crate::platform::Host;
use crate::settings;
use kurbo::{Point, Vec2};

/// A key as seen by the router
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// Movement and edit keys forwarded to the editor
    Edit(EditKey),
    /// A printable key, used for Ctrl shortcuts
    Character(char),
    Tab,
    Escape,
    /// Function key by number, e.g. 8 for F8
    Function(u8),
    Other,
}

impl Key {
    fn is_char(&self, expected: char) -> bool {
        matches!(self, Key::Character(c) if c.eq_ignore_ascii_case(&expected))
    }
}

/// Key state change
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Press,
    Repeat,
    Release,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Right,
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonAction {
    Press,
    Release,
}

/// Active pointer drag
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    /// Right button: moving the view
    ViewPan,
    /// Left button: extending the text selection
    TextSelect,
}

/// Everything a routed event may touch
pub struct InputTargets<'a> {
    pub editor: &'a mut dyn TextEditor,
    pub view: &'a mut ViewTransform,
    pub ime: &'a mut ImeCoordinator,
    pub host: &'a mut dyn Host,
    pub scratch: &'a ScratchArena,
}

impl InputTargets<'_> {
    fn refresh_ime(&mut self) {
        self.ime.refresh(&*self.editor, &*self.view);
    }
}

/// Input state machine
#[derive(Clone, Debug)]
pub struct InputRouter {
    drag: DragState,
    allow_char: bool,
    zoom_speed: f64,
}

impl Default for InputRouter {
    fn default() -> Self {
        Self::new(settings::view::ZOOM_SPEED)
    }
}

impl InputRouter {
    pub fn new(zoom_speed: f64) -> Self {
        Self {
            drag: DragState::Idle,
            allow_char: true,
            zoom_speed,
        }
    }

    pub fn drag(&self) -> DragState {
        self.drag
    }

    /// Whether the next character event will be inserted
    pub fn allows_char(&self) -> bool {
        self.allow_char
    }

    /// Start a drag unless one is already running
    fn begin_drag(&mut self, kind: DragState) -> bool {
        if self.drag != DragState::Idle {
            tracing::trace!("Ignoring {:?} start during {:?}", kind, self.drag);
            return false;
        }
        self.drag = kind;
        true
    }

    fn end_drag(&mut self, kind: DragState) {
        if self.drag == kind {
            self.drag = DragState::Idle;
        }
    }

    // ============================================================================
    // KEYBOARD
    // ============================================================================

    /// Handle a key state change
    pub fn key(
        &mut self,
        key: Key,
        action: KeyAction,
        mods: ModifierMask,
        targets: &mut InputTargets<'_>,
    ) {
        if action == KeyAction::Release {
            return;
        }

        self.allow_char = true;
        self.handle_press_or_repeat(key, mods, targets);
        if action == KeyAction::Press {
            self.handle_press(key, mods, targets);
        }

        targets.refresh_ime();
    }

    fn handle_press_or_repeat(
        &mut self,
        key: Key,
        mods: ModifierMask,
        targets: &mut InputTargets<'_>,
    ) {
        if let Key::Edit(edit_key) = key {
            tracing::debug!("Edit key {:?} mods={:?}", edit_key, mods);
            targets.editor.process_key(edit_key, mods);
            return;
        }

        if !mods.control() {
            return;
        }

        if key.is_char('v') {
            self.paste(targets);
            self.allow_char = false;
        } else if key.is_char('z') {
            if mods.shift() {
                tracing::debug!("Redo");
                targets.editor.redo();
            } else {
                tracing::debug!("Undo");
                targets.editor.undo();
            }
            self.allow_char = false;
        }
    }

    fn handle_press(&mut self, key: Key, mods: ModifierMask, targets: &mut InputTargets<'_>) {
        match key {
            Key::Tab => targets.editor.insert_codepoint('\t'),
            Key::Escape => self.escape(targets),
            _ if mods.control() && key.is_char('a') => {
                tracing::debug!("Select all");
                targets.editor.select_all();
                self.allow_char = false;
            }
            _ if mods.control() && key.is_char('x') => {
                self.copy_selection(targets);
                targets.editor.cut();
                self.allow_char = false;
            }
            _ if mods.control() && key.is_char('c') => {
                self.copy_selection(targets);
                self.allow_char = false;
            }
            _ => {}
        }
    }

    fn paste(&mut self, targets: &mut InputTargets<'_>) {
        match targets.host.clipboard_text() {
            Some(text) if !text.is_empty() => {
                tracing::debug!("Paste {} bytes", text.len());
                targets.editor.paste(&text);
            }
            _ => tracing::debug!("Paste: clipboard empty"),
        }
    }

    /// Put the selected text on the clipboard
    fn copy_selection(&mut self, targets: &mut InputTargets<'_>) {
        let selection = targets.editor.selection();
        let text = targets.scratch.selection_text(&*targets.editor, selection);
        tracing::debug!("Copy {} bytes", text.as_str().len());
        targets.host.set_clipboard_text(text.as_str());
    }

    fn escape(&mut self, targets: &mut InputTargets<'_>) {
        let selection = targets.editor.selection();
        if targets.editor.selection_count(selection) > 0 {
            targets.editor.select_none();
        } else {
            tracing::info!("Escape with no selection: close requested");
            targets.host.request_close();
        }
    }

    /// Handle a typed character
    pub fn char_input(&mut self, ch: char, targets: &mut InputTargets<'_>) {
        if !self.allow_char {
            tracing::trace!("Suppressed char {:?} after shortcut", ch);
            self.allow_char = true;
            return;
        }

        targets.editor.insert_codepoint(ch);
        targets.refresh_ime();
    }

    // ============================================================================
    // POINTER
    // ============================================================================

    /// Handle a button press or release at a screen position. `time` is in
    /// seconds.
    pub fn mouse_button(
        &mut self,
        pos: Point,
        button: PointerButton,
        action: ButtonAction,
        mods: ModifierMask,
        time: f64,
        targets: &mut InputTargets<'_>,
    ) {
        match (button, action) {
            (PointerButton::Right, ButtonAction::Press) => {
                if self.begin_drag(DragState::ViewPan) {
                    targets.view.start_drag(pos);
                }
            }
            (PointerButton::Right, ButtonAction::Release) => self.end_drag(DragState::ViewPan),
            (PointerButton::Left, ButtonAction::Press) => {
                if self.begin_drag(DragState::TextSelect) {
                    targets.ime.cancel(&mut *targets.editor);
                    let text_pos = targets.view.to_text(pos);
                    tracing::debug!("Click at {:?} (text {:?})", pos, text_pos);
                    targets.editor.process_mouse_click(text_pos, mods, time);
                }
            }
            (PointerButton::Left, ButtonAction::Release) => self.end_drag(DragState::TextSelect),
            (PointerButton::Other, _) => {}
        }

        targets.refresh_ime();
    }

    /// Handle pointer motion
    pub fn mouse_move(&mut self, pos: Point, targets: &mut InputTargets<'_>) {
        match self.drag {
            DragState::Idle => {}
            DragState::ViewPan => {
                targets.view.update_drag(pos);
                targets.refresh_ime();
            }
            DragState::TextSelect => {
                let text_pos = targets.view.to_text(pos);
                tracing::trace!("Drag selection to {:?}", text_pos);
                targets.editor.process_mouse_drag(text_pos);
                targets.refresh_ime();
            }
        }
    }

    /// Handle a wheel scroll, in lines, at a screen position
    pub fn scroll(&mut self, pos: Point, delta: Vec2, targets: &mut InputTargets<'_>) {
        if delta.y == 0.0 {
            return;
        }
        targets.view.zoom_at(pos, delta.y * self.zoom_speed);
        targets.refresh_ime();
    }
}
