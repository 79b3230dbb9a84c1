// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! The testbed instance: owns the collaborators and routes events to them.
//!
//! Fields drop in declaration order, so teardown always runs IME
//! coordinator, then editor, then fonts. A failed `create` drops whatever
//! was built so far in that same order.

use super::overlay::{self, FrameOverlay, OverlayToggles};
use crate::config::{FontSource, TestbedConfig};
use crate::editing::{
    ButtonAction, ImeCoordinator, ImeEvent, ImeService, InputRouter, InputTargets, Key,
    KeyAction, PointerButton, ScratchArena, ViewTransform,
};
use crate::error::TestbedError;
use crate::model::{EditorParams, FontCollection, ModifierMask, TextEditor};
use crate::platform::Host;
use kurbo::{Point, Vec2};

pub struct Testbed {
    ime: ImeCoordinator,
    editor: Box<dyn TextEditor>,
    /// Outlives the editor that shapes with it
    _fonts: Box<dyn FontCollection>,
    view: ViewTransform,
    router: InputRouter,
    scratch: ScratchArena,
    toggles: OverlayToggles,
}

fn load_fonts(fonts: &mut dyn FontCollection, sources: &[FontSource]) -> Result<(), TestbedError> {
    for source in sources {
        if !fonts.add_font(&source.path, source.family) {
            tracing::warn!("Failed to load {}", source.path.display());
            return Err(TestbedError::FontLoad {
                path: source.path.clone(),
            });
        }
        tracing::debug!("Loaded font {} ({:?})", source.path.display(), source.family);
    }
    Ok(())
}

impl Testbed {
    /// Load fonts, create the editor and attach the IME.
    ///
    /// `make_editor` receives the parameters derived from `config` and the
    /// populated font collection; returning `None` aborts construction.
    pub fn create(
        config: &TestbedConfig,
        mut fonts: Box<dyn FontCollection>,
        make_editor: impl FnOnce(&EditorParams, &dyn FontCollection) -> Option<Box<dyn TextEditor>>,
        ime_service: Box<dyn ImeService>,
    ) -> Result<Self, TestbedError> {
        load_fonts(fonts.as_mut(), &config.fonts)?;

        let params = config.editor_params();
        let Some(mut editor) = make_editor(&params, fonts.as_ref()) else {
            tracing::warn!("Failed to create text editor");
            return Err(TestbedError::EditorUnavailable);
        };
        editor.set_text(&config.sample_text);

        let view = config.view_transform();
        let mut ime = ImeCoordinator::attach(ime_service);
        ime.refresh(editor.as_ref(), &view);

        tracing::info!(
            "Testbed ready: {} fonts, {} chars of sample text",
            config.fonts.len(),
            config.sample_text.chars().count()
        );

        Ok(Self {
            ime,
            editor,
            _fonts: fonts,
            view,
            router: InputRouter::new(config.zoom_speed),
            scratch: ScratchArena::new(),
            toggles: OverlayToggles::from(&config.overlays),
        })
    }

    pub fn editor(&self) -> &dyn TextEditor {
        self.editor.as_ref()
    }

    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    pub fn router(&self) -> &InputRouter {
        &self.router
    }

    pub fn ime(&self) -> &ImeCoordinator {
        &self.ime
    }

    pub fn toggles(&self) -> &OverlayToggles {
        &self.toggles
    }

    fn route<R>(
        &mut self,
        host: &mut dyn Host,
        f: impl FnOnce(&mut InputRouter, &mut InputTargets<'_>) -> R,
    ) -> R {
        let mut targets = InputTargets {
            editor: self.editor.as_mut(),
            view: &mut self.view,
            ime: &mut self.ime,
            host,
            scratch: &self.scratch,
        };
        f(&mut self.router, &mut targets)
    }

    // ============================================================================
    // EVENTS
    // ============================================================================

    pub fn on_key(&mut self, key: Key, action: KeyAction, mods: ModifierMask, host: &mut dyn Host) {
        self.route(host, |router, targets| router.key(key, action, mods, targets));

        if let (Key::Function(number), KeyAction::Press) = (key, action) {
            self.toggles.handle_function_key(number);
        }
    }

    pub fn on_char(&mut self, ch: char, host: &mut dyn Host) {
        self.route(host, |router, targets| router.char_input(ch, targets));
    }

    pub fn on_mouse_button(
        &mut self,
        pos: Point,
        button: PointerButton,
        action: ButtonAction,
        mods: ModifierMask,
        time: f64,
        host: &mut dyn Host,
    ) {
        self.route(host, |router, targets| {
            router.mouse_button(pos, button, action, mods, time, targets)
        });
    }

    pub fn on_mouse_move(&mut self, pos: Point, host: &mut dyn Host) {
        self.route(host, |router, targets| router.mouse_move(pos, targets));
    }

    /// Wheel scroll in lines
    pub fn on_scroll(&mut self, pos: Point, delta: Vec2, host: &mut dyn Host) {
        self.route(host, |router, targets| router.scroll(pos, delta, targets));
    }

    pub fn on_ime(&mut self, event: ImeEvent) {
        self.ime.handle_event(event, self.editor.as_mut(), &self.view);
    }

    // ============================================================================
    // FRAME
    // ============================================================================

    /// Build this frame's overlay
    pub fn frame(&self) -> FrameOverlay {
        let editor = self.editor.as_ref();
        FrameOverlay {
            transform: self.view.affine(),
            selection_rects: overlay::selection_rects(editor),
            lines: overlay::collect_lines(editor, self.toggles.caret_details),
            caret: overlay::active_caret(editor),
            status: overlay::StatusLine::from_editor(editor),
            scratch: self.scratch.stats(),
            toggles: self.toggles,
            help: self.toggles.help_line(),
        }
    }
}

impl Drop for Testbed {
    fn drop(&mut self) {
        tracing::info!("Testbed teardown");
    }
}
