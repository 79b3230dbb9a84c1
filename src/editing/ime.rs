// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Input method composition and candidate window tracking.
//!
//! The platform IME reports provisional text while the user composes a
//! character, then either commits or cancels it. The coordinator forwards
//! those events into the editor and, after every change that can move the
//! caret, tells the platform where the caret is on screen so the candidate
//! window follows it.

use super::viewport::{InputRect, ViewTransform};
use crate::model::TextEditor;

/// Composition events from the platform IME
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImeEvent {
    /// Replace the in-flight composition. `cursor` is a codepoint index.
    Composition { text: String, cursor: usize },
    /// Insert `text` and end the composition
    Commit(String),
    /// Drop the composition without inserting anything
    Cancel,
}

/// Platform side of the IME connection
pub trait ImeService {
    /// Start delivering IME events for this editor
    fn attach(&mut self);
    /// Stop delivering IME events
    fn detach(&mut self);
    /// Move the candidate window next to `rect`
    fn publish_input_rect(&mut self, rect: InputRect);
    /// Abort the platform's in-flight composition
    fn cancel_composition(&mut self);
}

/// Bridges platform IME events and editor composition state.
///
/// Owns the IME service for its whole lifetime: attaching on creation and
/// cancelling plus detaching on drop. Drop it before the editor it feeds.
pub struct ImeCoordinator {
    service: Box<dyn ImeService>,
    composing: bool,
    last_rect: Option<InputRect>,
}

impl ImeCoordinator {
    pub fn attach(mut service: Box<dyn ImeService>) -> Self {
        service.attach();
        tracing::debug!("IME handler attached");
        Self {
            service,
            composing: false,
            last_rect: None,
        }
    }

    /// Whether a composition is in flight
    pub fn is_composing(&self) -> bool {
        self.composing
    }

    /// The most recently published rectangle
    pub fn last_rect(&self) -> Option<InputRect> {
        self.last_rect
    }

    /// Apply an IME event to the editor and republish the input rect
    pub fn handle_event(
        &mut self,
        event: ImeEvent,
        editor: &mut dyn TextEditor,
        view: &ViewTransform,
    ) {
        match event {
            ImeEvent::Composition { text, cursor } => {
                tracing::debug!("IME composition {:?} cursor={}", text, cursor);
                editor.set_composition(&text, cursor);
                self.composing = !text.is_empty();
            }
            ImeEvent::Commit(text) => {
                tracing::debug!("IME commit {:?}", text);
                editor.commit_composition(&text);
                self.composing = false;
            }
            ImeEvent::Cancel => {
                tracing::debug!("IME cancel");
                editor.clear_composition();
                self.composing = false;
            }
        }

        self.refresh(editor, view);
    }

    /// Abort the in-flight composition, on the platform and in the editor.
    /// Does nothing when no composition is in flight.
    pub fn cancel(&mut self, editor: &mut dyn TextEditor) {
        if !self.composing {
            return;
        }
        self.service.cancel_composition();
        editor.clear_composition();
        self.composing = false;
    }

    /// Recompute the caret's screen rectangle and publish it
    pub fn refresh(&mut self, editor: &dyn TextEditor, view: &ViewTransform) {
        let selection = editor.selection();
        let caret = editor.visual_caret(selection.end);
        let rect = view.caret_input_rect(&caret);

        tracing::trace!("IME input rect {:?}", rect);
        self.service.publish_input_rect(rect);
        self.last_rect = Some(rect);
    }
}

impl Drop for ImeCoordinator {
    fn drop(&mut self) {
        self.service.cancel_composition();
        self.service.detach();
        tracing::debug!("IME handler detached");
    }
}
