// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Test doubles for the collaborator traits.
//!
//! `FakeEditor` lays text out on a single line with a fixed 10 unit
//! advance per character, so hit testing is `round(x / 10)`. Characters in
//! the Hebrew and Arabic blocks count as right-to-left.

use crate::editing::{ImeService, InputRect};
use crate::model::{
    CaretBoundaries, CaretBoundary, CaretEdge, EditKey, FontCollection, FontFamily, LineMetrics,
    ModifierMask, Selection, SelectionRects, TextDirection, TextEditor, TextPosition, VisualCaret,
};
use crate::platform::Host;
use kurbo::{Point, Rect};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

pub const ADVANCE: f64 = 10.0;
pub const CARET_TOP: f64 = -80.0;
pub const CARET_HEIGHT: f64 = 100.0;

/// Records the order in which test doubles are dropped
#[derive(Clone, Debug, Default)]
pub struct DropLog(Rc<RefCell<Vec<&'static str>>>);

impl DropLog {
    pub fn record(&self, name: &'static str) {
        self.0.borrow_mut().push(name);
    }

    pub fn entries(&self) -> Vec<&'static str> {
        self.0.borrow().clone()
    }
}

fn is_rtl_char(ch: char) -> bool {
    matches!(ch as u32, 0x0590..=0x08FF)
}

fn char_direction(ch: Option<&char>) -> TextDirection {
    match ch {
        Some(&ch) if is_rtl_char(ch) => TextDirection::RightToLeft,
        _ => TextDirection::LeftToRight,
    }
}

// ============================================================================
// EDITOR
// ============================================================================

/// Commands received by `FakeEditor`. Queries are not recorded.
#[derive(Clone, Debug, PartialEq)]
pub enum EditorCall {
    Insert(char),
    Paste(String),
    Cut,
    Undo,
    Redo,
    Key(EditKey, ModifierMask),
    SelectAll,
    SelectNone,
    Click { pos: Point, time: f64 },
    Drag(Point),
}

type Snapshot = (Vec<char>, Selection);

#[derive(Debug, Default)]
pub struct FakeEditor {
    chars: Vec<char>,
    selection: Selection,
    composition: Option<(String, usize)>,
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    calls: Vec<EditorCall>,
    drop_log: Option<DropLog>,
}

impl FakeEditor {
    /// An editor holding `text` with the caret at the end
    pub fn new(text: &str) -> Self {
        let mut editor = Self::default();
        editor.set_text(text);
        editor
    }

    pub fn with_drop_log(mut self, log: &DropLog) -> Self {
        self.drop_log = Some(log.clone());
        self
    }

    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn composition(&self) -> Option<(String, usize)> {
        self.composition.clone()
    }

    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
    }

    pub fn calls(&self) -> &[EditorCall] {
        &self.calls
    }

    fn caret(&self) -> usize {
        self.selection.end.offset.min(self.chars.len())
    }

    fn covered(&self, selection: Selection) -> std::ops::Range<usize> {
        let range = selection.offsets();
        let len = self.chars.len();
        range.start.min(len)..range.end.min(len)
    }

    fn hit(&self, x: f64) -> usize {
        let offset = (x / ADVANCE).round().max(0.0) as usize;
        offset.min(self.chars.len())
    }

    fn snapshot(&mut self) {
        self.undo_stack.push((self.chars.clone(), self.selection));
        self.redo_stack.clear();
    }

    fn replace_range(&mut self, range: std::ops::Range<usize>, text: &str) {
        self.snapshot();
        let start = range.start;
        let inserted = text.chars().count();
        self.chars.splice(range, text.chars());
        self.selection = Selection::collapsed(TextPosition::trailing(start + inserted));
    }

    fn replace_selection(&mut self, text: &str) {
        let range = self.covered(self.selection);
        self.replace_range(range, text);
    }

    fn move_caret(&mut self, offset: usize, extend: bool) {
        let end = TextPosition::trailing(offset);
        if extend {
            self.selection.end = end;
        } else {
            self.selection = Selection::collapsed(end);
        }
    }
}

impl Drop for FakeEditor {
    fn drop(&mut self) {
        if let Some(log) = &self.drop_log {
            log.record("editor");
        }
    }
}

impl TextEditor for FakeEditor {
    fn set_text(&mut self, text: &str) {
        self.chars = text.chars().collect();
        self.selection = Selection::collapsed(TextPosition::trailing(self.chars.len()));
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    fn insert_codepoint(&mut self, ch: char) {
        self.calls.push(EditorCall::Insert(ch));
        self.replace_selection(ch.encode_utf8(&mut [0; 4]));
    }

    fn paste(&mut self, text: &str) {
        self.calls.push(EditorCall::Paste(text.to_string()));
        self.replace_selection(text);
    }

    fn cut(&mut self) {
        self.calls.push(EditorCall::Cut);
        if self.selection_count(self.selection) > 0 {
            self.replace_selection("");
        }
    }

    fn undo(&mut self) {
        self.calls.push(EditorCall::Undo);
        if let Some((chars, selection)) = self.undo_stack.pop() {
            self.redo_stack.push((std::mem::replace(&mut self.chars, chars), self.selection));
            self.selection = selection;
        }
    }

    fn redo(&mut self) {
        self.calls.push(EditorCall::Redo);
        if let Some((chars, selection)) = self.redo_stack.pop() {
            self.undo_stack.push((std::mem::replace(&mut self.chars, chars), self.selection));
            self.selection = selection;
        }
    }

    fn process_key(&mut self, key: EditKey, mods: ModifierMask) {
        self.calls.push(EditorCall::Key(key, mods));
        let caret = self.caret();
        let len = self.chars.len();
        match key {
            EditKey::Left => self.move_caret(caret.saturating_sub(1), mods.shift()),
            EditKey::Right => self.move_caret((caret + 1).min(len), mods.shift()),
            EditKey::Home | EditKey::Up => self.move_caret(0, mods.shift()),
            EditKey::End | EditKey::Down => self.move_caret(len, mods.shift()),
            EditKey::Backspace | EditKey::Delete if !self.selection.is_collapsed() => {
                self.replace_selection("")
            }
            EditKey::Backspace if caret > 0 => self.replace_range(caret - 1..caret, ""),
            EditKey::Delete if caret < len => self.replace_range(caret..caret + 1, ""),
            EditKey::Enter => self.replace_selection("\n"),
            _ => {}
        }
    }

    fn select_all(&mut self) {
        self.calls.push(EditorCall::SelectAll);
        self.selection = Selection::new(
            TextPosition::leading(0),
            TextPosition::trailing(self.chars.len()),
        );
    }

    fn select_none(&mut self) {
        self.calls.push(EditorCall::SelectNone);
        self.selection = Selection::collapsed(self.selection.end);
    }

    fn selection(&self) -> Selection {
        self.selection
    }

    fn selection_count(&self, selection: Selection) -> usize {
        self.covered(selection).len()
    }

    fn selection_utf8_len(&self, selection: Selection) -> usize {
        self.chars[self.covered(selection)]
            .iter()
            .map(|c| c.len_utf8())
            .sum()
    }

    fn write_selection_text(&self, selection: Selection, out: &mut String) {
        out.extend(&self.chars[self.covered(selection)]);
    }

    fn process_mouse_click(&mut self, pos: Point, mods: ModifierMask, time: f64) {
        self.calls.push(EditorCall::Click { pos, time });
        let offset = self.hit(pos.x);
        self.move_caret(offset, mods.shift());
    }

    fn process_mouse_drag(&mut self, pos: Point) {
        self.calls.push(EditorCall::Drag(pos));
        let offset = self.hit(pos.x);
        self.move_caret(offset, true);
    }

    fn set_composition(&mut self, text: &str, cursor: usize) {
        self.composition = Some((text.to_string(), cursor));
    }

    fn commit_composition(&mut self, text: &str) {
        self.composition = None;
        self.replace_selection(text);
    }

    fn clear_composition(&mut self) {
        self.composition = None;
    }

    fn visual_caret(&self, position: TextPosition) -> VisualCaret {
        VisualCaret {
            x: position.offset as f64 * ADVANCE,
            y: CARET_TOP,
            width: 0.0,
            height: CARET_HEIGHT,
            direction: self.text_direction_at(position),
        }
    }

    fn text_direction_at(&self, position: TextPosition) -> TextDirection {
        let index = if position.affinity.is_leading_edge() {
            position.offset
        } else {
            position.offset.saturating_sub(1)
        };
        char_direction(self.chars.get(index))
    }

    fn text_offset_at(&self, position: TextPosition) -> usize {
        position.offset.min(self.chars.len())
    }

    fn line_index_at(&self, _position: TextPosition) -> usize {
        0
    }

    fn column_index_at(&self, position: TextPosition) -> usize {
        self.text_offset_at(position)
    }

    fn paragraph_count(&self) -> usize {
        1
    }

    fn paragraph_offset_y(&self, _paragraph: usize) -> f64 {
        0.0
    }

    fn paragraph_direction(&self, _paragraph: usize) -> TextDirection {
        char_direction(self.chars.first())
    }

    fn line_count(&self, _paragraph: usize) -> usize {
        1
    }

    fn line_metrics(&self, _paragraph: usize, _line: usize) -> LineMetrics {
        LineMetrics {
            bounds: Rect::new(0.0, CARET_TOP, self.chars.len() as f64 * ADVANCE, 20.0),
            baseline: 0.0,
            ascender: CARET_TOP,
            descender: 20.0,
        }
    }

    fn caret_boundaries(&self, _paragraph: usize, _line: usize) -> CaretBoundaries<'_> {
        let len = self.chars.len();
        Box::new((0..=len).map(move |i| {
            let before = i.checked_sub(1).and_then(|j| self.chars.get(j));
            let after = self.chars.get(i);
            CaretBoundary {
                x: i as f64 * ADVANCE,
                advance: if i < len { ADVANCE } else { 0.0 },
                left: CaretEdge::new(char_direction(before.or(after)), TextPosition::trailing(i)),
                right: CaretEdge::new(char_direction(after.or(before)), TextPosition::leading(i)),
            }
        }))
    }

    fn selection_bounds(&self, selection: Selection) -> SelectionRects<'_> {
        let range = self.covered(selection);
        let rect = (!range.is_empty()).then(|| {
            Rect::new(
                range.start as f64 * ADVANCE,
                CARET_TOP,
                range.end as f64 * ADVANCE,
                20.0,
            )
        });
        Box::new(rect.into_iter())
    }
}

// ============================================================================
// IME
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImeCall {
    Attach,
    Detach,
    Cancel,
    Publish(InputRect),
}

/// Recording IME service. Clones share one call log.
#[derive(Clone, Debug, Default)]
pub struct FakeIme {
    calls: Rc<RefCell<Vec<ImeCall>>>,
    drop_log: Option<DropLog>,
}

impl FakeIme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record "ime" in `log` when detached
    pub fn with_drop_log(mut self, log: &DropLog) -> Self {
        self.drop_log = Some(log.clone());
        self
    }

    pub fn calls(&self) -> Vec<ImeCall> {
        self.calls.borrow().clone()
    }

    pub fn publish_count(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, ImeCall::Publish(_)))
            .count()
    }

    pub fn last_rect(&self) -> Option<InputRect> {
        self.calls.borrow().iter().rev().find_map(|c| match c {
            ImeCall::Publish(rect) => Some(*rect),
            _ => None,
        })
    }
}

impl ImeService for FakeIme {
    fn attach(&mut self) {
        self.calls.borrow_mut().push(ImeCall::Attach);
    }

    fn detach(&mut self) {
        self.calls.borrow_mut().push(ImeCall::Detach);
        if let Some(log) = &self.drop_log {
            log.record("ime");
        }
    }

    fn publish_input_rect(&mut self, rect: InputRect) {
        self.calls.borrow_mut().push(ImeCall::Publish(rect));
    }

    fn cancel_composition(&mut self) {
        self.calls.borrow_mut().push(ImeCall::Cancel);
    }
}

// ============================================================================
// HOST AND FONTS
// ============================================================================

#[derive(Debug, Default)]
pub struct FakeHost {
    pub clipboard: Option<String>,
    pub close_requested: bool,
}

impl Host for FakeHost {
    fn clipboard_text(&mut self) -> Option<String> {
        self.clipboard.clone()
    }

    fn set_clipboard_text(&mut self, text: &str) {
        self.clipboard = Some(text.to_string());
    }

    fn request_close(&mut self) {
        self.close_requested = true;
    }
}

/// Font collection that fails for any path containing "missing"
#[derive(Debug, Default)]
pub struct FakeFonts {
    loaded: Rc<RefCell<Vec<(PathBuf, FontFamily)>>>,
    drop_log: Option<DropLog>,
}

impl FakeFonts {
    pub fn new(log: &DropLog) -> Self {
        Self {
            loaded: Rc::default(),
            drop_log: Some(log.clone()),
        }
    }

    /// Shared view of the fonts added so far
    pub fn loaded(&self) -> Rc<RefCell<Vec<(PathBuf, FontFamily)>>> {
        self.loaded.clone()
    }
}

impl FontCollection for FakeFonts {
    fn add_font(&mut self, path: &Path, family: FontFamily) -> bool {
        if path.to_string_lossy().contains("missing") {
            return false;
        }
        self.loaded.borrow_mut().push((path.to_path_buf(), family));
        true
    }
}

impl Drop for FakeFonts {
    fn drop(&mut self) {
        if let Some(log) = &self.drop_log {
            log.record("fonts");
        }
    }
}
