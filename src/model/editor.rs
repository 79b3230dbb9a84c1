// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Interface to the text layout and editing engine.
//!
//! The engine owns text storage, shaping, bidi resolution, line breaking,
//! undo history and composition state. The testbed only drives it through
//! the `TextEditor` trait and reads back geometry for the overlay.
//!
//! All coordinates are in text space (see `editing::viewport`).

use super::keys::{EditKey, ModifierMask};
use super::text::{Selection, TextDirection, TextPosition};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Paragraph base direction requested from the layout engine
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseDirection {
    /// Resolved from the first strong character
    #[default]
    Auto,
    Ltr,
    Rtl,
}

/// Line wrapping mode
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextWrap {
    None,
    Word,
    /// Break at words, falling back to characters for long words
    #[default]
    WordChar,
}

/// Decoration line style
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnderlineStyle {
    #[default]
    None,
    Solid,
    Dotted,
    Dashed,
}

/// Fill and decoration for a span of text
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStyle {
    /// RGBA fill
    pub color: [u8; 4],
    /// Drawn in the fill color
    #[serde(default)]
    pub underline: UnderlineStyle,
}

/// Parameters used to create the editor
#[derive(Clone, Debug, PartialEq)]
pub struct EditorParams {
    pub lang: String,
    pub base_direction: BaseDirection,
    pub layout_width: f64,
    pub wrap: TextWrap,
    pub tab_stop_increment: f64,
    pub font_size: f64,
    pub line_height: f64,
    /// Committed text
    pub text_style: TextStyle,
    /// In-flight IME composition text
    pub composition_style: TextStyle,
}

/// The caret as drawn at a logical position.
///
/// `(x, y)` is the top-left of the caret rectangle. For upright text
/// `width` is zero; for italic runs it is the horizontal lean of the top
/// relative to the bottom.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VisualCaret {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub direction: TextDirection,
}

impl VisualCaret {
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// One side of a caret boundary
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CaretEdge {
    pub direction: TextDirection,
    pub position: TextPosition,
}

impl CaretEdge {
    pub const fn new(direction: TextDirection, position: TextPosition) -> Self {
        Self { direction, position }
    }
}

/// A visual caret stop on a line, with what lies on either side
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CaretBoundary {
    /// X relative to the line's layout origin
    pub x: f64,
    /// Distance to the next boundary on the line
    pub advance: f64,
    pub left: CaretEdge,
    pub right: CaretEdge,
}

/// Vertical metrics of a laid out line, relative to its paragraph.
///
/// Y grows downward, so `ascender` is negative.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LineMetrics {
    pub bounds: Rect,
    pub baseline: f64,
    pub ascender: f64,
    pub descender: f64,
}

/// Caret boundaries of a single line, front to back.
///
/// Each call to `TextEditor::caret_boundaries` starts a fresh sequence.
pub type CaretBoundaries<'a> = Box<dyn Iterator<Item = CaretBoundary> + 'a>;

/// Selection highlight rectangles
pub type SelectionRects<'a> = Box<dyn Iterator<Item = Rect> + 'a>;

/// Text layout and editing engine
pub trait TextEditor {
    // --- Text mutation -----------------------------------------------------

    fn set_text(&mut self, text: &str);
    fn insert_codepoint(&mut self, ch: char);
    fn paste(&mut self, text: &str);
    /// Delete the current selection
    fn cut(&mut self);
    fn undo(&mut self);
    fn redo(&mut self);

    /// Movement and edit keys; SHIFT extends the selection
    fn process_key(&mut self, key: EditKey, mods: ModifierMask);

    // --- Selection ---------------------------------------------------------

    fn select_all(&mut self);
    fn select_none(&mut self);
    fn selection(&self) -> Selection;

    /// Number of codepoints covered by `selection`
    fn selection_count(&self, selection: Selection) -> usize;

    /// UTF-8 length of the text covered by `selection`
    fn selection_utf8_len(&self, selection: Selection) -> usize;

    /// Append the text covered by `selection` to `out`
    fn write_selection_text(&self, selection: Selection, out: &mut String);

    /// Place the caret at a text-space point. `time` is in seconds and lets
    /// the editor detect double and triple clicks.
    fn process_mouse_click(&mut self, pos: Point, mods: ModifierMask, time: f64);

    /// Extend the selection to a text-space point
    fn process_mouse_drag(&mut self, pos: Point);

    // --- Composition -------------------------------------------------------

    /// Replace the in-flight composition. `cursor` is a codepoint index
    /// into `text`.
    fn set_composition(&mut self, text: &str, cursor: usize);
    fn commit_composition(&mut self, text: &str);
    fn clear_composition(&mut self);

    // --- Queries -----------------------------------------------------------

    fn visual_caret(&self, position: TextPosition) -> VisualCaret;
    fn text_direction_at(&self, position: TextPosition) -> TextDirection;

    /// Codepoint insert offset that `position` resolves to
    fn text_offset_at(&self, position: TextPosition) -> usize;
    fn line_index_at(&self, position: TextPosition) -> usize;
    fn column_index_at(&self, position: TextPosition) -> usize;

    fn paragraph_count(&self) -> usize;
    fn paragraph_offset_y(&self, paragraph: usize) -> f64;
    fn paragraph_direction(&self, paragraph: usize) -> TextDirection;
    fn line_count(&self, paragraph: usize) -> usize;
    fn line_metrics(&self, paragraph: usize, line: usize) -> LineMetrics;

    fn caret_boundaries(&self, paragraph: usize, line: usize) -> CaretBoundaries<'_>;
    fn selection_bounds(&self, selection: Selection) -> SelectionRects<'_>;
}
