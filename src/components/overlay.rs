// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Per-frame debug overlay.
//!
//! `FrameOverlay` is everything the renderer draws on top of the text for
//! one frame, in text space unless noted. Building it only queries the
//! editor; drawing is left to the caller.

use crate::config::OverlayConfig;
use crate::editing::{CaretGeometry, CaretMarker, CaretResolver, ResolvedCaret, ScratchStats};
use crate::model::{TextDirection, TextEditor, TextPosition};
use crate::settings;
use kurbo::{Affine, Point, Rect, Vec2};
use std::fmt;

// ============================================================================
// TOGGLES
// ============================================================================

/// Overlay toggles bound to F7-F10
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayToggles {
    pub baseline_details: bool,
    pub caret_details: bool,
    pub glyph_details: bool,
    /// Glyph atlas preview scale, 0 when hidden
    pub atlas_scale: f64,
}

impl Default for OverlayToggles {
    fn default() -> Self {
        Self::from(&OverlayConfig::default())
    }
}

impl From<&OverlayConfig> for OverlayToggles {
    fn from(config: &OverlayConfig) -> Self {
        Self {
            baseline_details: config.baseline_details,
            caret_details: config.caret_details,
            glyph_details: config.glyph_details,
            atlas_scale: config.atlas_scale,
        }
    }
}

impl OverlayToggles {
    /// Apply a function key press. Returns false for keys without a toggle.
    pub fn handle_function_key(&mut self, number: u8) -> bool {
        match number {
            7 => self.baseline_details = !self.baseline_details,
            8 => self.caret_details = !self.caret_details,
            9 => self.glyph_details = !self.glyph_details,
            10 => {
                self.atlas_scale += settings::overlay::ATLAS_SCALE_STEP;
                if self.atlas_scale > settings::overlay::ATLAS_SCALE_MAX {
                    self.atlas_scale = 0.0;
                }
            }
            _ => return false,
        }
        tracing::debug!("F{} toggled: {:?}", number, self);
        true
    }

    /// Key help shown in the window corner
    pub fn help_line(&self) -> String {
        fn on_off(flag: bool) -> &'static str {
            if flag { "ON" } else { "OFF" }
        }

        format!(
            "F7: Baseline details {}   F8: Caret details {}   F9: Glyph details {}   F10: Atlas {:.1}%",
            on_off(self.baseline_details),
            on_off(self.caret_details),
            on_off(self.glyph_details),
            self.atlas_scale * 100.0
        )
    }
}

// ============================================================================
// STATUS LINE
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionSummary {
    pub start: usize,
    pub end: usize,
    /// Codepoints covered
    pub count: usize,
}

/// Caret and selection readout under the text
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusLine {
    pub caret: TextPosition,
    /// One-based line of the insert position
    pub line: usize,
    /// One-based column of the insert position
    pub column: usize,
    /// Present when the selection covers any text
    pub selection: Option<SelectionSummary>,
    pub text_offset: usize,
}

impl StatusLine {
    pub fn from_editor(editor: &dyn TextEditor) -> Self {
        let selection = editor.selection();
        let insert = TextPosition::trailing(editor.text_offset_at(selection.end));
        let count = editor.selection_count(selection);

        Self {
            caret: selection.end,
            line: editor.line_index_at(insert) + 1,
            column: editor.column_index_at(insert) + 1,
            selection: (count > 0).then_some(SelectionSummary {
                start: selection.start.offset,
                end: selection.end.offset,
                count,
            }),
            text_offset: selection.end.offset,
        }
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Caret: {}   Ln {}, Col {}", self.caret, self.line, self.column)?;
        if let Some(sel) = self.selection {
            write!(f, "   Selection {} - {}, ({} chars)", sel.start, sel.end, sel.count)?;
        }
        write!(f, "   text_offset {}", self.text_offset)
    }
}

// ============================================================================
// FRAME
// ============================================================================

/// One laid out line with its caret boundary markers
#[derive(Clone, Debug, PartialEq)]
pub struct LineOverlay {
    pub paragraph: usize,
    pub line: usize,
    /// Resolved direction of the line's paragraph
    pub direction: TextDirection,
    pub bounds: Rect,
    pub baseline_y: f64,
    pub top_y: f64,
    pub bottom_y: f64,
    /// Empty unless caret details are on
    pub carets: Vec<ResolvedCaret>,
}

impl LineOverlay {
    /// Direction triangle for a boundary marker, hanging below the line top
    pub fn marker_triangle(&self, caret: &ResolvedCaret, marker: &CaretMarker) -> [Point; 3] {
        let size = settings::caret::MARKER_SIZE;
        let top = Point::new(caret.x, self.top_y + size);
        [
            top,
            Point::new(top.x + size * caret.pointing(marker), top.y),
            Point::new(top.x, top.y + size),
        ]
    }

    /// Label anchor for a boundary marker
    pub fn marker_label_anchor(&self, caret: &ResolvedCaret, marker: &CaretMarker) -> Point {
        caret.label_anchor(marker, self.top_y)
    }
}

/// The caret drawn for a collapsed selection
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActiveCaret {
    pub geometry: CaretGeometry,
    /// Affinity label, e.g. "TR"
    pub label: &'static str,
}

/// Everything drawn over the text for one frame
#[derive(Clone, Debug, PartialEq)]
pub struct FrameOverlay {
    /// Text space to screen space
    pub transform: Affine,
    pub selection_rects: Vec<Rect>,
    pub lines: Vec<LineOverlay>,
    /// Present only when nothing is selected
    pub caret: Option<ActiveCaret>,
    pub status: StatusLine,
    pub scratch: ScratchStats,
    pub toggles: OverlayToggles,
    pub help: String,
}

pub(crate) fn collect_lines(editor: &dyn TextEditor, caret_details: bool) -> Vec<LineOverlay> {
    let mut lines = Vec::new();
    for paragraph in 0..editor.paragraph_count() {
        let offset_y = editor.paragraph_offset_y(paragraph);
        let direction = editor.paragraph_direction(paragraph);

        for line in 0..editor.line_count(paragraph) {
            let metrics = editor.line_metrics(paragraph, line);
            let baseline_y = offset_y + metrics.baseline;
            let carets = if caret_details {
                CaretResolver::new(editor.caret_boundaries(paragraph, line)).collect()
            } else {
                Vec::new()
            };

            lines.push(LineOverlay {
                paragraph,
                line,
                direction,
                bounds: metrics.bounds + Vec2::new(0.0, offset_y),
                baseline_y,
                top_y: baseline_y + metrics.ascender,
                bottom_y: baseline_y + metrics.descender,
                carets,
            });
        }
    }
    lines
}

pub(crate) fn active_caret(editor: &dyn TextEditor) -> Option<ActiveCaret> {
    let selection = editor.selection();
    if editor.selection_count(selection) > 0 {
        return None;
    }

    let end = selection.end;
    let caret = editor.visual_caret(end);
    let text_is_rtl = editor.text_direction_at(end).is_rtl();
    Some(ActiveCaret {
        geometry: CaretGeometry::new(&caret, end.affinity, text_is_rtl),
        label: end.affinity.label(),
    })
}

pub(crate) fn selection_rects(editor: &dyn TextEditor) -> Vec<Rect> {
    let selection = editor.selection();
    if editor.selection_count(selection) == 0 {
        return Vec::new();
    }
    editor.selection_bounds(selection).collect()
}
