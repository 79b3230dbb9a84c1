// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Testbed settings and tuning constants.
//!
//! Runtime-adjustable values (initial view, zoom speed, sample text) live in
//! `config.rs`. The constants here are the defaults and the fixed layout of
//! the debug overlay.

// ============================================================================
// VIEW SETTINGS
// ============================================================================
/// Initial screen-space X of the text origin
const VIEW_CENTER_X: f64 = 400.0;

/// Initial screen-space Y of the text origin
const VIEW_CENTER_Y: f64 = 120.0;

/// Initial zoom
const VIEW_SCALE: f64 = 1.0;

/// Scale change per wheel line
const ZOOM_SPEED: f64 = 0.2;

/// Pixel scroll deltas are divided by this to get wheel lines
const PIXELS_PER_SCROLL_LINE: f64 = 20.0;

// ============================================================================
// CARET OVERLAY SETTINGS
// ============================================================================
// Boundary labels sit under the line top. When the next boundary is closer
// than the threshold its left-side label is pushed down to avoid overlap.

/// Boundaries closer than this (in text units) get their labels staggered
const LABEL_OVERLAP_ADVANCE: f64 = 40.0;

/// Vertical offset applied to a staggered left-side label
const LABEL_OVERLAP_OFFSET: f64 = 15.0;

/// Distance from line top to the boundary label baseline
const LABEL_DROP: f64 = 20.0;

/// Horizontal gap between a boundary line and its labels
const LABEL_GAP: f64 = 3.0;

/// Size of the boundary direction triangle
const MARKER_SIZE: f64 = 5.0;

/// Inset of the visual caret line from the caret rectangle ends
const CARET_INSET: f64 = 3.0;

// ============================================================================
// LAYOUT DEFAULTS
// ============================================================================
const LAYOUT_WIDTH: f64 = 1200.0;
const FONT_SIZE: f64 = 92.0;
const LINE_HEIGHT: f64 = 1.3;
const LANG: &str = "zh-hans";

/// Committed text fill
const INK_COLOR: [u8; 4] = [64, 64, 64, 255];

/// IME composition fill and underline
const COMPOSITION_COLOR: [u8; 4] = [0, 128, 192, 255];

// ============================================================================
// DEBUG OVERLAY SETTINGS
// ============================================================================
/// Step for cycling the atlas preview scale with F10
const ATLAS_SCALE_STEP: f64 = 0.25;

/// Atlas preview wraps back to hidden past this scale
const ATLAS_SCALE_MAX: f64 = 1.01;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// View (pan/zoom) defaults
pub mod view {
    pub const CENTER_X: f64 = super::VIEW_CENTER_X;
    pub const CENTER_Y: f64 = super::VIEW_CENTER_Y;
    pub const SCALE: f64 = super::VIEW_SCALE;

    /// Scale change per wheel line
    pub const ZOOM_SPEED: f64 = super::ZOOM_SPEED;

    /// Pixel-to-line divisor for touchpad scrolling
    pub const PIXELS_PER_SCROLL_LINE: f64 = super::PIXELS_PER_SCROLL_LINE;
}

/// Caret boundary overlay layout
pub mod caret {
    /// Advance below which the next left-side label is staggered
    pub const LABEL_OVERLAP_ADVANCE: f64 = super::LABEL_OVERLAP_ADVANCE;

    /// Stagger applied to the left-side label
    pub const LABEL_OVERLAP_OFFSET: f64 = super::LABEL_OVERLAP_OFFSET;

    pub const LABEL_DROP: f64 = super::LABEL_DROP;
    pub const LABEL_GAP: f64 = super::LABEL_GAP;
    pub const MARKER_SIZE: f64 = super::MARKER_SIZE;
    pub const CARET_INSET: f64 = super::CARET_INSET;
}

/// Editor layout defaults
pub mod layout {
    pub const WIDTH: f64 = super::LAYOUT_WIDTH;
    pub const FONT_SIZE: f64 = super::FONT_SIZE;

    /// Line height relative to font metrics
    pub const LINE_HEIGHT: f64 = super::LINE_HEIGHT;

    pub const LANG: &str = super::LANG;

    pub const INK_COLOR: [u8; 4] = super::INK_COLOR;
    pub const COMPOSITION_COLOR: [u8; 4] = super::COMPOSITION_COLOR;
}

/// Debug overlay toggles
pub mod overlay {
    pub const ATLAS_SCALE_STEP: f64 = super::ATLAS_SCALE_STEP;
    pub const ATLAS_SCALE_MAX: f64 = super::ATLAS_SCALE_MAX;
}
