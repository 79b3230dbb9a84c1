// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Pan and zoom camera between text space and screen space.
//!
//! Text space is the layout engine's coordinate system. Screen space is
//! window pixels. The mapping is a uniform scale followed by a translation:
//!
//! ```text
//! screen = text * scale + center
//! text   = (screen - center) / scale
//! ```

use crate::model::VisualCaret;
use crate::settings;
use kurbo::{Affine, Point, Vec2};

/// Screen-space rectangle handed to the platform IME for candidate window
/// placement, in whole device pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct InputRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Camera mapping text space to screen space
#[derive(Clone, Debug, PartialEq)]
pub struct ViewTransform {
    /// Screen position of the text-space origin
    pub center: Vec2,
    /// Screen pixels per text unit
    pub scale: f64,
    /// Last pointer position of an active pan
    drag_anchor: Point,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new(
            Vec2::new(settings::view::CENTER_X, settings::view::CENTER_Y),
            settings::view::SCALE,
        )
    }
}

impl ViewTransform {
    pub fn new(center: Vec2, scale: f64) -> Self {
        Self {
            center,
            scale,
            drag_anchor: Point::ZERO,
        }
    }

    /// Text → screen
    pub fn to_screen(&self, text: Point) -> Point {
        (text.to_vec2() * self.scale + self.center).to_point()
    }

    /// Screen → text
    pub fn to_text(&self, screen: Point) -> Point {
        ((screen.to_vec2() - self.center) / self.scale).to_point()
    }

    /// The text → screen transform for the renderer
    pub fn affine(&self) -> Affine {
        Affine::translate(self.center) * Affine::scale(self.scale)
    }

    /// Begin a pan at a screen position
    pub fn start_drag(&mut self, screen: Point) {
        self.drag_anchor = screen;
    }

    /// Move the view by the screen-space distance since the last drag
    /// position. Independent of zoom.
    pub fn update_drag(&mut self, screen: Point) {
        self.center += screen - self.drag_anchor;
        self.drag_anchor = screen;
    }

    /// Change the scale by `delta_scale`, keeping the text point under
    /// `screen` fixed.
    ///
    /// The scale is not clamped; a delta that drives it to zero or below
    /// produces a degenerate view.
    pub fn zoom_at(&mut self, screen: Point, delta_scale: f64) {
        let new_scale = self.scale + delta_scale;
        let pivot = screen.to_vec2();
        self.center = pivot - (pivot - self.center) * (new_scale / self.scale);
        self.scale = new_scale;

        tracing::debug!(
            "Zoom at ({:.1}, {:.1}): scale={:.3}",
            screen.x,
            screen.y,
            self.scale
        );
    }

    /// IME rectangle for a caret, truncated to device pixels
    pub fn caret_input_rect(&self, caret: &VisualCaret) -> InputRect {
        let origin = self.to_screen(caret.origin());
        InputRect {
            x: origin.x as i32,
            y: origin.y as i32,
            width: (caret.width * self.scale) as i32,
            height: (caret.height * self.scale) as i32,
        }
    }
}
