// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Caret boundary resolution and visual caret geometry.
//!
//! The layout engine reports every caret stop on a line together with the
//! logical position and direction on each side of it. Inside a single
//! direction run the two sides name the same visual spot, so one marker is
//! enough. At a direction change they name two different logical
//! positions, and the overlay shows both as half markers.
//!
//! Labels under neighbouring stops collide when glyphs are narrow. The
//! resolver staggers the left-side label of a stop when the previous stop
//! was closer than `settings::caret::LABEL_OVERLAP_ADVANCE`.

use crate::model::{
    Affinity, CaretBoundary, CaretEdge, TextDirection, TextPosition, VisualCaret,
};
use crate::settings;
use kurbo::{Line, Point};

/// Which side of the boundary line a marker and its label sit on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerSide {
    Left,
    Right,
}

/// A labeled caret marker at a boundary
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CaretMarker {
    pub side: MarkerSide,
    pub direction: TextDirection,
    pub position: TextPosition,
    /// Extra downward shift of the label
    pub label_offset: f64,
}

impl CaretMarker {
    fn new(side: MarkerSide, edge: CaretEdge, label_offset: f64) -> Self {
        Self {
            side,
            direction: edge.direction,
            position: edge.position,
            label_offset,
        }
    }

    /// Overlay label, e.g. "TR3"
    pub fn label(&self) -> String {
        self.position.to_string()
    }
}

/// Markers for one boundary: a single marker inside a direction run, or a
/// pair of half markers where the direction changes
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BoundaryMarkers {
    Single(CaretMarker),
    Split { left: CaretMarker, right: CaretMarker },
}

impl BoundaryMarkers {
    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Split { .. } => 2,
        }
    }

    pub fn is_split(&self) -> bool {
        matches!(self, Self::Split { .. })
    }

    pub fn iter(&self) -> impl Iterator<Item = &CaretMarker> {
        let (first, second) = match self {
            Self::Single(m) => (m, None),
            Self::Split { left, right } => (left, Some(right)),
        };
        std::iter::once(first).chain(second)
    }
}

/// A boundary with its markers resolved
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedCaret {
    pub x: f64,
    pub markers: BoundaryMarkers,
}

impl ResolvedCaret {
    /// Horizontal pointing sign of a marker's direction triangle.
    ///
    /// Half markers point away from the boundary toward their own side;
    /// full markers point along their reading direction.
    pub fn pointing(&self, marker: &CaretMarker) -> f64 {
        match (self.markers, marker.side) {
            (BoundaryMarkers::Split { .. }, MarkerSide::Left) => -1.0,
            (BoundaryMarkers::Split { .. }, MarkerSide::Right) => 1.0,
            (BoundaryMarkers::Single(_), _) => marker.direction.sign(),
        }
    }

    /// Anchor of a marker's label given the line top, in the same space as
    /// `x`. Left labels are right-aligned to the anchor.
    pub fn label_anchor(&self, marker: &CaretMarker, top_y: f64) -> Point {
        let y = top_y + settings::caret::LABEL_DROP + marker.label_offset;
        match marker.side {
            MarkerSide::Left => Point::new(self.x - settings::caret::LABEL_GAP, y),
            MarkerSide::Right => Point::new(self.x + settings::caret::LABEL_GAP, y),
        }
    }
}

/// Resolves a line's caret boundaries into markers.
///
/// Wraps the editor's boundary sequence for one line; build a new resolver
/// for every line and frame.
pub struct CaretResolver<I> {
    boundaries: I,
    /// Stagger for the next left-side label
    left_label_offset: f64,
}

impl<I> CaretResolver<I>
where
    I: Iterator<Item = CaretBoundary>,
{
    pub fn new(boundaries: I) -> Self {
        Self {
            boundaries,
            left_label_offset: 0.0,
        }
    }

    fn stagger_after(advance: f64) -> f64 {
        if advance < settings::caret::LABEL_OVERLAP_ADVANCE {
            settings::caret::LABEL_OVERLAP_OFFSET
        } else {
            0.0
        }
    }

    fn resolve(&mut self, boundary: &CaretBoundary) -> BoundaryMarkers {
        if boundary.left.direction != boundary.right.direction {
            let markers = BoundaryMarkers::Split {
                left: CaretMarker::new(MarkerSide::Left, boundary.left, self.left_label_offset),
                right: CaretMarker::new(MarkerSide::Right, boundary.right, 0.0),
            };
            self.left_label_offset = Self::stagger_after(boundary.advance);
            return markers;
        }

        if boundary.right.position.affinity == Affinity::Trailing {
            self.left_label_offset = Self::stagger_after(boundary.advance);
            BoundaryMarkers::Single(CaretMarker::new(MarkerSide::Right, boundary.right, 0.0))
        } else {
            let marker =
                CaretMarker::new(MarkerSide::Left, boundary.left, self.left_label_offset);
            self.left_label_offset = 0.0;
            BoundaryMarkers::Single(marker)
        }
    }
}

impl<I> Iterator for CaretResolver<I>
where
    I: Iterator<Item = CaretBoundary>,
{
    type Item = ResolvedCaret;

    fn next(&mut self) -> Option<Self::Item> {
        let boundary = self.boundaries.next()?;
        let markers = self.resolve(&boundary);
        Some(ResolvedCaret {
            x: boundary.x,
            markers,
        })
    }
}

/// Drawable shape of the active caret
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CaretGeometry {
    /// Caret stroke, leaning with the caret slope
    pub line: Line,
    /// Direction indicator hanging off the caret top
    pub triangle: [Point; 3],
    /// Anchor of the affinity label
    pub label_anchor: Point,
    /// +1 if the label extends to the right of its anchor, -1 to the left
    pub label_side: f64,
}

impl CaretGeometry {
    /// Lay out the caret for `caret`, in text space.
    ///
    /// `affinity` is the affinity of the selection end and `text_is_rtl`
    /// the direction of the text at it; together they put the label on
    /// the side of the character the caret belongs to.
    pub fn new(caret: &VisualCaret, affinity: Affinity, text_is_rtl: bool) -> Self {
        let inset = settings::caret::CARET_INSET;
        let slope = if caret.height != 0.0 {
            caret.width / caret.height
        } else {
            0.0
        };

        let top = Point::new(caret.x + caret.width - slope * inset, caret.y + inset);
        let bottom = Point::new(caret.x + slope * inset, caret.y + caret.height - inset);

        let size = caret.height.abs() / 10.0;
        let tri_top = Point::new(caret.x + caret.width, caret.y);
        let triangle = [
            tri_top,
            Point::new(tri_top.x + size * caret.direction.sign(), tri_top.y),
            Point::new(tri_top.x - size * slope, tri_top.y + size),
        ];

        let mut label_side = if affinity.is_leading_edge() { -1.0 } else { 1.0 };
        if text_is_rtl {
            label_side = -label_side;
        }
        let label_anchor = Point::new(
            bottom.x + label_side * 7.0 + slope * 23.0,
            bottom.y - 23.0,
        );

        Self {
            line: Line::new(top, bottom),
            triangle,
            label_anchor,
            label_side,
        }
    }
}
