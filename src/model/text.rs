// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Logical text positions and selections.
//!
//! A byte or codepoint offset alone cannot say which side of a bidi
//! boundary the caret sits on: in "abc ابج" offset 3 is both the end of the
//! Latin run and the visual right edge of the Arabic run. `Affinity` carries
//! that extra bit of intent.

use std::fmt;

/// Text direction for rendering and input handling
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextDirection {
    /// Left-to-right text (Latin, Cyrillic, etc.)
    #[default]
    LeftToRight,
    /// Right-to-left text (Arabic, Hebrew, etc.)
    RightToLeft,
}

impl TextDirection {
    /// Returns true if this is RTL direction
    pub fn is_rtl(&self) -> bool {
        matches!(self, Self::RightToLeft)
    }

    /// Sign of the reading direction along the x axis (+1 for LTR)
    pub fn sign(&self) -> f64 {
        if self.is_rtl() { -1.0 } else { 1.0 }
    }

    /// Get a short name for display
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::LeftToRight => "LTR",
            Self::RightToLeft => "RTL",
        }
    }
}

/// Which visual side of a grapheme boundary an offset refers to
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Affinity {
    #[default]
    None,
    /// After the character at `offset - 1` in logical order
    Trailing,
    /// Before the character at `offset`
    Leading,
    StartOfLine,
    EndOfLine,
}

impl Affinity {
    /// Short overlay label
    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "-",
            Self::Trailing => "TR",
            Self::Leading => "LE",
            Self::StartOfLine => "SOL",
            Self::EndOfLine => "EOL",
        }
    }

    /// Whether the caret visually sits before the referenced character
    pub fn is_leading_edge(&self) -> bool {
        matches!(self, Self::Leading | Self::StartOfLine)
    }
}

/// A logical caret position
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TextPosition {
    pub offset: usize,
    pub affinity: Affinity,
}

impl TextPosition {
    pub const fn new(offset: usize, affinity: Affinity) -> Self {
        Self { offset, affinity }
    }

    pub const fn trailing(offset: usize) -> Self {
        Self::new(offset, Affinity::Trailing)
    }

    pub const fn leading(offset: usize) -> Self {
        Self::new(offset, Affinity::Leading)
    }
}

impl fmt::Display for TextPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.affinity.label(), self.offset)
    }
}

/// Anchor and caret edge of the editor selection.
///
/// `end` is where the caret is drawn; `start` stays put while the user
/// extends the selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Selection {
    pub start: TextPosition,
    pub end: TextPosition,
}

impl Selection {
    pub const fn new(start: TextPosition, end: TextPosition) -> Self {
        Self { start, end }
    }

    /// A zero-width selection at `position`
    pub const fn collapsed(position: TextPosition) -> Self {
        Self::new(position, position)
    }

    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    /// Logical offsets covered, in ascending order
    pub fn offsets(&self) -> std::ops::Range<usize> {
        let a = self.start.offset;
        let b = self.end.offset;
        a.min(b)..a.max(b)
    }
}
