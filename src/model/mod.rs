// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Text model types and the collaborator interfaces the testbed drives

pub mod editor;
pub mod fonts;
pub mod keys;
pub mod text;

pub use editor::{
    BaseDirection, CaretBoundaries, CaretBoundary, CaretEdge, EditorParams, LineMetrics,
    SelectionRects, TextEditor, TextStyle, TextWrap, UnderlineStyle, VisualCaret,
};
pub use fonts::{FontCollection, FontFamily};
pub use keys::{EditKey, ModifierMask};
pub use text::{Affinity, Selection, TextDirection, TextPosition};
