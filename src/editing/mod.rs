// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Editing interaction: view mapping, caret markers, input routing and IME

pub mod caret;
pub mod ime;
pub mod input;
pub mod scratch;
pub mod viewport;

pub use caret::{BoundaryMarkers, CaretGeometry, CaretMarker, CaretResolver, MarkerSide, ResolvedCaret};
pub use ime::{ImeCoordinator, ImeEvent, ImeService};
pub use input::{
    ButtonAction, DragState, InputRouter, InputTargets, Key, KeyAction, PointerButton,
};
pub use scratch::{ScratchArena, ScratchStats, ScratchText};
pub use viewport::{InputRect, ViewTransform};
