// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Testbed instance and its debug overlay

pub mod overlay;
pub mod testbed;

pub use overlay::{
    ActiveCaret, FrameOverlay, LineOverlay, OverlayToggles, SelectionSummary, StatusLine,
};
pub use testbed::Testbed;
