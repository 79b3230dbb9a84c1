// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Windowing platform boundary
//!
//! `Host` is what the router needs from the window system beyond raw
//! events. The `translate` module turns winit events into router input.

pub mod translate;

/// Window system services used while routing input
pub trait Host {
    /// Current clipboard text, if any
    fn clipboard_text(&mut self) -> Option<String>;
    fn set_clipboard_text(&mut self, text: &str);
    /// Ask the application to close its window
    fn request_close(&mut self);
}
