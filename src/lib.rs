// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Caretbed: an interactive testbed for bidirectional text editing.
//!
//! Drives an external text layout and editing engine through the
//! `TextEditor` trait and builds a debug overlay showing caret boundaries,
//! affinities and the visual caret. Input arrives through `Testbed`'s event
//! methods, usually translated from winit by `platform::translate`.

pub mod components;
pub mod config;
pub mod editing;
pub mod error;
pub mod model;
pub mod platform;
pub mod settings;

#[cfg(test)]
mod testing;

pub use components::{FrameOverlay, Testbed};
pub use config::TestbedConfig;
pub use error::TestbedError;

/// Install the fmt tracing subscriber.
///
/// The filter is read from `RUST_LOG`, falling back to `caretbed=info`.
/// Does nothing if a global subscriber is already set.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("caretbed=info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
