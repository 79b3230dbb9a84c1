// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Font collection loaded once at startup

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Fallback family a font file is registered under
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    #[default]
    Default,
    Emoji,
}

/// Font loading and matching engine
pub trait FontCollection {
    /// Load a font file. Returns false if the file could not be used.
    fn add_font(&mut self, path: &Path, family: FontFamily) -> bool;
}
