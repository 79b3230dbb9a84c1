// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Testbed errors

use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort testbed construction or config parsing
#[derive(Debug, Error)]
pub enum TestbedError {
    #[error("Failed to load font {path:?}")]
    FontLoad { path: PathBuf },

    #[error("Text editor could not be created")]
    EditorUnavailable,

    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),
}
