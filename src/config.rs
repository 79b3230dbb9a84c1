// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Testbed configuration.
//!
//! Every field has a default matching the constants in `settings`, so an
//! empty TOML file (or no file at all) gives the stock testbed.

use crate::editing::ViewTransform;
use crate::error::TestbedError;
use crate::model::{BaseDirection, EditorParams, FontFamily, TextStyle, TextWrap, UnderlineStyle};
use crate::settings;
use anyhow::{Context, Result};
use kurbo::Vec2;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Mixed-script sample: Latin, emoji, Persian and Japanese
const SAMPLE_TEXT: &str = "Hamburgerfontstiv 🤣🥰💀✌️🌴🐢🐐🍄⚽🍻👑📸 این یک تست است 😬👀🚨🏡🕊️🏆😻🌟私はその人を常に先生と 呼んでいた。";

const DEFAULT_FONTS: &[(&str, FontFamily)] = &[
    ("data/IBMPlexSans-Regular.ttf", FontFamily::Default),
    ("data/IBMPlexSansArabic-Regular.ttf", FontFamily::Default),
    ("data/IBMPlexSansJP-Regular.ttf", FontFamily::Default),
    ("data/IBMPlexSansKR-Regular.ttf", FontFamily::Default),
    ("data/IBMPlexSansDevanagari-Regular.ttf", FontFamily::Default),
    ("data/NotoSansBrahmi-Regular.ttf", FontFamily::Default),
    ("data/NotoSerifBalinese-Regular.ttf", FontFamily::Default),
    ("data/NotoSansTamil-Regular.ttf", FontFamily::Default),
    ("data/NotoSansBengali-Regular.ttf", FontFamily::Default),
    ("data/NotoSansThai-Regular.ttf", FontFamily::Default),
    ("data/NotoColorEmoji-Regular.ttf", FontFamily::Emoji),
];

/// A font file to load at startup
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FontSource {
    pub path: PathBuf,
    #[serde(default)]
    pub family: FontFamily,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub center_x: f64,
    pub center_y: f64,
    pub scale: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            center_x: settings::view::CENTER_X,
            center_y: settings::view::CENTER_Y,
            scale: settings::view::SCALE,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub lang: String,
    pub base_direction: BaseDirection,
    pub layout_width: f64,
    pub wrap: TextWrap,
    pub font_size: f64,
    pub line_height: f64,
    /// Defaults to two font sizes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab_stop_increment: Option<f64>,
    pub text_style: TextStyle,
    /// Style of in-flight IME text, dotted underline by default
    pub composition_style: TextStyle,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            lang: settings::layout::LANG.to_string(),
            base_direction: BaseDirection::Auto,
            layout_width: settings::layout::WIDTH,
            wrap: TextWrap::WordChar,
            font_size: settings::layout::FONT_SIZE,
            line_height: settings::layout::LINE_HEIGHT,
            tab_stop_increment: None,
            text_style: TextStyle {
                color: settings::layout::INK_COLOR,
                underline: UnderlineStyle::None,
            },
            composition_style: TextStyle {
                color: settings::layout::COMPOSITION_COLOR,
                underline: UnderlineStyle::Dotted,
            },
        }
    }
}

/// Initial state of the F7-F10 overlay toggles
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    pub baseline_details: bool,
    pub caret_details: bool,
    pub glyph_details: bool,
    pub atlas_scale: f64,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            baseline_details: false,
            caret_details: true,
            glyph_details: false,
            atlas_scale: 0.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestbedConfig {
    pub view: ViewConfig,
    pub zoom_speed: f64,
    pub sample_text: String,
    pub fonts: Vec<FontSource>,
    pub layout: LayoutConfig,
    pub overlays: OverlayConfig,
}

impl Default for TestbedConfig {
    fn default() -> Self {
        Self {
            view: ViewConfig::default(),
            zoom_speed: settings::view::ZOOM_SPEED,
            sample_text: SAMPLE_TEXT.to_string(),
            fonts: DEFAULT_FONTS
                .iter()
                .map(|&(path, family)| FontSource {
                    path: PathBuf::from(path),
                    family,
                })
                .collect(),
            layout: LayoutConfig::default(),
            overlays: OverlayConfig::default(),
        }
    }
}

impl TestbedConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, TestbedError> {
        Ok(toml::from_str(text)?)
    }

    /// Read a config file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config = Self::from_toml_str(&text)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parameters for creating the editor
    pub fn editor_params(&self) -> EditorParams {
        let layout = &self.layout;
        EditorParams {
            lang: layout.lang.clone(),
            base_direction: layout.base_direction,
            layout_width: layout.layout_width,
            wrap: layout.wrap,
            tab_stop_increment: layout
                .tab_stop_increment
                .unwrap_or(layout.font_size * 2.0),
            font_size: layout.font_size,
            line_height: layout.line_height,
            text_style: layout.text_style,
            composition_style: layout.composition_style,
        }
    }

    /// The initial view
    pub fn view_transform(&self) -> ViewTransform {
        ViewTransform::new(
            Vec2::new(self.view.center_x, self.view.center_y),
            self.view.scale,
        )
    }
}
