//! Theme configuration for the portal pages.
//!
//! A `ThemeConfig` is built once at startup (defaults, TOML file, CLI preset)
//! and then only ever read. The renderers in `crate::render` take it by
//! reference, so it can sit behind an `Arc` and be shared by every request.

use std::sync::LazyLock;

use clap::ValueEnum;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{PortalError, Result};

static HEX_COLOR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("Hex color regex pattern is valid"));

static CSS_LENGTH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0|[0-9]+(\.[0-9]+)?(px|em|rem|%|vh|vw|vmin|vmax|pt|pc|ch|ex|cm|mm|in))$")
        .expect("CSS length regex pattern is valid")
});

/// Branding, color theme and layout metrics for every rendered page.
///
/// Colors are `#RRGGBB` strings and layout metrics are CSS length literals.
/// The renderers interpolate them verbatim; supplying well-formed values is
/// the caller's responsibility (see [`ThemeConfig::validate`] for an opt-in
/// check).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub app_title: String,
    pub app_version: String,

    pub author_name: String,
    /// Empty means the footer shows `author_name` without a link.
    pub author_url: String,

    pub container_max_width: String,
    pub border_radius: String,
    pub button_padding: String,
    pub input_padding: String,

    pub primary_start: String,
    pub primary_end: String,
    pub secondary_start: String,
    pub secondary_end: String,
    pub danger_start: String,
    pub danger_end: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        let palette = ThemePreset::default().palette();
        Self {
            app_title: "WiFi Setup".to_string(),
            app_version: "v0.0.1".to_string(),
            author_name: "YourName".to_string(),
            author_url: "https://example.com".to_string(),
            container_max_width: "480px".to_string(),
            border_radius: "20px".to_string(),
            button_padding: "16px".to_string(),
            input_padding: "16px".to_string(),
            primary_start: palette.primary.0.to_string(),
            primary_end: palette.primary.1.to_string(),
            secondary_start: palette.secondary.0.to_string(),
            secondary_end: palette.secondary.1.to_string(),
            danger_start: palette.danger.0.to_string(),
            danger_end: palette.danger.1.to_string(),
        }
    }
}

impl ThemeConfig {
    /// Replace the six color fields with those of `preset`.
    pub fn with_preset(mut self, preset: ThemePreset) -> Self {
        let palette = preset.palette();
        self.primary_start = palette.primary.0.to_string();
        self.primary_end = palette.primary.1.to_string();
        self.secondary_start = palette.secondary.0.to_string();
        self.secondary_end = palette.secondary.1.to_string();
        self.danger_start = palette.danger.0.to_string();
        self.danger_end = palette.danger.1.to_string();
        self
    }

    /// Check the documented field contract.
    ///
    /// The renderers never call this. It exists for deployments that would
    /// rather refuse to start than serve a page with broken CSS.
    pub fn validate(&self) -> Result<()> {
        let colors = [
            ("primary_start", &self.primary_start),
            ("primary_end", &self.primary_end),
            ("secondary_start", &self.secondary_start),
            ("secondary_end", &self.secondary_end),
            ("danger_start", &self.danger_start),
            ("danger_end", &self.danger_end),
        ];
        for (field, value) in colors {
            if !HEX_COLOR_PATTERN.is_match(value) {
                return Err(PortalError::invalid_theme(field, value, "expected #RRGGBB"));
            }
        }

        let lengths = [
            ("container_max_width", &self.container_max_width),
            ("border_radius", &self.border_radius),
            ("button_padding", &self.button_padding),
            ("input_padding", &self.input_padding),
        ];
        for (field, value) in lengths {
            if !CSS_LENGTH_PATTERN.is_match(value) {
                return Err(PortalError::invalid_theme(
                    field,
                    value,
                    "expected a CSS length such as 16px",
                ));
            }
        }

        if !self.author_url.is_empty() && self.author_name.is_empty() {
            return Err(PortalError::invalid_theme(
                "author_name",
                &self.author_name,
                "required when author_url is set",
            ));
        }

        Ok(())
    }
}

/// Start/end pairs for the three gradients a page uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: (&'static str, &'static str),
    pub secondary: (&'static str, &'static str),
    pub danger: (&'static str, &'static str),
}

/// Built-in color themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemePreset {
    #[default]
    BluePurple,
    GreenTeal,
    OrangeRed,
    PinkPurple,
}

const DANGER: (&str, &str) = ("#ef4444", "#dc2626");

impl ThemePreset {
    pub fn palette(self) -> Palette {
        match self {
            ThemePreset::BluePurple => Palette {
                primary: ("#667eea", "#764ba2"),
                secondary: ("#667eea", "#764ba2"),
                danger: DANGER,
            },
            ThemePreset::GreenTeal => Palette {
                primary: ("#10b981", "#059669"),
                secondary: ("#14b8a6", "#0d9488"),
                danger: DANGER,
            },
            ThemePreset::OrangeRed => Palette {
                primary: ("#f97316", "#ea580c"),
                secondary: ("#f59e0b", "#d97706"),
                danger: DANGER,
            },
            ThemePreset::PinkPurple => Palette {
                primary: ("#ec4899", "#be185d"),
                secondary: ("#a855f7", "#7c3aed"),
                danger: DANGER,
            },
        }
    }
}
