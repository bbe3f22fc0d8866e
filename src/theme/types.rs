//! Theme type definitions.

use serde::Serialize;

use crate::color::hex_to_rgba;

/// The full set of named design tokens consumed by a preview renderer.
///
/// Every role holds a canonical `#RRGGBB` hex value. Only the primary,
/// surface, border, and background roles react to the brand color; the
/// text-emphasis ramp and the absolutes are fixed constants. That is a
/// deliberate design choice: brand-tinting body text rarely stays
/// readable, surfaces and chrome do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ThemeColors {
    /// The brand color itself, unchanged from extraction.
    pub primary: String,
    /// Foreground guaranteed readable on a primary-colored surface.
    pub primary_on_color: String,
    /// Base surface, always pure white.
    pub surface: String,
    /// Barely tinted surface for raised panels.
    pub surface_tint: String,
    /// Stronger tinted surface for emphasized panels.
    pub surface_tint_strong: String,
    /// Border/stroke shade derived from the primary.
    pub border: String,
    /// Page background, a whisper of the brand color.
    pub page_background: String,
    /// Highest-emphasis text.
    pub text_strong: String,
    /// Default body text.
    pub text: String,
    /// Reduced-emphasis text.
    pub text_soft: String,
    /// Muted text for captions and hints.
    pub text_muted: String,
    /// Faintest text, placeholder-level emphasis.
    pub text_faint: String,
    /// Neutral absolute black.
    pub black: String,
    /// Neutral absolute white.
    pub white: String,
}

impl ThemeColors {
    /// What: Render the primary as a translucent `rgba(...)` string.
    ///
    /// Inputs:
    /// - `alpha`: Opacity in `[0, 1]`, passed through unrounded.
    ///
    /// Output:
    /// - `rgba(r, g, b, a)` string for opacity-ramp washes over the brand
    ///   color.
    #[must_use]
    pub fn primary_alpha(&self, alpha: f64) -> String {
        hex_to_rgba(&self.primary, alpha)
    }
}

/// A labeled theme: the single "active theme" the preview observes.
///
/// Built either from a fixed preset or from an extraction result. There is
/// no deletion lifecycle, only replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChameleonTheme {
    /// Display label, usually the brand name.
    pub name: String,
    /// The synthesized token set.
    pub theme: ThemeColors,
}
