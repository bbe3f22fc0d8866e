//! Deterministic expansion of a primary color into the full token set.

use tracing::debug;

use super::types::{ChameleonTheme, ThemeColors};
use crate::color::{is_light, lighten};

/// Neutral absolute black.
const BLACK: &str = "#000000";
/// Neutral absolute white.
const WHITE: &str = "#FFFFFF";

/// Fixed text-emphasis ramp, strongest first. Deliberately not
/// brand-reactive.
const TEXT_RAMP: [&str; 5] = ["#111827", "#374151", "#6B7280", "#9CA3AF", "#D1D5DB"];

/// What: Synthesize the full token set from one brand primary.
///
/// Inputs:
/// - `primary_hex`: Canonical hex produced by the codec. Malformed input
///   must be rejected upstream; it never legitimately reaches this point.
/// - `label`: Display name for the resulting theme.
///
/// Output:
/// - A `ChameleonTheme` with every role populated. Total and pure: the
///   same inputs always yield the same theme, and there is no failure
///   mode.
///
/// Details:
/// - `primary-on-color` is black over light primaries and white over dark
///   ones so text and icons stay legible.
/// - Surface, border, and background roles are progressively lighter
///   blends of the primary toward white.
#[must_use]
pub fn build_theme_from_colors(primary_hex: &str, label: &str) -> ChameleonTheme {
    let on_color = if is_light(primary_hex) { BLACK } else { WHITE };
    debug!(primary = %primary_hex, label, "synthesizing theme tokens");
    ChameleonTheme {
        name: label.to_string(),
        theme: ThemeColors {
            primary: primary_hex.to_string(),
            primary_on_color: on_color.to_string(),
            surface: WHITE.to_string(),
            surface_tint: lighten(primary_hex, 0.94),
            surface_tint_strong: lighten(primary_hex, 0.85),
            border: lighten(primary_hex, 0.8),
            page_background: lighten(primary_hex, 0.96),
            text_strong: TEXT_RAMP[0].to_string(),
            text: TEXT_RAMP[1].to_string(),
            text_soft: TEXT_RAMP[2].to_string(),
            text_muted: TEXT_RAMP[3].to_string(),
            text_faint: TEXT_RAMP[4].to_string(),
            black: BLACK.to_string(),
            white: WHITE.to_string(),
        },
    }
}
