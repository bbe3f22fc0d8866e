//! Perceptual math over canonical hex colors.
//!
//! All helpers take canonical `#RRGGBB` strings produced by the codec.
//! Malformed input never reaches these functions along validated paths; if
//! it does, each helper degrades to a neutral identity instead of failing.

use super::codec::channels;

/// Luminance cutoff above which a color is treated as "light" and gets dark
/// foreground text. Calibrated empirically; preserve rather than re-derive.
const LIGHT_CUTOFF: f64 = 140.0;

/// What: Estimate perceptual brightness of a color.
///
/// Inputs:
/// - `hex`: Canonical hex string.
///
/// Output:
/// - Weighted channel sum `0.299*R + 0.587*G + 0.114*B` in `[0, 255]`;
///   `0.0` for malformed input.
#[must_use]
pub fn luminance(hex: &str) -> f64 {
    let Some((r, g, b)) = channels(hex) else {
        return 0.0;
    };
    0.114f64.mul_add(
        f64::from(b),
        0.299f64.mul_add(f64::from(r), 0.587 * f64::from(g)),
    )
}

/// What: Classify a color as light enough to need dark foreground text.
///
/// Inputs:
/// - `hex`: Canonical hex string.
///
/// Output:
/// - `true` when `luminance(hex) > 140`.
#[must_use]
pub fn is_light(hex: &str) -> bool {
    luminance(hex) > LIGHT_CUTOFF
}

/// What: Interpolate a color toward white.
///
/// Inputs:
/// - `hex`: Canonical hex string.
/// - `amount`: Interpolation factor in `[0, 1]`; values outside are clamped.
///
/// Output:
/// - Canonical hex of the lightened color. `amount == 0` is the identity,
///   `amount == 1` yields `#FFFFFF`.
///
/// Details:
/// - Each channel moves linearly toward 255; fractional results are
///   truncated to integers, no other rounding is applied.
#[must_use]
pub fn lighten(hex: &str, amount: f64) -> String {
    /// Move one channel toward 255 by `a`, truncating to an integer.
    fn shift(c: u8, a: f64) -> u8 {
        (255.0 - f64::from(c)).mul_add(a, f64::from(c)) as u8
    }
    let Some((r, g, b)) = channels(hex) else {
        return hex.to_string();
    };
    let a = amount.clamp(0.0, 1.0);
    format!(
        "#{:02X}{:02X}{:02X}",
        shift(r, a),
        shift(g, a),
        shift(b, a)
    )
}

/// What: Render a color as an `rgba(...)` string for opacity-ramp tokens.
///
/// Inputs:
/// - `hex`: Canonical hex string.
/// - `alpha`: Opacity in `[0, 1]`, passed through unrounded.
///
/// Output:
/// - String of the form `rgba(r, g, b, a)` with decoded integer channels.
#[must_use]
pub fn hex_to_rgba(hex: &str, alpha: f64) -> String {
    let (r, g, b) = channels(hex).unwrap_or((0, 0, 0));
    format!("rgba({r}, {g}, {b}, {alpha})")
}

/// What: Euclidean distance between two colors over the raw channels.
///
/// Inputs:
/// - `a`, `b`: Canonical hex strings.
///
/// Output:
/// - Distance in `[0, ~441.7]`.
///
/// Details:
/// - Used only as a perceptual-difference gate when picking a secondary
///   color. RGB distance is not a real perceptual model; that is a known,
///   accepted limitation, not a bug to fix.
#[must_use]
pub fn color_distance(a: &str, b: &str) -> f64 {
    let Some((ar, ag, ab)) = channels(a) else {
        return 0.0;
    };
    let Some((br, bg, bb)) = channels(b) else {
        return 0.0;
    };
    let dr = f64::from(ar) - f64::from(br);
    let dg = f64::from(ag) - f64::from(bg);
    let db = f64::from(ab) - f64::from(bb);
    db.mul_add(db, dr.mul_add(dr, dg * dg)).sqrt()
}

/// What: Estimate how colorful (vs. gray) a color is.
///
/// Inputs:
/// - `hex`: Canonical hex string.
///
/// Output:
/// - `chroma / max_channel` in `[0, 1]`; `0.0` when the largest channel is
///   zero (pure black) or the input is malformed.
#[must_use]
pub fn saturation(hex: &str) -> f64 {
    let Some((r, g, b)) = channels(hex) else {
        return 0.0;
    };
    let hi = r.max(g).max(b);
    let lo = r.min(g).min(b);
    if hi == 0 {
        return 0.0;
    }
    f64::from(hi - lo) / f64::from(hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Validate luminance values and the light/dark classification.
    ///
    /// Inputs:
    /// - Black, white, mid gray, and a brand blue.
    ///
    /// Output:
    /// - Known luminance values and the corresponding `is_light` verdicts.
    fn math_luminance_and_is_light() {
        assert!((luminance("#000000") - 0.0).abs() < 1e-9);
        assert!((luminance("#FFFFFF") - 255.0).abs() < 1e-9);
        // 0.299*37 + 0.587*99 + 0.114*235 for #2563EB
        let lum = luminance("#2563EB");
        assert!((lum - 95.966).abs() < 0.01);
        assert!(!is_light("#2563EB"));
        assert!(is_light("#FFFFFF"));
        assert!(is_light("#F59E0B"));
        assert!(!is_light("#000000"));
    }

    #[test]
    /// What: Check lighten endpoints and monotonic movement toward white.
    ///
    /// Inputs:
    /// - A saturated color with amounts 0, 0.5, and 1.
    ///
    /// Output:
    /// - Identity at 0, pure white at 1, and strictly higher luminance at 0.5.
    fn math_lighten_bounds() {
        assert_eq!(lighten("#123456", 0.0), "#123456");
        assert_eq!(lighten("#123456", 1.0), "#FFFFFF");
        let mid = lighten("#123456", 0.5);
        assert!(luminance(&mid) > luminance("#123456"));
        assert!(luminance(&mid) < 255.0);
        // Out-of-range amounts clamp instead of wrapping
        assert_eq!(lighten("#123456", -2.0), "#123456");
        assert_eq!(lighten("#123456", 7.0), "#FFFFFF");
    }

    #[test]
    /// What: Validate rgba rendering, distance, and saturation helpers.
    ///
    /// Inputs:
    /// - Simple primaries and grays.
    ///
    /// Output:
    /// - Expected formatted strings and numeric values.
    fn math_rgba_distance_saturation() {
        assert_eq!(hex_to_rgba("#FF0000", 0.25), "rgba(255, 0, 0, 0.25)");
        assert_eq!(hex_to_rgba("#123456", 1.0), "rgba(18, 52, 86, 1)");
        assert!((color_distance("#000000", "#FFFFFF") - (3.0f64 * 255.0 * 255.0).sqrt()).abs() < 1e-9);
        assert!((color_distance("#123456", "#123456") - 0.0).abs() < 1e-9);
        assert!((saturation("#FF0000") - 1.0).abs() < 1e-9);
        assert!((saturation("#808080") - 0.0).abs() < 1e-9);
        assert!((saturation("#000000") - 0.0).abs() < 1e-9);
    }
}
