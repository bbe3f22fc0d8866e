//! Calibrated thresholds for candidate filtering, scoring, and selection.
//!
//! These values were tuned empirically against real pages. Treat them as
//! configuration constants to preserve: they are not derived from a formula
//! and should not be re-derived without new calibration data.

/// Source priority for a page-level `theme-color` meta declaration.
pub const PRIORITY_THEME_META: u32 = 100;
/// Source priority for a custom-property declaration carrying a brand signal.
pub const PRIORITY_BRAND_VARIABLE: u32 = 80;
/// Source priority for color declarations in interactive/navigational rules.
pub const PRIORITY_INTERACTIVE_RULE: u32 = 50;
/// Base priority for any other literal found in style text.
pub const PRIORITY_GENERIC_BASE: u32 = 10;
/// Cap on the frequency contribution to a generic occurrence's priority, so
/// a ubiquitous reset color cannot dominate through repetition alone.
pub const GENERIC_FREQUENCY_CAP: u32 = 30;

/// Candidates brighter than this luminance are near-white and excluded.
pub const NEAR_WHITE_LUMINANCE: f64 = 240.0;
/// Candidates darker than this luminance are near-black and excluded.
pub const NEAR_BLACK_LUMINANCE: f64 = 15.0;
/// Channel spread below which a mid-luminance candidate counts as gray.
pub const GRAY_CHANNEL_SPREAD: u8 = 15;
/// Lower edge of the unremarkable mid-luminance band used by gray detection.
pub const GRAY_BAND_LOW: f64 = 50.0;
/// Upper edge of the unremarkable mid-luminance band used by gray detection.
pub const GRAY_BAND_HIGH: f64 = 200.0;

/// Weight applied to the source priority in the score.
pub const PRIORITY_WEIGHT: f64 = 2.0;
/// Weight applied to the (capped) frequency in the score.
pub const FREQUENCY_WEIGHT: f64 = 1.5;
/// Cap on the frequency term so extraction noise cannot dominate the score.
pub const SCORE_FREQUENCY_CAP: u32 = 20;
/// Weight applied to saturation, rewarding vivid hues over washed-out ones.
pub const SATURATION_WEIGHT: f64 = 40.0;
/// Flat bonus for colors inside the usable mid-luminance band.
pub const MID_LUMINANCE_BONUS: f64 = 15.0;
/// Lower edge of the bonus band.
pub const MID_LUMINANCE_LOW: f64 = 40.0;
/// Upper edge of the bonus band.
pub const MID_LUMINANCE_HIGH: f64 = 200.0;

/// Minimum channel distance from the primary for a secondary pick, so the
/// pair is visibly separated rather than two hexes of the same appearance.
pub const SECONDARY_MIN_DISTANCE: f64 = 60.0;
/// Loose score floor for the decorative accent pick.
pub const ACCENT_MIN_SCORE: f64 = 5.0;
