//! Scoring and selection of accumulated color candidates.
//!
//! Turns one pass's candidate map into a best-guess brand palette, or
//! `None` when nothing usable survives filtering. All thresholds live in
//! [`super::calibration`].

use serde::Serialize;
use tracing::debug;

use super::calibration::{
    ACCENT_MIN_SCORE, FREQUENCY_WEIGHT, GRAY_BAND_HIGH, GRAY_BAND_LOW, GRAY_CHANNEL_SPREAD,
    MID_LUMINANCE_BONUS, MID_LUMINANCE_HIGH, MID_LUMINANCE_LOW, NEAR_BLACK_LUMINANCE,
    NEAR_WHITE_LUMINANCE, PRIORITY_WEIGHT, SATURATION_WEIGHT, SCORE_FREQUENCY_CAP,
    SECONDARY_MIN_DISTANCE,
};
use super::candidates::{CandidateMap, ColorCandidate};
use crate::color::{channels, color_distance, luminance, saturation};

/// A candidate plus its derived score. Ephemeral: computed once per pass
/// and consumed only for sorting and selection.
#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    /// The underlying accumulated candidate.
    pub candidate: ColorCandidate,
    /// Derived score; `0.0` means "excluded from consideration".
    pub score: f64,
}

/// Best-guess brand palette extracted from one pass.
///
/// When present, `secondary` is guaranteed visibly separated from
/// `primary` (channel distance above the calibrated floor); `accent` is a
/// different surviving candidate chosen under a much looser bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandColorResult {
    /// The dominant brand color, canonical hex.
    pub primary: String,
    /// A visibly distinct runner-up, when one survives.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    /// A decorative third pick, when one survives.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    /// Best-effort site name mined from the same text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_name: Option<String>,
}

/// What: Score one candidate, applying the exclusion filters.
///
/// Inputs:
/// - `candidate`: Accumulated `{hex, frequency, priority}` record.
///
/// Output:
/// - Score, or `0.0` when the candidate is filtered out (near-white,
///   near-black, or mid-luminance gray).
///
/// Details:
/// - `score = priority*2 + min(frequency,20)*1.5 + saturation*40`, plus a
///   flat bonus inside the usable mid-luminance band. Frequency is capped
///   so extraction noise cannot dominate.
#[must_use]
pub fn score_candidate(candidate: &ColorCandidate) -> f64 {
    let lum = luminance(&candidate.hex);
    if lum > NEAR_WHITE_LUMINANCE || lum < NEAR_BLACK_LUMINANCE {
        return 0.0;
    }
    let Some((r, g, b)) = channels(&candidate.hex) else {
        return 0.0;
    };
    let spread = r.max(g).max(b) - r.min(g).min(b);
    if spread < GRAY_CHANNEL_SPREAD && lum > GRAY_BAND_LOW && lum < GRAY_BAND_HIGH {
        return 0.0;
    }

    let priority_term = PRIORITY_WEIGHT * f64::from(candidate.priority);
    let frequency_term = FREQUENCY_WEIGHT * f64::from(candidate.frequency.min(SCORE_FREQUENCY_CAP));
    let saturation_term = SATURATION_WEIGHT * saturation(&candidate.hex);
    let band_bonus = if lum > MID_LUMINANCE_LOW && lum < MID_LUMINANCE_HIGH {
        MID_LUMINANCE_BONUS
    } else {
        0.0
    };
    priority_term + frequency_term + saturation_term + band_bonus
}

/// What: Rank survivors and pick the primary/secondary/accent trio.
///
/// Inputs:
/// - `map`: Candidate map from one extraction pass.
///
/// Output:
/// - `Some(BrandColorResult)` without a brand name (the caller fills it
///   in), or `None` when no candidate survives filtering. Callers must
///   treat `None` as "extraction failed", not as a zero-color theme.
///
/// Details:
/// - Survivors sort by score descending with the hex as a deterministic
///   tie-break.
/// - Secondary must clear the calibrated channel-distance floor from the
///   primary; accent only needs to be a different surviving candidate
///   above the loose accent score floor.
#[must_use]
pub fn select_brand_colors(map: &CandidateMap) -> Option<BrandColorResult> {
    let mut scored: Vec<ScoredCandidate> = map
        .values()
        .map(|candidate| ScoredCandidate {
            candidate: candidate.clone(),
            score: score_candidate(candidate),
        })
        .filter(|s| s.score > 0.0)
        .collect();
    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.candidate.hex.cmp(&b.candidate.hex))
    });

    let primary = scored.first()?.candidate.hex.clone();

    let secondary = scored
        .iter()
        .skip(1)
        .find(|s| color_distance(&primary, &s.candidate.hex) > SECONDARY_MIN_DISTANCE)
        .map(|s| s.candidate.hex.clone());

    let accent = scored
        .iter()
        .skip(1)
        .find(|s| {
            s.score > ACCENT_MIN_SCORE
                && Some(&s.candidate.hex) != secondary.as_ref()
        })
        .map(|s| s.candidate.hex.clone());

    debug!(
        survivors = scored.len(),
        primary = %primary,
        secondary = secondary.as_deref().unwrap_or("-"),
        accent = accent.as_deref().unwrap_or("-"),
        "selected brand colors"
    );

    Some(BrandColorResult {
        primary,
        secondary,
        accent,
        brand_name: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    /// Build a candidate map from `(hex, frequency, priority)` triples.
    fn map_of(entries: &[(&str, u32, u32)]) -> CandidateMap {
        let mut map = BTreeMap::new();
        for &(hex, frequency, priority) in entries {
            map.insert(
                hex.to_string(),
                ColorCandidate {
                    hex: hex.to_string(),
                    frequency,
                    priority,
                },
            );
        }
        map
    }

    #[test]
    /// What: Verify the near-white, near-black, and gray filters zero the score.
    ///
    /// Inputs:
    /// - Near-white, near-black, mid gray, and one vivid candidate.
    ///
    /// Output:
    /// - Only the vivid candidate scores above zero.
    fn score_filters_unusable_candidates() {
        let white_ish = ColorCandidate {
            hex: "#FAFAFA".into(),
            frequency: 10,
            priority: 100,
        };
        let black_ish = ColorCandidate {
            hex: "#050505".into(),
            frequency: 10,
            priority: 100,
        };
        let gray = ColorCandidate {
            hex: "#808080".into(),
            frequency: 10,
            priority: 100,
        };
        let vivid = ColorCandidate {
            hex: "#2563EB".into(),
            frequency: 1,
            priority: 10,
        };
        assert!((score_candidate(&white_ish) - 0.0).abs() < f64::EPSILON);
        assert!((score_candidate(&black_ish) - 0.0).abs() < f64::EPSILON);
        assert!((score_candidate(&gray) - 0.0).abs() < f64::EPSILON);
        assert!(score_candidate(&vivid) > 0.0);
    }

    #[test]
    /// What: Check the scoring formula against a hand-computed value.
    ///
    /// Inputs:
    /// - `#FF0000` with frequency 30 (capped at 20) and priority 50.
    ///
    /// Output:
    /// - `50*2 + 20*1.5 + 1.0*40 + 15 = 185`.
    fn score_formula_matches_hand_computation() {
        let c = ColorCandidate {
            hex: "#FF0000".into(),
            frequency: 30,
            priority: 50,
        };
        // luminance(#FF0000) = 76.245, inside the 40..200 bonus band
        assert!((score_candidate(&c) - 185.0).abs() < 1e-9);
    }

    #[test]
    /// What: Ensure priority outweighs raw frequency in selection.
    ///
    /// Inputs:
    /// - A once-seen meta color against a fifty-times generic color.
    ///
    /// Output:
    /// - The meta color wins primary.
    fn score_priority_beats_frequency() {
        let map = map_of(&[("#EF4444", 1, 100), ("#0000FF", 50, 40)]);
        let result = select_brand_colors(&map).expect("survivors expected");
        assert_eq!(result.primary, "#EF4444");
    }

    #[test]
    /// What: Verify the secondary distance gate skips near-identical hues.
    ///
    /// Inputs:
    /// - Primary blue, a barely-different blue, and a distant orange.
    ///
    /// Output:
    /// - Secondary is the orange; the sibling blue is passed over but can
    ///   still serve as the accent.
    fn score_secondary_requires_distance() {
        let map = map_of(&[
            ("#2563EB", 5, 100),
            ("#2E63E8", 4, 80),
            ("#F59E0B", 1, 50),
        ]);
        let result = select_brand_colors(&map).expect("survivors expected");
        assert_eq!(result.primary, "#2563EB");
        assert_eq!(result.secondary.as_deref(), Some("#F59E0B"));
        assert_eq!(result.accent.as_deref(), Some("#2E63E8"));
    }

    #[test]
    /// What: Confirm an all-filtered map yields no result at all.
    ///
    /// Inputs:
    /// - Three grays at high frequency and priority.
    ///
    /// Output:
    /// - `None`: extraction failed, not a zero-color theme.
    fn score_all_gray_yields_none() {
        let map = map_of(&[
            ("#808080", 40, 40),
            ("#777777", 40, 40),
            ("#999999", 40, 40),
        ]);
        assert!(select_brand_colors(&map).is_none());
    }
}
