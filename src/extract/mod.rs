//! Brand color extraction from raw page text.
//!
//! One pass: accumulate candidates, score and select, attach a best-effort
//! brand name. The whole pipeline is synchronous, pure computation over a
//! bounded in-memory string; running it twice on the same text yields the
//! same result.

/// Calibrated numeric thresholds.
pub mod calibration;
/// Candidate accumulation from text.
mod candidates;
/// Brand name mining.
mod name;
/// Scoring and selection.
mod score;

pub use candidates::{CandidateMap, ColorCandidate, extract_candidates};
pub use name::extract_brand_name;
pub use score::{BrandColorResult, ScoredCandidate, score_candidate, select_brand_colors};

use tracing::{debug, info};

/// What: Extract a best-guess brand palette from raw page text.
///
/// Inputs:
/// - `text`: Raw markup and/or stylesheet text of arbitrary origin.
///
/// Output:
/// - `Some(BrandColorResult)` when at least one usable color survives
///   filtering; `None` when extraction failed. `None` is an expected,
///   recoverable outcome for the caller to surface, never a crash.
///
/// Details:
/// - Deterministic and re-entrant; no state survives the call.
#[must_use]
pub fn extract_brand_colors(text: &str) -> Option<BrandColorResult> {
    let map = extract_candidates(text);
    debug!(candidates = map.len(), bytes = text.len(), "extraction pass complete");
    let Some(mut result) = select_brand_colors(&map) else {
        info!(candidates = map.len(), "no usable color candidates");
        return None;
    };
    result.brand_name = extract_brand_name(text);
    info!(
        primary = %result.primary,
        brand = result.brand_name.as_deref().unwrap_or("-"),
        "extracted brand colors"
    );
    Some(result)
}
