//! Accumulation of color candidates from raw page text.
//!
//! One extraction pass folds every regex match into an immutable-feeling
//! map keyed by canonical hex. Scanning is deliberately approximate: it is
//! regex over unstructured, possibly adversarial text, not a CSS grammar.
//! Malformed literals are skipped silently and never abort the scan.
//!
//! Each occurrence is keyed by its byte span in the input, so a literal
//! that several passes reach (a brand variable inside a `<style>` block,
//! say) still counts exactly once; the strongest context it was seen in
//! wins.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use super::calibration::{
    GENERIC_FREQUENCY_CAP, PRIORITY_BRAND_VARIABLE, PRIORITY_GENERIC_BASE,
    PRIORITY_INTERACTIVE_RULE, PRIORITY_THEME_META,
};
use crate::color::{normalize_hex, parse_rgb};

/// A single color accumulated over one extraction pass.
///
/// `frequency` counts raw occurrences normalizing to this hex ("how
/// common"); `priority` is the highest source priority observed ("best
/// evidence"). Priorities are never summed. State lives only for the
/// duration of one pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorCandidate {
    /// Canonical uppercase `#RRGGBB` value.
    pub hex: String,
    /// Count of raw occurrences normalizing to this hex.
    pub frequency: u32,
    /// Highest source priority observed for this hex.
    pub priority: u32,
}

/// Per-pass accumulation of candidates keyed by canonical hex.
///
/// A `BTreeMap` keeps iteration order stable so two passes over identical
/// text produce identical results.
pub type CandidateMap = BTreeMap<String, ColorCandidate>;

/// The structural context a color occurrence was found in.
///
/// Variants are ordered weakest evidence first so that when overlapping
/// passes reach the same occurrence, `max` keeps the strongest context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum SourceContext {
    /// Any other literal inside style text.
    Generic,
    /// Declaration inside a rule targeting interactive elements.
    InteractiveRule,
    /// Custom-property declaration whose name carries a brand signal.
    BrandVariable,
    /// `<meta name="theme-color">` declaration.
    ThemeMeta,
}

/// Occurrences found so far, keyed by absolute byte span. The span key
/// deduplicates overlapping passes; `BTreeMap` keeps document order.
type OccurrenceMap = BTreeMap<(usize, usize), (String, SourceContext)>;

/// Any hex or `rgb()`/`rgba()` literal. Greedy digit matching means an
/// 8-digit hex is consumed whole and then rejected by the codec, rather
/// than mis-read as a 6-digit prefix.
static LITERAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)#[0-9a-f]{3,8}|rgba?\([^)]*\)").expect("valid literal regex")
});

/// Any `<meta ...>` tag; attributes are resolved separately.
static META_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<meta\b[^>]*>").expect("valid meta tag regex"));

/// The `name` attribute value inside a single tag, any quoting style.
static NAME_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\bname\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s/>]+))"#)
        .expect("valid name attr regex")
});

/// The `content` attribute value inside a single tag, any quoting style.
static CONTENT_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\bcontent\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s/>]+))"#)
        .expect("valid content attr regex")
});

/// Custom-property declarations whose name contains a brand-signal token.
static BRAND_VAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)--[a-z0-9_-]*(?:brand|primary|accent|main|theme)[a-z0-9_-]*\s*:\s*([^;{}]+)")
        .expect("valid brand variable regex")
});

/// Flat `selector { body }` blocks. Nested braces are not modeled; inner
/// blocks of at-rules still match on their own.
static RULE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)([^{}]+)\{([^{}]*)\}").expect("valid rule regex"));

/// Selector fragments that mark a rule as interactive/navigational.
static INTERACTIVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\ba\b|button|\.btn|\.cta|\bnav\b|link").expect("valid selector regex")
});

/// Contents of `<style>` blocks.
static STYLE_BLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<style[^>]*>(.*?)</style>").expect("valid style regex"));

/// Values of inline `style="..."` attributes.
static STYLE_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\bstyle\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("valid style attr regex")
});

/// What: Scan a raw text blob and accumulate every color occurrence.
///
/// Inputs:
/// - `text`: Raw markup and/or stylesheet text of arbitrary origin.
///
/// Output:
/// - Map of canonical hex to `ColorCandidate` for this pass.
///
/// Details:
/// - Four structural contexts are scanned, highest evidence first: the
///   page-level theme-color meta, brand-signal custom properties,
///   interactive rule bodies, and generic style text.
/// - A literal reached by more than one pass counts once, under the
///   strongest context; frequency is the number of distinct raw
///   occurrences, nothing more.
/// - When the blob carries no `<style>` markup and no inline style
///   attributes it is treated as a bare stylesheet and scanned whole.
/// - Deterministic: identical text always yields an identical map.
#[must_use]
pub fn extract_candidates(text: &str) -> CandidateMap {
    let mut occurrences = OccurrenceMap::new();

    for tag in META_TAG_RE.find_iter(text) {
        let is_theme_meta = NAME_ATTR_RE
            .captures(tag.as_str())
            .and_then(|cap| cap.get(1).or_else(|| cap.get(2)).or_else(|| cap.get(3)))
            .is_some_and(|name| name.as_str().eq_ignore_ascii_case("theme-color"));
        if !is_theme_meta {
            continue;
        }
        let value = CONTENT_ATTR_RE
            .captures(tag.as_str())
            .and_then(|cap| cap.get(1).or_else(|| cap.get(2)).or_else(|| cap.get(3)));
        if let Some(value) = value {
            collect_literals(
                &mut occurrences,
                tag.start() + value.start(),
                value.as_str(),
                SourceContext::ThemeMeta,
            );
        }
    }

    for cap in BRAND_VAR_RE.captures_iter(text) {
        if let Some(value) = cap.get(1) {
            collect_literals(
                &mut occurrences,
                value.start(),
                value.as_str(),
                SourceContext::BrandVariable,
            );
        }
    }

    for cap in RULE_RE.captures_iter(text) {
        let (Some(selector), Some(body)) = (cap.get(1), cap.get(2)) else {
            continue;
        };
        if INTERACTIVE_RE.is_match(selector.as_str()) {
            collect_literals(
                &mut occurrences,
                body.start(),
                body.as_str(),
                SourceContext::InteractiveRule,
            );
        }
    }

    let mut saw_style_text = false;
    for cap in STYLE_BLOCK_RE.captures_iter(text) {
        if let Some(css) = cap.get(1) {
            saw_style_text = true;
            collect_literals(&mut occurrences, css.start(), css.as_str(), SourceContext::Generic);
        }
    }
    for cap in STYLE_ATTR_RE.captures_iter(text) {
        if let Some(value) = cap.get(1).or_else(|| cap.get(2)) {
            saw_style_text = true;
            collect_literals(
                &mut occurrences,
                value.start(),
                value.as_str(),
                SourceContext::Generic,
            );
        }
    }
    if !saw_style_text {
        // Bare stylesheet (or unrecognizable blob): best-effort whole scan
        collect_literals(&mut occurrences, 0, text, SourceContext::Generic);
    }

    let mut map = CandidateMap::new();
    for (hex, context) in occurrences.into_values() {
        record(&mut map, hex, context);
    }
    map
}

/// What: Scan a text fragment for color literals and note each occurrence.
///
/// Inputs:
/// - `occurrences`: Span-keyed accumulator for this pass.
/// - `base`: Byte offset of `fragment` within the original text, so spans
///   stay absolute and overlapping passes deduplicate.
/// - `fragment`: Text to scan (a declaration value, rule body, or style text).
/// - `context`: Structural context applied to every literal found.
///
/// Details:
/// - Codec failures are skipped silently.
/// - A span seen before keeps its entry; only the context is raised.
fn collect_literals(
    occurrences: &mut OccurrenceMap,
    base: usize,
    fragment: &str,
    context: SourceContext,
) {
    for m in LITERAL_RE.find_iter(fragment) {
        let Some(hex) = normalize_hex(m.as_str()).or_else(|| parse_rgb(m.as_str())) else {
            continue;
        };
        let span = (base + m.start(), base + m.end());
        occurrences
            .entry(span)
            .and_modify(|(_, existing)| *existing = (*existing).max(context))
            .or_insert((hex, context));
    }
}

/// What: Fold one deduplicated occurrence into the candidate map.
///
/// Inputs:
/// - `map`: Accumulator for this pass.
/// - `hex`: Canonical hex of the occurrence.
/// - `context`: Strongest structural context the occurrence was seen in.
///
/// Details:
/// - Frequency always increments; priority is raised to the maximum seen.
/// - Generic occurrences weigh in at `10 + min(frequency, 30)`, computed
///   from the running frequency at record time.
fn record(map: &mut CandidateMap, hex: String, context: SourceContext) {
    let entry = map.entry(hex.clone()).or_insert_with(|| ColorCandidate {
        hex,
        frequency: 0,
        priority: 0,
    });
    entry.frequency += 1;
    let priority = match context {
        SourceContext::ThemeMeta => PRIORITY_THEME_META,
        SourceContext::BrandVariable => PRIORITY_BRAND_VARIABLE,
        SourceContext::InteractiveRule => PRIORITY_INTERACTIVE_RULE,
        SourceContext::Generic => {
            PRIORITY_GENERIC_BASE + entry.frequency.min(GENERIC_FREQUENCY_CAP)
        }
    };
    entry.priority = entry.priority.max(priority);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Confirm the theme-color meta declaration lands at top priority.
    ///
    /// Inputs:
    /// - Minimal HTML with a single `theme-color` meta tag.
    ///
    /// Output:
    /// - One candidate at priority 100, frequency 1.
    fn candidates_theme_meta_priority() {
        let html = r##"<html><head><meta name="theme-color" content="#2563EB"></head></html>"##;
        let map = extract_candidates(html);
        let c = map.get("#2563EB").expect("meta color should be recorded");
        assert_eq!(c.priority, PRIORITY_THEME_META);
        assert_eq!(c.frequency, 1);
    }

    #[test]
    /// What: Check brand-signal variables and interactive rules get their priorities.
    ///
    /// Inputs:
    /// - A style block with a `--brand-primary` declaration and a button rule.
    ///
    /// Output:
    /// - Variable color at priority 80; button color at priority 50.
    fn candidates_variable_and_rule_priorities() {
        let html = r"<style>
            :root { --brand-primary: #FF4500; }
            .btn-buy { background: #10B981; }
            .sidebar { color: #ABCDEF; }
        </style>";
        let map = extract_candidates(html);
        assert_eq!(
            map.get("#FF4500").map(|c| c.priority),
            Some(PRIORITY_BRAND_VARIABLE)
        );
        assert_eq!(
            map.get("#10B981").map(|c| c.priority),
            Some(PRIORITY_INTERACTIVE_RULE)
        );
        // Plain rule colors only get the generic weighting
        let generic = map.get("#ABCDEF").expect("generic color recorded");
        assert!(generic.priority < PRIORITY_INTERACTIVE_RULE);
    }

    #[test]
    /// What: Ensure one textual occurrence counts once even across passes.
    ///
    /// Inputs:
    /// - A brand variable inside a `<style>` block, reachable by the
    ///   variable pass and the generic style scan alike.
    ///
    /// Output:
    /// - Frequency 1 at the variable priority; frequency only grows when
    ///   the literal textually recurs.
    fn candidates_occurrence_counted_once() {
        let html = "<style>:root { --brand-primary: #FF4500; }</style>";
        let map = extract_candidates(html);
        let c = map.get("#FF4500").expect("brand color recorded");
        assert_eq!(c.frequency, 1);
        assert_eq!(c.priority, PRIORITY_BRAND_VARIABLE);

        let twice = "<style>:root { --brand-primary: #FF4500; } b { color: #FF4500; }</style>";
        let map = extract_candidates(twice);
        assert_eq!(map.get("#FF4500").map(|c| c.frequency), Some(2));
    }

    #[test]
    /// What: Verify generic priority grows with frequency but stays capped.
    ///
    /// Inputs:
    /// - A bare stylesheet repeating one color forty times.
    ///
    /// Output:
    /// - Frequency 40, priority capped at `10 + 30`.
    fn candidates_generic_frequency_cap() {
        let css: String = (0..40).map(|_| "b { color: #336699; }\n").collect();
        let map = extract_candidates(&css);
        let c = map.get("#336699").expect("color recorded");
        assert_eq!(c.frequency, 40);
        assert_eq!(c.priority, PRIORITY_GENERIC_BASE + GENERIC_FREQUENCY_CAP);
    }

    #[test]
    /// What: Ensure malformed literals and long hex digests are skipped.
    ///
    /// Inputs:
    /// - Style text with an 8-digit hex, a bogus `rgb()`, and one valid color.
    ///
    /// Output:
    /// - Only the valid color appears in the map.
    fn candidates_skip_malformed() {
        let css = "a { color: #12345678; border-color: rgb(x,y,z); background: rgb(18, 52, 86); }";
        let map = extract_candidates(css);
        assert_eq!(map.len(), 1);
        assert!(map.contains_key("#123456"));
    }

    #[test]
    /// What: Check inline style attributes count as style text.
    ///
    /// Inputs:
    /// - HTML using only a `style` attribute, no `<style>` block.
    ///
    /// Output:
    /// - The inline color is recorded; unstyled page text is not whole-scanned.
    fn candidates_inline_style_attribute() {
        let html = r##"<div style="background: #6D28D9">#BADBAD is just prose here</div>"##;
        let map = extract_candidates(html);
        assert!(map.contains_key("#6D28D9"));
        assert!(!map.contains_key("#BADBAD"));
    }
}
