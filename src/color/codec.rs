//! Parsing of textual color literals into the canonical hex form.
//!
//! The canonical representation used throughout the crate is an uppercase
//! `#RRGGBB` string. Every parser here returns an `Option`: `None` means
//! "this is not a color", never an error to propagate. Malformed literals
//! found while scanning arbitrary page text are expected and skipped.

/// What: Normalize a hex color literal to canonical `#RRGGBB` form.
///
/// Inputs:
/// - `raw`: Candidate literal such as `#1a2b3c` or shorthand `#abc`.
///
/// Output:
/// - `Some(String)` with the uppercase six-digit form; `None` when the input
///   is not a 3- or 6-digit hex literal.
///
/// Details:
/// - Shorthand is expanded by doubling each digit (`#abc` -> `#AABBCC`).
/// - The function is idempotent on its own output.
#[must_use]
pub fn normalize_hex(raw: &str) -> Option<String> {
    let t = raw.trim();
    let h = t.strip_prefix('#')?;
    if !h.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match h.len() {
        3 => {
            let mut out = String::with_capacity(7);
            out.push('#');
            for c in h.chars() {
                let u = c.to_ascii_uppercase();
                out.push(u);
                out.push(u);
            }
            Some(out)
        }
        6 => Some(format!("#{}", h.to_ascii_uppercase())),
        _ => None,
    }
}

/// What: Parse an `rgb(r,g,b)` or `rgba(r,g,b,a)` literal into canonical hex.
///
/// Inputs:
/// - `raw`: Candidate literal with arbitrary interior whitespace.
///
/// Output:
/// - `Some(String)` canonical hex on success; `None` for anything else.
///
/// Details:
/// - Channels are clamped to `0..=255` before re-encoding.
/// - The alpha component, when present, is ignored: the codec tracks color
///   identity, not opacity.
#[must_use]
pub fn parse_rgb(raw: &str) -> Option<String> {
    let t = raw.trim().to_ascii_lowercase();
    let rest = t
        .strip_prefix("rgba")
        .or_else(|| t.strip_prefix("rgb"))?
        .trim_start();
    let inner = rest.strip_prefix('(')?.trim_end().strip_suffix(')')?;
    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return None;
    }
    let r = parts[0].parse::<f64>().ok()?;
    let g = parts[1].parse::<f64>().ok()?;
    let b = parts[2].parse::<f64>().ok()?;
    Some(rgb_to_hex(r, g, b))
}

/// What: Encode three channel values as a canonical hex string.
///
/// Inputs:
/// - `r`, `g`, `b`: Channel values; fractional and out-of-range inputs are
///   rounded and clamped to `0..=255`.
///
/// Output:
/// - Uppercase `#RRGGBB` string.
#[must_use]
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    /// Round and clamp one channel into the `u8` range.
    fn enc(v: f64) -> u8 {
        let clamped = if v.is_nan() { 0.0 } else { v.clamp(0.0, 255.0) };
        clamped.round() as u8
    }
    format!("#{:02X}{:02X}{:02X}", enc(r), enc(g), enc(b))
}

/// What: Decode a canonical hex string into its three channels.
///
/// Inputs:
/// - `hex`: String expected in `#RRGGBB` form (any case accepted).
///
/// Output:
/// - `Some((r, g, b))` when the input is a six-digit hex literal; `None`
///   otherwise.
///
/// Details:
/// - Shared by the math helpers; callers there treat `None` as "pass the
///   value through unchanged" since validation belongs to the codec.
#[must_use]
pub fn channels(hex: &str) -> Option<(u8, u8, u8)> {
    let h = hex.trim().strip_prefix('#')?;
    if h.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&h[0..2], 16).ok()?;
    let g = u8::from_str_radix(&h[2..4], 16).ok()?;
    let b = u8::from_str_radix(&h[4..6], 16).ok()?;
    Some((r, g, b))
}
