//! Small shared helpers.

/// What: Percent-encode a string for safe embedding in a URL query.
///
/// Inputs:
/// - `input`: Arbitrary text, typically a target URL handed to a relay.
///
/// Output:
/// - Encoded string with unreserved characters passed through.
#[must_use]
pub fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for &b in input.as_bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(b as char);
            }
            _ => {
                out.push('%');
                out.push_str(&format!("{b:02X}"));
            }
        }
    }
    out
}

/// What: Decide whether a CLI target names a remote page.
///
/// Inputs:
/// - `target`: Positional argument, either a URL or a local path.
///
/// Output:
/// - `true` for `http://` / `https://` targets.
#[must_use]
pub fn looks_like_url(target: &str) -> bool {
    let t = target.trim_start();
    t.starts_with("http://") || t.starts_with("https://")
}
