//! Best-effort brand name mining.
//!
//! Failure here is non-fatal by design: the caller simply omits the name.

use scraper::{Html, Selector};

/// What: Mine a site's display name from its markup.
///
/// Inputs:
/// - `text`: Raw page text; parsed as an HTML document.
///
/// Output:
/// - `Some(String)` trimmed name; `None` when nothing usable is declared.
///
/// Details:
/// - Prefers an `og:site_name` declaration, then `application-name`, then
///   the leading segment of the page title split on common separators
///   (`|`, `–`, `—`, and a whitespace-delimited `-`).
#[must_use]
pub fn extract_brand_name(text: &str) -> Option<String> {
    let document = Html::parse_document(text);

    for selector in [
        r#"meta[property="og:site_name"]"#,
        r#"meta[name="application-name"]"#,
    ] {
        if let Ok(sel) = Selector::parse(selector)
            && let Some(element) = document.select(&sel).next()
            && let Some(content) = element.value().attr("content")
        {
            let trimmed = content.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
    }

    let title_sel = Selector::parse("title").ok()?;
    let title: String = document.select(&title_sel).next()?.text().collect();
    leading_title_segment(&title)
}

/// What: Return the leading segment of a page title.
///
/// Inputs:
/// - `title`: Full `<title>` text, e.g. `"Acme – Home of Widgets"`.
///
/// Output:
/// - `Some(String)` first non-empty segment; `None` for blank titles.
///
/// Details:
/// - A plain `-` only splits when surrounded by whitespace, so hyphenated
///   names like "Coca-Cola" stay intact.
fn leading_title_segment(title: &str) -> Option<String> {
    let mut head = title.trim();
    for sep in ["|", "–", "—", " - "] {
        if let Some((lead, _)) = head.split_once(sep) {
            head = lead.trim();
        }
    }
    if head.is_empty() {
        None
    } else {
        Some(head.to_string())
    }
}
