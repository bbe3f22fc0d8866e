//! Acquisition of remote page text.
//!
//! The extraction core is pure and synchronous; everything network-shaped
//! lives here. Fetching tries the target directly, then walks an ordered
//! list of public relay templates, first success wins. A false "failure"
//! is cheap, so this is a simple sequential racer rather than a
//! concurrent fan-out.

use std::sync::LazyLock;
use std::time::Duration;

use tracing::{info, warn};

use crate::config::Config;
use crate::extract::{BrandColorResult, extract_brand_colors};
use crate::util::percent_encode;

/// Result alias shared by the acquisition layer.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Shared HTTP client with browser-like headers.
///
/// Connection pooling is enabled by default in `reqwest::Client`. A
/// browser-like User-Agent keeps us working with sites that reject bare
/// bot agents; per-request timeouts come from [`Config`].
static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue};
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(15))
        .user_agent(format!(
            "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0 Chameleon/{}",
            env!("CARGO_PKG_VERSION")
        ))
        .default_headers(headers)
        .build()
        .expect("Failed to create HTTP client")
});

/// What: Perform one fetch attempt against one URL.
///
/// Inputs:
/// - `url`: Direct target or relay-wrapped URL.
/// - `config`: Source of per-attempt timeouts.
///
/// Output:
/// - `Ok(String)` non-empty body text; `Err` on HTTP errors, timeouts, or
///   an empty body (relays sometimes return 200 with nothing useful).
async fn fetch_attempt(url: &str, config: &Config) -> Result<String> {
    let response = HTTP_CLIENT
        .get(url)
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .send()
        .await?
        .error_for_status()?;
    let body = response.text().await?;
    if body.trim().is_empty() {
        return Err("empty response body".into());
    }
    Ok(body)
}

/// What: Fetch a page's raw text, falling back through the relay chain.
///
/// Inputs:
/// - `url`: The target page.
/// - `config`: Timeouts and relay templates.
///
/// Output:
/// - `Ok(String)` from the first successful attempt; `Err` once every
///   attempt has failed.
///
/// # Errors
/// - Returns `Err` when the direct fetch and every configured relay fail
///   (network errors, HTTP error statuses, timeouts, or empty bodies).
pub async fn fetch_page_text(url: &str, config: &Config) -> Result<String> {
    let encoded = percent_encode(url);
    let attempts = std::iter::once(url.to_string())
        .chain(config.relays.iter().map(|t| t.replace("{url}", &encoded)));

    for (index, attempt_url) in attempts.enumerate() {
        match fetch_attempt(&attempt_url, config).await {
            Ok(body) => {
                info!(url, attempt = index, bytes = body.len(), "fetched page text");
                return Ok(body);
            }
            Err(e) => {
                warn!(url, attempt = index, error = %e, "fetch attempt failed");
            }
        }
    }
    Err(format!("all fetch attempts failed for {url}").into())
}

/// What: Fetch a page and run the extraction core over it.
///
/// Inputs:
/// - `url`: The target page.
/// - `config`: Acquisition settings.
///
/// Output:
/// - `Ok(Some(result))` on success; `Ok(None)` when the page was fetched
///   but carried no usable color (an expected outcome for the caller to
///   surface); `Err` only for acquisition failures.
///
/// # Errors
/// - Returns `Err` when the page text could not be fetched at all.
pub async fn analyze_url(url: &str, config: &Config) -> Result<Option<BrandColorResult>> {
    let body = fetch_page_text(url, config).await?;
    Ok(extract_brand_colors(&body))
}
