//! Runtime configuration for the acquisition side.
//!
//! The extraction core needs no configuration; only fetching does. A
//! missing or broken config file is never fatal: we log a warning and run
//! on the built-in defaults.

use std::path::Path;

use serde::Deserialize;
use tracing::warn;

/// Acquisition settings, loadable from a small TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Full request timeout per attempt, in seconds.
    pub request_timeout_secs: u64,
    /// Relay URL templates tried in order after the direct fetch fails.
    /// `{url}` is replaced with the percent-encoded target.
    pub relays: Vec<String>,
    /// Theme label used when no brand name could be mined and none was
    /// given on the command line.
    pub default_label: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            request_timeout_secs: 30,
            relays: vec![
                "https://api.allorigins.win/raw?url={url}".to_string(),
                "https://corsproxy.io/?url={url}".to_string(),
                "https://api.codetabs.com/v1/proxy?quest={url}".to_string(),
            ],
            default_label: "Custom Brand".to_string(),
        }
    }
}

impl Config {
    /// What: Load configuration from an optional TOML file.
    ///
    /// Inputs:
    /// - `path`: File to read, or `None` for the built-in defaults.
    ///
    /// Output:
    /// - A usable `Config` in every case.
    ///
    /// Details:
    /// - Read or parse failures log a warning and fall back to defaults;
    ///   configuration problems must never stop an analysis run.
    #[must_use]
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        let text = match std::fs::read_to_string(path) {
            Ok(t) => t,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "could not read config, using defaults");
                return Self::default();
            }
        };
        match toml::from_str(&text) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "could not parse config, using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    /// What: Verify partial TOML overrides merge over the defaults.
    ///
    /// Inputs:
    /// - A temp file setting only the request timeout and one relay.
    ///
    /// Output:
    /// - Overridden fields take effect; the rest keep default values.
    fn config_partial_override() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(
            file,
            "request_timeout_secs = 5\nrelays = [\"https://relay.example/{{url}}\"]"
        )
        .expect("write config");
        let config = Config::load(Some(file.path()));
        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.relays, vec!["https://relay.example/{url}".to_string()]);
        assert_eq!(config.default_label, Config::default().default_label);
    }

    #[test]
    /// What: Confirm unreadable or invalid files fall back to defaults.
    ///
    /// Inputs:
    /// - A missing path and a file of non-TOML bytes.
    ///
    /// Output:
    /// - The default configuration, in both cases.
    fn config_fallback_on_errors() {
        let missing = Path::new("/nonexistent/chameleon.toml");
        assert_eq!(Config::load(Some(missing)), Config::default());

        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"this is not [[ valid toml")
            .expect("write junk");
        assert_eq!(Config::load(Some(file.path())), Config::default());
    }
}
