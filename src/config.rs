//! Runtime configuration.
//!
//! Configuration is resolved once by the CLI (flags with environment
//! fallbacks) and passed down explicitly; nothing in the library reads the
//! environment on its own.

use crate::error::{Error, Result};

/// Default Gemini model.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default Gemini REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Log filter used when `RUST_LOG` is unset.
#[must_use]
pub const fn default_log_filter(verbose: bool) -> &'static str {
    if verbose {
        "courtside=debug"
    } else {
        "courtside=warn"
    }
}

/// Settings for the Gemini reply generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiConfig {
    /// API key; requests fail with a missing-key error when absent.
    pub api_key: Option<String>,
    /// Model name, e.g. `gemini-2.5-flash`.
    pub model: String,
    /// REST endpoint without a trailing slash.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl GeminiConfig {
    /// Sets the API key. Blank keys count as absent.
    #[must_use]
    pub fn api_key(mut self, key: Option<String>) -> Self {
        self.api_key = key.filter(|k| !k.trim().is_empty());
        self
    }

    /// Sets the model name.
    #[must_use]
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the endpoint.
    #[must_use]
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Checks that the settings can produce a working client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for an empty model, an empty endpoint or a
    /// zero timeout.
    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(Error::Config {
                message: "model must not be empty".to_string(),
            });
        }
        if self.base_url.is_empty() {
            return Err(Error::Config {
                message: "base URL must not be empty".to_string(),
            });
        }
        if self.timeout_secs == 0 {
            return Err(Error::Config {
                message: "timeout must be > 0".to_string(),
            });
        }
        Ok(())
    }
}
