use crate::component_images::STATIC_URL_PREFIX;
use crate::error::CoreError;

/// Env var overriding the URL prefix under which static assets are mounted.
pub const ENV_STATIC_URL_PREFIX: &str = "STATIC_URL_PREFIX";

/// Asset configuration loaded from environment variables.
///
/// All fields have defaults matching the compiled image table, so an empty
/// environment reproduces its paths exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetConfig {
    /// URL prefix for the static directory, without a trailing slash
    /// (default: `/static`).
    pub static_url_prefix: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            static_url_prefix: STATIC_URL_PREFIX.to_string(),
        }
    }
}

impl AssetConfig {
    /// Load configuration from the process environment, reading `.env` first
    /// if one is present.
    ///
    /// | Env Var             | Default   |
    /// |---------------------|-----------|
    /// | `STATIC_URL_PREFIX` | `/static` |
    pub fn from_env() -> Result<Self, CoreError> {
        dotenvy::dotenv().ok();
        let config = Self::from_vars(|name| std::env::var(name).ok())?;
        tracing::debug!(static_url_prefix = %config.static_url_prefix, "Asset config loaded");
        Ok(config)
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let static_url_prefix = match lookup(ENV_STATIC_URL_PREFIX) {
            Some(raw) => normalize_prefix(&raw)?,
            None => STATIC_URL_PREFIX.to_string(),
        };

        Ok(Self { static_url_prefix })
    }
}

/// Trim whitespace and trailing slashes, then require an absolute path or an
/// http(s) URL.
fn normalize_prefix(raw: &str) -> Result<String, CoreError> {
    let trimmed = raw.trim().trim_end_matches('/');

    if trimmed.is_empty() {
        return Err(CoreError::Config(format!(
            "{ENV_STATIC_URL_PREFIX} must not be empty or '/' (got '{raw}')"
        )));
    }

    let is_url = trimmed.starts_with("http://") || trimmed.starts_with("https://");
    if !trimmed.starts_with('/') && !is_url {
        return Err(CoreError::Config(format!(
            "{ENV_STATIC_URL_PREFIX} must start with '/' or be an http(s) URL (got '{raw}')"
        )));
    }

    Ok(trimmed.to_string())
}
