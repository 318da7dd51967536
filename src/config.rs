//! Client configuration baked in at build time.
//!
//! Recognized variables (all optional):
//! - `MARKETPLACE_API_URL`: API server origin, default `http://127.0.0.1:8000`
//! - `MARKETPLACE_TOKEN_KEY`: storage key for the session token, default `token`
//! - `MARKETPLACE_RESTORE_POLICY`: `keep` (default) or `discard`

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_TOKEN_KEY: &str = "token";

pub const API_URL_VAR: &str = "MARKETPLACE_API_URL";
pub const TOKEN_KEY_VAR: &str = "MARKETPLACE_TOKEN_KEY";
pub const RESTORE_POLICY_VAR: &str = "MARKETPLACE_RESTORE_POLICY";

/// What to do with a persisted token found at startup. The user identity is
/// never persisted, so a restored token has no user attached.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RestorePolicy {
    /// Restore the token; the session stays unauthenticated until login.
    #[default]
    KeepToken,
    /// Remove the orphan token from storage and start signed out.
    DiscardToken,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub token_key: String,
    pub restore_policy: RestorePolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            token_key: DEFAULT_TOKEN_KEY.to_owned(),
            restore_policy: RestorePolicy::default(),
        }
    }
}

impl ClientConfig {
    /// Build config from a variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for an empty URL or key, a URL without
    /// an `http://`/`https://` scheme, or an unknown restore policy.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_base_url = match lookup(API_URL_VAR) {
            Some(raw) => parse_base_url(&raw)?,
            None => DEFAULT_API_BASE_URL.to_owned(),
        };
        let token_key = match lookup(TOKEN_KEY_VAR) {
            Some(raw) if raw.trim().is_empty() => {
                return Err(ConfigError::Invalid { var: TOKEN_KEY_VAR, value: raw });
            }
            Some(raw) => raw.trim().to_owned(),
            None => DEFAULT_TOKEN_KEY.to_owned(),
        };
        let restore_policy = parse_restore_policy(lookup(RESTORE_POLICY_VAR).as_deref())?;
        Ok(Self { api_base_url, token_key, restore_policy })
    }

    /// Config from the variables present when the crate was compiled.
    /// Falls back to defaults, with a warning, when a value is invalid.
    pub fn from_build_env() -> Self {
        let build_env = |name: &str| {
            let value = match name {
                API_URL_VAR => option_env!("MARKETPLACE_API_URL"),
                TOKEN_KEY_VAR => option_env!("MARKETPLACE_TOKEN_KEY"),
                RESTORE_POLICY_VAR => option_env!("MARKETPLACE_RESTORE_POLICY"),
                _ => None,
            };
            value.map(str::to_owned)
        };
        Self::from_lookup(build_env).unwrap_or_else(|e| {
            log::warn!("client config rejected, using defaults: {e}");
            Self::default()
        })
    }
}

fn parse_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_owned())
    } else {
        Err(ConfigError::Invalid { var: API_URL_VAR, value: raw.to_owned() })
    }
}

fn parse_restore_policy(raw: Option<&str>) -> Result<RestorePolicy, ConfigError> {
    match raw.map(str::trim) {
        None | Some("keep") => Ok(RestorePolicy::KeepToken),
        Some("discard") => Ok(RestorePolicy::DiscardToken),
        Some(other) => Err(ConfigError::Invalid { var: RESTORE_POLICY_VAR, value: other.to_owned() }),
    }
}
