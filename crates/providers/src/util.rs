//! Shared utility functions for provider adapters.

use sr_domain::config::AuthConfig;
use sr_domain::error::{Error, Result};

/// Convert a [`reqwest::Error`] into the domain [`Error`] type.
///
/// Timeout errors map to [`Error::Timeout`]; everything else maps to
/// [`Error::Http`].
pub(crate) fn from_reqwest(e: reqwest::Error) -> Error {
    if e.is_timeout() {
        Error::Timeout(e.to_string())
    } else {
        Error::Http(e.to_string())
    }
}

/// Resolve the API key from an [`AuthConfig`].
///
/// Precedence:
/// 1. `key` field (plaintext, warns)
/// 2. `env` field (reads the environment variable)
/// 3. Error
pub(crate) fn resolve_api_key(auth: &AuthConfig) -> Result<String> {
    if let Some(ref key) = auth.key {
        if !key.is_empty() {
            tracing::warn!(
                "API key loaded from plaintext config field 'key'; prefer 'env' instead"
            );
            return Ok(key.clone());
        }
    }

    match std::env::var(&auth.env) {
        Ok(val) if !val.is_empty() => Ok(val),
        _ => Err(Error::Auth(format!(
            "environment variable '{}' not set or empty",
            auth.env
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_api_key_plaintext() {
        let auth = AuthConfig {
            key: Some("sk-test-123".into()),
            ..Default::default()
        };
        assert_eq!(resolve_api_key(&auth).unwrap(), "sk-test-123");
    }

    #[test]
    fn resolve_api_key_env_var() {
        let var_name = "SR_TEST_RESOLVE_ENV_KEY_1234";
        std::env::set_var(var_name, "env-secret-value");
        let auth = AuthConfig {
            env: var_name.into(),
            key: None,
        };
        assert_eq!(resolve_api_key(&auth).unwrap(), "env-secret-value");
        std::env::remove_var(var_name);
    }

    #[test]
    fn resolve_api_key_env_var_missing() {
        let auth = AuthConfig {
            env: "SR_TEST_NONEXISTENT_VAR_8888".into(),
            key: None,
        };
        let err = resolve_api_key(&auth).unwrap_err();
        assert!(err.to_string().contains("SR_TEST_NONEXISTENT_VAR_8888"));
    }

    #[test]
    fn resolve_api_key_empty_plaintext_falls_through() {
        let auth = AuthConfig {
            env: "SR_TEST_NONEXISTENT_VAR_9999".into(),
            key: Some(String::new()),
        };
        assert!(resolve_api_key(&auth).is_err());
    }
}
